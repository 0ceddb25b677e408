use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Number, Value};
use serde_with::{serde_as, DefaultOnError};

pub use self::category::{is_bike, Category};
use self::terms::{OilType, TireType};

mod category;
mod long;
mod short;
mod terms;

/// A catalog entry exactly as stored on disk. Key order is preserved.
pub type Record = Map<String, Value>;

/// Typed, read-only view of the parts of a record the description templates
/// read. Everything else in the record is left alone.
///
/// Only `name` and the shape of `specifications` are strict. A field value
/// that isn't a scalar reads as missing, so a stray array or object never
/// fails a record whose templates don't use it.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[serde_as(as = "DefaultOnError")]
    #[serde(default)]
    pub brand_id: Option<SpecText>,
    #[serde(default)]
    pub specifications: Specifications,
}

impl Product {
    pub fn from_record(record: &Record) -> Result<Self> {
        serde_json::from_value(Value::Object(record.clone())).context("Malformed product record")
    }

    pub fn name_has(&self, token: &str) -> bool {
        self.name.contains(token)
    }
}

#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Specifications {
    #[serde_as(as = "DefaultOnError")]
    pub manufacturer: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub model: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub volume: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub viscosity: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub oil_type: Option<OilType>,
    #[serde_as(as = "DefaultOnError")]
    pub compatibility: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub size: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub tire_type: Option<TireType>,
    #[serde_as(as = "DefaultOnError")]
    pub material: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub engine_capacity: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub power: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub origin: Option<SpecText>,
    #[serde_as(as = "DefaultOnError")]
    pub standard: Option<SpecText>,
}

/// A scalar specification value rendered as text. Numbers and booleans keep
/// their JSON spelling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "Scalar")]
pub struct SpecText(String);

impl SpecText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(Number),
    Flag(bool),
}

impl From<Scalar> for SpecText {
    fn from(x: Scalar) -> Self {
        SpecText(match x {
            Scalar::Text(x) => x,
            Scalar::Number(x) => x.to_string(),
            Scalar::Flag(x) => x.to_string(),
        })
    }
}

/// Template access to optional fields: `text` substitutes an empty string for
/// a missing value, `filled` treats empty strings as missing.
pub trait Field {
    fn text(&self) -> &str;

    fn filled(&self) -> Option<&str> {
        Some(self.text()).filter(|x| !x.is_empty())
    }
}

impl Field for Option<SpecText> {
    fn text(&self) -> &str {
        self.as_ref().map_or("", SpecText::as_str)
    }
}

impl Field for Option<OilType> {
    fn text(&self) -> &str {
        self.as_ref().map_or("", OilType::arabic)
    }
}

impl Field for Option<TireType> {
    fn text(&self) -> &str {
        self.as_ref().map_or("", TireType::arabic)
    }
}
