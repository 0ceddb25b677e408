use std::{convert::Infallible, str::FromStr};

use serde::Deserialize;

use super::SpecText;

/// Base oil class as written in the catalog. Unknown classes are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "SpecText")]
pub enum OilType {
    Synthetic,
    SemiSynthetic,
    Mineral,
    Other(String),
}

impl OilType {
    pub fn arabic(&self) -> &str {
        match self {
            Self::Synthetic => "صناعي",
            Self::SemiSynthetic => "شبه صناعي",
            Self::Mineral => "معدني",
            Self::Other(x) => x,
        }
    }
}

impl FromStr for OilType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s {
            "Synthetic" => Self::Synthetic,
            "Semi-Synthetic" => Self::SemiSynthetic,
            "Mineral" => Self::Mineral,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl From<SpecText> for OilType {
    fn from(x: SpecText) -> Self {
        match x.as_str().parse() {
            Ok(x) => x,
            Err(e) => match e {},
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "SpecText")]
pub enum TireType {
    Sport,
    Street,
    Touring,
    OffRoad,
    Racing,
    Other(String),
}

impl TireType {
    pub fn arabic(&self) -> &str {
        match self {
            Self::Sport => "رياضي",
            Self::Street => "شارع",
            Self::Touring => "سياحي",
            Self::OffRoad => "طرق وعرة",
            Self::Racing => "سباقات",
            Self::Other(x) => x,
        }
    }
}

impl FromStr for TireType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(match s {
            "Sport" => Self::Sport,
            "Street" => Self::Street,
            "Touring" => Self::Touring,
            "Off-Road" => Self::OffRoad,
            "Racing" => Self::Racing,
            _ => Self::Other(s.to_string()),
        })
    }
}

impl From<SpecText> for TireType {
    fn from(x: SpecText) -> Self {
        match x.as_str().parse() {
            Ok(x) => x,
            Err(e) => match e {},
        }
    }
}

/// Oil brands that get their own transliterated phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OilBrand {
    Motul,
    Suzuki,
    Castrol,
}

impl OilBrand {
    pub fn from_manufacturer(s: &str) -> Option<Self> {
        Some(match s {
            "Motul" => Self::Motul,
            "Suzuki" => Self::Suzuki,
            "Castrol" => Self::Castrol,
            _ => return None,
        })
    }

    pub fn arabic(&self) -> &'static str {
        match self {
            Self::Motul => "موتول",
            Self::Suzuki => "سوزوكي",
            Self::Castrol => "كاسترول",
        }
    }
}
