use serde_json::Value;

use super::{long, short, Product, Record};

/// Motorcycles keep their warranty and get the bike templates.
pub fn is_bike(record: &Record) -> bool {
    record.get("type").and_then(Value::as_str) == Some("bike")
        || record.get("category_id").and_then(Value::as_str) == Some("motorcycles")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Bike,
    Filter,
    Oil,
    Tire,
    Brake,
    Generic,
}

impl Category {
    /// First match wins. Filters are checked before oil because an oil filter
    /// ("فلتر زيت") carries both tokens.
    pub fn route(bike: bool, category_id: Option<&str>, name: &str) -> Self {
        let id = category_id.unwrap_or("");
        if bike {
            Self::Bike
        } else if matches!(id, "c2" | "c3") || name.contains("فلتر") {
            Self::Filter
        } else if id == "c1" || name.contains("زيت") {
            Self::Oil
        } else if id == "c4" || name.contains("كفر") || name.contains("إطار") {
            Self::Tire
        } else if id == "c5" || name.contains("فرامل") || name.contains("تيل") {
            Self::Brake
        } else {
            Self::Generic
        }
    }

    pub fn of(record: &Record, bike: bool, product: &Product) -> Self {
        Self::route(
            bike,
            record.get("category_id").and_then(Value::as_str),
            &product.name,
        )
    }

    pub fn short_description(self, product: &Product) -> String {
        short::generate(product, self)
    }

    pub fn long_description(self, product: &Product) -> String {
        long::generate(product, self)
    }
}
