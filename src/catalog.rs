use std::{
    fs::{read_to_string, write},
    path::Path,
};

use anyhow::{Context, Result};
use indicatif::ProgressBar;
use serde_json::Value;
use tracing::{debug, warn};

use crate::products::{is_bike, Category, Product, Record};

pub const DEFAULT_SHORT_WORDS: usize = 15;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub bikes: usize,
    pub warranty_removed: usize,
    pub warranty_kept: usize,
    pub descriptions_updated: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warranty {
    Absent,
    Removed,
    Kept,
}

/// What happened to one record.
#[derive(Debug)]
pub struct Outcome {
    pub bike: bool,
    pub warranty: Warranty,
    pub descriptions: Result<()>,
}

impl Stats {
    fn count(&mut self, outcome: &Outcome) {
        self.total += 1;
        if outcome.bike {
            self.bikes += 1;
        }
        match outcome.warranty {
            Warranty::Removed => self.warranty_removed += 1,
            Warranty::Kept => self.warranty_kept += 1,
            Warranty::Absent => {}
        }
        if outcome.descriptions.is_ok() {
            self.descriptions_updated += 1;
        }
    }
}

pub fn load(path: &Path) -> Result<Vec<Record>> {
    let data = read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Failed to parse {}", path.display()))
}

pub fn save(path: &Path, products: &[Record]) -> Result<()> {
    let mut output = serde_json::to_string_pretty(products)?;
    output.push('\n');
    write(path, &output).with_context(|| format!("Failed to write {}", path.display()))
}

/// Updates every record in order and tallies the results. Records whose
/// descriptions can't be generated are logged and kept as they are.
pub fn update_all(
    products: Vec<Record>,
    max_short_words: usize,
    pb: &ProgressBar,
) -> (Vec<Record>, Stats) {
    let mut stats = Stats::default();
    let mut updated = Vec::with_capacity(products.len());

    for record in products {
        let (record, outcome) = update_product(record, max_short_words);
        if let Err(e) = &outcome.descriptions {
            let id = record_id(&record);
            pb.suspend(|| warn!("Error updating product {id}: {e:#}"));
        }
        stats.count(&outcome);
        updated.push(record);
        pb.inc(1);
    }

    (updated, stats)
}

pub fn update_product(mut record: Record, max_short_words: usize) -> (Record, Outcome) {
    // decided before anything is touched
    let bike = is_bike(&record);

    let warranty = match record.get_mut("specifications") {
        Some(Value::Object(specs)) if specs.contains_key("warranty") => {
            if bike {
                Warranty::Kept
            } else {
                specs.shift_remove("warranty");
                Warranty::Removed
            }
        }
        _ => Warranty::Absent,
    };

    let descriptions = describe(&mut record, bike, max_short_words);

    (
        record,
        Outcome {
            bike,
            warranty,
            descriptions,
        },
    )
}

fn describe(record: &mut Record, bike: bool, max_short_words: usize) -> Result<()> {
    let product = Product::from_record(record)?;
    let category = Category::of(record, bike, &product);

    let short = category.short_description(&product);
    let words = short.split_whitespace().count();
    if !short.is_empty() && words <= max_short_words {
        record.insert("short_description".to_string(), Value::String(short));
    } else {
        debug!("Keeping short description of {}: {words} words", record_id(record));
    }

    let long = category.long_description(&product);
    if !long.is_empty() {
        record.insert("description".to_string(), Value::String(long));
    }

    Ok(())
}

fn record_id(record: &Record) -> String {
    match record.get("id") {
        Some(Value::String(x)) => x.clone(),
        Some(x) => x.to_string(),
        None => "unknown".to_string(),
    }
}
