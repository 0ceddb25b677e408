use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::settings::{Cli, Settings};

mod catalog;
mod products;
mod settings;
mod utils;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let settings = Settings::load(Cli::parse())?;

    println!("جاري تحديث المنتجات...");
    let products = catalog::load(&settings.input)?;
    info!("Loaded {} products from {}", products.len(), settings.input.display());

    let pb = utils::progress_bar(products.len() as u64);
    let (products, stats) =
        catalog::update_all(products, settings.short_description_max_words, &pb);
    pb.finish_and_clear();

    if !settings.dry_run {
        catalog::save(&settings.output, &products)?;
        info!("Wrote {}", settings.output.display());
    }

    println!("\n=== نتائج التحديث ===");
    println!("إجمالي المنتجات: {}", stats.total);
    println!("عدد الدراجات النارية: {}", stats.bikes);
    println!("تم حذف الضمان من: {} منتج", stats.warranty_removed);
    println!("تم الاحتفاظ بالضمان في: {} دراجة نارية", stats.warranty_kept);
    println!("تم تحديث الأوصاف لـ: {} منتج", stats.descriptions_updated);
    if settings.dry_run {
        println!("\nلم يتم حفظ التغييرات (تشغيل تجريبي)");
    } else {
        println!("\nتم الحفظ بنجاح!");
    }

    Ok(())
}
