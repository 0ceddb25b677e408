use itertools::Itertools;

use super::{Category, Field, Product};

pub fn generate(product: &Product, category: Category) -> String {
    match category {
        Category::Bike => bike(product),
        Category::Filter => filter(product),
        Category::Oil => oil(product),
        Category::Tire => tire(product),
        Category::Brake => brake(product),
        Category::Generic => generic(product),
    }
}

fn bike(product: &Product) -> String {
    let specs = &product.specifications;
    let lead = match specs.manufacturer.filled() {
        Some(brand) => format!("دراجة {brand}"),
        None => "دراجة نارية".to_string(),
    };
    let headline = [
        Some(lead),
        specs.model.filled().map(str::to_string),
        specs.engine_capacity.filled().map(|x| format!("بمحرك {x}")),
        specs.power.filled().map(|x| format!("وقوة {x}")),
        specs.origin.filled().map(|x| format!("مصنعة في {x}")),
    ]
    .into_iter()
    .flatten()
    .join(" ");

    format!(
        "{headline}. تتميز بتصميم عصري وأداء رياضي متميز مع تقنيات حديثة للسلامة والراحة. \
         مناسبة للاستخدام اليومي والرحلات الطويلة."
    )
}

fn filter(product: &Product) -> String {
    let specs = &product.specifications;
    let brand = specs.manufacturer.text();
    let origin = specs.origin.text();

    let mut desc = if product.name_has("زيت") {
        format!("فلتر زيت {brand} من {origin} بترشيح دقيق لحماية المحرك. ")
    } else if product.name_has("هواء") {
        format!("فلتر هواء {brand} من {origin} لتنقية الهواء الداخل للمحرك. ")
    } else {
        format!("فلتر {brand} من {origin} بجودة عالية. ")
    };

    match specs.compatibility.filled() {
        Some(compatibility) => desc.push_str(&format!("متوافق مع {compatibility}.")),
        None => desc.push_str("مناسب لمعظم الدراجات النارية."),
    }
    desc
}

fn oil(product: &Product) -> String {
    let specs = &product.specifications;
    let brand = specs.manufacturer.text();
    let oil_type = specs.oil_type.text();
    let origin = specs.origin.text();

    let mut desc = match specs.viscosity.filled() {
        Some(viscosity) => format!("زيت {brand} {viscosity} {oil_type} من {origin} لمحركات 4 أشواط، "),
        None => format!("زيت {brand} {oil_type} من {origin} لمحركات 4 أشواط، "),
    };
    if let Some(standard) = specs.standard.filled() {
        desc.push_str(&format!("مطابق لمواصفات {standard}، "));
    }
    desc.push_str("يوفر حماية ممتازة ويقلل الاحتكاك. مناسب للاستخدام اليومي والرياضي الخفيف.");
    desc
}

fn tire(product: &Product) -> String {
    let specs = &product.specifications;
    // same type map as the short form, so Racing reads سباقات here too
    format!(
        "كفر {} {} مقاس {} من {} بتصميم متطور. يوفر قبضة ممتازة واستقرار عالي على الطرق المختلفة.",
        specs.manufacturer.text(),
        specs.tire_type.text(),
        specs.size.text(),
        specs.origin.text(),
    )
}

fn brake(product: &Product) -> String {
    let specs = &product.specifications;
    let brand = specs.manufacturer.text();
    let origin = specs.origin.text();

    if product.name_has("تيل") || product.name_has("فرامل") {
        format!(
            "تيل فرامل {brand} من {origin} بمادة {} عالية الجودة. يوفر أداء فرملة قوي ومستقر في جميع الظروف.",
            specs.material.text()
        )
    } else {
        format!("قطع فرامل {brand} من {origin} بجودة أصلية. توفر أمان وأداء موثوق للفرامل.")
    }
}

fn generic(product: &Product) -> String {
    let specs = &product.specifications;
    format!(
        "منتج {} من {} بجودة عالية للدراجات النارية. يوفر أداء موثوق ومتانة ممتازة.",
        specs.manufacturer.text(),
        specs.origin.text(),
    )
}
