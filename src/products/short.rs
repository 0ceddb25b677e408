use super::{terms::OilBrand, Category, Field, Product};

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
    match (
        specs.manufacturer.filled(),
        specs.model.filled(),
        specs.engine_capacity.filled(),
    ) {
        (Some(brand), Some(model), Some(engine)) => {
            format!("دراجة {brand} {model} محرك {engine} موديل حديث")
        }
        (Some(brand), Some(model), None) => format!("دراجة {brand} {model} موديل حديث"),
        (_, Some(model), _) => format!("دراجة نارية {model} موديل حديث"),
        _ => format!("دراجة نارية {} موديل حديث", product.name),
    }
}

fn oil(product: &Product) -> String {
    let specs = &product.specifications;
    let brand = specs.manufacturer.text();
    let volume = specs.volume.text();
    let oil_type = specs.oil_type.text();
    let viscosity = specs.viscosity.filled();

    match (OilBrand::from_manufacturer(brand), viscosity) {
        (Some(x @ OilBrand::Motul), Some(viscosity)) => format!(
            "زيت {} {viscosity} {oil_type} حجم {volume} للدراجات النارية",
            x.arabic()
        ),
        (Some(x @ (OilBrand::Motul | OilBrand::Suzuki)), _) => {
            format!("زيت {} {oil_type} حجم {volume} للدراجات النارية", x.arabic())
        }
        (Some(x @ OilBrand::Castrol), Some(viscosity)) => format!(
            "زيت {} {viscosity} {oil_type} حجم {volume} للدراجات",
            x.arabic()
        ),
        (Some(x @ OilBrand::Castrol), None) => {
            format!("زيت {} {oil_type} حجم {volume} للدراجات", x.arabic())
        }
        (None, _) => format!("زيت {brand} {oil_type} حجم {volume} للدراجات النارية"),
    }
}

fn filter(product: &Product) -> String {
    let specs = &product.specifications;
    let brand = specs.manufacturer.text();
    let model = specs.model.text();

    let kind = if product.name_has("زيت") {
        "فلتر زيت"
    } else if product.name_has("هواء") {
        "فلتر هواء"
    } else {
        return format!("فلتر {brand} {model} للدراجات النارية");
    };

    match specs.compatibility.filled() {
        Some(compatibility) => format!("{kind} {brand} {model} متوافق مع {compatibility}"),
        None => format!("{kind} {brand} {model} للدراجات النارية"),
    }
}

fn tire(product: &Product) -> String {
    let specs = &product.specifications;
    let brand = specs.manufacturer.text();
    let size = specs.size.text();

    match specs.tire_type.filled() {
        Some(tire_type) => format!("كفر {brand} {tire_type} {size} للدراجات النارية"),
        None => format!("كفر {brand} {size} للدراجات النارية"),
    }
}

fn brake(product: &Product) -> String {
    let specs = &product.specifications;
    let brand = specs.manufacturer.text();
    let model = specs.model.text();

    if product.name_has("فرامل") || product.name_has("تيل") {
        match specs.material.filled() {
            Some(material) => format!("تيل فرامل {brand} {model} مادة {material}"),
            None => format!("تيل فرامل {brand} {model} للدراجات النارية"),
        }
    } else if product.name_has("ديسك") {
        format!("ديسك فرامل {brand} {model} للدراجات النارية")
    } else {
        format!("قطع فرامل {brand} {model} للدراجات النارية")
    }
}

fn generic(product: &Product) -> String {
    // a manufacturer key wins even when empty
    let brand = match &product.specifications.manufacturer {
        Some(x) => x.as_str(),
        None => product.brand_id.text(),
    };
    format!("{} من {brand} للدراجات النارية", product.name)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn product(x: Value) -> Product {
        serde_json::from_value(x).unwrap()
    }

    fn short(category: Category, x: Value) -> String {
        generate(&product(x), category)
    }

    #[test]
    fn bike_fallbacks() {
        let full = json!({
            "name": "Suzuki GSX",
            "specifications": {
                "manufacturer": "Suzuki", "model": "GSX-R", "engine_capacity": "600cc"
            }
        });
        assert_eq!(short(Category::Bike, full), "دراجة Suzuki GSX-R محرك 600cc موديل حديث");

        let no_engine = json!({
            "name": "Suzuki GSX",
            "specifications": { "manufacturer": "Suzuki", "model": "GSX-R" }
        });
        assert_eq!(short(Category::Bike, no_engine), "دراجة Suzuki GSX-R موديل حديث");

        let model_only = json!({
            "name": "x",
            "specifications": { "model": "GSX-R", "engine_capacity": "600cc" }
        });
        assert_eq!(short(Category::Bike, model_only), "دراجة نارية GSX-R موديل حديث");

        let name_only = json!({ "name": "Vespa", "specifications": { "manufacturer": "Piaggio" } });
        assert_eq!(short(Category::Bike, name_only), "دراجة نارية Vespa موديل حديث");
    }

    #[test]
    fn oil_brands() {
        let motul = json!({
            "name": "Motul oil",
            "specifications": {
                "manufacturer": "Motul", "volume": "1L",
                "viscosity": "10W40", "oil_type": "Synthetic"
            }
        });
        assert_eq!(
            short(Category::Oil, motul),
            "زيت موتول 10W40 صناعي حجم 1L للدراجات النارية"
        );

        let suzuki = json!({
            "name": "ECSTAR",
            "specifications": {
                "manufacturer": "Suzuki", "volume": "1L",
                "viscosity": "10W40", "oil_type": "Mineral"
            }
        });
        assert_eq!(short(Category::Oil, suzuki), "زيت سوزوكي معدني حجم 1L للدراجات النارية");

        let motul_plain = json!({
            "name": "Motul 3000",
            "specifications": { "manufacturer": "Motul", "volume": "1L", "oil_type": "Mineral" }
        });
        assert_eq!(
            short(Category::Oil, motul_plain),
            "زيت موتول معدني حجم 1L للدراجات النارية"
        );

        let castrol_graded = json!({
            "name": "Power1 Racing",
            "specifications": {
                "manufacturer": "Castrol", "volume": "1L",
                "viscosity": "10W50", "oil_type": "Synthetic"
            }
        });
        assert_eq!(
            short(Category::Oil, castrol_graded),
            "زيت كاسترول 10W50 صناعي حجم 1L للدراجات"
        );

        let castrol = json!({
            "name": "Power1",
            "specifications": {
                "manufacturer": "Castrol", "volume": "4L", "oil_type": "Semi-Synthetic"
            }
        });
        assert_eq!(short(Category::Oil, castrol), "زيت كاسترول شبه صناعي حجم 4L للدراجات");

        let other = json!({
            "name": "Liqui",
            "specifications": {
                "manufacturer": "Liqui Moly", "volume": "1L", "oil_type": "Ester"
            }
        });
        assert_eq!(
            short(Category::Oil, other),
            "زيت Liqui Moly Ester حجم 1L للدراجات النارية"
        );
    }

    #[test]
    fn filters() {
        let oil = json!({
            "name": "فلتر زيت",
            "specifications": {
                "manufacturer": "HiFlo", "model": "HF204", "compatibility": "Honda CBR"
            }
        });
        assert_eq!(
            short(Category::Filter, oil),
            "فلتر زيت HiFlo HF204 متوافق مع Honda CBR"
        );

        let air = json!({
            "name": "فلتر هواء",
            "specifications": { "manufacturer": "K&N", "model": "HA-1" }
        });
        assert_eq!(short(Category::Filter, air), "فلتر هواء K&N HA-1 للدراجات النارية");

        let other = json!({
            "name": "فلتر بنزين",
            "specifications": { "manufacturer": "Mahle", "model": "KL", "compatibility": "all" }
        });
        assert_eq!(short(Category::Filter, other), "فلتر Mahle KL للدراجات النارية");
    }

    #[test]
    fn tires() {
        let sport = json!({
            "name": "كفر",
            "specifications": {
                "manufacturer": "Pirelli", "size": "120/70 ZR17", "tire_type": "Sport"
            }
        });
        assert_eq!(
            short(Category::Tire, sport),
            "كفر Pirelli رياضي 120/70 ZR17 للدراجات النارية"
        );

        let untyped = json!({
            "name": "كفر",
            "specifications": { "manufacturer": "Pirelli", "size": "180/55" }
        });
        assert_eq!(short(Category::Tire, untyped), "كفر Pirelli 180/55 للدراجات النارية");
    }

    #[test]
    fn brakes() {
        let pads = json!({
            "name": "تيل فرامل أمامي",
            "specifications": { "manufacturer": "EBC", "model": "FA", "material": "Sintered" }
        });
        assert_eq!(short(Category::Brake, pads), "تيل فرامل EBC FA مادة Sintered");

        let disc = json!({
            "name": "ديسك أمامي",
            "specifications": { "manufacturer": "Brembo", "model": "Serie Oro" }
        });
        assert_eq!(
            short(Category::Brake, disc),
            "ديسك فرامل Brembo Serie Oro للدراجات النارية"
        );

        let parts = json!({
            "name": "Caliper",
            "specifications": { "manufacturer": "Nissin", "model": "2P" }
        });
        assert_eq!(short(Category::Brake, parts), "قطع فرامل Nissin 2P للدراجات النارية");
    }

    #[test]
    fn generic_brand_fallback() {
        let from_brand_id = json!({ "name": "خوذة", "brand_id": "shoei" });
        assert_eq!(short(Category::Generic, from_brand_id), "خوذة من shoei للدراجات النارية");

        let from_specs = json!({
            "name": "خوذة", "brand_id": "shoei",
            "specifications": { "manufacturer": "Shoei" }
        });
        assert_eq!(short(Category::Generic, from_specs), "خوذة من Shoei للدراجات النارية");
    }
}
