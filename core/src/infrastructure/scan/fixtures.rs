use crate::domain::scan::{
    entities::{FoodCategory, NutritionFacts, ScanRecord},
    value_objects::ScanFixture,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

pub fn organic_quinoa_bowl() -> ScanRecord {
    ScanRecord {
        name: "Organic Quinoa Bowl".to_string(),
        category: FoodCategory::Advisable,
        health_score: 92,
        calories: 180.0,
        nutrition: NutritionFacts {
            protein: 8.0,
            carbs: 32.0,
            fat: 3.0,
            fiber: 5.0,
            sugar: 2.0,
            sodium: 120.0,
        },
        alerts: Vec::new(),
        alternatives: Vec::new(),
        ingredients: strings(&["Organic Quinoa", "Water", "Sea Salt"]),
        barcode: None,
    }
}

pub fn processed_instant_noodles() -> ScanRecord {
    ScanRecord {
        name: "Processed Instant Noodles".to_string(),
        category: FoodCategory::Avoidable,
        health_score: 35,
        calories: 350.0,
        nutrition: NutritionFacts {
            protein: 8.0,
            carbs: 50.0,
            fat: 14.0,
            fiber: 2.0,
            sugar: 3.0,
            sodium: 1200.0,
        },
        alerts: strings(&[
            "High in sodium (>1000mg per serving)",
            "Contains trans fats",
            "High in preservatives",
            "Low nutritional value",
        ]),
        alternatives: strings(&[
            "Brown rice noodles with vegetables",
            "Whole wheat pasta with tomato sauce",
            "Quinoa salad with fresh herbs",
        ]),
        ingredients: strings(&["Wheat flour", "Palm oil", "Salt", "MSG", "Preservatives"]),
        barcode: None,
    }
}

pub fn fixture_record(fixture: ScanFixture) -> ScanRecord {
    match fixture {
        ScanFixture::Healthy => organic_quinoa_bowl(),
        ScanFixture::Unhealthy => processed_instant_noodles(),
    }
}
