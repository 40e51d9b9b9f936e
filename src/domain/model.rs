use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Outerwear,
    Tops,
    Bottoms,
    Footwear,
    Accessories,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Outerwear => "outerwear",
            Category::Tops => "tops",
            Category::Bottoms => "bottoms",
            Category::Footwear => "footwear",
            Category::Accessories => "accessories",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Casual,
    BusinessCasual,
    BusinessFormal,
}

impl Formality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::BusinessCasual => "business_casual",
            Formality::BusinessFormal => "business_formal",
        }
    }

    /// Maps an occasion label to a dress code. Unknown labels fall back to casual.
    pub fn for_occasion(occasion: &str) -> Self {
        match occasion.to_lowercase().as_str() {
            "work" => Formality::BusinessCasual,
            "business" | "formal" => Formality::BusinessFormal,
            _ => Formality::Casual,
        }
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothingItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub season: Vec<String>,
    pub weather_conditions: Vec<String>,
    pub formality: Formality,
    pub color: String,
    pub material: String,
    pub last_worn: NaiveDate,
    pub available: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherConditions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f64>,
}

impl WeatherConditions {
    pub const DEFAULT_TEMPERATURE: f64 = 20.0;

    /// Placeholder conditions used when the caller sends no weather.
    pub fn fallback() -> Self {
        Self {
            temperature: Some(Self::DEFAULT_TEMPERATURE),
            description: Some("partly cloudy".to_string()),
            humidity: Some(60.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.temperature.is_none() && self.description.is_none() && self.humidity.is_none()
    }
}

/// Free-form user preferences. Accepted and echoed back, not yet used for selection.
pub type Preferences = serde_json::Map<String, serde_json::Value>;

#[derive(Debug, Clone, Serialize)]
pub struct WeatherAnalysis {
    pub temperature: Option<f64>,
    pub formality: Formality,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutfitPiece {
    pub item: ClothingItem,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OutfitRecommendation {
    pub user_id: String,
    pub weather_analysis: WeatherAnalysis,
    pub outfit_pieces: BTreeMap<Category, OutfitPiece>,
    pub styling_advice: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub user_id: String,
    pub total_items: usize,
    pub filters_applied: serde_json::Value,
    pub items: Vec<ClothingItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formality_for_occasion() {
        assert_eq!(Formality::for_occasion("casual"), Formality::Casual);
        assert_eq!(Formality::for_occasion("Work"), Formality::BusinessCasual);
        assert_eq!(Formality::for_occasion("BUSINESS"), Formality::BusinessFormal);
        assert_eq!(Formality::for_occasion("formal"), Formality::BusinessFormal);
        assert_eq!(Formality::for_occasion("wedding"), Formality::Casual);
    }

    #[test]
    fn test_category_order_matches_outfit_order() {
        let mut categories = vec![Category::Footwear, Category::Tops, Category::Outerwear];
        categories.sort();
        assert_eq!(
            categories,
            vec![Category::Outerwear, Category::Tops, Category::Footwear]
        );
    }

    #[test]
    fn test_enums_serialize_as_snake_case() {
        assert_eq!(
            serde_json::to_value(Formality::BusinessCasual).unwrap(),
            serde_json::json!("business_casual")
        );
        assert_eq!(Category::Accessories.to_string(), "accessories");
    }

    #[test]
    fn test_weather_is_empty() {
        assert!(WeatherConditions::default().is_empty());
        assert!(!WeatherConditions::fallback().is_empty());
    }
}
