use crate::core::filter::{filter_items, FilterCriteria};
use crate::core::CatalogSource;
use crate::domain::model::{
    Category, ClothingItem, Formality, OutfitPiece, OutfitRecommendation, Preferences,
    WeatherAnalysis, WeatherConditions,
};
use std::collections::BTreeMap;

/// Categories an outfit is assembled from, in selection order.
pub const OUTFIT_CATEGORIES: [Category; 4] = [
    Category::Outerwear,
    Category::Tops,
    Category::Bottoms,
    Category::Footwear,
];

pub const DEFAULT_OCCASION: &str = "casual";

pub const COLD_THRESHOLD: f64 = 10.0;
pub const HOT_THRESHOLD: f64 = 25.0;

struct StylingRule {
    applies: fn(f64) -> bool,
    advice: &'static str,
}

fn is_cold(temperature: f64) -> bool {
    temperature < COLD_THRESHOLD
}

fn is_hot(temperature: f64) -> bool {
    temperature > HOT_THRESHOLD
}

// Rules are checked independently; each one that applies adds its advice.
const STYLING_RULES: &[StylingRule] = &[
    StylingRule {
        applies: is_cold,
        advice: "Layer clothing for warmth",
    },
    StylingRule {
        applies: is_hot,
        advice: "Choose breathable fabrics",
    },
];

#[derive(Debug, Clone)]
pub struct OutfitRequest {
    pub user_id: String,
    pub weather: Option<WeatherConditions>,
    pub occasion: String,
    /// Reserved for colour/material exclusions; currently not applied.
    pub preferences: Option<Preferences>,
}

impl OutfitRequest {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            weather: None,
            occasion: DEFAULT_OCCASION.to_string(),
            preferences: None,
        }
    }

    pub fn with_occasion(mut self, occasion: impl Into<String>) -> Self {
        self.occasion = occasion.into();
        self
    }

    pub fn with_weather(mut self, weather: WeatherConditions) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_preferences(mut self, preferences: Preferences) -> Self {
        self.preferences = Some(preferences);
        self
    }
}

pub struct OutfitRecommender<C: CatalogSource> {
    catalog: C,
}

impl<C: CatalogSource> OutfitRecommender<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn recommend(&self, request: &OutfitRequest) -> OutfitRecommendation {
        let weather = match &request.weather {
            Some(weather) if !weather.is_empty() => weather.clone(),
            _ => {
                tracing::debug!("No weather supplied, using placeholder conditions");
                WeatherConditions::fallback()
            }
        };

        if request.preferences.as_ref().is_some_and(|p| !p.is_empty()) {
            tracing::debug!("Preferences supplied but not applied to selection");
        }

        let formality = Formality::for_occasion(&request.occasion);
        let reason = format!("Selected for {} {}", formality, request.occasion);

        let mut outfit_pieces = BTreeMap::new();
        for category in OUTFIT_CATEGORIES {
            match self.select(category, formality) {
                Some(item) => {
                    tracing::debug!(
                        "{}: picked {} (last worn {})",
                        category,
                        item.id,
                        item.last_worn
                    );
                    outfit_pieces.insert(
                        category,
                        OutfitPiece {
                            item: item.clone(),
                            reason: reason.clone(),
                        },
                    );
                }
                None => tracing::debug!("{}: no available items, skipping", category),
            }
        }

        let temperature = weather
            .temperature
            .unwrap_or(WeatherConditions::DEFAULT_TEMPERATURE);
        let styling_advice = STYLING_RULES
            .iter()
            .filter(|rule| (rule.applies)(temperature))
            .map(|rule| rule.advice.to_string())
            .collect();

        OutfitRecommendation {
            user_id: request.user_id.clone(),
            weather_analysis: WeatherAnalysis {
                temperature: weather.temperature,
                formality,
            },
            outfit_pieces,
            styling_advice,
        }
    }

    /// Tries the exact dress code first, then any available item in the
    /// category. Within the first non-empty stage the least recently worn
    /// item wins; ties keep catalog order.
    pub fn select(&self, category: Category, formality: Formality) -> Option<&ClothingItem> {
        let stages = [
            FilterCriteria::by_category(category)
                .with_formality(formality)
                .only_available(),
            FilterCriteria::by_category(category).only_available(),
        ];

        stages
            .iter()
            .map(|criteria| filter_items(&self.catalog, Some(criteria)))
            .find(|items| !items.is_empty())
            .and_then(|items| items.into_iter().min_by_key(|item| item.last_worn))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::Catalog;
    use chrono::NaiveDate;

    fn item(id: &str, category: Category, formality: Formality, last_worn: &str, available: bool) -> ClothingItem {
        ClothingItem {
            id: id.to_string(),
            name: id.to_string(),
            category,
            season: vec!["all".to_string()],
            weather_conditions: vec!["all".to_string()],
            formality,
            color: "black".to_string(),
            material: "cotton".to_string(),
            last_worn: NaiveDate::parse_from_str(last_worn, "%Y-%m-%d").unwrap(),
            available,
        }
    }

    #[test]
    fn test_business_picks_wool_coat() {
        let recommender = OutfitRecommender::new(Catalog::embedded().unwrap());
        let outfit = recommender.recommend(&OutfitRequest::new("user123").with_occasion("business"));

        assert_eq!(outfit.weather_analysis.formality, Formality::BusinessFormal);
        assert_eq!(
            outfit.outfit_pieces[&Category::Outerwear].item.name,
            "Wool Business Coat"
        );
        assert_eq!(
            outfit.outfit_pieces[&Category::Outerwear].reason,
            "Selected for business_formal business"
        );
    }

    #[test]
    fn test_falls_back_when_formality_missing() {
        // no business_casual outerwear in the default wardrobe
        let recommender = OutfitRecommender::new(Catalog::embedded().unwrap());
        let coat = recommender
            .select(Category::Outerwear, Formality::BusinessCasual)
            .unwrap();

        assert_eq!(coat.id, "coat_001");
    }

    #[test]
    fn test_unavailable_items_never_selected() {
        let items = vec![
            item("old", Category::Tops, Formality::Casual, "2023-01-01", false),
            item("new", Category::Tops, Formality::Casual, "2024-06-01", true),
        ];
        let recommender = OutfitRecommender::new(items);

        assert_eq!(recommender.select(Category::Tops, Formality::Casual).unwrap().id, "new");
        assert!(recommender.select(Category::Footwear, Formality::Casual).is_none());
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let items = vec![
            item("first", Category::Bottoms, Formality::Casual, "2024-01-01", true),
            item("second", Category::Bottoms, Formality::Casual, "2024-01-01", true),
        ];
        let recommender = OutfitRecommender::new(items);

        assert_eq!(
            recommender.select(Category::Bottoms, Formality::Casual).unwrap().id,
            "first"
        );
    }

    #[test]
    fn test_missing_category_is_omitted() {
        let items = vec![item("tee", Category::Tops, Formality::Casual, "2024-01-01", true)];
        let outfit = OutfitRecommender::new(items).recommend(&OutfitRequest::new("u"));

        assert_eq!(outfit.outfit_pieces.len(), 1);
        assert!(outfit.outfit_pieces.contains_key(&Category::Tops));
    }

    #[test]
    fn test_styling_advice_thresholds() {
        let recommender = OutfitRecommender::new(Catalog::embedded().unwrap());
        let advice_for = |temperature: f64| {
            let weather = WeatherConditions {
                temperature: Some(temperature),
                ..WeatherConditions::default()
            };
            recommender
                .recommend(&OutfitRequest::new("u").with_weather(weather))
                .styling_advice
        };

        assert_eq!(advice_for(5.0), vec!["Layer clothing for warmth"]);
        assert_eq!(advice_for(30.0), vec!["Choose breathable fabrics"]);
        assert!(advice_for(10.0).is_empty());
        assert!(advice_for(25.0).is_empty());
    }

    #[test]
    fn test_default_weather_applied() {
        let recommender = OutfitRecommender::new(Catalog::embedded().unwrap());
        let outfit = recommender.recommend(&OutfitRequest::new("u").with_weather(WeatherConditions::default()));

        assert_eq!(outfit.weather_analysis.temperature, Some(20.0));
        assert!(outfit.styling_advice.is_empty());
    }

    #[test]
    fn test_weather_without_temperature() {
        let recommender = OutfitRecommender::new(Catalog::embedded().unwrap());
        let weather = WeatherConditions {
            description: Some("drizzle".to_string()),
            ..WeatherConditions::default()
        };
        let outfit = recommender.recommend(&OutfitRequest::new("u").with_weather(weather));

        assert_eq!(outfit.weather_analysis.temperature, None);
        assert!(outfit.styling_advice.is_empty());
    }
}
