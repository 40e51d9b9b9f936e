pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::lambda::LambdaConfig;

pub use self::core::{
    catalog::Catalog,
    filter::{filter_items, FilterCriteria},
    handler::{Action, ApiResponse, RequestHandler},
    recommender::{OutfitRecommender, OutfitRequest},
};
pub use domain::model::{
    Category, ClothingItem, Formality, OutfitRecommendation, WeatherConditions,
};
pub use utils::error::{AssistantError, Result};
