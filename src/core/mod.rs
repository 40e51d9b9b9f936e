pub mod catalog;
pub mod filter;
pub mod handler;
pub mod recommender;

pub use crate::domain::model::{ClothingItem, OutfitRecommendation};
pub use crate::domain::ports::{CatalogSource, ConfigProvider};
pub use crate::utils::error::Result;
