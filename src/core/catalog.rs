use crate::core::CatalogSource;
use crate::domain::model::ClothingItem;
use crate::utils::error::{AssistantError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_unique, Validate,
};
use serde::Deserialize;
use std::path::Path;

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<ClothingItem>,
}

/// The wardrobe, fixed for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ClothingItem>,
}

impl Catalog {
    pub fn new(items: Vec<ClothingItem>) -> Self {
        Self { items }
    }

    /// 載入內建衣櫥
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CATALOG)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AssistantError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(content).map_err(|e| AssistantError::CatalogError {
                message: format!("TOML parsing error: {}", e),
            })?;

        let catalog = Self::new(file.items);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Uses the file at `path` when given, the embedded wardrobe otherwise.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::info!("Loading catalog from {}", path);
                Self::from_file(path)
            }
            None => Self::embedded(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogSource for Catalog {
    fn items(&self) -> &[ClothingItem] {
        &self.items
    }
}

impl Validate for Catalog {
    fn validate(&self) -> Result<()> {
        if self.items.is_empty() {
            return Err(AssistantError::CatalogError {
                message: "Catalog must contain at least one item".to_string(),
            });
        }

        for item in &self.items {
            validate_non_empty_string("items.id", &item.id)?;
            validate_non_empty_string(&format!("items[{}].name", item.id), &item.name)?;
            validate_non_empty_list(&format!("items[{}].season", item.id), &item.season)?;
        }

        validate_unique("items.id", self.items.iter().map(|item| item.id.as_str()))?;

        tracing::debug!("Catalog validation passed ({} items)", self.items.len());
        Ok(())
    }
}
