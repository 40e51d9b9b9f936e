use crate::core::CatalogSource;
use crate::domain::model::{Category, ClothingItem, Formality};
use crate::utils::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};

/// Recognised filter keys. Every present criterion must hold (logical AND);
/// unknown keys in the incoming JSON are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl FilterCriteria {
    /// Parses the `filters` object of a request. `null` means no filtering.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Null => Ok(Self::default()),
            serde_json::Value::Object(_) => Self::deserialize(value)
                .map_err(|e| AssistantError::invalid_request(format!("filters: {}", e))),
            other => Err(AssistantError::invalid_request(format!(
                "filters must be an object, got {}",
                other
            ))),
        }
    }

    pub fn by_category(category: Category) -> Self {
        Self {
            category: Some(category.as_str().to_string()),
            ..Self::default()
        }
    }

    pub fn with_formality(mut self, formality: Formality) -> Self {
        self.formality = Some(formality.as_str().to_string());
        self
    }

    pub fn with_season(mut self, season: impl Into<String>) -> Self {
        self.season = Some(season.into());
        self
    }

    pub fn only_available(mut self) -> Self {
        self.available = Some(true);
        self
    }

    pub fn is_empty(&self) -> bool {
        present(&self.category).is_none()
            && present(&self.season).is_none()
            && present(&self.formality).is_none()
            && self.available.is_none()
    }

    pub fn matches(&self, item: &ClothingItem) -> bool {
        if let Some(category) = present(&self.category) {
            if item.category.as_str() != category {
                return false;
            }
        }

        if let Some(season) = present(&self.season) {
            if !item.season.iter().any(|s| s == season) {
                return false;
            }
        }

        if let Some(formality) = present(&self.formality) {
            if item.formality.as_str() != formality {
                return false;
            }
        }

        if let Some(available) = self.available {
            if item.available != available {
                return false;
            }
        }

        true
    }
}

// 空字串視為未設定
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Returns the catalog items matching `criteria`, in catalog order.
pub fn filter_items<'a, C: CatalogSource + ?Sized>(
    catalog: &'a C,
    criteria: Option<&FilterCriteria>,
) -> Vec<&'a ClothingItem> {
    match criteria {
        Some(criteria) if !criteria.is_empty() => catalog
            .items()
            .iter()
            .filter(|item| criteria.matches(item))
            .collect(),
        _ => catalog.items().iter().collect(),
    }
}
