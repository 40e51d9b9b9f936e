use crate::config::{DEFAULT_ALLOW_ORIGIN, DEFAULT_USER_ID};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Parser)]
#[command(name = "outfit-assistant")]
#[command(about = "Browse the wardrobe and get weather-aware outfit suggestions")]
pub struct CliConfig {
    /// Catalog TOML file to use instead of the built-in wardrobe
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[arg(long, global = true, default_value = DEFAULT_USER_ID)]
    pub user_id: String,

    #[arg(long, global = true, default_value = DEFAULT_ALLOW_ORIGIN)]
    pub allow_origin: String,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List catalog items, optionally filtered
    Catalog {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        season: Option<String>,
        #[arg(long)]
        formality: Option<String>,
        #[arg(long)]
        available: Option<bool>,
    },
    /// Pick one item per category for an occasion
    Recommend {
        #[arg(long, default_value = "casual")]
        occasion: String,
        #[arg(long, allow_negative_numbers = true)]
        temperature: Option<f64>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        humidity: Option<f64>,
    },
    /// Run a raw event JSON file through the handler ("-" reads stdin)
    Handle { event: String },
}

impl CliConfig {
    /// Builds the request event for the catalog and recommend subcommands.
    /// `handle` reads its event from disk, so it yields `None`.
    pub fn to_event(&self) -> Option<Value> {
        match &self.command {
            Command::Catalog {
                category,
                season,
                formality,
                available,
            } => {
                let mut filters = Map::new();
                if let Some(category) = category {
                    filters.insert("category".to_string(), json!(category));
                }
                if let Some(season) = season {
                    filters.insert("season".to_string(), json!(season));
                }
                if let Some(formality) = formality {
                    filters.insert("formality".to_string(), json!(formality));
                }
                if let Some(available) = available {
                    filters.insert("available".to_string(), json!(available));
                }

                Some(json!({
                    "action": "get_closet_catalog",
                    "user_id": self.user_id,
                    "filters": filters,
                }))
            }
            Command::Recommend {
                occasion,
                temperature,
                description,
                humidity,
            } => {
                let mut weather = Map::new();
                if let Some(temperature) = temperature {
                    weather.insert("temperature".to_string(), json!(temperature));
                }
                if let Some(description) = description {
                    weather.insert("description".to_string(), json!(description));
                }
                if let Some(humidity) = humidity {
                    weather.insert("humidity".to_string(), json!(humidity));
                }

                Some(json!({
                    "action": "generate_outfit_recommendation",
                    "user_id": self.user_id,
                    "occasion": occasion,
                    "weather_conditions": weather,
                }))
            }
            Command::Handle { .. } => None,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn default_user_id(&self) -> &str {
        &self.user_id
    }

    fn allow_origin(&self) -> &str {
        &self.allow_origin
    }

    fn catalog_path(&self) -> Option<&str> {
        self.catalog.as_deref()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("user_id", &self.user_id)?;
        validate_non_empty_string("allow_origin", &self.allow_origin)?;

        if let Some(path) = &self.catalog {
            validate_path("catalog", path)?;
        }
        if let Command::Handle { event } = &self.command {
            validate_path("event", event)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_subcommand_builds_filters() {
        let config = CliConfig::parse_from([
            "outfit-assistant",
            "catalog",
            "--category",
            "accessories",
            "--season",
            "summer",
        ]);
        let event = config.to_event().unwrap();

        assert_eq!(event["action"], "get_closet_catalog");
        assert_eq!(event["user_id"], "user123");
        assert_eq!(
            event["filters"],
            json!({"category": "accessories", "season": "summer"})
        );
    }

    #[test]
    fn test_recommend_subcommand_accepts_negative_temperature() {
        let config = CliConfig::parse_from([
            "outfit-assistant",
            "--user-id",
            "alice",
            "recommend",
            "--occasion",
            "work",
            "--temperature",
            "-3",
        ]);
        let event = config.to_event().unwrap();

        assert_eq!(event["occasion"], "work");
        assert_eq!(event["user_id"], "alice");
        assert_eq!(event["weather_conditions"]["temperature"], json!(-3.0));
    }

    #[test]
    fn test_handle_subcommand_has_no_built_event() {
        let config = CliConfig::parse_from(["outfit-assistant", "handle", "event.json"]);

        assert!(config.to_event().is_none());
        assert!(config.validate().is_ok());
    }
}
