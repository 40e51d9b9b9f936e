use crate::core::filter::{filter_items, FilterCriteria};
use crate::core::recommender::{OutfitRecommender, OutfitRequest, DEFAULT_OCCASION};
use crate::core::{CatalogSource, ConfigProvider};
use crate::domain::model::{CatalogView, WeatherConditions};
use crate::utils::error::{AssistantError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

pub const STATUS_OK: u16 = 200;
pub const STATUS_ERROR: u16 = 500;

/// Gateway-style response: status, headers and a serialized JSON body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.status_code == STATUS_OK
    }

    pub fn json_body(&self) -> Result<Value> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetClosetCatalog,
    GenerateOutfitRecommendation,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GetClosetCatalog => "get_closet_catalog",
            Action::GenerateOutfitRecommendation => "generate_outfit_recommendation",
        }
    }

    /// Reads `action` from a request body; a missing action means catalog lookup.
    pub fn from_request(body: &Map<String, Value>) -> Result<Self> {
        match body.get("action") {
            None => Ok(Action::GetClosetCatalog),
            Some(Value::String(name)) => match name.as_str() {
                "get_closet_catalog" => Ok(Action::GetClosetCatalog),
                "generate_outfit_recommendation" => Ok(Action::GenerateOutfitRecommendation),
                _ => Err(AssistantError::UnknownAction(name.clone())),
            },
            Some(other) => Err(AssistantError::UnknownAction(other.to_string())),
        }
    }
}

pub struct RequestHandler<C: CatalogSource, P: ConfigProvider> {
    catalog: C,
    config: P,
}

impl<C: CatalogSource, P: ConfigProvider> RequestHandler<C, P> {
    pub fn new(catalog: C, config: P) -> Self {
        Self { catalog, config }
    }

    /// Handles one invocation. Never fails: errors become a 500 response.
    pub fn handle(&self, event: &Value) -> ApiResponse {
        tracing::info!("Received event: {}", event);

        match self.process(event) {
            Ok(body) => self.respond(STATUS_OK, body),
            Err(e) => {
                tracing::error!("Error processing request: {}", e);
                self.respond(
                    STATUS_ERROR,
                    json!({
                        "error": e.to_string(),
                        "message": "Internal server error",
                    }),
                )
            }
        }
    }

    pub fn process(&self, event: &Value) -> Result<Value> {
        let body = extract_body(event)?;
        let action = Action::from_request(&body)?;
        let user_id = self.user_id(&body)?;

        tracing::debug!("Dispatching {} for {}", action.as_str(), user_id);

        match action {
            Action::GetClosetCatalog => {
                let filters = body
                    .get("filters")
                    .cloned()
                    .unwrap_or_else(|| Value::Object(Map::new()));
                let view = self.closet_catalog(user_id, filters)?;
                Ok(serde_json::to_value(view)?)
            }
            Action::GenerateOutfitRecommendation => {
                let request = outfit_request(user_id, &body)?;
                let outfit = OutfitRecommender::new(&self.catalog).recommend(&request);
                Ok(serde_json::to_value(outfit)?)
            }
        }
    }

    pub fn closet_catalog(&self, user_id: String, filters: Value) -> Result<CatalogView> {
        let criteria = FilterCriteria::from_value(&filters)?;
        let items: Vec<_> = filter_items(&self.catalog, Some(&criteria))
            .into_iter()
            .cloned()
            .collect();

        tracing::debug!("{} of {} items match", items.len(), self.catalog.items().len());

        Ok(CatalogView {
            user_id,
            total_items: items.len(),
            filters_applied: filters,
            items,
        })
    }

    fn user_id(&self, body: &Map<String, Value>) -> Result<String> {
        match body.get("user_id") {
            None | Some(Value::Null) => Ok(self.config.default_user_id().to_string()),
            Some(Value::String(id)) => Ok(id.clone()),
            Some(other) => Err(AssistantError::invalid_request(format!(
                "user_id must be a string, got {}",
                other
            ))),
        }
    }

    fn respond(&self, status_code: u16, body: Value) -> ApiResponse {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers.insert(
            "Access-Control-Allow-Origin".to_string(),
            self.config.allow_origin().to_string(),
        );

        ApiResponse {
            status_code,
            headers,
            body: body.to_string(),
        }
    }
}

// 取出請求內容：API Gateway 會把請求放在 body (字串或物件)，直接呼叫則是事件本身
fn extract_body(event: &Value) -> Result<Map<String, Value>> {
    let body = match event.get("body") {
        Some(Value::String(raw)) => serde_json::from_str(raw)?,
        Some(body) => body.clone(),
        None => event.clone(),
    };

    match body {
        Value::Object(map) => Ok(map),
        other => Err(AssistantError::invalid_request(format!(
            "request body must be a JSON object, got {}",
            other
        ))),
    }
}

fn outfit_request(user_id: String, body: &Map<String, Value>) -> Result<OutfitRequest> {
    let mut request = OutfitRequest::new(user_id);

    match body.get("occasion") {
        None => {}
        Some(Value::String(occasion)) => request = request.with_occasion(occasion.clone()),
        Some(other) => {
            tracing::warn!(
                "Unrecognised occasion {}, using {}",
                other,
                DEFAULT_OCCASION
            );
        }
    }

    match body.get("weather_conditions") {
        None | Some(Value::Null) => {}
        Some(value) => {
            let weather = WeatherConditions::deserialize(value).map_err(|e| {
                AssistantError::invalid_request(format!("weather_conditions: {}", e))
            })?;
            request = request.with_weather(weather);
        }
    }

    match body.get("preferences") {
        None | Some(Value::Null) => {}
        Some(Value::Object(preferences)) => {
            request = request.with_preferences(preferences.clone())
        }
        Some(other) => {
            return Err(AssistantError::invalid_request(format!(
                "preferences must be an object, got {}",
                other
            )))
        }
    }

    Ok(request)
}
