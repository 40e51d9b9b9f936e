#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use outfit_assistant::core::ConfigProvider;
#[cfg(feature = "lambda")]
use outfit_assistant::utils::{logger, validation::Validate};
#[cfg(feature = "lambda")]
use outfit_assistant::{ApiResponse, Catalog, LambdaConfig, RequestHandler};

#[cfg(feature = "lambda")]
async fn function_handler(
    handler: &RequestHandler<Catalog, LambdaConfig>,
    event: LambdaEvent<serde_json::Value>,
) -> Result<ApiResponse, Error> {
    tracing::debug!("Invocation {}", event.context.request_id);

    // 錯誤已在 handler 內轉成 500 回應
    Ok(handler.handle(&event.payload))
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    let config = LambdaConfig::from_env();
    config
        .validate()
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

    // 衣櫥只在冷啟動時載入一次
    let catalog = Catalog::load(config.catalog_path())
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;
    tracing::info!("Catalog loaded with {} items", catalog.len());

    let handler = RequestHandler::new(catalog, config);
    let handler = &handler;

    run(service_fn(move |event: LambdaEvent<serde_json::Value>| async move {
        function_handler(handler, event).await
    }))
    .await
}
