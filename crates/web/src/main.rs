use anyhow::Context;
use axum::{Router, http::HeaderValue};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;

use config::Config;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::bmi::handlers::compute_bmi,
        features::bmi::handlers::compute_bmi_query,
        features::bmi::handlers::list_categories,
        features::bmi::handlers::get_category,
        features::health::health,
    ),
    components(
        schemas(
            bmi::dto::bmi::ComputeBmiRequest,
            bmi::dto::bmi::ComputeBmiResponse,
            bmi::dto::bmi::CategoryResponse,
            bmi::UnitSystem,
            features::health::HealthResponse,
        )
    ),
    tags(
        (name = "bmi", description = "BMI computation and category table"),
        (name = "health", description = "Service liveness"),
    )
)]
struct ApiDoc;

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    if config.cors_allowed_origins.is_empty() {
        return Ok(layer.allow_origin(Any));
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(layer.allow_origin(AllowOrigin::list(origins)))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting BMI API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let cors = cors_layer(&config).context("Failed to build CORS policy")?;

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(features::router())
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let bind_address = config.bind_address();
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_bmi_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/bmi/compute"));
        assert!(doc.paths.paths.contains_key("/api/bmi/categories/{index}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[test]
    fn test_cors_rejects_invalid_origin() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            cors_allowed_origins: vec!["bad\norigin".to_string()],
        };
        assert!(cors_layer(&config).is_err());
    }
}
