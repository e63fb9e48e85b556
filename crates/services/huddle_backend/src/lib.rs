// File: services/huddle_backend/src/lib.rs
use axum::Router;
use http::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, ORIGIN},
    HeaderValue, Method,
};
use huddle_config::CorsConfig;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

pub mod app_state;

use app_state::AppState;

/// Builds the CORS layer from the configured origins.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ORIGIN, CONTENT_TYPE, ACCEPT, AUTHORIZATION])
}

/// Assembles the full application router: health routes at the root, every
/// compiled-in integration under `/api`, CORS and request tracing.
pub fn build_router(state: &AppState) -> Router {
    #[allow(unused_mut)] // for the features it needs to be mutable
    let mut api = huddle_tokens::routes(state.token_store.clone());
    #[cfg(feature = "slack")]
    {
        api = api.merge(huddle_slack::routes(state.slack_state.clone()));
    }
    #[cfg(feature = "gcal")]
    {
        api = api.merge(huddle_gcal::routes(state.gcal_state.clone()));
    }
    #[cfg(feature = "zoom")]
    {
        api = api.merge(huddle_zoom::routes(state.zoom_state.clone()));
    }

    #[allow(unused_mut)]
    let mut app = Router::new()
        .merge(huddle_common::routes())
        .nest("/api", api);

    #[cfg(feature = "openapi")]
    {
        app = app.merge(swagger_ui());
    }

    app.layer(cors_layer(&state.config.cors))
        .layer(TraceLayer::new_for_http())
}

#[cfg(feature = "openapi")]
fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    #[cfg(feature = "gcal")]
    use huddle_gcal::doc::GcalApiDoc;
    #[cfg(feature = "slack")]
    use huddle_slack::doc::SlackApiDoc;
    use huddle_tokens::doc::TokensApiDoc;
    #[cfg(feature = "zoom")]
    use huddle_zoom::doc::ZoomApiDoc;
    use utoipa::OpenApi;
    use utoipa_swagger_ui::SwaggerUi;

    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Huddle API",
            version = "0.1.0",
            description = "Huddle integration gateway",
            license(name = "MIT", url = "https://opensource.org/licenses/MIT")
        ),
        servers((url = "/api", description = "Main API Prefix")),
    )]
    struct ApiDoc;

    let mut openapi_doc = ApiDoc::openapi();
    openapi_doc.merge(TokensApiDoc::openapi());
    #[cfg(feature = "slack")]
    openapi_doc.merge(SlackApiDoc::openapi());
    #[cfg(feature = "gcal")]
    openapi_doc.merge(GcalApiDoc::openapi());
    #[cfg(feature = "zoom")]
    openapi_doc.merge(ZoomApiDoc::openapi());
    tracing::info!("Adding Swagger UI at /api/docs");

    SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc)
}
