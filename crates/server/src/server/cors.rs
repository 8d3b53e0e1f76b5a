use anyhow::Context;
use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

pub fn cors_layer(config: &CorsConfig) -> anyhow::Result<CorsLayer> {
    // a literal `*` origin cannot be combined with credentials, mirror instead
    let origin = if config.allows_any_origin() {
        AllowOrigin::mirror_request()
    } else {
        let origins = config
            .allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).with_context(|| format!("bad cors origin: {origin}"))
            })
            .collect::<Result<Vec<_>, _>>()?;
        AllowOrigin::list(origins)
    };
    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(config.allow_credentials))
}
