//! CORS policy built from configuration

use std::time::Duration;

use axum::http::{request::Parts, HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::CorsConfig;

/// Build the CORS layer for the given policy
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let methods: Vec<Method> = config
        .allowed_methods
        .iter()
        .filter_map(|name| match Method::from_bytes(name.trim().as_bytes()) {
            Ok(method) => Some(method),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS method {:?}", name);
                None
            }
        })
        .collect();

    let headers: Vec<HeaderName> = config
        .allowed_headers
        .iter()
        .filter_map(|name| match HeaderName::from_bytes(name.trim().as_bytes()) {
            Ok(header) => Some(header),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS header {:?}", name);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allow_origin(&config.allowed_origins))
        .allow_methods(methods)
        .allow_headers(headers)
        .allow_credentials(false)
        .max_age(Duration::from_secs(config.max_age_secs))
}

fn allow_origin(patterns: &[String]) -> AllowOrigin {
    if patterns.iter().any(|p| p.trim() == "*") {
        return AllowOrigin::any();
    }

    let patterns: Vec<String> = patterns
        .iter()
        .map(|p| p.trim().to_ascii_lowercase())
        .collect();

    AllowOrigin::predicate(move |origin: &HeaderValue, _parts: &Parts| {
        let Ok(origin) = origin.to_str() else {
            return false;
        };
        let origin = origin.to_ascii_lowercase();
        patterns.iter().any(|pattern| origin_matches(pattern, &origin))
    })
}

/// Match an origin against a pattern holding at most one `*` wildcard.
pub fn origin_matches(pattern: &str, origin: &str) -> bool {
    match pattern.split_once('*') {
        Some((prefix, suffix)) => {
            origin.len() >= prefix.len() + suffix.len()
                && origin.starts_with(prefix)
                && origin.ends_with(suffix)
        }
        None => pattern == origin,
    }
}
