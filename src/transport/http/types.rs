use crate::app::product_service::ProductService;
use crate::domain::pagination::Page;
use axum::extract::Query;
use axum::http::Uri;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

#[derive(Clone)]
pub struct AppState {
    pub product_service: Arc<ProductService>,
}

impl AppState {
    pub fn new(product_service: ProductService) -> Self {
        Self {
            product_service: Arc::new(product_service),
        }
    }
}

/// Query string of `GET /products`. Values stay raw strings so that junk input
/// falls back to defaults instead of being rejected. Repeated keys keep the first value.
#[derive(Deserialize, Debug, Default, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Offset into the listing (default 0).
    pub start: Option<String>,
    /// Page size, or `all` (default: all).
    pub count: Option<String>,
}

impl ListProductsQuery {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "start" if query.start.is_none() => query.start = Some(value),
                "count" if query.count.is_none() => query.count = Some(value),
                _ => {}
            }
        }
        query
    }

    /// Never fails: an undecodable query string is treated as empty.
    pub fn from_uri(uri: &Uri) -> Self {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_default();
        Self::from_pairs(pairs)
    }

    pub fn page(&self) -> Page {
        Page::from_params(self.start.as_deref(), self.count.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ResultResponse {
    pub result: String,
}

impl ResultResponse {
    pub fn new(result: impl Into<String>) -> Self {
        Self {
            result: result.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins_for_repeated_keys() {
        let uri: Uri = "/products?count=5&start=2&count=6&start=9".parse().unwrap();
        let query = ListProductsQuery::from_uri(&uri);
        assert_eq!(query.count.as_deref(), Some("5"));
        assert_eq!(query.start.as_deref(), Some("2"));
        assert_eq!(query.page(), Page { start: 2, count: 5 });
    }

    #[test]
    fn missing_query_is_default_page() {
        let uri: Uri = "/products".parse().unwrap();
        assert_eq!(ListProductsQuery::from_uri(&uri).page(), Page::default());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let query = ListProductsQuery::from_pairs(vec![
            ("sort".to_string(), "name".to_string()),
            ("count".to_string(), "all".to_string()),
        ]);
        assert!(query.start.is_none());
        assert_eq!(query.count.as_deref(), Some("all"));
    }
}
