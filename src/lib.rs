pub mod app {
    pub mod product_service;
    pub mod seed;
}
pub mod domain {
    pub mod pagination;
    pub mod product;
}
pub mod infra {
    pub mod config;
    pub mod logging;
}
pub mod transport {
    pub mod http;
}

// Convenience re-exports (keeps call-sites clean)
pub use app::product_service::ProductService;
pub use app::seed::seed_products;
pub use domain::pagination::Page;
pub use domain::product::{Product, ProductPayload};
pub use infra::config::DbConfig;
