//! Seeding test: inserts random products and checks what landed in the table.
//! Skips when no database is reachable.

use product_catalog_api::infra::config::{self, DbConfig};
use product_catalog_api::{seed_products, Page, ProductService};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_seed_products() -> Result<(), Box<dyn std::error::Error>> {
    config::load_dotenv();
    let service = match ProductService::connect(&DbConfig::from_env()?).await {
        Ok(s) => s,
        Err(e) => {
            eprintln!("skipping: database not reachable ({:#})", e);
            return Ok(());
        }
    };

    service.delete_all_products().await?;

    assert_eq!(seed_products(&service, 0).await?, 0);
    assert_eq!(service.count_products().await?, 0);

    assert_eq!(seed_products(&service, 25).await?, 25);
    assert_eq!(service.count_products().await?, 25);

    let products = service.list_products(Page::default()).await?;
    assert_eq!(products.len(), 25);
    assert_eq!(products.first().map(|p| p.id), Some(1));
    for p in &products {
        assert!(!p.name.is_empty());
        assert!((1.0..=100.0).contains(&p.price), "price out of range: {}", p.price);
    }

    service.delete_all_products().await?;
    Ok(())
}
