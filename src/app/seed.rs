//! Random product generation for demo and test databases.

use crate::app::product_service::ProductService;
use crate::domain::product::ProductPayload;
use anyhow::Context;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const ADJECTIVES: &[&str] = &[
    "Ergonomic", "Rustic", "Sleek", "Refined", "Handcrafted", "Practical", "Gorgeous",
    "Intelligent", "Incredible", "Fantastic", "Licensed", "Tasty", "Small", "Awesome",
];

const MATERIALS: &[&str] = &[
    "Steel", "Wooden", "Concrete", "Plastic", "Cotton", "Granite", "Rubber", "Leather",
    "Silk", "Wool", "Marble", "Bronze", "Bamboo", "Glass",
];

const NOUNS: &[&str] = &[
    "Chair", "Car", "Computer", "Keyboard", "Mouse", "Bike", "Ball", "Gloves", "Pants",
    "Shirt", "Table", "Shoes", "Hat", "Towels", "Soap", "Lamp", "Clock", "Bottle",
];

pub const MIN_PRICE: f64 = 1.0;
pub const MAX_PRICE: f64 = 100.0;

fn pick<R: Rng + ?Sized>(rng: &mut R, words: &[&'static str]) -> &'static str {
    words.choose(rng).copied().unwrap_or_default()
}

/// Builds one random product, e.g. "Rustic Bamboo Lamp" at 42.17.
pub fn random_product<R: Rng + ?Sized>(rng: &mut R) -> ProductPayload {
    let name = format!(
        "{} {} {}",
        pick(rng, ADJECTIVES),
        pick(rng, MATERIALS),
        pick(rng, NOUNS)
    );
    let cents = (rng.gen_range(MIN_PRICE..MAX_PRICE) * 100.0).round();
    ProductPayload {
        name,
        price: cents / 100.0,
    }
}

/// Inserts `count` random products, one INSERT each. Stops at the first failure.
pub async fn seed_products(service: &ProductService, count: usize) -> anyhow::Result<usize> {
    let mut rng = StdRng::from_entropy();

    for i in 0..count {
        let payload = random_product(&mut rng);
        let product = service
            .create_product(&payload)
            .await
            .with_context(|| format!("failed to insert seed product #{}", i + 1))?;
        tracing::info!(
            n = i + 1,
            id = product.id,
            name = %product.name,
            price = %format!("{:.2}", product.price),
            "seeded product"
        );
    }

    Ok(count)
}
