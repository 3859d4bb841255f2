//! Logging setup for the server binary.

use crate::infra::config;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Loads `.env` and then installs the fmt subscriber, so a `RUST_LOG` set in
/// the file takes effect. Returns whether a `.env` file was found.
pub fn init() -> bool {
    let dotenv_found = config::load_dotenv();
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
    dotenv_found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn rust_log_from_env_file_reaches_the_filter() {
        if std::env::var_os("RUST_LOG").is_some() {
            // the real environment wins over .env; nothing to check
            return;
        }
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "RUST_LOG=product_catalog_api=debug").unwrap();

        assert!(config::load_dotenv_from(file.path()));
        assert!(env_filter().to_string().contains("product_catalog_api=debug"));
    }
}
