//! Offset/limit paging for the product listing.

/// Row cap used when the caller asks for everything (`count=all` or no count).
pub const UNLIMITED_COUNT: i64 = 10_000;

/// Used when `count` is present but unusable.
pub const DEFAULT_COUNT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub start: i64,
    pub count: i64,
}

impl Default for Page {
    fn default() -> Self {
        Page {
            start: 0,
            count: UNLIMITED_COUNT,
        }
    }
}

impl Page {
    /// Interprets the raw `start` and `count` query values. Never fails:
    /// garbage falls back to the defaults.
    pub fn from_params(start: Option<&str>, count: Option<&str>) -> Self {
        let count = match count.map(str::trim) {
            None | Some("") => UNLIMITED_COUNT,
            Some(c) if c.eq_ignore_ascii_case("all") => UNLIMITED_COUNT,
            Some(c) => match c.parse::<i64>() {
                Ok(n) if n >= 1 => n,
                _ => DEFAULT_COUNT,
            },
        };

        let start = start
            .and_then(|s| s.trim().parse::<i64>().ok())
            .unwrap_or(0)
            .max(0);

        Page { start, count }
    }
}
