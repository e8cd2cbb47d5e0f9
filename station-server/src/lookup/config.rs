//! Per-query options.

/// Options for a free-text station lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Only return stations in this country (lower-case code).
    pub country: Option<String>,

    /// Order stations of equal match quality by popularity instead of
    /// catalog order.
    pub sorted: bool,
}

impl QueryOptions {
    /// Create options, normalizing the country code.
    ///
    /// A blank country means no filter.
    pub fn new(country: Option<&str>, sorted: bool) -> Self {
        let country = country
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());
        Self { country, sorted }
    }

    /// The country filter to apply, if any.
    ///
    /// Blank codes are no filter even when set directly on the field.
    pub fn country_filter(&self) -> Option<&str> {
        self.country
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }
}
