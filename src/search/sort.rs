use crate::models::PropertyRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Result ordering selected from the sort dropdown
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SortKey {
    /// Fewest days on market first
    #[default]
    Newest,
    /// Most days on market first
    Oldest,
    PriceAsc,
    PriceDesc,
    SqftAsc,
    SqftDesc,
    /// Kept verbatim; sorts as identity
    Unrecognized(String),
}

impl SortKey {
    pub fn as_str(&self) -> &str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::SqftAsc => "sqft-asc",
            SortKey::SqftDesc => "sqft-desc",
            SortKey::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        match value.trim() {
            "newest" => SortKey::Newest,
            "oldest" => SortKey::Oldest,
            "price-asc" | "price-low" => SortKey::PriceAsc,
            "price-desc" | "price-high" => SortKey::PriceDesc,
            "sqft-asc" | "sqft-low" => SortKey::SqftAsc,
            "sqft-desc" | "sqft-high" => SortKey::SqftDesc,
            other => SortKey::Unrecognized(other.to_string()),
        }
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::from(value.as_str())
    }
}

impl From<SortKey> for String {
    fn from(key: SortKey) -> Self {
        key.as_str().to_string()
    }
}

impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SortKey::from(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Return a new, stably sorted sequence. Ties keep their input order.
pub fn sort<'a>(records: &[&'a PropertyRecord], key: &SortKey) -> Vec<&'a PropertyRecord> {
    let mut sorted = records.to_vec();

    match key {
        SortKey::Newest => sorted.sort_by_key(|r| r.days_on_market),
        SortKey::Oldest => sorted.sort_by_key(|r| Reverse(r.days_on_market)),
        SortKey::PriceAsc => sorted.sort_by_key(|r| r.price),
        SortKey::PriceDesc => sorted.sort_by_key(|r| Reverse(r.price)),
        SortKey::SqftAsc => sorted.sort_by_key(|r| r.square_feet),
        SortKey::SqftDesc => sorted.sort_by_key(|r| Reverse(r.square_feet)),
        SortKey::Unrecognized(_) => {}
    }

    sorted
}
