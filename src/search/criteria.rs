use serde::{Deserialize, Deserializer, Serialize};
use std::str::FromStr;
use tracing::debug;

/// Optional constraints applied to the listing set
///
/// Every field is independent; `None` means "no constraint", while
/// `Some(0)` is a real bound. A blank text field counts as `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Case-insensitive substring of the address
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "is_blank"
    )]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bathrooms: Option<f32>,
    /// Exact, case-sensitive
    #[serde(
        default,
        deserialize_with = "blank_as_none",
        skip_serializing_if = "is_blank"
    )]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_square_feet: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_square_feet: Option<u32>,
}

impl FilterCriteria {
    /// Build criteria from raw form fields or URL pairs.
    ///
    /// Blank values and numbers that do not parse are dropped rather than
    /// rejected, so a bad bound never blocks the rest of the query. Unknown
    /// keys are ignored and a repeated key keeps its last value.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut criteria = Self::default();
        for (key, value) in pairs {
            criteria.set_raw(key.as_ref(), value.as_ref());
        }
        criteria
    }

    /// Apply one raw field. Returns `false` for unknown keys.
    pub fn set_raw(&mut self, key: &str, value: &str) -> bool {
        let value = value.trim();
        match key {
            "location" => self.location = text(value),
            "minPrice" => self.min_price = bound(key, value),
            "maxPrice" => self.max_price = bound(key, value),
            "minBedrooms" | "bedrooms" => self.min_bedrooms = bound(key, value),
            "minBathrooms" | "bathrooms" => {
                self.min_bathrooms = bound::<f32>(key, value).filter(|v| v.is_finite() && *v >= 0.0)
            }
            "propertyType" => self.property_type = text(value),
            "minSquareFeet" => self.min_square_feet = bound(key, value),
            "maxSquareFeet" => self.max_square_feet = bound(key, value),
            _ => {
                debug!("Ignoring unknown criteria key {:?}", key);
                return false;
            }
        }
        true
    }

    /// Trim text constraints and drop blank ones and unusable bathroom bounds
    pub fn normalized(mut self) -> Self {
        self.location = present(&self.location).map(str::to_string);
        self.property_type = present(&self.property_type).map(str::to_string);
        self.min_bathrooms = self.min_bathrooms.filter(|v| v.is_finite() && *v >= 0.0);
        self
    }

    /// True when no constraint is present
    pub fn is_empty(&self) -> bool {
        self.clone().normalized() == Self::default()
    }
}

/// Trimmed text constraint, `None` when absent or blank
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn is_blank(value: &Option<String>) -> bool {
    present(value).is_none()
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(present(&value).map(str::to_string))
}

fn text(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn bound<T: FromStr>(key: &str, value: &str) -> Option<T> {
    if value.is_empty() {
        return None;
    }
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            debug!("Dropping unparseable {} bound {:?}", key, value);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_fields_are_absent() {
        let criteria = FilterCriteria::from_pairs([("location", "  "), ("minPrice", "")]);
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_malformed_bounds_are_skipped() {
        let criteria = FilterCriteria::from_pairs([
            ("minPrice", "cheap"),
            ("maxPrice", "300000"),
            ("minSquareFeet", "-5"),
            ("minBathrooms", "NaN"),
        ]);

        assert_eq!(criteria.min_price, None);
        assert_eq!(criteria.max_price, Some(300_000));
        assert_eq!(criteria.min_square_feet, None);
        assert_eq!(criteria.min_bathrooms, None);
    }

    #[test]
    fn test_zero_is_a_real_bound() {
        let criteria = FilterCriteria::from_pairs([("minBedrooms", "0")]);
        assert_eq!(criteria.min_bedrooms, Some(0));
        assert!(!criteria.is_empty());
    }

    #[test]
    fn test_legacy_aliases() {
        let criteria = FilterCriteria::from_pairs([("bedrooms", "3"), ("bathrooms", "1.5")]);
        assert_eq!(criteria.min_bedrooms, Some(3));
        assert_eq!(criteria.min_bathrooms, Some(1.5));
    }

    #[test]
    fn test_last_value_wins_and_unknown_keys_ignored() {
        let mut criteria = FilterCriteria::from_pairs([
            ("location", "norman"),
            ("location", "Moore"),
            ("utm_source", "mail"),
        ]);
        assert_eq!(criteria.location.as_deref(), Some("Moore"));
        assert!(!criteria.set_raw("view", "list"));
    }

    #[test]
    fn test_blank_text_built_directly_is_not_a_constraint() {
        let criteria = FilterCriteria {
            location: Some(String::new()),
            property_type: Some("   ".into()),
            ..Default::default()
        };
        assert!(criteria.is_empty());
        assert_eq!(criteria.normalized(), FilterCriteria::default());
    }

    #[test]
    fn test_blank_text_from_json_is_absent() {
        let criteria: FilterCriteria =
            serde_json::from_str(r#"{"propertyType": "", "location": " Edmond "}"#).unwrap();
        assert_eq!(criteria.property_type, None);
        assert_eq!(criteria.location.as_deref(), Some("Edmond"));

        let empty: FilterCriteria = serde_json::from_str("{}").unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_values_are_trimmed() {
        let criteria = FilterCriteria::from_pairs([("propertyType", " Residential "), ("maxPrice", " 400000 ")]);
        assert_eq!(criteria.property_type.as_deref(), Some("Residential"));
        assert_eq!(criteria.max_price, Some(400_000));
    }
}
