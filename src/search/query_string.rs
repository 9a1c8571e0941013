use crate::search::criteria::FilterCriteria;
use tracing::warn;

/// Encode present criteria as `key=value` pairs for a shareable link
pub fn to_query_string(criteria: &FilterCriteria) -> String {
    match serde_urlencoded::to_string(criteria) {
        Ok(query) => query,
        Err(err) => {
            // Flat struct of scalars; only reachable if the shape changes
            warn!("Failed to encode criteria: {}", err);
            String::new()
        }
    }
}

/// Decode criteria from a query string, with or without the leading `?`.
///
/// Undecodable input yields empty criteria.
pub fn from_query_string(query: &str) -> FilterCriteria {
    let query = query.trim().trim_start_matches('?');

    match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => FilterCriteria::from_pairs(pairs),
        Err(err) => {
            warn!("Ignoring undecodable query string {:?}: {}", query, err);
            FilterCriteria::default()
        }
    }
}
