use crate::models::PropertyRecord;
use crate::search::criteria::{present, FilterCriteria};

/// Keep the records that satisfy every present constraint, in input order.
pub fn filter<'a, I>(records: I, criteria: &FilterCriteria) -> Vec<&'a PropertyRecord>
where
    I: IntoIterator<Item = &'a PropertyRecord>,
{
    let location = present(&criteria.location).map(str::to_lowercase);

    records
        .into_iter()
        .filter(|record| matches(record, criteria, location.as_deref()))
        .collect()
}

/// `location` is passed pre-lowercased so it is folded once per query
fn matches(record: &PropertyRecord, criteria: &FilterCriteria, location: Option<&str>) -> bool {
    if let Some(needle) = location {
        if !record.address.to_lowercase().contains(needle) {
            return false;
        }
    }

    if criteria.min_price.is_some_and(|min| record.price < min) {
        return false;
    }
    if criteria.max_price.is_some_and(|max| record.price > max) {
        return false;
    }

    // Bedroom and bathroom bounds are floors
    if criteria.min_bedrooms.is_some_and(|min| record.bedrooms < min) {
        return false;
    }
    if criteria.min_bathrooms.is_some_and(|min| record.bathrooms < min) {
        return false;
    }

    if let Some(kind) = present(&criteria.property_type) {
        if record.property_type != kind {
            return false;
        }
    }

    if criteria.min_square_feet.is_some_and(|min| record.square_feet < min) {
        return false;
    }
    if criteria.max_square_feet.is_some_and(|max| record.square_feet > max) {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    fn ids(records: &[&PropertyRecord]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_no_criteria_is_identity() {
        let store = RecordStore::fixtures().unwrap();
        let all = filter(store.records(), &FilterCriteria::default());
        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let store = RecordStore::fixtures().unwrap();
        let criteria = FilterCriteria {
            min_price: Some(245_000),
            max_price: Some(315_000),
            ..Default::default()
        };
        assert_eq!(ids(&filter(store.records(), &criteria)), vec![1, 4, 5]);
    }

    #[test]
    fn test_bathrooms_floor_accepts_half_steps() {
        let store = RecordStore::fixtures().unwrap();
        let criteria = FilterCriteria {
            min_bathrooms: Some(2.5),
            ..Default::default()
        };
        assert_eq!(ids(&filter(store.records(), &criteria)), vec![2, 4, 6]);
    }

    #[test]
    fn test_property_type_is_case_sensitive() {
        let store = RecordStore::fixtures().unwrap();
        let exact = FilterCriteria {
            property_type: Some("Residential".into()),
            ..Default::default()
        };
        let lower = FilterCriteria {
            property_type: Some("residential".into()),
            ..Default::default()
        };
        assert_eq!(filter(store.records(), &exact).len(), 6);
        assert!(filter(store.records(), &lower).is_empty());
    }

    #[test]
    fn test_blank_text_constraints_match_everything() {
        let store = RecordStore::fixtures().unwrap();
        let criteria = FilterCriteria {
            location: Some("  ".into()),
            property_type: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter(store.records(), &criteria).len(), 6);
    }

    #[test]
    fn test_square_feet_bounds() {
        let store = RecordStore::fixtures().unwrap();
        let criteria = FilterCriteria {
            min_square_feet: Some(1650),
            max_square_feet: Some(2100),
            ..Default::default()
        };
        assert_eq!(ids(&filter(store.records(), &criteria)), vec![1, 4, 5]);
    }

    #[test]
    fn test_zero_bound_still_applies() {
        let store = RecordStore::fixtures().unwrap();
        let criteria = FilterCriteria {
            max_price: Some(0),
            ..Default::default()
        };
        assert!(filter(store.records(), &criteria).is_empty());
    }

    #[test]
    fn test_location_matches_city_and_zip() {
        let store = RecordStore::fixtures().unwrap();
        let by_zip = FilterCriteria {
            location: Some("73072".into()),
            ..Default::default()
        };
        let by_state = FilterCriteria {
            location: Some(", ok".into()),
            ..Default::default()
        };
        assert_eq!(ids(&filter(store.records(), &by_zip)), vec![3]);
        assert_eq!(filter(store.records(), &by_state).len(), 6);
    }
}
