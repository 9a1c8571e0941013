use std::collections::HashSet;

use tracing::debug;

use crate::error::StoreError;
use crate::models::{PropertyRecord, Testimonial};

const PROPERTIES_FIXTURE: &str = include_str!("../data/properties.json");
const TESTIMONIALS_FIXTURE: &str = include_str!("../data/testimonials.json");

/// Read-only, validated sequence of listings in fixture order
#[derive(Debug, Clone)]
pub struct RecordStore {
    records: Vec<PropertyRecord>,
}

impl RecordStore {
    /// Build a store, rejecting duplicate ids and records that cannot be rendered
    pub fn new(records: Vec<PropertyRecord>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());

        for record in &records {
            if !seen.insert(record.id) {
                return Err(StoreError::DuplicateId(record.id));
            }
            if record.images.is_empty() {
                return Err(StoreError::NoImages(record.id));
            }
            if record.square_feet == 0 {
                return Err(StoreError::ZeroSquareFeet(record.id));
            }
            if !record.bathrooms.is_finite() || record.bathrooms < 0.0 {
                return Err(StoreError::InvalidBathrooms {
                    id: record.id,
                    value: record.bathrooms,
                });
            }
        }

        debug!("Loaded {} listings into store", records.len());
        Ok(Self { records })
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Self::new(serde_json::from_str(json)?)
    }

    /// The listings shipped with the site
    pub fn fixtures() -> Result<Self, StoreError> {
        Self::from_json(PROPERTIES_FIXTURE)
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&PropertyRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Look up a listing from a route parameter such as `/properties/3`
    pub fn find_by_param(&self, param: &str) -> Option<&PropertyRecord> {
        param.trim().parse().ok().and_then(|id| self.get(id))
    }

    pub fn featured(&self) -> Vec<&PropertyRecord> {
        self.records.iter().filter(|record| record.featured).collect()
    }
}

/// Read-only, validated testimonial list in fixture order
#[derive(Debug, Clone)]
pub struct TestimonialBook {
    testimonials: Vec<Testimonial>,
}

impl TestimonialBook {
    pub fn new(testimonials: Vec<Testimonial>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(testimonials.len());

        for testimonial in &testimonials {
            if !seen.insert(testimonial.id) {
                return Err(StoreError::DuplicateId(testimonial.id));
            }
            if !(1..=5).contains(&testimonial.rating) {
                return Err(StoreError::InvalidRating {
                    id: testimonial.id,
                    rating: testimonial.rating,
                });
            }
        }

        debug!("Loaded {} testimonials", testimonials.len());
        Ok(Self { testimonials })
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        Self::new(serde_json::from_str(json)?)
    }

    pub fn fixtures() -> Result<Self, StoreError> {
        Self::from_json(TESTIMONIALS_FIXTURE)
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.testimonials
    }

    pub fn get(&self, id: u32) -> Option<&Testimonial> {
        self.testimonials.iter().find(|t| t.id == id)
    }

    pub fn featured(&self) -> Vec<&Testimonial> {
        self.testimonials.iter().filter(|t| t.featured).collect()
    }
}

pub(crate) fn fixture_listings() -> Result<Vec<PropertyRecord>, StoreError> {
    Ok(serde_json::from_str(PROPERTIES_FIXTURE)?)
}

pub(crate) fn fixture_testimonials() -> Result<Vec<Testimonial>, StoreError> {
    Ok(serde_json::from_str(TESTIMONIALS_FIXTURE)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        let store = RecordStore::fixtures().unwrap();
        assert_eq!(store.len(), 6);
        assert_eq!(store.records()[0].id, 1);
        assert_eq!(store.records()[5].id, 6);

        let book = TestimonialBook::fixtures().unwrap();
        assert_eq!(book.testimonials().len(), 10);
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut records = fixture_listings().unwrap();
        records[1].id = records[0].id;

        let err = RecordStore::new(records).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateId(1)));
    }

    #[test]
    fn test_listing_without_images_rejected() {
        let mut records = fixture_listings().unwrap();
        records[2].images.clear();

        let err = RecordStore::new(records).unwrap_err();
        assert!(matches!(err, StoreError::NoImages(3)));
    }

    #[test]
    fn test_negative_bathrooms_rejected() {
        let mut records = fixture_listings().unwrap();
        records[0].bathrooms = -1.0;

        assert!(matches!(
            RecordStore::new(records),
            Err(StoreError::InvalidBathrooms { id: 1, .. })
        ));
    }

    #[test]
    fn test_find_by_param() {
        let store = RecordStore::fixtures().unwrap();
        assert_eq!(store.find_by_param("3").map(|r| r.id), Some(3));
        assert_eq!(store.find_by_param(" 4 ").map(|r| r.id), Some(4));
        assert!(store.find_by_param("abc").is_none());
        assert!(store.find_by_param("99").is_none());
    }

    #[test]
    fn test_featured_listings_in_store_order() {
        let store = RecordStore::fixtures().unwrap();
        let ids: Vec<u32> = store.featured().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 6]);
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let mut testimonials = fixture_testimonials().unwrap();
        testimonials[0].rating = 0;

        assert!(matches!(
            TestimonialBook::new(testimonials),
            Err(StoreError::InvalidRating { id: 1, rating: 0 })
        ));
    }

    #[test]
    fn test_featured_testimonials() {
        let book = TestimonialBook::fixtures().unwrap();
        let ids: Vec<u32> = book.featured().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 4, 8]);
        assert_eq!(book.get(9).map(|t| t.name.as_str()), Some("Patricia Hernandez"));
    }
}
