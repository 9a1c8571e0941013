use crate::models::Testimonial;
use crate::store::TestimonialBook;
use chrono::{Months, NaiveDate};
use std::cmp::Reverse;

/// How many testimonials the home page shows
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Months back from today that still count as recent
pub const DEFAULT_RECENT_MONTHS: u32 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestimonialFilter {
    #[default]
    All,
    Featured,
    /// Dated within the last `months` months
    Recent { months: u32 },
}

impl TestimonialFilter {
    /// Parse a dropdown value; unknown values show everything
    pub fn parse(value: &str, recent_months: u32) -> Self {
        match value.trim() {
            "featured" => TestimonialFilter::Featured,
            "recent" => TestimonialFilter::Recent {
                months: recent_months,
            },
            _ => TestimonialFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TestimonialSort {
    #[default]
    Newest,
    Oldest,
    /// Anything else keeps book order
    Unrecognized,
}

impl From<&str> for TestimonialSort {
    fn from(value: &str) -> Self {
        match value.trim() {
            "newest" => TestimonialSort::Newest,
            "oldest" => TestimonialSort::Oldest,
            _ => TestimonialSort::Unrecognized,
        }
    }
}

/// Filter then stably sort the book relative to `today`
pub fn query<'a>(
    book: &'a TestimonialBook,
    filter: TestimonialFilter,
    sort: TestimonialSort,
    today: NaiveDate,
) -> Vec<&'a Testimonial> {
    let cutoff = match filter {
        TestimonialFilter::Recent { months } => today.checked_sub_months(Months::new(months)),
        _ => None,
    };

    let mut selected: Vec<&Testimonial> = book
        .testimonials()
        .iter()
        .filter(|t| match filter {
            TestimonialFilter::All => true,
            TestimonialFilter::Featured => t.featured,
            TestimonialFilter::Recent { .. } => cutoff.map_or(true, |cutoff| t.date >= cutoff),
        })
        .collect();

    match sort {
        TestimonialSort::Newest => selected.sort_by_key(|t| Reverse(t.date)),
        TestimonialSort::Oldest => selected.sort_by_key(|t| t.date),
        TestimonialSort::Unrecognized => {}
    }

    selected
}

/// Newest first, at most `limit`. The book itself is left in fixture order.
pub fn recent(book: &TestimonialBook, limit: usize) -> Vec<&Testimonial> {
    let mut newest: Vec<&Testimonial> = book.testimonials().iter().collect();
    newest.sort_by_key(|t| Reverse(t.date));
    newest.truncate(limit);
    newest
}

pub fn average_rating(testimonials: &[&Testimonial]) -> Option<f32> {
    if testimonials.is_empty() {
        return None;
    }
    let total: u32 = testimonials.iter().map(|t| u32::from(t.rating)).sum();
    Some(total as f32 / testimonials.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ids(items: &[&Testimonial]) -> Vec<u32> {
        items.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_recent_window() {
        let book = TestimonialBook::fixtures().unwrap();
        let recent = query(
            &book,
            TestimonialFilter::Recent { months: 6 },
            TestimonialSort::Newest,
            date(2024, 3, 1),
        );
        // Cutoff 2023-09-01
        assert_eq!(ids(&recent), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_featured_oldest_first() {
        let book = TestimonialBook::fixtures().unwrap();
        let featured = query(
            &book,
            TestimonialFilter::Featured,
            TestimonialSort::Oldest,
            date(2024, 3, 1),
        );
        assert_eq!(ids(&featured), vec![8, 4, 2, 1]);
    }

    #[test]
    fn test_unknown_values_fall_back() {
        assert_eq!(TestimonialFilter::parse("five-star", 6), TestimonialFilter::All);
        assert_eq!(TestimonialSort::from("rating"), TestimonialSort::Unrecognized);

        let book = TestimonialBook::fixtures().unwrap();
        let all = query(
            &book,
            TestimonialFilter::All,
            TestimonialSort::Unrecognized,
            date(2024, 3, 1),
        );
        assert_eq!(ids(&all), (1..=10).collect::<Vec<u32>>());
    }

    #[test]
    fn test_recent_does_not_reorder_book() {
        let book = TestimonialBook::fixtures().unwrap();
        assert_eq!(ids(&recent(&book, 3)), vec![1, 2, 3]);
        assert_eq!(book.testimonials()[9].id, 10);
        assert_eq!(recent(&book, DEFAULT_RECENT_LIMIT).len(), 6);
    }

    #[test]
    fn test_average_rating() {
        let book = TestimonialBook::fixtures().unwrap();
        let all: Vec<&Testimonial> = book.testimonials().iter().collect();
        assert_eq!(average_rating(&all), Some(5.0));
        assert_eq!(average_rating(&[]), None);
    }
}
