use crate::models::{PropertyRecord, Testimonial};
use crate::sources::traits::DataSource;
use crate::store::{fixture_listings, fixture_testimonials};
use anyhow::{Context, Result};
use async_trait::async_trait;

/// Listings and testimonials compiled into the binary
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureSource;

#[async_trait]
impl DataSource for FixtureSource {
    async fn listings(&self) -> Result<Vec<PropertyRecord>> {
        fixture_listings().context("Embedded listing fixture is malformed")
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        fixture_testimonials().context("Embedded testimonial fixture is malformed")
    }

    fn source_name(&self) -> &'static str {
        "fixtures"
    }
}
