use crate::models::{PropertyRecord, Testimonial};
use crate::store::{RecordStore, TestimonialBook};
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::info;

/// Common trait for everything that can supply site data
/// New backends (MLS feed, CMS export) only need to implement this
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Load all listings in display order
    async fn listings(&self) -> Result<Vec<PropertyRecord>>;

    /// Load all testimonials in display order
    async fn testimonials(&self) -> Result<Vec<Testimonial>>;

    /// Get the name of the data source
    fn source_name(&self) -> &'static str;
}

/// Validated stores backing every page of the site
#[derive(Debug, Clone)]
pub struct Site {
    pub listings: RecordStore,
    pub testimonials: TestimonialBook,
}

/// Load and validate both stores from a source
pub async fn load_site(source: &dyn DataSource) -> Result<Site> {
    info!("Loading site data from {}", source.source_name());

    let listings = RecordStore::new(source.listings().await?)
        .with_context(|| format!("Invalid listings from {}", source.source_name()))?;
    let testimonials = TestimonialBook::new(source.testimonials().await?)
        .with_context(|| format!("Invalid testimonials from {}", source.source_name()))?;

    info!(
        "Loaded {} listings and {} testimonials",
        listings.len(),
        testimonials.testimonials().len()
    );

    Ok(Site {
        listings,
        testimonials,
    })
}
