use crate::models::{PropertyRecord, Testimonial};
use crate::sources::traits::DataSource;
use crate::store::fixture_testimonials;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const LISTINGS_FILE: &str = "properties.json";
const TESTIMONIALS_FILE: &str = "testimonials.json";

/// Reads `properties.json` and `testimonials.json` from a data directory
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[async_trait]
impl DataSource for DirectorySource {
    async fn listings(&self) -> Result<Vec<PropertyRecord>> {
        let path = self.dir.join(LISTINGS_FILE);
        debug!("Reading listings from {}", path.display());

        let json = tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;

        serde_json::from_str(&json).with_context(|| format!("Failed to parse {}", path.display()))
    }

    async fn testimonials(&self) -> Result<Vec<Testimonial>> {
        let path = self.dir.join(TESTIMONIALS_FILE);
        debug!("Reading testimonials from {}", path.display());

        match tokio::fs::read_to_string(&path).await {
            Ok(json) => serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse {}", path.display())),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(
                    "{} not found, using built-in testimonials",
                    path.display()
                );
                fixture_testimonials().context("Embedded testimonial fixture is malformed")
            }
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read {}", path.display()))
            }
        }
    }

    fn source_name(&self) -> &'static str {
        "directory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::load_site;

    const ONE_LISTING: &str = r#"[{
        "id": 10,
        "address": "10 Elm St, Edmond, OK 73013",
        "neighborhood": "Elm",
        "price": 150000,
        "status": "Active",
        "propertyType": "Residential",
        "bedrooms": 2,
        "bathrooms": 1,
        "squareFeet": 1000,
        "lotSize": 0.1,
        "yearBuilt": 1990,
        "description": "Cozy",
        "features": ["Porch"],
        "images": ["elm.jpg"],
        "mlsNumber": "10",
        "daysOnMarket": 1
    }]"#;

    #[tokio::test]
    async fn test_reads_listings_and_falls_back_for_testimonials() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LISTINGS_FILE), ONE_LISTING).unwrap();

        let site = load_site(&DirectorySource::new(dir.path())).await.unwrap();
        assert_eq!(site.listings.len(), 1);
        assert_eq!(site.listings.records()[0].address, "10 Elm St, Edmond, OK 73013");
        assert_eq!(site.testimonials.testimonials().len(), 10);
    }

    #[tokio::test]
    async fn test_missing_listings_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DirectorySource::new(dir.path()).listings().await.unwrap_err();
        assert!(err.to_string().contains(LISTINGS_FILE));
    }

    #[tokio::test]
    async fn test_malformed_listings_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(LISTINGS_FILE), "{not json").unwrap();

        let err = DirectorySource::new(dir.path()).listings().await.unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[tokio::test]
    async fn test_duplicate_ids_fail_site_load() {
        let dir = tempfile::tempdir().unwrap();
        let doubled = format!("[{0},{0}]", ONE_LISTING.trim().trim_start_matches('[').trim_end_matches(']'));
        std::fs::write(dir.path().join(LISTINGS_FILE), doubled).unwrap();

        assert!(load_site(&DirectorySource::new(dir.path())).await.is_err());
    }
}
