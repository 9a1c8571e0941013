pub mod config;
pub mod error;
pub mod format;
pub mod leads;
pub mod models;
pub mod search;
pub mod sources;
pub mod store;
pub mod testimonials;

pub use config::Config;
pub use error::{ConfigError, LeadError, StoreError};
pub use models::{ListingStatus, PropertyRecord, Schools, Testimonial};
pub use search::{FilterCriteria, QueryController, SortKey};
pub use store::{RecordStore, TestimonialBook};
