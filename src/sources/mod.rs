pub mod directory;
pub mod fixture;
pub mod traits;

pub use directory::DirectorySource;
pub use fixture::FixtureSource;
pub use traits::{load_site, DataSource, Site};
