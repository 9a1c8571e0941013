use thiserror::Error;

/// Rejected fixture or data-file content
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate record id {0}")]
    DuplicateId(u32),

    #[error("Listing {0} has no images")]
    NoImages(u32),

    #[error("Listing {0} has zero square feet")]
    ZeroSquareFeet(u32),

    #[error("Listing {id} has invalid bathroom count {value}")]
    InvalidBathrooms { id: u32, value: f32 },

    #[error("Testimonial {id} has rating {rating}, expected 1 to 5")]
    InvalidRating { id: u32, rating: u8 },

    #[error("Failed to parse data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Rejected lead form submission
#[derive(Debug, Error, PartialEq)]
pub enum LeadError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Unknown property id {0}")]
    UnknownProperty(u32),

    #[error("Step {step} is incomplete: {field} is required")]
    IncompleteStep { step: u8, field: &'static str },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("pageSize must be at least 1")]
    ZeroPageSize,

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
