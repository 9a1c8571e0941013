use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Market status of a listing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ListingStatus {
    Active,
    Pending,
    Sold,
}

impl std::fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ListingStatus::Active => "Active",
            ListingStatus::Pending => "Pending",
            ListingStatus::Sold => "Sold",
        };
        f.write_str(label)
    }
}

/// Schools serving a listing. Names only, nothing is cross-checked.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Schools {
    pub elementary: String,
    pub middle: String,
    pub high: String,
}

/// Core listing data model
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PropertyRecord {
    pub id: u32,
    /// Full street address, including city, state and zip
    pub address: String,
    pub neighborhood: String,
    /// Whole dollars
    pub price: u64,
    pub status: ListingStatus,
    pub property_type: String,
    pub bedrooms: u32,
    /// Half-steps allowed (2.5)
    pub bathrooms: f32,
    pub square_feet: u32,
    /// Acres
    pub lot_size: f32,
    pub year_built: u16,
    pub description: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub mls_number: String,
    pub days_on_market: u32,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schools: Option<Schools>,
}

/// Client testimonial shown on the home and testimonials pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub location: String,
    /// 1 to 5 stars
    pub rating: u8,
    pub date: NaiveDate,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_address: Option<String>,
    pub avatar: String,
    #[serde(default)]
    pub featured: bool,
}
