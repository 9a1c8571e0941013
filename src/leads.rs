//! Lead capture forms: general contact, listing inquiry and the three-step
//! home valuation request. Submissions are validated here and handed back to
//! the caller; nothing is sent or stored.

use crate::error::LeadError;
use crate::store::RecordStore;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Buying,
    Selling,
    Valuation,
    Market,
    Consultation,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    #[default]
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BestTime {
    Morning,
    Afternoon,
    Evening,
    Weekend,
}

/// Contact page form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: Option<Subject>,
    pub message: String,
    pub preferred_contact: ContactMethod,
    /// `None` means any time
    pub best_time: Option<BestTime>,
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), LeadError> {
        require("name", &self.name)?;
        require_email(&self.email)?;
        require("message", &self.message)?;
        if self.preferred_contact == ContactMethod::Phone {
            require("phone", self.phone.as_deref().unwrap_or_default())?;
        }
        Ok(())
    }
}

/// "Request information" form on a listing page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropertyInquiry {
    pub property_id: u32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl PropertyInquiry {
    pub fn validate(&self, store: &RecordStore) -> Result<(), LeadError> {
        if store.get(self.property_id).is_none() {
            return Err(LeadError::UnknownProperty(self.property_id));
        }
        require("name", &self.name)?;
        require_email(&self.email)
    }
}

/// Home valuation request, collected over three steps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValuationRequest {
    // Step 1: location
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    // Step 2: property
    pub property_type: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub square_feet: Option<u32>,
    pub year_built: Option<u16>,
    pub lot_size: Option<f32>,
    pub condition: Option<String>,
    // Step 3: contact
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub timeframe: Option<String>,
    pub additional_info: Option<String>,
}

impl Default for ValuationRequest {
    fn default() -> Self {
        Self {
            address: String::new(),
            city: String::new(),
            state: "OK".to_string(),
            zip_code: String::new(),
            property_type: String::new(),
            bedrooms: String::new(),
            bathrooms: String::new(),
            square_feet: None,
            year_built: None,
            lot_size: None,
            condition: None,
            name: String::new(),
            email: String::new(),
            phone: None,
            timeframe: None,
            additional_info: None,
        }
    }
}

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 3;

/// Step-by-step valuation form state
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationWizard {
    pub request: ValuationRequest,
    step: u8,
}

impl Default for ValuationWizard {
    fn default() -> Self {
        Self::new(ValuationRequest::default())
    }
}

impl ValuationWizard {
    pub fn new(request: ValuationRequest) -> Self {
        Self {
            request,
            step: FIRST_STEP,
        }
    }

    pub fn step(&self) -> u8 {
        self.step
    }

    pub fn next_step(&mut self) -> u8 {
        self.step = (self.step + 1).min(LAST_STEP);
        self.step
    }

    pub fn prev_step(&mut self) -> u8 {
        self.step = self.step.saturating_sub(1).max(FIRST_STEP);
        self.step
    }

    /// Whether the required fields of `step` are filled in
    pub fn is_step_valid(&self, step: u8) -> bool {
        self.check_step(step).is_ok()
    }

    /// Validate every step and hand back the finished request
    pub fn submit(&self) -> Result<&ValuationRequest, LeadError> {
        for step in FIRST_STEP..=LAST_STEP {
            self.check_step(step)?;
        }
        Ok(&self.request)
    }

    fn check_step(&self, step: u8) -> Result<(), LeadError> {
        let r = &self.request;
        let location = [
            ("address", r.address.as_str()),
            ("city", r.city.as_str()),
            ("zipCode", r.zip_code.as_str()),
        ];
        let property = [
            ("propertyType", r.property_type.as_str()),
            ("bedrooms", r.bedrooms.as_str()),
            ("bathrooms", r.bathrooms.as_str()),
        ];
        let contact = [("name", r.name.as_str()), ("email", r.email.as_str())];

        let required: &[(&'static str, &str)] = match step {
            1 => &location,
            2 => &property,
            3 => &contact,
            _ => return Err(LeadError::IncompleteStep { step, field: "step" }),
        };

        for &(field, value) in required {
            if value.trim().is_empty() {
                return Err(LeadError::IncompleteStep { step, field });
            }
        }
        if step == LAST_STEP && !is_email(&r.email) {
            return Err(LeadError::InvalidEmail(r.email.clone()));
        }
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<(), LeadError> {
    if value.trim().is_empty() {
        Err(LeadError::MissingField(field))
    } else {
        Ok(())
    }
}

fn require_email(email: &str) -> Result<(), LeadError> {
    require("email", email)?;
    if is_email(email) {
        Ok(())
    } else {
        Err(LeadError::InvalidEmail(email.to_string()))
    }
}

/// Loose shape check: `local@domain.tld`, single `@`, no whitespace
fn is_email(email: &str) -> bool {
    let email = email.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}
