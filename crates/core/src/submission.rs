//! Influencer application submissions and their spreadsheet layout.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Abaya sizes offered on the form, in display order.
pub const SIZE_OPTIONS: [&str; 6] = ["52", "54", "56", "58", "60", CUSTOM_SIZE_OPTION];

/// Size option that asks the applicant for a free-text custom size.
pub const CUSTOM_SIZE_OPTION: &str = "Custom";

/// Spreadsheet column labels, in the order [`Submission::to_row`] emits them.
pub const COLUMNS: [&str; 13] = [
    "Full Name",
    "Country",
    "State",
    "City",
    "Abaya Size",
    "Custom Size",
    "Followers",
    "Reel Views",
    "Instagram ID",
    "Email",
    "Contact Number",
    "Queries",
    "Days Required",
];

// ---------------------------------------------------------------------------
// Submission
// ---------------------------------------------------------------------------

/// One applicant's answers, exactly as posted by the form.
///
/// Field names match the form input names. Every value is kept as the raw
/// string; nothing is coerced or range-checked.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Submission {
    pub full_name: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub abaya_size: String,
    /// Only filled in when the applicant picked [`CUSTOM_SIZE_OPTION`].
    #[serde(default)]
    pub custom_size: String,
    pub followers: String,
    pub reel_views: String,
    pub instagram_id: String,
    pub email: String,
    pub contact_number: String,
    pub queries: String,
    pub days_required: String,
}

impl Submission {
    /// The row appended to the spreadsheet, one value per entry in [`COLUMNS`].
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.full_name.clone(),
            self.country.clone(),
            self.state.clone(),
            self.city.clone(),
            self.abaya_size.clone(),
            self.custom_size.clone(),
            self.followers.clone(),
            self.reel_views.clone(),
            self.instagram_id.clone(),
            self.email.clone(),
            self.contact_number.clone(),
            self.queries.clone(),
            self.days_required.clone(),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
