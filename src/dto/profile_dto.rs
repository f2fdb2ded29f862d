use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::doctor_profile::{DoctorProfile, EducationItem};
use crate::utils::time::current_year;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfilePayload {
    #[validate(length(min = 1, max = 120))]
    pub full_name: Option<String>,
    #[validate(length(min = 1, max = 120))]
    pub specialty: Option<String>,
    #[validate(range(min = 0, max = 80))]
    pub experience_years: Option<i32>,
    #[validate(length(max = 20))]
    pub hospital_affiliations: Option<Vec<String>>,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 5, max = 32))]
    pub phone: Option<String>,
    #[validate(length(max = 120))]
    pub location: Option<String>,
    #[validate(url)]
    pub avatar_url: Option<String>,
    #[validate(length(max = 2000))]
    pub bio: Option<String>,
    #[validate(length(max = 30))]
    pub interests: Option<Vec<String>>,
    #[validate(length(max = 20), nested)]
    pub education: Option<Vec<EducationItemPayload>>,
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_education_years"))]
pub struct EducationItemPayload {
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 200))]
    pub institution: String,
    #[validate(length(min = 1, max = 120))]
    pub degree: String,
    #[validate(length(max = 120))]
    pub field_of_study: Option<String>,
    #[validate(range(min = 1900))]
    pub start_year: i32,
    pub end_year: Option<i32>,
    #[serde(default)]
    pub ongoing: bool,
}

fn validate_education_years(item: &EducationItemPayload) -> Result<(), ValidationError> {
    if item.start_year > current_year() {
        return Err(ValidationError::new("start_year_in_future"));
    }
    match item.end_year {
        Some(_) if item.ongoing => Err(ValidationError::new("ongoing_with_end_year")),
        Some(end) if end < item.start_year => Err(ValidationError::new("end_year_before_start_year")),
        _ => Ok(()),
    }
}

impl EducationItemPayload {
    pub fn into_item(self) -> EducationItem {
        EducationItem {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            institution: self.institution,
            degree: self.degree,
            field_of_study: self.field_of_study,
            start_year: self.start_year,
            end_year: self.end_year,
            ongoing: self.ongoing,
        }
    }
}

/// Public profile card. Never carries contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub specialty: String,
    pub experience_years: i32,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub connection_count: i64,
    pub follower_count: i64,
}

impl From<&DoctorProfile> for ProfileSummary {
    fn from(profile: &DoctorProfile) -> Self {
        Self {
            id: profile.id,
            user_id: profile.user_id,
            full_name: profile.full_name.clone(),
            specialty: profile.specialty.clone(),
            experience_years: profile.experience_years,
            location: profile.location.clone(),
            avatar_url: profile.avatar_url.clone(),
            connection_count: profile.connection_count,
            follower_count: profile.follower_count,
        }
    }
}
