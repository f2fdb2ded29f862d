use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::profile_dto::UpdateProfilePayload;
use crate::models::connection::{ConnectionState, ConnectionStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub specialty: String,
    pub experience_years: i32,
    #[serde(default)]
    pub hospital_affiliations: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub education: Vec<EducationItem>,
    pub is_public: bool,
    #[serde(default)]
    pub connection_count: i64,
    #[serde(default)]
    pub follower_count: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationItem {
    pub id: Uuid,
    pub institution: String,
    pub degree: String,
    pub field_of_study: Option<String>,
    pub start_year: i32,
    pub end_year: Option<i32>,
    #[serde(default)]
    pub ongoing: bool,
}

impl EducationItem {
    pub fn period_label(&self) -> String {
        match (self.ongoing, self.end_year) {
            (true, _) => format!("{} - Present", self.start_year),
            (false, Some(end)) => format!("{} - {}", self.start_year, end),
            (false, None) => self.start_year.to_string(),
        }
    }
}

impl DoctorProfile {
    /// Private profiles are only shown to their owner and to connections.
    pub fn is_visible_to(&self, viewer_id: Uuid, status: &ConnectionStatus) -> bool {
        self.is_public || viewer_id == self.user_id || status.status == ConnectionState::Connected
    }

    pub fn ongoing_education(&self) -> impl Iterator<Item = &EducationItem> {
        self.education.iter().filter(|e| e.ongoing)
    }

    /// Applies an already validated update. Absent fields are left untouched.
    pub fn apply_update(&mut self, payload: UpdateProfilePayload) {
        if let Some(full_name) = payload.full_name {
            self.full_name = full_name;
        }
        if let Some(specialty) = payload.specialty {
            self.specialty = specialty;
        }
        if let Some(years) = payload.experience_years {
            self.experience_years = years;
        }
        if let Some(affiliations) = payload.hospital_affiliations {
            self.hospital_affiliations = affiliations;
        }
        if payload.email.is_some() {
            self.email = payload.email;
        }
        if payload.phone.is_some() {
            self.phone = payload.phone;
        }
        if payload.location.is_some() {
            self.location = payload.location;
        }
        if payload.avatar_url.is_some() {
            self.avatar_url = payload.avatar_url;
        }
        if payload.bio.is_some() {
            self.bio = payload.bio;
        }
        if let Some(interests) = payload.interests {
            self.interests = interests;
        }
        if let Some(education) = payload.education {
            self.education = education.into_iter().map(|e| e.into_item()).collect();
        }
        if let Some(is_public) = payload.is_public {
            self.is_public = is_public;
        }
        self.updated_at = Some(crate::utils::time::now());
        tracing::debug!(profile_id = %self.id, "profile updated");
    }
}
