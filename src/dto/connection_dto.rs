use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::models::connection::ConnectionRequest;
use crate::models::doctor_profile::DoctorProfile;
use crate::utils::validation::validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendConnectionPayload {
    pub receiver_id: Uuid,
    #[validate(length(max = 300))]
    pub message: Option<String>,
}

impl SendConnectionPayload {
    /// Validates the payload and opens a pending request from `sender`.
    pub fn into_request(self, sender: &DoctorProfile) -> Result<ConnectionRequest> {
        validate(&self)?;
        ConnectionRequest::new(sender, self.receiver_id, self.message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionAction {
    Accept,
    Reject,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RespondConnectionPayload {
    pub action: ConnectionAction,
}

impl RespondConnectionPayload {
    pub fn apply(&self, request: &mut ConnectionRequest, actor_id: Uuid) -> Result<()> {
        match self.action {
            ConnectionAction::Accept => request.accept(actor_id),
            ConnectionAction::Reject => request.reject(actor_id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequestListResponse {
    pub items: Vec<ConnectionRequest>,
    pub pending_count: usize,
}

impl From<Vec<ConnectionRequest>> for ConnectionRequestListResponse {
    fn from(items: Vec<ConnectionRequest>) -> Self {
        let pending_count = items.iter().filter(|r| r.is_pending()).count();
        Self {
            items,
            pending_count,
        }
    }
}
