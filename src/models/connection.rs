use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::doctor_profile::DoctorProfile;
use crate::utils::time::now;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionState {
    None,
    Pending,
    Connected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionStatus {
    pub status: ConnectionState,
    /// Set when the pending request was received by the viewer.
    #[serde(default)]
    pub is_incoming: bool,
}

impl ConnectionStatus {
    pub fn none() -> Self {
        Self {
            status: ConnectionState::None,
            is_incoming: false,
        }
    }

    pub fn connected() -> Self {
        Self {
            status: ConnectionState::Connected,
            is_incoming: false,
        }
    }

    pub fn pending(incoming: bool) -> Self {
        Self {
            status: ConnectionState::Pending,
            is_incoming: incoming,
        }
    }

    pub fn can_respond(&self) -> bool {
        self.status == ConnectionState::Pending && self.is_incoming
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionRequestStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ConnectionRequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionRequestStatus::Pending => "pending",
            ConnectionRequestStatus::Accepted => "accepted",
            ConnectionRequestStatus::Rejected => "rejected",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionRequest {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub sender_name: String,
    pub sender_specialty: Option<String>,
    pub sender_avatar: Option<String>,
    pub message: Option<String>,
    pub status: ConnectionRequestStatus,
    pub created_at: DateTime<Utc>,
    pub responded_at: Option<DateTime<Utc>>,
}

impl ConnectionRequest {
    pub fn new(sender: &DoctorProfile, receiver_id: Uuid, message: Option<String>) -> Result<Self> {
        if sender.user_id == receiver_id {
            return Err(Error::BadRequest(
                "Cannot send a connection request to yourself".to_string(),
            ));
        }

        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty());

        let request = Self {
            id: Uuid::new_v4(),
            sender_id: sender.user_id,
            receiver_id,
            sender_name: sender.full_name.clone(),
            sender_specialty: Some(sender.specialty.clone()).filter(|s| !s.is_empty()),
            sender_avatar: sender.avatar_url.clone(),
            message,
            status: ConnectionRequestStatus::Pending,
            created_at: now(),
            responded_at: None,
        };
        tracing::info!(request_id = %request.id, sender = %request.sender_id, receiver = %receiver_id, "connection request created");
        Ok(request)
    }

    pub fn is_pending(&self) -> bool {
        self.status == ConnectionRequestStatus::Pending
    }

    pub fn accept(&mut self, actor_id: Uuid) -> Result<()> {
        self.respond(actor_id, ConnectionRequestStatus::Accepted)
    }

    pub fn reject(&mut self, actor_id: Uuid) -> Result<()> {
        self.respond(actor_id, ConnectionRequestStatus::Rejected)
    }

    fn respond(&mut self, actor_id: Uuid, next: ConnectionRequestStatus) -> Result<()> {
        if actor_id != self.receiver_id {
            return Err(Error::Unauthorized(
                "Only the receiver can respond to a connection request".to_string(),
            ));
        }
        if !self.is_pending() {
            return Err(Error::InvalidTransition(format!(
                "connection request {} is already {}",
                self.id,
                self.status.as_str()
            )));
        }

        self.status = next;
        self.responded_at = Some(now());
        tracing::info!(request_id = %self.id, status = next.as_str(), "connection request answered");
        Ok(())
    }

    /// Relationship as seen by `viewer_id`; unrelated viewers see `none`.
    pub fn status_for(&self, viewer_id: Uuid) -> ConnectionStatus {
        let involved = viewer_id == self.sender_id || viewer_id == self.receiver_id;
        match self.status {
            _ if !involved => ConnectionStatus::none(),
            ConnectionRequestStatus::Pending => ConnectionStatus::pending(viewer_id == self.receiver_id),
            ConnectionRequestStatus::Accepted => ConnectionStatus::connected(),
            ConnectionRequestStatus::Rejected => ConnectionStatus::none(),
        }
    }
}
