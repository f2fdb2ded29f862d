use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::connection::{ConnectionRequest, ConnectionRequestStatus};
use crate::models::doctor_profile::DoctorProfile;
use crate::utils::time::now;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    ConnectionRequest,
    ConnectionAccepted,
    NewFollower,
    PostLike,
    PostComment,
    Mention,
    JobPosted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityType {
    Post,
    Comment,
    Connection,
    Profile,
    Job,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSender {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub entity_id: Option<Uuid>,
    pub entity_type: Option<EntityType>,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    pub sender: Option<NotificationSender>,
}

impl Notification {
    pub fn new(user_id: Uuid, notification_type: NotificationType) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            notification_type,
            entity_id: None,
            entity_type: None,
            read: false,
            created_at: now(),
            sender: None,
        }
    }

    pub fn with_entity(mut self, entity_type: EntityType, entity_id: Uuid) -> Self {
        self.entity_type = Some(entity_type);
        self.entity_id = Some(entity_id);
        self
    }

    pub fn with_sender(mut self, sender: NotificationSender) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Notifies the receiver of a new connection request.
    pub fn connection_request(request: &ConnectionRequest) -> Self {
        Self::new(request.receiver_id, NotificationType::ConnectionRequest)
            .with_entity(EntityType::Connection, request.id)
            .with_sender(NotificationSender {
                id: request.sender_id,
                name: request.sender_name.clone(),
                avatar_url: request.sender_avatar.clone(),
            })
    }

    /// Notifies the original sender that `accepter` took the request.
    pub fn connection_accepted(request: &ConnectionRequest, accepter: &DoctorProfile) -> Result<Self> {
        if request.status != ConnectionRequestStatus::Accepted {
            return Err(Error::InvalidTransition(format!(
                "connection request {} has not been accepted",
                request.id
            )));
        }

        Ok(Self::new(request.sender_id, NotificationType::ConnectionAccepted)
            .with_entity(EntityType::Connection, request.id)
            .with_sender(NotificationSender {
                id: accepter.user_id,
                name: accepter.full_name.clone(),
                avatar_url: accepter.avatar_url.clone(),
            }))
    }

    /// Returns `true` if the notification was unread.
    pub fn mark_read(&mut self) -> bool {
        !std::mem::replace(&mut self.read, true)
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}

/// Marks the listed notifications read; returns how many changed state.
pub fn mark_read_by_ids(notifications: &mut [Notification], ids: &[Uuid]) -> usize {
    notifications
        .iter_mut()
        .filter(|n| ids.contains(&n.id))
        .map(|n| n.mark_read())
        .filter(|changed| *changed)
        .count()
}
