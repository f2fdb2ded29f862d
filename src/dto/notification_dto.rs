use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::notification::{unread_count, Notification};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MarkNotificationsReadPayload {
    #[validate(length(min = 1, max = 200))]
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationListResponse {
    pub items: Vec<Notification>,
    pub total: usize,
    pub unread_count: usize,
}

impl From<Vec<Notification>> for NotificationListResponse {
    fn from(mut items: Vec<Notification>) -> Self {
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let unread_count = unread_count(&items);
        Self {
            total: items.len(),
            unread_count,
            items,
        }
    }
}
