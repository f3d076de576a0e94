use serde::{Deserialize, Serialize};

use crate::AppError;

/// What a notification is about; drives the icon in the bell popover.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Assignment,
    Reminder,
    Grade,
    Message,
    Material,
}

/// One entry in the header notification popover.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    pub id: u32,
    pub title: String,
    pub message: String,
    /// Relative age as displayed ("5 minutes ago").
    pub time: String,
    pub read: bool,
    pub kind: NotificationKind,
}

impl Notification {
    fn seed(
        id: u32,
        title: &str,
        message: &str,
        time: &str,
        read: bool,
        kind: NotificationKind,
    ) -> Self {
        Self {
            id,
            title: title.to_string(),
            message: message.to_string(),
            time: time.to_string(),
            read,
            kind,
        }
    }
}

/// The per-session notification list behind the header bell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationInbox {
    items: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Inbox pre-filled with the demo notifications every dashboard starts with.
    pub fn with_sample_data() -> Self {
        use NotificationKind::*;
        Self::new(vec![
            Notification::seed(
                1,
                "New Assignment Posted",
                "Your teacher posted a new writing assignment due in 5 days.",
                "5 minutes ago",
                false,
                Assignment,
            ),
            Notification::seed(
                2,
                "Upcoming Class Reminder",
                "Don't forget your Conversation Practice class tomorrow at 3:00 PM.",
                "1 hour ago",
                false,
                Reminder,
            ),
            Notification::seed(
                3,
                "Assignment Graded",
                "Your Spanish Vocabulary Quiz has been graded. You scored 92%!",
                "2 hours ago",
                true,
                Grade,
            ),
            Notification::seed(
                4,
                "New Message",
                "You have a new message from Mrs. Johnson about your latest homework.",
                "Yesterday",
                true,
                Message,
            ),
            Notification::seed(
                5,
                "Learning Material Available",
                "New learning materials for Intermediate Spanish are now available.",
                "2 days ago",
                true,
                Material,
            ),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn mark_read(&mut self, id: u32) -> Result<(), AppError> {
        let item = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| missing(id))?;
        item.read = true;
        Ok(())
    }

    pub fn mark_all_read(&mut self) {
        for item in &mut self.items {
            item.read = true;
        }
    }

    /// Remove a notification, returning it.
    pub fn remove(&mut self, id: u32) -> Result<Notification, AppError> {
        let index = self
            .items
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| missing(id))?;
        Ok(self.items.remove(index))
    }
}

fn missing(id: u32) -> AppError {
    AppError::not_found(format!("Notification {id} not found"))
}
