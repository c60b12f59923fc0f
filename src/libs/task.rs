use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Maximum title length in characters, counted after trimming.
pub const MAX_TITLE_LEN: usize = 200;
/// Maximum description length in characters, counted after trimming.
pub const MAX_DESCRIPTION_LEN: usize = 1000;

/// Number of id characters shown in listings and messages.
pub const SHORT_ID_LEN: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Title cannot be empty")]
    EmptyTitle,
    #[error("Title cannot exceed {} characters", MAX_TITLE_LEN)]
    TitleTooLong,
    #[error("Description cannot exceed {} characters", MAX_DESCRIPTION_LEN)]
    DescriptionTooLong,
    #[error("At least one field must be provided for update")]
    NothingToUpdate,
}

/// A titled, optionally described unit of work.
///
/// `id` and `created_at` are fixed at creation; `title`, `description` and
/// `completed` change through [`Task::apply_update`] and
/// [`Task::toggle_completed`]. Length budgets are character counts, so
/// non-Latin scripts get the full budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Validating factory. Trims both fields, enforces the length budgets
    /// and assigns a fresh random id and creation timestamp.
    pub fn create(title: &str, description: &str) -> Result<Self, ValidationError> {
        let title = validate_title(title)?;
        let description = validate_description(description)?;

        Ok(Task {
            id: Uuid::new_v4(),
            title,
            description,
            completed: false,
            created_at: Utc::now(),
        })
    }

    /// Updates title and/or description in place.
    ///
    /// At least one field is required. Both fields are validated before
    /// either is written, so a failed update leaves the task untouched.
    pub fn apply_update(&mut self, title: Option<&str>, description: Option<&str>) -> Result<(), ValidationError> {
        if title.is_none() && description.is_none() {
            return Err(ValidationError::NothingToUpdate);
        }

        let new_title = title.map(validate_title).transpose()?;
        let new_description = description.map(validate_description).transpose()?;

        if let Some(title) = new_title {
            self.title = title;
        }
        if let Some(description) = new_description {
            self.description = description;
        }
        Ok(())
    }

    /// Flips the completion flag.
    pub fn toggle_completed(&mut self) {
        self.completed = !self.completed;
    }

    /// First characters of the canonical id, for display and prefix UX.
    pub fn short_id(&self) -> String {
        short_id(&self.id)
    }
}

/// Short form of any task id.
pub fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(SHORT_ID_LEN).collect()
}

fn validate_title(raw: &str) -> Result<String, ValidationError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(title.to_string())
}

fn validate_description(raw: &str) -> Result<String, ValidationError> {
    let description = raw.trim();
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(description.to_string())
}
