//! New-article form state: the draft fields, visibility, and inline error.
//!
//! DESIGN
//! ======
//! The draft lives apart from the collection until a create succeeds.
//! Closing the form hides it without clearing anything; only a confirmed
//! reset or a successful publish empties the fields.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::str::FromStr;

use super::collection::CollectionStore;
use crate::net::types::{ArticleStatus, NewArticle};

/// Publish rejected before any request was made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Title, image, and creation date cannot be empty")]
    MissingFields,

    #[error("Article title must be unique")]
    DuplicateTitle,
}

/// Editable draft fields.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Image,
    Date,
}

impl FromStr for DraftField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(Self::Title),
            "image" => Ok(Self::Image),
            "date" => Ok(Self::Date),
            other => Err(format!("unknown draft field: {other}")),
        }
    }
}

/// Unsaved input for a new article.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub image: String,
    pub date: String,
}

impl Draft {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.image.is_empty() && self.date.is_empty()
    }

    fn has_missing_field(&self) -> bool {
        self.title.is_empty() || self.image.is_empty() || self.date.is_empty()
    }

    /// Request body for this draft. New articles are always published.
    #[must_use]
    pub fn to_new_article(&self) -> NewArticle {
        NewArticle {
            title: self.title.clone(),
            image: self.image.clone(),
            date: self.date.clone(),
            status: ArticleStatus::Published,
        }
    }
}

/// The create form: draft, visibility, and the last validation error.
#[derive(Clone, Debug, Default)]
pub struct DraftForm {
    pub draft: Draft,
    pub visible: bool,
    pub error: Option<ValidationError>,
}

impl DraftForm {
    pub fn open(&mut self) {
        self.visible = true;
    }

    /// Hide the form. The draft and error stay as they are.
    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn edit(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Title => self.draft.title = value,
            DraftField::Image => self.draft.image = value,
            DraftField::Date => self.draft.date = value,
        }
    }

    pub fn reset(&mut self) {
        self.draft = Draft::default();
    }

    /// Inline message for the form; empty when there is no error.
    #[must_use]
    pub fn error_message(&self) -> String {
        self.error.map(|e| e.to_string()).unwrap_or_default()
    }

    /// Validate the draft for a publish attempt, first failure wins.
    ///
    /// The previous error is cleared at the start of every attempt and the
    /// new one, if any, is kept until the next attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingFields`] when any field is empty and
    /// [`ValidationError::DuplicateTitle`] when the title already exists.
    pub fn begin_publish(&mut self, collection: &CollectionStore) -> Result<NewArticle, ValidationError> {
        self.error = None;
        let result = validate(&self.draft, collection);
        if let Err(e) = result {
            self.error = Some(e);
        }
        result
    }

    /// A create succeeded: hide the form and start over with an empty draft.
    pub fn finish_publish(&mut self) {
        self.visible = false;
        self.reset();
        self.error = None;
    }
}

fn validate(draft: &Draft, collection: &CollectionStore) -> Result<NewArticle, ValidationError> {
    if draft.has_missing_field() {
        return Err(ValidationError::MissingFields);
    }
    if collection.contains_title(&draft.title) {
        return Err(ValidationError::DuplicateTitle);
    }
    Ok(draft.to_new_article())
}
