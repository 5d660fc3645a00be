//! Form inputs as the user typed them, plus field-level validation.
//!
//! Validation never touches any store state: a form either produces a clean
//! draft or a map of per-field messages, and the caller decides what to do.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::BookCondition;

/// Per-field validation messages, keyed by the input's field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Raw state of the "List Your Book" form. Price stays a string until
/// validation parses it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ListingForm {
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: String,
    pub condition: BookCondition,
    pub course: String,
    pub department: String,
    pub cover_image: Option<String>,
}

/// A listing form that passed validation, ready for the store.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub title: String,
    pub author: String,
    pub description: String,
    pub price: f64,
    pub condition: BookCondition,
    pub course: Option<String>,
    pub department: Option<String>,
    pub cover_image: String,
}

impl ListingForm {
    pub fn validate(&self) -> Result<ListingDraft, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.title.trim().is_empty() {
            errors.add("title", "Title is required");
        }
        if self.author.trim().is_empty() {
            errors.add("author", "Author is required");
        }
        if self.description.trim().is_empty() {
            errors.add("description", "Description is required");
        }

        let mut price = 0.0;
        if self.price.trim().is_empty() {
            errors.add("price", "Price is required");
        } else {
            match self.price.trim().parse::<f64>() {
                Ok(p) if p > 0.0 => price = p,
                _ => errors.add("price", "Price must be a positive number"),
            }
        }

        let cover_image = self.cover_image.clone().unwrap_or_default();
        if cover_image.is_empty() {
            errors.add("cover_image", "Book cover image is required");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(ListingDraft {
            title: self.title.trim().to_string(),
            author: self.author.trim().to_string(),
            description: self.description.trim().to_string(),
            price,
            condition: self.condition,
            course: non_empty(&self.course),
            department: non_empty(&self.department),
            cover_image,
        })
    }
}

/// Optional search filters; absent fields impose no constraint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookFilters {
    pub department: Option<String>,
    pub course: Option<String>,
    pub condition: Option<BookCondition>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> ListingForm {
        ListingForm {
            title: "Introduction to Psychology".into(),
            author: "John Smith".into(),
            description: "Barely used, no highlighting.".into(),
            price: "45.99".into(),
            condition: BookCondition::LikeNew,
            course: "PSY101".into(),
            department: "Science".into(),
            cover_image: Some("covers/psych.jpg".into()),
        }
    }

    #[test]
    fn valid_form_produces_draft() {
        let draft = filled_form().validate().unwrap();
        assert_eq!(draft.price, 45.99);
        assert_eq!(draft.course.as_deref(), Some("PSY101"));
        assert_eq!(draft.condition, BookCondition::LikeNew);
    }

    #[test]
    fn negative_price_is_a_price_field_error() {
        let mut form = filled_form();
        form.price = "-5".into();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("price"), Some("Price must be a positive number"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let mut form = filled_form();
        form.price = "cheap".into();
        let errors = form.validate().unwrap_err();
        assert!(errors.get("price").is_some());
    }

    #[test]
    fn every_required_field_is_reported_at_once() {
        let errors = ListingForm::default().validate().unwrap_err();
        for field in ["title", "author", "description", "price", "cover_image"] {
            assert!(errors.get(field).is_some(), "missing error for {field}");
        }
    }

    #[test]
    fn blank_optionals_become_none() {
        let mut form = filled_form();
        form.course = "   ".into();
        form.department = String::new();
        let draft = form.validate().unwrap();
        assert!(draft.course.is_none());
        assert!(draft.department.is_none());
    }
}
