use serde::{Deserialize, Serialize};

use super::field::Field;
use super::ids::ContactId;
use crate::error::FieldError;
use crate::validation;

/// A single contact in the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub company: String,
    pub title: String,
    pub relationship: String,
}

impl Contact {
    /// Builds a contact from raw values given in column order
    /// (`FIRST_NAME` .. `RELATIONSHIP`). Missing trailing values are empty,
    /// whitespace-only values become empty and the ID is canonicalised
    /// with [`ContactId::from_raw`].
    pub fn from_values<S: AsRef<str>>(id: &str, values: &[S]) -> Self {
        let mut contact = Self {
            id: ContactId::from_raw(id),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            email: String::new(),
            company: String::new(),
            title: String::new(),
            relationship: String::new(),
        };
        for (field, value) in Field::ALL.iter().zip(values) {
            contact.set(*field, value.as_ref());
        }
        contact
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::PhoneNumber => &self.phone_number,
            Field::Email => &self.email,
            Field::Company => &self.company,
            Field::Title => &self.title,
            Field::Relationship => &self.relationship,
        }
    }

    /// Sets a field. Whitespace-only input is stored as empty.
    pub fn set(&mut self, field: Field, value: &str) {
        let value = if validation::is_blank(value) {
            String::new()
        } else {
            value.to_string()
        };
        let slot = match field {
            Field::FirstName => &mut self.first_name,
            Field::LastName => &mut self.last_name,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Email => &mut self.email,
            Field::Company => &mut self.company,
            Field::Title => &mut self.title,
            Field::Relationship => &mut self.relationship,
        };
        *slot = value;
    }

    /// Editable values in column order.
    pub fn values(&self) -> [&str; 7] {
        [
            &self.first_name,
            &self.last_name,
            &self.phone_number,
            &self.email,
            &self.company,
            &self.title,
            &self.relationship,
        ]
    }

    /// ID followed by the editable values, as written to an export row.
    pub fn to_row(&self) -> Vec<&str> {
        let mut row = Vec::with_capacity(8);
        row.push(self.id.as_str());
        row.extend(self.values());
        row
    }

    /// True when every editable field matches. The ID is ignored.
    pub fn is_semantic_duplicate(&self, other: &Contact) -> bool {
        self.values() == other.values()
    }

    /// Runs the field validator over every editable field in column order.
    pub fn validate(&self) -> ValidationReport {
        let outcomes = Field::ALL
            .iter()
            .map(|field| (*field, validation::validate(*field, self.get(*field)).err()))
            .collect();
        ValidationReport { outcomes }
    }

    /// Decides whether `new_value` may replace the current value of `field`.
    ///
    /// An empty `new_value` over a non-empty value keeps the current value.
    /// Re-entering the current value is rejected as a duplicate.
    pub fn validate_field_update(&self, field: Field, new_value: &str) -> FieldUpdate {
        let current = self.get(field);
        if new_value.is_empty() && !current.is_empty() {
            FieldUpdate::Keep
        } else if new_value != current {
            match validation::validate(field, new_value) {
                Ok(()) => FieldUpdate::Change,
                Err(e) => FieldUpdate::Rejected(e),
            }
        } else {
            FieldUpdate::Rejected(FieldError::DuplicateValue { field })
        }
    }
}

/// Per-field outcome of [`Contact::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    outcomes: Vec<(Field, Option<FieldError>)>,
}

impl ValidationReport {
    /// Valid only if every field passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.iter().all(|(_, e)| e.is_none())
    }

    pub fn errors(&self) -> impl Iterator<Item = &FieldError> {
        self.outcomes.iter().filter_map(|(_, e)| e.as_ref())
    }

    /// One message per field in column order; empty for fields that passed.
    pub fn messages(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .map(|(_, e)| e.as_ref().map(ToString::to_string).unwrap_or_default())
            .collect()
    }
}

/// Result of [`Contact::validate_field_update`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// No new value given; keep the stored one.
    Keep,
    /// New value passed validation.
    Change,
    Rejected(FieldError),
}

impl FieldUpdate {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, FieldUpdate::Rejected(_))
    }
}
