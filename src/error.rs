use thiserror::Error;

use crate::model::Field;

/// Why a single field value was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Field length must be less than {max}")]
    TooLong { field: Field, max: usize },

    #[error("{field} must have a value")]
    Required { field: Field },

    #[error("{field} must be one of the following values: {allowed}")]
    UnknownRelationship { field: Field, allowed: String },

    #[error("{field} value must follow format: XXX-XXX-XXXX")]
    PhoneFormat { field: Field },

    #[error("Invalid format for field {field}")]
    EmailFormat { field: Field },

    #[error("Duplicate value detected. Field not updated.")]
    DuplicateValue { field: Field },
}

#[derive(Debug, Error)]
pub enum ContactsError {
    #[error(transparent)]
    Field(#[from] FieldError),

    #[error("Contact failed validation: {}", .0.join("; "))]
    Invalid(Vec<String>),

    #[error("Contact already exists: {identifier}")]
    Duplicate { identifier: String },

    #[error("Contact ID already in use: {id}")]
    IdInUse { id: String },

    #[error("Contact not found: {id}")]
    NotFound { id: String },

    #[error("No free contact ID left in 1..={max}")]
    IdSpaceExhausted { max: u32 },

    #[error("Unsupported file type '{path}'. File extension must be: .txt or .csv")]
    UnsupportedFile { path: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
}

pub type ContactsResult<T> = Result<T, ContactsError>;
