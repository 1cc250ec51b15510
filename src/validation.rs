use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::FieldError;
use crate::model::{Field, RelationshipKind};

/// Every field value must be strictly shorter than this many characters.
pub const MAX_FIELD_LEN: usize = 30;

static PHONE_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{3}-[0-9]{3}-[0-9]{4}$").expect("phone pattern is valid"));

/// Validates a single candidate value for `field`.
///
/// Rules run in a fixed order: length, required, then the field-specific
/// format rule. The first rule that fails is the error returned.
pub fn validate(field: Field, value: &str) -> Result<(), FieldError> {
    if value.chars().count() >= MAX_FIELD_LEN {
        return Err(FieldError::TooLong {
            field,
            max: MAX_FIELD_LEN,
        });
    }

    if field.is_required() && is_blank(value) {
        return Err(FieldError::Required { field });
    }

    match field {
        Field::Relationship if RelationshipKind::parse(value).is_none() => {
            Err(FieldError::UnknownRelationship {
                field,
                allowed: RelationshipKind::allowed_list(),
            })
        }
        Field::PhoneNumber if !value.is_empty() && !is_phone_number(value) => {
            Err(FieldError::PhoneFormat { field })
        }
        Field::Email if !value.is_empty() && !is_email(value) => {
            Err(FieldError::EmailFormat { field })
        }
        _ => Ok(()),
    }
}

/// Empty or whitespace-only.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// `DDD-DDD-DDDD`: twelve characters, ASCII digits and two hyphens, no letters.
pub fn is_phone_number(value: &str) -> bool {
    PHONE_NUMBER.is_match(value)
}

pub fn is_email(value: &str) -> bool {
    value.contains('@') && value.contains('.')
}
