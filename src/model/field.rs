use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the seven editable contact fields, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
    Email,
    Company,
    Title,
    Relationship,
}

impl Field {
    pub const ALL: &'static [Field] = &[
        Field::FirstName,
        Field::LastName,
        Field::PhoneNumber,
        Field::Email,
        Field::Company,
        Field::Title,
        Field::Relationship,
    ];

    /// Column name used in headers and prompts.
    pub fn column_name(&self) -> &'static str {
        match self {
            Field::FirstName => "FIRST_NAME",
            Field::LastName => "LAST_NAME",
            Field::PhoneNumber => "PHONE_NUMBER",
            Field::Email => "EMAIL",
            Field::Company => "COMPANY",
            Field::Title => "TITLE",
            Field::Relationship => "RELATIONSHIP",
        }
    }

    /// Parse a column name, ignoring case and surrounding whitespace.
    pub fn from_column_name(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        Field::ALL
            .iter()
            .copied()
            .find(|f| f.column_name() == upper)
    }

    /// Whether the field must hold a non-blank value.
    pub fn is_required(&self) -> bool {
        matches!(self, Field::FirstName | Field::LastName | Field::Relationship)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Accepted values of the relationship field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipKind {
    Family,
    Friend,
    Supervisor,
    Colleague,
    FormerSupervisor,
    FormerColleague,
}

impl RelationshipKind {
    pub const ALL: &'static [RelationshipKind] = &[
        RelationshipKind::Family,
        RelationshipKind::Friend,
        RelationshipKind::Supervisor,
        RelationshipKind::Colleague,
        RelationshipKind::FormerSupervisor,
        RelationshipKind::FormerColleague,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            RelationshipKind::Family => "FAMILY",
            RelationshipKind::Friend => "FRIEND",
            RelationshipKind::Supervisor => "SUPERVISOR",
            RelationshipKind::Colleague => "COLLEAGUE",
            RelationshipKind::FormerSupervisor => "FORMER SUPERVISOR",
            RelationshipKind::FormerColleague => "FORMER COLLEAGUE",
        }
    }

    /// Case-insensitive lookup.
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.to_uppercase();
        RelationshipKind::ALL
            .iter()
            .copied()
            .find(|k| k.display_name() == upper)
    }

    /// Comma separated list of every accepted value, for error messages.
    pub fn allowed_list() -> String {
        RelationshipKind::ALL
            .iter()
            .map(|k| k.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
