//! Core type definitions for the people graph

use serde::{Deserialize, Serialize};
use std::fmt;

/// Selector for the fixed set of record attributes.
///
/// The grouping and filter queries are generic over "which attribute",
/// so they take a `Field` instead of a string key. This keeps attribute
/// access statically checked while preserving query-by-field-name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    Id,
    Name,
    BirthCity,
    BirthState,
    Country,
    Gender,
    Occupation,
    Industry,
    Domain,
}

impl Field {
    /// All fields, in record declaration order.
    pub const ALL: [Field; 9] = [
        Field::Id,
        Field::Name,
        Field::BirthCity,
        Field::BirthState,
        Field::Country,
        Field::Gender,
        Field::Occupation,
        Field::Industry,
        Field::Domain,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::BirthCity => "birthCity",
            Field::BirthState => "birthState",
            Field::Country => "countryName",
            Field::Gender => "gender",
            Field::Occupation => "occupation",
            Field::Industry => "industry",
            Field::Domain => "domain",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Country.as_str(), "countryName");
        assert_eq!(format!("{}", Field::Gender), "gender");
    }

    #[test]
    fn test_all_fields_distinct() {
        let names: std::collections::HashSet<_> =
            Field::ALL.iter().map(|f| f.as_str()).collect();
        assert_eq!(names.len(), Field::ALL.len());
    }
}
