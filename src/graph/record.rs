//! Person record: the vertex value of the people graph
//!
//! One record per biography page in the Pantheon dataset. Records are
//! immutable after construction; equality and hashing are structural
//! over all fields, so two records are the same vertex exactly when
//! their full contents match.

use super::types::Field;
use serde::{Deserialize, Serialize};

/// A person from the Pantheon dataset.
///
/// Field names with serde renames match the CSV column headers, so the
/// loader deserializes rows into `Person` directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    /// Wikipedia curid, unique per page
    #[serde(rename = "en_curid")]
    pub id: String,

    pub name: String,

    #[serde(rename = "birthcity")]
    pub birth_city: String,

    #[serde(rename = "birthstate")]
    pub birth_state: String,

    #[serde(rename = "countryName")]
    pub country: String,

    pub gender: String,

    pub occupation: String,

    pub industry: String,

    pub domain: String,
}

impl Person {
    /// Generic attribute access for the grouping and filter queries.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Id => &self.id,
            Field::Name => &self.name,
            Field::BirthCity => &self.birth_city,
            Field::BirthState => &self.birth_state,
            Field::Country => &self.country,
            Field::Gender => &self.gender,
            Field::Occupation => &self.occupation,
            Field::Industry => &self.industry,
            Field::Domain => &self.domain,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
