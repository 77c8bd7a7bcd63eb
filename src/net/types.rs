//! Wire DTOs for the REST API.
//!
//! DESIGN
//! ======
//! Field names follow the server's JSON (`_id`, `registrationNo`). Records
//! are server-owned; the client only holds transient copies in page state.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A car category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
}

/// Editable category fields sent on create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFields {
    pub name: String,
}

/// Category reference embedded in a car: populated object or bare id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
    Populated(Category),
    Id(String),
}

impl CategoryRef {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Populated(category) => &category.id,
            Self::Id(id) => id,
        }
    }

    /// Display name; a bare id is looked up in `known`, falling back to the id.
    #[must_use]
    pub fn label<'a>(&'a self, known: &'a [Category]) -> &'a str {
        match self {
            Self::Populated(category) => &category.name,
            Self::Id(id) => known
                .iter()
                .find(|category| &category.id == id)
                .map_or(id.as_str(), |category| category.name.as_str()),
        }
    }
}

/// A registered car.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    /// Server-assigned identifier.
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub model: String,
    pub make: String,
    pub color: String,
    pub category: CategoryRef,
    pub registration_no: String,
}

/// Editable car fields sent on create and update. `category` is a category id.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarFields {
    pub model: String,
    pub make: String,
    pub color: String,
    pub category: String,
    pub registration_no: String,
}

impl From<&Car> for CarFields {
    fn from(car: &Car) -> Self {
        Self {
            model: car.model.clone(),
            make: car.make.clone(),
            color: car.color.clone(),
            category: car.category.id().to_owned(),
            registration_no: car.registration_no.clone(),
        }
    }
}

impl From<&Category> for CategoryFields {
    fn from(category: &Category) -> Self {
        Self { name: category.name.clone() }
    }
}

/// `POST /auth/signup` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
}

/// `POST /auth/signin` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/signin` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignInResponse {
    pub token: String,
}
