//! Car CRUD against `/cars`.

#[cfg(test)]
#[path = "cars_test.rs"]
mod cars_test;

use crate::net::types::{Car, CarFields};
use crate::net::{ApiClient, ApiError};

pub const CARS_PATH: &str = "/cars";

fn car_path(id: &str) -> String {
    format!("{CARS_PATH}/{id}")
}

#[derive(Clone, Debug)]
pub struct CarService {
    api: ApiClient,
}

impl CarService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch every car. The response must be a JSON array.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`]; a non-array body is [`ApiError::Schema`].
    pub async fn list(&self) -> Result<Vec<Car>, ApiError> {
        self.api.get(CARS_PATH).await
    }

    /// Create a car and return the server's record.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn create(&self, fields: &CarFields) -> Result<Car, ApiError> {
        self.api.post(CARS_PATH, fields).await
    }

    /// Replace the editable fields of car `id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn update(&self, id: &str, fields: &CarFields) -> Result<Car, ApiError> {
        self.api.put(&car_path(id), fields).await
    }

    /// Delete car `id`.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&car_path(id)).await
    }
}
