//! Category CRUD against `/categories`.

#[cfg(test)]
#[path = "categories_test.rs"]
mod categories_test;

use crate::net::types::{Category, CategoryFields};
use crate::net::{ApiClient, ApiError};

pub const CATEGORIES_PATH: &str = "/categories";

fn category_path(id: &str) -> String {
    format!("{CATEGORIES_PATH}/{id}")
}

#[derive(Clone, Debug)]
pub struct CategoryService {
    api: ApiClient,
}

impl CategoryService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch every category.
    ///
    /// A single object instead of an array is rejected, not wrapped.
    ///
    /// # Errors
    ///
    /// Propagates any [`ApiError`]; a non-array body is [`ApiError::Schema`].
    pub async fn list(&self) -> Result<Vec<Category>, ApiError> {
        self.api.get(CATEGORIES_PATH).await
    }

    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn create(&self, fields: &CategoryFields) -> Result<Category, ApiError> {
        self.api.post(CATEGORIES_PATH, fields).await
    }

    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn update(&self, id: &str, fields: &CategoryFields) -> Result<Category, ApiError> {
        self.api.put(&category_path(id), fields).await
    }

    /// # Errors
    ///
    /// Propagates any [`ApiError`] from the request.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.api.delete(&category_path(id)).await
    }
}
