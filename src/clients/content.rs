use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Product;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("product entry not found")]
    NotFound,

    #[error("content request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("content source returned {0}")]
    Status(StatusCode),
}

/// Read-only supplier of product fields. The service never writes back.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn product(&self, id: &str) -> Result<Product, ContentError>;
}

/// Delivery-API client for the headless content source.
pub struct HttpContentSource {
    client: reqwest::Client,
    base_url: String,
    access_token: String,
}

impl HttpContentSource {
    pub fn new(client: reqwest::Client, base_url: String, access_token: String) -> Self {
        Self {
            client,
            base_url,
            access_token,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductEntry {
    id: String,
    name: String,
    price: i64,
    description: Option<String>,
    featured_product_image: Option<String>,
    #[serde(default)]
    product_images: Vec<String>,
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn product(&self, id: &str) -> Result<Product, ContentError> {
        let url = format!("{}/products/{}", self.base_url.trim_end_matches('/'), id);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ContentError::NotFound);
        }
        if !response.status().is_success() {
            return Err(ContentError::Status(response.status()));
        }

        let entry: ProductEntry = response.json().await?;
        Ok(Product {
            id: entry.id,
            name: entry.name,
            price: entry.price,
            description: entry.description,
            featured_image: entry.featured_product_image,
            images: entry.product_images,
        })
    }
}
