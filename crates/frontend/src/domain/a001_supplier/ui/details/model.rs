use async_trait::async_trait;
use contracts::domain::a001_supplier::{Supplier, SupplierDto, SupplierId};
use gloo_net::http::{Request, Response};
use thiserror::Error;

use crate::shared::api_utils::{api_url, path_segment};

/// Resource path of the supplier collection on the API.
const COLLECTION_PATH: &str = "/new";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {0}")]
    Status(u16),

    #[error("invalid payload: {0}")]
    Decode(String),
}

/// Supplier endpoints of the remote API.
#[async_trait(?Send)]
pub trait SupplierApi {
    async fn fetch_by_id(&self, id: &SupplierId) -> Result<SupplierDto, ApiError>;

    async fn create(&self, supplier: &Supplier) -> Result<(), ApiError>;

    /// Full replace of the stored record.
    async fn update(&self, id: &SupplierId, supplier: &Supplier) -> Result<(), ApiError>;

    async fn delete(&self, id: &SupplierId) -> Result<(), ApiError>;
}

pub struct HttpSupplierApi {
    base_url: String,
}

impl HttpSupplierApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn collection_url(&self) -> String {
        api_url(&self.base_url, COLLECTION_PATH)
    }

    fn item_url(&self, id: &SupplierId) -> String {
        api_url(
            &self.base_url,
            &format!("{}/{}", COLLECTION_PATH, path_segment(id.value())),
        )
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }
    Ok(response)
}

#[async_trait(?Send)]
impl SupplierApi for HttpSupplierApi {
    async fn fetch_by_id(&self, id: &SupplierId) -> Result<SupplierDto, ApiError> {
        let response = Request::get(&self.item_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network)?;

        ensure_ok(response)?
            .json::<SupplierDto>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create(&self, supplier: &Supplier) -> Result<(), ApiError> {
        let response = Request::post(&self.collection_url())
            .header("Accept", "application/json")
            .json(supplier)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;

        ensure_ok(response).map(|_| ())
    }

    async fn update(&self, id: &SupplierId, supplier: &Supplier) -> Result<(), ApiError> {
        let response = Request::put(&self.item_url(id))
            .header("Accept", "application/json")
            .json(supplier)
            .map_err(|e| ApiError::Decode(e.to_string()))?
            .send()
            .await
            .map_err(network)?;

        ensure_ok(response).map(|_| ())
    }

    async fn delete(&self, id: &SupplierId) -> Result<(), ApiError> {
        let response = Request::delete(&self.item_url(id))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(network)?;

        ensure_ok(response).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::common::AggregateId;

    #[test]
    fn test_urls() {
        let api = HttpSupplierApi::new("https://api.example.com/");
        let id = SupplierId::from_string("42").unwrap();

        assert_eq!(api.collection_url(), "https://api.example.com/new");
        assert_eq!(api.item_url(&id), "https://api.example.com/new/42");
    }

    #[test]
    fn test_item_url_encodes_id() {
        let api = HttpSupplierApi::new("http://localhost:3000");
        let id = SupplierId::from_string("a/b").unwrap();

        assert_eq!(api.item_url(&id), "http://localhost:3000/new/a%2Fb");
    }
}
