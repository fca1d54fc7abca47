use reqwest::{Client, StatusCode};
use serde::{Deserialize, de::DeserializeOwned};
use thiserror::Error;

use menu::{Extra, Ingredient, OrderStatus, OrderWindows, ReferenceItem, ServiceStatus};
use order::OrderPayload;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status {status} from {path}")]
    Status { status: StatusCode, path: String },
}

/// Public catalog rows carry no admin fields on this surface.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize)]
pub struct OrderStatusResponse {
    pub status: OrderStatus,
}

/// Typed wrapper over the backend HTTP surface.
pub struct Api {
    client: Client,
    base_url: String,
}

impl Api {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn get_service_status(&self) -> Result<ServiceStatus, ClientError> {
        self.get_json("service/status").await
    }

    pub async fn get_order_windows(&self) -> Result<OrderWindows, ClientError> {
        self.get_json("config/order-windows").await
    }

    pub async fn get_departments(&self) -> Result<Vec<ReferenceItem>, ClientError> {
        self.get_json("reference/departments").await
    }

    pub async fn get_wings(&self) -> Result<Vec<ReferenceItem>, ClientError> {
        self.get_json("reference/wings").await
    }

    pub async fn get_special_sandwiches(&self) -> Result<Vec<CatalogItem>, ClientError> {
        self.get_json("catalog/special-sandwiches").await
    }

    pub async fn get_ingredients(&self) -> Result<Vec<Ingredient>, ClientError> {
        self.get_json("catalog/ingredients").await
    }

    pub async fn get_extras(&self) -> Result<Vec<Extra>, ClientError> {
        self.get_json("catalog/extras").await
    }

    pub async fn create_order(
        &self,
        payload: &OrderPayload,
    ) -> Result<CreateOrderResponse, ClientError> {
        let path = "orders";
        let response = self
            .client
            .post(self.url(path))
            .json(payload)
            .send()
            .await?;
        Self::decode(path, response).await
    }

    pub async fn get_order_status(
        &self,
        order_id: &str,
    ) -> Result<OrderStatusResponse, ClientError> {
        self.get_json(&format!("orders/{order_id}/status")).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::decode(path, response).await
    }

    async fn decode<T: DeserializeOwned>(
        path: &str,
        response: reqwest::Response,
    ) -> Result<T, ClientError> {
        if !response.status().is_success() {
            return Err(ClientError::Status {
                status: response.status(),
                path: path.to_string(),
            });
        }
        Ok(response.json().await?)
    }
}
