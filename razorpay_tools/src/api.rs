use std::sync::Arc;

use chrono::Utc;
use log::*;
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::json;
use vpg_common::{Rupees, INR_CURRENCY_CODE};

use crate::{data_objects::NewRazorpayOrder, RazorpayApiError, RazorpayConfig, RazorpayOrder};

/// A fresh receipt id for a gateway order, e.g. `receipt_order_1722945713000`.
pub fn new_receipt_id() -> String {
    format!("receipt_order_{}", Utc::now().timestamp_millis())
}

#[derive(Clone)]
pub struct RazorpayApi {
    config: RazorpayConfig,
    client: Arc<Client>,
}

impl RazorpayApi {
    pub fn new(config: RazorpayConfig) -> Result<Self, RazorpayApiError> {
        let client = Client::builder().build().map_err(|e| RazorpayApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub async fn rest_query<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: Option<B>,
    ) -> Result<T, RazorpayApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self
            .client
            .request(method, url)
            .basic_auth(&self.config.key_id, Some(self.config.key_secret.reveal().as_str()));
        if let Some(body) = body {
            req = req.json(&body);
        }
        let response = req.send().await.map_err(|e| RazorpayApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| RazorpayApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| RazorpayApiError::RestResponseError(e.to_string()))?;
            Err(RazorpayApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/v1{path}", self.config.base_url)
    }

    /// The public key id, echoed to browser clients so they can open the Razorpay checkout widget.
    pub fn key_id(&self) -> &str {
        &self.config.key_id
    }

    /// Creates a gateway order for `amount`. The amount crosses the boundary in paise; the
    /// `user_id` travels along in the order notes so that gateway records can be traced back to a
    /// storefront user.
    pub async fn create_order(
        &self,
        amount: Rupees,
        receipt: &str,
        user_id: &str,
    ) -> Result<RazorpayOrder, RazorpayApiError> {
        if amount.value() <= 0 {
            return Err(RazorpayApiError::InvalidCurrencyAmount(amount.to_string()));
        }
        let body = NewRazorpayOrder {
            amount: amount.value(),
            currency: INR_CURRENCY_CODE.to_string(),
            receipt: receipt.to_string(),
            notes: json!({ "userId": user_id }),
        };
        debug!("Creating gateway order of {amount} for user {user_id}");
        let order = self.rest_query::<RazorpayOrder, NewRazorpayOrder>(Method::POST, "/orders", Some(body)).await?;
        info!("Created gateway order {} ({} paise)", order.id, order.amount);
        Ok(order)
    }
}
