use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The request body for `POST /v1/orders`.
///
/// Amounts are in integer minor units (paise), per the Razorpay API. Conversion from decimal rupees happens before
/// this struct is built.
#[derive(Debug, Clone, Serialize)]
pub struct NewRazorpayOrder {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    pub notes: Value,
}

/// The subset of the Razorpay order entity that the storefront uses. Unknown fields in the response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RazorpayOrder {
    /// The gateway order id, e.g. `order_IluGWxBm9U8zJ8`
    pub id: String,
    /// The order amount in paise
    pub amount: i64,
    pub currency: String,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}
