//! # Payment signature verification
//!
//! After a successful payment, Razorpay's checkout widget hands the client three values: the gateway order id, the
//! payment id, and a signature. The signature is the hex-encoded HMAC-SHA256 of
//!
//! ```text
//!     {order_id}|{payment_id}
//! ```
//!
//! keyed with the account's API secret. The backend recomputes the HMAC and compares byte-for-byte. A mismatch is
//! not an error condition, it is a `false` verification result; the caller decides how to respond. Verification must
//! happen before an order is placed against the payment.

use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use vpg_common::Secret;

type HmacSha256 = Hmac<Sha256>;

/// The (order id, payment id, signature) triple returned by the Razorpay checkout flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentSignature {
    pub order_id: String,
    pub payment_id: String,
    pub signature: String,
}

impl PaymentSignature {
    pub fn new(order_id: &str, payment_id: &str, signature: &str) -> Self {
        Self { order_id: order_id.to_string(), payment_id: payment_id.to_string(), signature: signature.to_string() }
    }

    pub fn message(&self) -> String {
        format!("{}|{}", self.order_id, self.payment_id)
    }

    pub fn is_valid(&self, secret: &Secret<String>) -> bool {
        let expected = calculate_signature(secret, &self.order_id, &self.payment_id);
        expected == self.signature
    }
}

/// The hex-encoded HMAC-SHA256 of `{order_id}|{payment_id}` under `secret`.
pub fn calculate_signature(secret: &Secret<String>, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.reveal().as_bytes()).expect("HMAC can take key of any size");
    mac.update(format!("{order_id}|{payment_id}").as_bytes());
    hex::encode(mac.finalize().into_bytes())
}
