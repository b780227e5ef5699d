use log::*;
use vpg_common::Secret;

const DEFAULT_RAZORPAY_BASE_URL: &str = "https://api.razorpay.com";

#[derive(Debug, Clone, Default)]
pub struct RazorpayConfig {
    /// The public key id for the Razorpay account. This value is safe to share with browser clients.
    pub key_id: String,
    /// The API secret. Also the HMAC key for payment signature verification.
    pub key_secret: Secret<String>,
    pub base_url: String,
}

impl RazorpayConfig {
    pub fn new_from_env_or_default() -> Self {
        let key_id = std::env::var("VPG_RAZORPAY_KEY_ID").unwrap_or_else(|_| {
            warn!("VPG_RAZORPAY_KEY_ID not set, using (probably useless) default");
            "rzp_test_0000000000".to_string()
        });
        let key_secret = Secret::new(std::env::var("VPG_RAZORPAY_KEY_SECRET").unwrap_or_else(|_| {
            warn!("VPG_RAZORPAY_KEY_SECRET not set, using (probably useless) default");
            "00000000000000".to_string()
        }));
        let base_url = std::env::var("VPG_RAZORPAY_BASE_URL").unwrap_or_else(|_| DEFAULT_RAZORPAY_BASE_URL.to_string());
        Self { key_id, key_secret, base_url }
    }
}
