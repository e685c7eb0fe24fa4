use eyre::Report;
use secrecy::SecretString;
use std::env;

/// Connection details for the external payment gateway that authorizes
/// GCash/Maya/card/bank charges on our behalf.
#[derive(Debug, Clone)]
pub struct GatewayInfo {
    pub gateway_api_url: String,
    pub gateway_secret_key: SecretString,
    pub request_timeout_secs: u64,
}

impl GatewayInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            gateway_api_url: env::var("GATEWAY_API_URL")
                .unwrap_or_else(|_| "http://localhost:9090/gateway".into()),
            gateway_secret_key: SecretString::from(
                env::var("GATEWAY_SECRET_KEY").unwrap_or_else(|_| "sk_test_gateway".into()),
            ),
            request_timeout_secs: env::var("GATEWAY_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".into())
                .parse()?,
        })
    }
}
