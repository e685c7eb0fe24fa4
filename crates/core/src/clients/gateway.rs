use rentahan_primitives::error::{ApiError, GatewayError};
use rentahan_primitives::models::clients_dto::{ChargeRequest, ChargeResponse};
use rentahan_primitives::models::enum_types::PaymentProvider;
use rentahan_primitives::models::money::Money;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use tracing::warn;
use uuid::Uuid;

/// Client for the external payment gateway that authorizes top-up charges.
/// The gateway's confirmation is the sole commit point for money movement:
/// callers only credit the ledger after a successful charge.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: Url,
    secret_key: SecretString,
    timeout: Duration,
}

impl GatewayClient {
    pub fn new(
        http: Client,
        base_url: &str,
        secret_key: SecretString,
        timeout_secs: u64,
    ) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url)
            .map_err(|_| ApiError::Internal("Invalid gateway base URL".into()))?;

        Ok(Self {
            http,
            base_url,
            secret_key,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    /// Charge `amount` against the given provider. Returns the gateway's
    /// reference id on success.
    pub async fn charge(
        &self,
        amount: Money,
        provider: PaymentProvider,
        reference: Uuid,
    ) -> Result<String, GatewayError> {
        let url = self.endpoint("charges");

        let resp = self
            .http
            .post(url)
            .timeout(self.timeout)
            .bearer_auth(self.secret_key.expose_secret())
            .json(&ChargeRequest {
                amount_centavos: amount.centavos(),
                currency: "PHP",
                provider,
                reference,
            })
            .send()
            .await
            .map_err(|_| GatewayError::RequestFailed)?;

        let status = resp.status();

        let body: ChargeResponse = resp.json().await.map_err(|_| GatewayError::RequestFailed)?;

        if !status.is_success() || !body.status {
            warn!(
                gateway_message = ?body.message,
                %reference,
                "gateway charge declined"
            );
            return Err(GatewayError::Declined(
                body.message.unwrap_or_else(|| "charge failed".into()),
            ));
        }

        body.reference_id
            .ok_or(GatewayError::Declined("missing reference_id".into()))
    }
}
