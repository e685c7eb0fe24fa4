use rentahan_primitives::error::{ApiError, OtpError};
use rentahan_primitives::models::clients_dto::{
    OtpIssueRequest, OtpIssueResponse, OtpVerifyRequest, OtpVerifyResponse,
};
use reqwest::{Client, Url};
use tracing::warn;
use uuid::Uuid;

/// Client for the OTP service that guards large top-ups. A failed issue or
/// verify leaves wallet state untouched; the caller simply retries.
#[derive(Clone)]
pub struct OtpClient {
    http: Client,
    base_url: Url,
}

impl OtpClient {
    pub fn new(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let base_url =
            Url::parse(base_url).map_err(|_| ApiError::Internal("Invalid OTP base URL".into()))?;

        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}/{}", url.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url
    }

    /// Ask the service to deliver a 6-digit code for this top-up. Returns
    /// the reference to verify against.
    pub async fn issue(&self, account_id: Uuid, reference: Uuid) -> Result<Uuid, OtpError> {
        let resp = self
            .http
            .post(self.endpoint("issue"))
            .json(&OtpIssueRequest {
                account_id,
                reference,
            })
            .send()
            .await
            .map_err(|_| OtpError::RequestFailed)?;

        let status = resp.status();

        let body: OtpIssueResponse = resp.json().await.map_err(|_| OtpError::RequestFailed)?;

        if !status.is_success() || !body.status {
            warn!(%reference, "OTP issue request refused");
            return Err(OtpError::RequestFailed);
        }

        body.otp_reference.ok_or(OtpError::RequestFailed)
    }

    pub async fn verify(&self, otp_reference: Uuid, code: &str) -> Result<(), OtpError> {
        let resp = self
            .http
            .post(self.endpoint("verify"))
            .json(&OtpVerifyRequest {
                otp_reference,
                code,
            })
            .send()
            .await
            .map_err(|_| OtpError::RequestFailed)?;

        let status = resp.status();

        let body: OtpVerifyResponse = resp.json().await.map_err(|_| OtpError::RequestFailed)?;

        if !status.is_success() || !body.status {
            return Err(OtpError::RequestFailed);
        }

        if !body.verified {
            return Err(OtpError::CodeRejected);
        }

        Ok(())
    }
}
