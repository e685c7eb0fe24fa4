use crate::models::entities::enum_types::PaymentProvider;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Wire types for the external payment-gateway and OTP collaborators.

#[derive(Debug, Serialize)]
pub struct ChargeRequest<'a> {
    pub amount_centavos: i64,
    pub currency: &'a str,
    pub provider: PaymentProvider,
    pub reference: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ChargeResponse {
    pub status: bool,
    pub message: Option<String>,
    pub reference_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OtpIssueRequest {
    pub account_id: Uuid,
    pub reference: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct OtpIssueResponse {
    pub status: bool,
    pub otp_reference: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct OtpVerifyRequest<'a> {
    pub otp_reference: Uuid,
    pub code: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct OtpVerifyResponse {
    pub status: bool,
    pub verified: bool,
}
