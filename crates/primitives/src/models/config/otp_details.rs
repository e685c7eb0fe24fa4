use eyre::Report;
use std::env;

/// Connection details for the OTP delivery/verification service used on
/// large top-ups.
#[derive(Debug, Clone)]
pub struct OtpInfo {
    pub otp_api_url: String,
}

impl OtpInfo {
    pub fn new() -> Result<Self, Report> {
        Ok(Self {
            otp_api_url: env::var("OTP_API_URL")
                .unwrap_or_else(|_| "http://localhost:9090/otp".into()),
        })
    }
}
