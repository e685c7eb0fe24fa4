use crate::models::config::gateway_details::GatewayInfo;
use crate::models::config::otp_details::OtpInfo;
use eyre::{eyre, Report};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_url: String,

    /// Platform cut of every rental subtotal, in basis points (1000 = 10%).
    pub platform_fee_bps: i64,

    /// Top-ups at or above this many centavos require OTP verification
    /// (₱500.00 by default).
    pub otp_threshold_centavos: i64,

    pub gateway_details: GatewayInfo,

    pub otp_details: OtpInfo,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        let platform_fee_bps: i64 = env::var("PLATFORM_FEE_BPS")
            .unwrap_or_else(|_| "1000".into())
            .parse()?;
        if !(0..=10_000).contains(&platform_fee_bps) {
            return Err(eyre!(
                "PLATFORM_FEE_BPS must be between 0 and 10000, got {platform_fee_bps}"
            ));
        }

        Ok(Self {
            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            platform_fee_bps,

            otp_threshold_centavos: env::var("OTP_THRESHOLD_CENTAVOS")
                .unwrap_or_else(|_| "50000".into())
                .parse()?,

            gateway_details: GatewayInfo::new()?,

            otp_details: OtpInfo::new()?,
        })
    }
}
