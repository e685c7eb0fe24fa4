pub mod app_config;
pub mod gateway_details;
pub mod otp_details;

pub use app_config::AppConfig;
pub use gateway_details::GatewayInfo;
pub use otp_details::OtpInfo;
