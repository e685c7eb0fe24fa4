pub mod gateway;
pub mod notifier;
pub mod otp;

pub use gateway::GatewayClient;
pub use notifier::NotifierClient;
pub use otp::OtpClient;
