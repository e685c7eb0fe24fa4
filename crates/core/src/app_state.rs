use crate::clients::{GatewayClient, NotifierClient, OtpClient};
use crate::repositories::{
    BookingRepository, ListingRepository, MessageRepository, ReviewRepository, TopUpRepository,
    WalletRepository,
};
use eyre::Result;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub use rentahan_primitives::models::config::AppConfig;

pub struct AppState {
    pub config: AppConfig,
    pub http_client: Client,
    pub gateway: GatewayClient,
    pub otp: OtpClient,
    pub notifier: NotifierClient,
    pub listings: ListingRepository,
    pub bookings: BookingRepository,
    pub wallets: WalletRepository,
    pub top_ups: TopUpRepository,
    pub messages: MessageRepository,
    pub reviews: ReviewRepository,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let gateway = GatewayClient::new(
            http.clone(),
            &config.gateway_details.gateway_api_url,
            config.gateway_details.gateway_secret_key.clone(),
            config.gateway_details.request_timeout_secs,
        )?;

        let otp = OtpClient::new(http.clone(), &config.otp_details.otp_api_url)?;

        let notifier = NotifierClient::new();

        Ok(Arc::new(Self {
            config,
            http_client: http,
            gateway,
            otp,
            notifier,
            listings: ListingRepository::new(),
            bookings: BookingRepository::new(),
            wallets: WalletRepository::new(),
            top_ups: TopUpRepository::new(),
            messages: MessageRepository::new(),
            reviews: ReviewRepository::new(),
        }))
    }
}
