pub mod booking_service;
pub mod chat_service;
pub mod review_service;
pub mod wallet_service;

pub use booking_service::BookingService;
pub use chat_service::ChatService;
pub use review_service::ReviewService;
pub use wallet_service::WalletService;
