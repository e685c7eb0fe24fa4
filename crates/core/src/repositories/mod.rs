pub mod booking_repository;
pub mod listing_repository;
pub mod message_repository;
pub mod review_repository;
pub mod top_up_repository;
pub mod wallet_repository;

pub use booking_repository::BookingRepository;
pub use listing_repository::ListingRepository;
pub use message_repository::MessageRepository;
pub use review_repository::ReviewRepository;
pub use top_up_repository::TopUpRepository;
pub use wallet_repository::WalletRepository;
