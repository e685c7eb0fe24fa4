pub mod booking_dto;
pub mod chat_dto;
pub mod clients_dto;
pub mod listing_dto;
pub mod review_dto;
pub mod wallet_dto;

// Re-export commonly used types
pub use booking_dto::*;
pub use chat_dto::*;
pub use clients_dto::*;
pub use listing_dto::*;
pub use review_dto::*;
pub use wallet_dto::*;
