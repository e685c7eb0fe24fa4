pub mod booking;
pub mod chat_message;
pub mod enum_types;
pub mod listing;
pub mod review;
pub mod top_up;
pub mod wallet;

// Re-export commonly used types
pub use booking::{Booking, TransitionRecord};
pub use chat_message::ChatMessage;
pub use enum_types::*;
pub use listing::Listing;
pub use review::Review;
pub use top_up::TopUp;
pub use wallet::{NewWalletTransaction, WalletAccount, WalletTransaction};
