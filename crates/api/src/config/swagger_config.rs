use crate::handlers::{
    accept_booking::__path_accept_booking, cancel_booking::__path_cancel_booking,
    confirm_pickup::__path_confirm_pickup, confirm_return::__path_confirm_return,
    confirm_top_up::__path_confirm_top_up, create_booking::__path_create_booking,
    decline_booking::__path_decline_booking, get_booking::__path_get_booking,
    health::__path_health_check, list_listings::__path_get_listings,
    list_messages::__path_list_messages, post_message::__path_post_message,
    subject_rating::__path_subject_rating, submit_review::__path_submit_review,
    top_up::__path_top_up, wallet_balance::__path_get_wallet,
    wallet_transactions::__path_get_wallet_transactions,
};
use rentahan_primitives::models::*;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health_check, get_listings,
        create_booking, get_booking, accept_booking, decline_booking,
        confirm_pickup, confirm_return, cancel_booking,
        post_message, list_messages,
        submit_review, subject_rating,
        top_up, confirm_top_up, get_wallet, get_wallet_transactions
    ),
    components(schemas(
        CreateBookingRequest, TransitionRequest, TransitionDto, BookingResponse,
        PostMessageRequest, MessageDto, MessagesResponse,
        SubmitReviewRequest, ReviewResponse, AverageRatingResponse,
        TopUpRequest, TopUpResponse, ConfirmTopUpRequest,
        WalletResponse, WalletTransactionDto, TransactionsResponse,
        ListingDto, ListingsResponse
    )),
    tags(
        (name = "Bookings", description = "Booking lifecycle"),
        (name = "Wallet", description = "Top-ups and ledger history"),
        (name = "Chat", description = "Booking conversations"),
        (name = "Reviews", description = "Two-sided reviews"),
        (name = "Listings", description = "Read-only catalog"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;
