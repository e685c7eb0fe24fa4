use crate::models::enum_types::{BookingAction, BookingState, SubjectKind};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;
use http::StatusCode;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Ledger and money arithmetic failures. `Corruption` and `AccountFrozen`
/// indicate an internal fault; they must never reach a caller in a form that
/// suggests the user can fix anything.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("amount must not be negative")]
    NegativeAmount,
    #[error("insufficient funds: balance is {balance} centavos, attempted debit of {debit}")]
    InsufficientFunds { balance: i64, debit: i64 },
    #[error("wallet account {0} not found")]
    AccountNotFound(Uuid),
    #[error("wallet account {0} is frozen")]
    AccountFrozen(Uuid),
    #[error("ledger corruption on account {account_id}: cached balance {cached}, log sum {summed}")]
    Corruption {
        account_id: Uuid,
        cached: i64,
        summed: i64,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("booking {0} not found")]
    NotFound(Uuid),
    #[error("listing {0} not found")]
    ListingNotFound(Uuid),
    #[error("invalid date range: {start} to {end}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
    #[error("listing {listing_id} is already booked within {start} to {end}")]
    DateConflict {
        listing_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    },
    #[error("cannot {action} a booking in the {state} state")]
    InvalidStateTransition {
        action: BookingAction,
        state: BookingState,
    },
    #[error("user {actor_id} is not allowed to {action} this booking")]
    UnauthorizedTransition { actor_id: Uuid, action: BookingAction },
    #[error("booking changed concurrently: expected version {expected}, found {found}")]
    StaleVersion { expected: i64, found: i64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReviewError {
    #[error("booking {0} is not completed yet")]
    BookingNotCompleted(Uuid),
    #[error("a {subject_kind} review for this booking already exists")]
    DuplicateReview { subject_kind: SubjectKind },
    #[error("user {author_id} may not review the {subject_kind} of this booking")]
    WrongReviewer {
        author_id: Uuid,
        subject_kind: SubjectKind,
    },
    #[error("unknown review tag: {0}")]
    UnknownTag(String),
}

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("payment gateway request failed")]
    RequestFailed,
    #[error("payment gateway declined the charge: {0}")]
    Declined(String),
}

#[derive(Debug, Error)]
pub enum OtpError {
    #[error("OTP service request failed")]
    RequestFailed,
    #[error("the OTP code was not accepted")]
    CodeRejected,
}

#[derive(Debug)]
pub enum ApiError {
    Validation(validator::ValidationErrors),
    BadRequest(String),
    NotFound(String),
    Booking(BookingError),
    Ledger(LedgerError),
    Review(ReviewError),
    Gateway(GatewayError),
    Otp(OtpError),
    MessageBlocked(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::BadRequest(e) => write!(f, "Bad request: {}", e),
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::Booking(e) => write!(f, "Booking error: {}", e),
            ApiError::Ledger(e) => write!(f, "Ledger error: {}", e),
            ApiError::Review(e) => write!(f, "Review error: {}", e),
            ApiError::Gateway(e) => write!(f, "Payment gateway error: {}", e),
            ApiError::Otp(e) => write!(f, "OTP error: {}", e),
            ApiError::MessageBlocked(e) => write!(f, "Message blocked: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Validation(e) => Some(e),
            ApiError::Booking(e) => Some(e),
            ApiError::Ledger(e) => Some(e),
            ApiError::Review(e) => Some(e),
            ApiError::Gateway(e) => Some(e),
            ApiError::Otp(e) => Some(e),
            _ => None,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<BookingError> for ApiError {
    fn from(err: BookingError) -> Self {
        ApiError::Booking(err)
    }
}

impl From<LedgerError> for ApiError {
    fn from(err: LedgerError) -> Self {
        ApiError::Ledger(err)
    }
}

impl From<ReviewError> for ApiError {
    fn from(err: ReviewError) -> Self {
        ApiError::Review(err)
    }
}

impl From<GatewayError> for ApiError {
    fn from(err: GatewayError) -> Self {
        ApiError::Gateway(err)
    }
}

impl From<OtpError> for ApiError {
    fn from(err: OtpError) -> Self {
        ApiError::Otp(err)
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Booking(e) => match e {
                BookingError::NotFound(_) | BookingError::ListingNotFound(_) => {
                    (StatusCode::NOT_FOUND, e.to_string())
                }
                BookingError::InvalidDateRange { .. } => (StatusCode::BAD_REQUEST, e.to_string()),
                BookingError::UnauthorizedTransition { .. } => {
                    (StatusCode::FORBIDDEN, e.to_string())
                }
                BookingError::DateConflict { .. }
                | BookingError::InvalidStateTransition { .. }
                | BookingError::StaleVersion { .. } => (StatusCode::CONFLICT, e.to_string()),
            },
            ApiError::Ledger(e) => match e {
                LedgerError::NegativeAmount => (StatusCode::BAD_REQUEST, e.to_string()),
                LedgerError::InsufficientFunds { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
                }
                LedgerError::AccountNotFound(_) => (StatusCode::NOT_FOUND, e.to_string()),
                // Invariant breaches are a system fault; give the caller
                // nothing that reads as user-correctable.
                LedgerError::AccountFrozen(_) | LedgerError::Corruption { .. } => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal ledger error".to_string(),
                ),
            },
            ApiError::Review(e) => match e {
                ReviewError::BookingNotCompleted(_) | ReviewError::DuplicateReview { .. } => {
                    (StatusCode::CONFLICT, e.to_string())
                }
                ReviewError::WrongReviewer { .. } => (StatusCode::FORBIDDEN, e.to_string()),
                ReviewError::UnknownTag(_) => (StatusCode::BAD_REQUEST, e.to_string()),
            },
            ApiError::Gateway(e) => (StatusCode::BAD_GATEWAY, format!("{}. Please try again.", e)),
            ApiError::Otp(e) => match e {
                OtpError::RequestFailed => {
                    (StatusCode::BAD_GATEWAY, format!("{}. Please try again.", e))
                }
                OtpError::CodeRejected => (StatusCode::BAD_REQUEST, e.to_string()),
            },
            ApiError::MessageBlocked(reason) => (StatusCode::BAD_REQUEST, reason),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Internal error: {}", msg),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body): (StatusCode, String) = self.into();
        (status, body).into_response()
    }
}
