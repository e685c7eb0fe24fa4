use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

/// Kind of a wallet ledger entry. The sign convention lives with the entry
/// amount, not the kind: holds and payments are negative deltas, releases,
/// top-ups and payouts positive ones.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TransactionKind {
    TopUp,
    RentalPayment,
    DepositHold,
    DepositRelease,
    EarningPayout,
    PlatformFee,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PaymentProvider {
    Gcash,
    Maya,
    Card,
    Bank,
}

/// Lifecycle of a top-up payment intent with the external gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentState {
    Pending,
    RequiresAction,
    Completed,
    Failed,
    Cancelled,
}

/// Booking lifecycle. Pickup and return are two-sided handshakes: the first
/// confirmation parks the booking in the state naming the party whose
/// confirmation is still missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookingState {
    Requested,
    Accepted,
    PickupPendingOwner,
    PickupPendingRenter,
    Active,
    ReturnPendingRenter,
    ReturnPendingOwner,
    Completed,
    Declined,
    Cancelled,
}

impl BookingState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            BookingState::Completed | BookingState::Declined | BookingState::Cancelled
        )
    }

    /// States in which the accept-time ledger holds have been taken and a
    /// cancellation must reverse them.
    pub fn holds_taken(self) -> bool {
        matches!(
            self,
            BookingState::Accepted
                | BookingState::PickupPendingOwner
                | BookingState::PickupPendingRenter
        )
    }

    pub fn is_pre_active(self) -> bool {
        matches!(
            self,
            BookingState::Requested
                | BookingState::Accepted
                | BookingState::PickupPendingOwner
                | BookingState::PickupPendingRenter
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BookingAction {
    Accept,
    Decline,
    ConfirmPickup,
    ConfirmReturn,
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Owner,
    Renter,
}

/// Who or what a review is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubjectKind {
    Owner,
    Renter,
    Item,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageKind {
    Text,
    Location,
    System,
}
