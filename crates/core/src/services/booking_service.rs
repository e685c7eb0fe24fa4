use crate::app_state::AppState;
use crate::services::chat_service::ChatService;
use rentahan_primitives::error::{ApiError, BookingError};
use rentahan_primitives::models::{
    booking::Booking,
    booking_dto::{BookingResponse, CreateBookingRequest, TransitionRequest},
    enum_types::{BookingAction, BookingState, Role, TransactionKind},
    wallet::NewWalletTransaction,
};
use tracing::{info, warn};
use uuid::Uuid;

/// The booking lifecycle state machine. Every transition runs as one atomic
/// unit inside [`BookingRepository::update_with`]: actor and state guards
/// first, ledger effects next, the state change last — and the stored
/// booking only moves if all of it succeeded.
///
/// [`BookingRepository::update_with`]: crate::repositories::BookingRepository::update_with
pub struct BookingService;

impl BookingService {
    pub async fn create(
        state: &AppState,
        req: CreateBookingRequest,
    ) -> Result<BookingResponse, ApiError> {
        let listing = state
            .listings
            .find(req.listing_id)
            .ok_or(BookingError::ListingNotFound(req.listing_id))?;

        if req.renter_id == listing.owner_id {
            return Err(ApiError::BadRequest(
                "You cannot rent your own listing".into(),
            ));
        }

        let booking = Booking::request(
            &listing,
            req.renter_id,
            req.start_date,
            req.end_date,
            state.config.platform_fee_bps,
        )?;

        let booking = state.bookings.insert_if_available(booking)?;

        ChatService::system_message(
            state,
            booking.id,
            format!(
                "Booking requested for {} — waiting for the owner's response.",
                listing.name
            ),
        );
        state
            .notifier
            .notify(listing.owner_id, "New booking request for your listing")
            .await?;

        info!("booking.create: booking {} requested", booking.id);
        Ok(booking.into())
    }

    pub async fn get(state: &AppState, booking_id: Uuid) -> Result<BookingResponse, ApiError> {
        let booking = state.bookings.find(booking_id)?;
        Ok(booking.into())
    }

    /// Owner accepts a request. The renter is charged the rental subtotal
    /// (balance-checked) and the deposit hold is recorded in the same ledger
    /// batch; if either is refused the booking stays `Requested`.
    pub async fn accept(
        state: &AppState,
        booking_id: Uuid,
        req: TransitionRequest,
    ) -> Result<BookingResponse, ApiError> {
        let updated = state.bookings.update_with(booking_id, |booking| {
            check_version(booking, req.expected_version)?;
            require_role(booking, req.actor_id, Role::Owner, BookingAction::Accept)?;
            if booking.state != BookingState::Requested {
                return Err(BookingError::InvalidStateTransition {
                    action: BookingAction::Accept,
                    state: booking.state,
                }
                .into());
            }

            state.wallets.apply_batches(vec![(
                booking.renter_id,
                vec![
                    NewWalletTransaction::new(
                        TransactionKind::RentalPayment,
                        -booking.rental_subtotal.centavos(),
                        Some(booking.id),
                    ),
                    NewWalletTransaction::new(
                        TransactionKind::DepositHold,
                        -booking.deposit_amount.centavos(),
                        Some(booking.id),
                    ),
                ],
            )])?;

            booking.record_transition(BookingState::Accepted, req.actor_id);
            Ok(())
        })?;

        ChatService::system_message(
            state,
            booking_id,
            format!(
                "Booking accepted — {} rental charged and {} deposit held.",
                updated.rental_subtotal, updated.deposit_amount
            ),
        );
        state
            .notifier
            .notify(updated.renter_id, "Your booking request was accepted")
            .await?;

        info!("booking.accept: booking {} accepted", booking_id);
        Ok(updated.into())
    }

    pub async fn decline(
        state: &AppState,
        booking_id: Uuid,
        req: TransitionRequest,
    ) -> Result<BookingResponse, ApiError> {
        let updated = state.bookings.update_with(booking_id, |booking| {
            check_version(booking, req.expected_version)?;
            require_role(booking, req.actor_id, Role::Owner, BookingAction::Decline)?;
            if booking.state != BookingState::Requested {
                return Err(BookingError::InvalidStateTransition {
                    action: BookingAction::Decline,
                    state: booking.state,
                }
                .into());
            }

            booking.record_transition(BookingState::Declined, req.actor_id);
            Ok(())
        })?;

        state
            .notifier
            .notify(updated.renter_id, "Your booking request was declined")
            .await?;

        info!("booking.decline: booking {} declined", booking_id);
        Ok(updated.into())
    }

    /// Two-sided pickup handshake. The first confirmation parks the booking
    /// in the state naming the party still missing; the second makes it
    /// `Active`. Either side may go first.
    pub async fn confirm_pickup(
        state: &AppState,
        booking_id: Uuid,
        req: TransitionRequest,
    ) -> Result<BookingResponse, ApiError> {
        let updated = state.bookings.update_with(booking_id, |booking| {
            check_version(booking, req.expected_version)?;
            let role = any_role(booking, req.actor_id, BookingAction::ConfirmPickup)?;

            let to = match (role, booking.state) {
                (Role::Owner, BookingState::Accepted) => BookingState::PickupPendingRenter,
                (Role::Renter, BookingState::Accepted) => BookingState::PickupPendingOwner,
                (Role::Renter, BookingState::PickupPendingRenter) => BookingState::Active,
                (Role::Owner, BookingState::PickupPendingOwner) => BookingState::Active,
                _ => {
                    return Err(BookingError::InvalidStateTransition {
                        action: BookingAction::ConfirmPickup,
                        state: booking.state,
                    }
                    .into())
                }
            };

            booking.record_transition(to, req.actor_id);
            Ok(())
        })?;

        if updated.state == BookingState::Active {
            ChatService::system_message(
                state,
                booking_id,
                "Pickup confirmed by both parties — the rental is now active.".to_string(),
            );
        }

        info!(
            "booking.pickup: booking {} now {}",
            booking_id, updated.state
        );
        Ok(updated.into())
    }

    /// Two-sided return handshake, mirroring pickup. The confirmation that
    /// lands in `Completed` also settles the money: deposit released to the
    /// renter, earnings paid out to the owner net of the platform fee.
    pub async fn confirm_return(
        state: &AppState,
        booking_id: Uuid,
        req: TransitionRequest,
    ) -> Result<BookingResponse, ApiError> {
        let updated = state.bookings.update_with(booking_id, |booking| {
            check_version(booking, req.expected_version)?;
            let role = any_role(booking, req.actor_id, BookingAction::ConfirmReturn)?;

            let to = match (role, booking.state) {
                (Role::Renter, BookingState::Active) => BookingState::ReturnPendingOwner,
                (Role::Owner, BookingState::Active) => BookingState::ReturnPendingRenter,
                (Role::Owner, BookingState::ReturnPendingOwner) => BookingState::Completed,
                (Role::Renter, BookingState::ReturnPendingRenter) => BookingState::Completed,
                _ => {
                    return Err(BookingError::InvalidStateTransition {
                        action: BookingAction::ConfirmReturn,
                        state: booking.state,
                    }
                    .into())
                }
            };

            if to == BookingState::Completed {
                state.wallets.apply_batches(vec![
                    (
                        booking.renter_id,
                        vec![NewWalletTransaction::new(
                            TransactionKind::DepositRelease,
                            booking.deposit_amount.centavos(),
                            Some(booking.id),
                        )],
                    ),
                    (
                        booking.owner_id,
                        vec![
                            NewWalletTransaction::new(
                                TransactionKind::EarningPayout,
                                booking.rental_subtotal.centavos(),
                                Some(booking.id),
                            ),
                            NewWalletTransaction::new(
                                TransactionKind::PlatformFee,
                                -booking.platform_fee.centavos(),
                                Some(booking.id),
                            ),
                        ],
                    ),
                ])?;
            }

            booking.record_transition(to, req.actor_id);
            Ok(())
        })?;

        if updated.state == BookingState::Completed {
            ChatService::system_message(
                state,
                booking_id,
                format!(
                    "Item returned — {} deposit released and {} paid out to the owner.",
                    updated.deposit_amount, updated.owner_earning
                ),
            );
            state
                .notifier
                .notify(updated.renter_id, "Your deposit has been released")
                .await?;
        }

        info!(
            "booking.return: booking {} now {}",
            booking_id, updated.state
        );
        Ok(updated.into())
    }

    /// Either party may cancel strictly before the rental is active. If the
    /// accept-time holds were taken they are reversed in full.
    pub async fn cancel(
        state: &AppState,
        booking_id: Uuid,
        req: TransitionRequest,
    ) -> Result<BookingResponse, ApiError> {
        let updated = state.bookings.update_with(booking_id, |booking| {
            check_version(booking, req.expected_version)?;
            any_role(booking, req.actor_id, BookingAction::Cancel)?;
            if !booking.state.is_pre_active() {
                return Err(BookingError::InvalidStateTransition {
                    action: BookingAction::Cancel,
                    state: booking.state,
                }
                .into());
            }

            if booking.state.holds_taken() {
                state.wallets.apply_batches(vec![(
                    booking.renter_id,
                    vec![
                        NewWalletTransaction::new(
                            TransactionKind::RentalPayment,
                            booking.rental_subtotal.centavos(),
                            Some(booking.id),
                        ),
                        NewWalletTransaction::new(
                            TransactionKind::DepositRelease,
                            booking.deposit_amount.centavos(),
                            Some(booking.id),
                        ),
                    ],
                )])?;
            }

            booking.record_transition(BookingState::Cancelled, req.actor_id);
            Ok(())
        })?;

        ChatService::system_message(
            state,
            booking_id,
            "Booking cancelled.".to_string(),
        );

        info!("booking.cancel: booking {} cancelled", booking_id);
        Ok(updated.into())
    }
}

fn check_version(booking: &Booking, expected: Option<i64>) -> Result<(), ApiError> {
    if let Some(expected) = expected {
        if expected != booking.version {
            return Err(BookingError::StaleVersion {
                expected,
                found: booking.version,
            }
            .into());
        }
    }
    Ok(())
}

fn require_role(
    booking: &Booking,
    actor_id: Uuid,
    role: Role,
    action: BookingAction,
) -> Result<(), ApiError> {
    if booking.role_of(actor_id) != Some(role) {
        warn!("booking.{}: actor {} lacks the {} role", action, actor_id, role);
        return Err(BookingError::UnauthorizedTransition { actor_id, action }.into());
    }
    Ok(())
}

fn any_role(booking: &Booking, actor_id: Uuid, action: BookingAction) -> Result<Role, ApiError> {
    booking.role_of(actor_id).ok_or_else(|| {
        warn!("booking.{}: actor {} is not a party", action, actor_id);
        BookingError::UnauthorizedTransition { actor_id, action }.into()
    })
}
