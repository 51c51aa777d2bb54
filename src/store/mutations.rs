use chrono::{NaiveDate, SecondsFormat, Utc};
use tracing::{debug, info};
use ulid::Ulid;

use crate::limits::*;
use crate::model::*;
use crate::storage::Storage;

use super::validate::validate_request;
use super::{DirectoryStore, StoreError};

pub(crate) fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl<S: Storage> DirectoryStore<S> {
    /// Append a booking with a fresh id and creation timestamp.
    ///
    /// No validation or conflict check; see [`DirectoryStore::request_booking`].
    pub fn create_booking(&mut self, new: NewBooking) -> Booking {
        let booking = Booking {
            id: Ulid::new().to_string(),
            professor_id: new.professor_id,
            resource_id: new.resource_id,
            date: new.date,
            start_time: new.start_time,
            end_time: new.end_time,
            series: new.series,
            purpose: new.purpose,
            status: new.status,
            created_at: now_iso(),
        };
        self.bookings.push(booking.clone());
        self.persist();
        metrics::counter!(crate::observability::BOOKINGS_CREATED_TOTAL).increment(1);
        info!(
            "booking {} created: resource {} on {} [{}, {})",
            booking.id, booking.resource_id, booking.date, booking.start_time, booking.end_time
        );
        booking
    }

    /// Shallow merge of `patch` into the booking. `None` if the id is unknown,
    /// in which case nothing is touched.
    pub fn update_booking(&mut self, id: &str, patch: BookingPatch) -> Option<Booking> {
        let booking = self.bookings.iter_mut().find(|b| b.id == id)?;
        patch.apply(booking);
        let updated = booking.clone();
        self.persist();
        debug!("booking {id} updated");
        Some(updated)
    }

    /// Returns whether a booking was removed.
    pub fn delete_booking(&mut self, id: &str) -> bool {
        let Some(pos) = self.bookings.iter().position(|b| b.id == id) else {
            return false;
        };
        self.bookings.remove(pos);
        self.persist();
        info!("booking {id} deleted");
        true
    }

    /// Validate a form submission, check the window is free, and store it as
    /// a pending booking awaiting admin review. `today` is the caller's local
    /// date; earlier dates are refused.
    pub fn request_booking(&mut self, req: BookingRequest, today: NaiveDate) -> Result<Booking, StoreError> {
        validate_request(&req, today)?;

        if self.find_professor_by_id(&req.professor_id).is_none() {
            return Err(StoreError::UnknownProfessor(req.professor_id));
        }
        let resource = self
            .find_resource_by_id(&req.resource_id)
            .ok_or_else(|| StoreError::UnknownResource(req.resource_id.clone()))?;
        if !resource.available {
            return Err(StoreError::ResourceUnavailable(req.resource_id));
        }
        if let Some(existing) =
            self.conflicting_booking(&req.resource_id, &req.date, &req.start_time, &req.end_time)
        {
            metrics::counter!(crate::observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            return Err(StoreError::Conflict(existing.id.clone()));
        }
        if self.bookings.len() >= MAX_BOOKINGS {
            return Err(StoreError::LimitExceeded("too many bookings"));
        }

        Ok(self.create_booking(NewBooking {
            professor_id: req.professor_id,
            resource_id: req.resource_id,
            date: req.date,
            start_time: req.start_time,
            end_time: req.end_time,
            series: req.series,
            purpose: req.purpose,
            status: BookingStatus::Pending,
        }))
    }

    /// Admin approval: `pending → confirmed`.
    pub fn approve_booking(&mut self, id: &str) -> Result<Option<Booking>, StoreError> {
        self.transition(id, &[BookingStatus::Pending], BookingStatus::Confirmed)
    }

    /// Admin rejection: `pending → cancelled`.
    pub fn reject_booking(&mut self, id: &str) -> Result<Option<Booking>, StoreError> {
        self.transition(id, &[BookingStatus::Pending], BookingStatus::Cancelled)
    }

    /// Withdraw a pending or confirmed booking.
    pub fn cancel_booking(&mut self, id: &str) -> Result<Option<Booking>, StoreError> {
        self.transition(
            id,
            &[BookingStatus::Pending, BookingStatus::Confirmed],
            BookingStatus::Cancelled,
        )
    }

    fn transition(
        &mut self,
        id: &str,
        allowed_from: &[BookingStatus],
        to: BookingStatus,
    ) -> Result<Option<Booking>, StoreError> {
        let Some(current) = self.find_booking(id).map(|b| b.status) else {
            return Ok(None);
        };
        if !allowed_from.contains(&current) {
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                from: current,
                to,
            });
        }
        let updated = self.update_booking(id, BookingPatch::status(to));
        metrics::counter!(crate::observability::STATUS_TRANSITIONS_TOTAL, "to" => to.as_str())
            .increment(1);
        info!("booking {id}: {current} -> {to}");
        Ok(updated)
    }
}
