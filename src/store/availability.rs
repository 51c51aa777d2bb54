use crate::model::*;
use crate::storage::Storage;

use super::DirectoryStore;

/// Half-open overlap test on `HH:MM` strings.
///
/// `[start, end)` against an existing `[existing_start, existing_end)`.
/// Windows that only touch at an endpoint do not overlap.
pub fn windows_overlap(start: &str, end: &str, existing_start: &str, existing_end: &str) -> bool {
    (start >= existing_start && start < existing_end)
        || (end > existing_start && end <= existing_end)
        || (start <= existing_start && end >= existing_end)
}

/// First active booking on `resource_id`/`date` overlapping `[start, end)`.
/// Cancelled bookings never conflict.
pub fn conflicting_booking<'a>(
    bookings: &'a [Booking],
    resource_id: &str,
    date: &str,
    start: &str,
    end: &str,
) -> Option<&'a Booking> {
    bookings.iter().find(|b| {
        b.resource_id == resource_id
            && b.date == date
            && b.status.is_active()
            && windows_overlap(start, end, &b.start_time, &b.end_time)
    })
}

/// Whether `[start, end)` on `date` can be booked on `resource_id`.
///
/// The resource must exist and carry `available == true`. Callers ensure
/// `start < end`; this is not re-checked.
pub fn is_available(
    resources: &[Resource],
    bookings: &[Booking],
    resource_id: &str,
    date: &str,
    start: &str,
    end: &str,
) -> bool {
    match resources.iter().find(|r| r.id == resource_id) {
        Some(r) if r.available => {}
        _ => return false,
    }
    conflicting_booking(bookings, resource_id, date, start, end).is_none()
}

impl<S: Storage> DirectoryStore<S> {
    pub fn is_available(&self, resource_id: &str, date: &str, start: &str, end: &str) -> bool {
        is_available(&self.resources, &self.bookings, resource_id, date, start, end)
    }

    pub fn conflicting_booking(
        &self,
        resource_id: &str,
        date: &str,
        start: &str,
        end: &str,
    ) -> Option<&Booking> {
        conflicting_booking(&self.bookings, resource_id, date, start, end)
    }
}
