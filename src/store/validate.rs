use chrono::NaiveDate;

use crate::limits::*;
use crate::model::{BookingRequest, is_valid_date, parse_hhmm};

use super::ValidationError;

/// Form-level checks for a booking request.
///
/// Dates and times must be zero-padded fixed-width strings, since the
/// availability checker compares them lexically. Dates before `today` are
/// refused; `today` itself is accepted.
pub fn validate_request(req: &BookingRequest, today: NaiveDate) -> Result<(), ValidationError> {
    let required = [
        ("professor", &req.professor_id),
        ("resource", &req.resource_id),
        ("date", &req.date),
        ("start time", &req.start_time),
        ("end time", &req.end_time),
        ("series", &req.series),
        ("purpose", &req.purpose),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    if req.professor_id.len() > MAX_ID_LEN || req.resource_id.len() > MAX_ID_LEN {
        return Err(ValidationError::TooLong("id"));
    }
    if req.series.len() > MAX_SERIES_LEN {
        return Err(ValidationError::TooLong("series"));
    }
    if req.purpose.len() > MAX_PURPOSE_LEN {
        return Err(ValidationError::TooLong("purpose"));
    }

    if !is_valid_date(&req.date) {
        return Err(ValidationError::InvalidDate(req.date.clone()));
    }
    if req.date < today.format("%Y-%m-%d").to_string() {
        return Err(ValidationError::DateInPast(req.date.clone()));
    }
    for t in [&req.start_time, &req.end_time] {
        if parse_hhmm(t).is_none() {
            return Err(ValidationError::InvalidTime(t.clone()));
        }
    }
    if req.start_time >= req.end_time {
        return Err(ValidationError::StartNotBeforeEnd {
            start: req.start_time.clone(),
            end: req.end_time.clone(),
        });
    }
    Ok(())
}
