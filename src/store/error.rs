use crate::model::BookingStatus;

/// Booking form input rejected before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingField(&'static str),
    InvalidDate(String),
    DateInPast(String),
    InvalidTime(String),
    StartNotBeforeEnd { start: String, end: String },
    TooLong(&'static str),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "all fields are required: {field} is empty"),
            ValidationError::InvalidDate(d) => write!(f, "invalid date {d:?}: expected YYYY-MM-DD"),
            ValidationError::DateInPast(d) => write!(f, "date {d} is in the past"),
            ValidationError::InvalidTime(t) => write!(f, "invalid time {t:?}: expected HH:MM"),
            ValidationError::StartNotBeforeEnd { start, end } => {
                write!(f, "start time {start} must be before end time {end}")
            }
            ValidationError::TooLong(field) => write!(f, "{field} too long"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    Invalid(ValidationError),
    UnknownProfessor(String),
    UnknownResource(String),
    ResourceUnavailable(String),
    /// The requested window overlaps this active booking.
    Conflict(String),
    InvalidTransition {
        id: String,
        from: BookingStatus,
        to: BookingStatus,
    },
    LimitExceeded(&'static str),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Invalid(e) => write!(f, "invalid booking: {e}"),
            StoreError::UnknownProfessor(id) => write!(f, "unknown professor: {id}"),
            StoreError::UnknownResource(id) => write!(f, "unknown resource: {id}"),
            StoreError::ResourceUnavailable(id) => write!(f, "resource {id} is not available"),
            StoreError::Conflict(id) => write!(f, "conflict with booking: {id}"),
            StoreError::InvalidTransition { id, from, to } => {
                write!(f, "booking {id} cannot move from {from} to {to}")
            }
            StoreError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Invalid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(e: ValidationError) -> Self {
        StoreError::Invalid(e)
    }
}
