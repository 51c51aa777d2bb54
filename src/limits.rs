/// Max bookings held by one store.
pub const MAX_BOOKINGS: usize = 100_000;

/// Max length of the free-text `purpose` field, in bytes.
pub const MAX_PURPOSE_LEN: usize = 1000;

/// Max length of the `series` (class group) field, in bytes.
pub const MAX_SERIES_LEN: usize = 64;

/// Max length of an id supplied by a caller, in bytes.
pub const MAX_ID_LEN: usize = 64;
