use serde::{Deserialize, Serialize};

/// Calendar date as `YYYY-MM-DD`. Zero-padded, so lexical order is date order.
pub type Date = String;

/// Time of day as `HH:MM`. Zero-padded, so lexical order is time order.
pub type TimeOfDay = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Professor,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Professor {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Chromebook,
    #[serde(alias = "lab-quimica")]
    LabQuimica,
    #[serde(alias = "lab-fisica")]
    LabFisica,
    Audiovisual,
    Outro,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Manually maintained flag. Not derived from bookings.
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[serde(alias = "pendente")]
    Pending,
    #[serde(alias = "confirmado")]
    Confirmed,
    #[serde(alias = "cancelado")]
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A reservation of one resource for one `[start_time, end_time)` window on one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredBooking")]
pub struct Booking {
    pub id: String,
    pub professor_id: String,
    pub resource_id: String,
    pub date: Date,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub series: String,
    pub purpose: String,
    pub status: BookingStatus,
    pub created_at: String,
}

/// On-disk booking record. Accepts both the canonical `startTime`/`endTime`
/// shape and the older `time` + `duration` (minutes) shape.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredBooking {
    id: String,
    professor_id: String,
    resource_id: String,
    date: Date,
    start_time: Option<TimeOfDay>,
    end_time: Option<TimeOfDay>,
    time: Option<TimeOfDay>,
    duration: Option<u32>,
    #[serde(default)]
    series: String,
    #[serde(default)]
    purpose: String,
    status: BookingStatus,
    #[serde(default)]
    created_at: String,
}

impl TryFrom<StoredBooking> for Booking {
    type Error = String;

    fn try_from(raw: StoredBooking) -> Result<Self, Self::Error> {
        let (start_time, end_time) = match (raw.start_time, raw.end_time, raw.time, raw.duration) {
            (Some(start), Some(end), _, _) => (start, end),
            (_, _, Some(time), Some(duration)) => {
                let end = add_minutes(&time, duration)
                    .ok_or_else(|| format!("booking {}: bad legacy time {time:?}", raw.id))?;
                if parse_hhmm(&time).is_some_and(|start| start.saturating_add(duration) > LAST_MINUTE) {
                    tracing::warn!(
                        id = %raw.id,
                        time = %time,
                        duration,
                        "legacy booking runs past midnight, end clamped to {end}"
                    );
                }
                (time, end)
            }
            _ => return Err(format!("booking {}: missing time window", raw.id)),
        };
        Ok(Booking {
            id: raw.id,
            professor_id: raw.professor_id,
            resource_id: raw.resource_id,
            date: raw.date,
            start_time,
            end_time,
            series: raw.series,
            purpose: raw.purpose,
            status: raw.status,
            created_at: raw.created_at,
        })
    }
}

/// Parse `HH:MM` into minutes since midnight.
pub fn parse_hhmm(s: &str) -> Option<u32> {
    let bytes = s.as_bytes();
    if bytes.len() != 5
        || bytes[2] != b':'
        || !bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit)
    {
        return None;
    }
    let hours: u32 = s[..2].parse().ok()?;
    let minutes: u32 = s[3..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

/// `23:59` in minutes since midnight.
const LAST_MINUTE: u32 = 23 * 60 + 59;

/// `HH:MM` plus `minutes`, clamped to the same day (`23:59` at most).
pub fn add_minutes(time: &str, minutes: u32) -> Option<TimeOfDay> {
    let total = parse_hhmm(time)?.saturating_add(minutes).min(LAST_MINUTE);
    Some(format!("{:02}:{:02}", total / 60, total % 60))
}

/// Check a `YYYY-MM-DD` string: fixed width, digits, and a real calendar date.
pub fn is_valid_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    shaped && chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

/// Fields a caller supplies when creating a booking. Id and creation time are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBooking {
    pub professor_id: String,
    pub resource_id: String,
    pub date: Date,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub series: String,
    pub purpose: String,
    pub status: BookingStatus,
}

/// Shallow partial update. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingPatch {
    pub resource_id: Option<String>,
    pub date: Option<Date>,
    pub start_time: Option<TimeOfDay>,
    pub end_time: Option<TimeOfDay>,
    pub series: Option<String>,
    pub purpose: Option<String>,
    pub status: Option<BookingStatus>,
}

impl BookingPatch {
    pub fn status(status: BookingStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, booking: &mut Booking) {
        if let Some(v) = self.resource_id {
            booking.resource_id = v;
        }
        if let Some(v) = self.date {
            booking.date = v;
        }
        if let Some(v) = self.start_time {
            booking.start_time = v;
        }
        if let Some(v) = self.end_time {
            booking.end_time = v;
        }
        if let Some(v) = self.series {
            booking.series = v;
        }
        if let Some(v) = self.purpose {
            booking.purpose = v;
        }
        if let Some(v) = self.status {
            booking.status = v;
        }
    }
}

/// Raw booking form input, before validation. Empty strings mean "not filled in".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub professor_id: String,
    pub resource_id: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub series: String,
    pub purpose: String,
}

/// Who is logged in. A projection of [`Professor`] without the department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<&Professor> for Identity {
    fn from(p: &Professor) -> Self {
        Self {
            id: p.id.clone(),
            name: p.name.clone(),
            email: p.email.clone(),
            role: p.role,
        }
    }
}
