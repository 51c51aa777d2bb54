use crate::storage::Storage;
use crate::store::DirectoryStore;

/// Period boundaries of the school day: morning (07:00-12:20), afternoon
/// (13:00-17:30) and evening (19:00-22:30) shifts.
pub const TIME_SLOTS: &[&str] = &[
    "07:00", "07:40", "08:20", "09:00", "09:30", "09:45", "10:25", "11:05", "11:45", "12:20",
    "13:00", "13:40", "14:20", "15:00", "15:30", "15:45", "16:25", "17:05", "17:30",
    "19:00", "19:40", "20:20", "21:00", "21:30", "21:45", "22:25", "22:30",
];

/// Slot boundaries strictly after `start`, i.e. the valid end times once a
/// start has been picked.
pub fn end_slots_after(start: &str) -> impl Iterator<Item = &'static str> + '_ {
    TIME_SLOTS.iter().copied().filter(move |t| *t > start)
}

/// Consecutive `(start, end)` slot pairs on `date` that `resource_id` can take.
pub fn free_slots<S: Storage>(
    store: &DirectoryStore<S>,
    resource_id: &str,
    date: &str,
) -> Vec<(&'static str, &'static str)> {
    TIME_SLOTS
        .windows(2)
        .map(|w| (w[0], w[1]))
        .filter(|(start, end)| store.is_available(resource_id, date, start, end))
        .collect()
}
