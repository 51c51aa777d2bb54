//! Read-only projections backing the dashboard pages.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::*;
use crate::storage::Storage;
use crate::store::DirectoryStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateScope {
    #[default]
    All,
    Today,
    /// Today and later.
    Upcoming,
    /// Strictly before today.
    Past,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminFilter {
    /// Case-insensitive substring of professor name, purpose or resource name.
    pub search: String,
    pub status: Option<BookingStatus>,
    pub scope: DateScope,
}

/// Bookings for the admin review page, newest `(date, start_time)` first.
pub fn admin_listing<'a, S: Storage>(
    store: &'a DirectoryStore<S>,
    filter: &AdminFilter,
    today: NaiveDate,
) -> Vec<&'a Booking> {
    let today = today.format("%Y-%m-%d").to_string();
    let needle = filter.search.to_lowercase();

    let mut out: Vec<&Booking> = store
        .list_bookings()
        .iter()
        .filter(|b| {
            let in_scope = match filter.scope {
                DateScope::All => true,
                DateScope::Today => b.date == today,
                DateScope::Upcoming => b.date >= today,
                DateScope::Past => b.date < today,
            };
            in_scope && filter.status.is_none_or(|s| b.status == s)
        })
        .filter(|b| {
            if needle.is_empty() {
                return true;
            }
            let professor = store
                .find_professor_by_id(&b.professor_id)
                .map(|p| p.name.to_lowercase())
                .unwrap_or_default();
            let resource = store
                .find_resource_by_id(&b.resource_id)
                .map(|r| r.name.to_lowercase())
                .unwrap_or_default();
            professor.contains(&needle)
                || b.purpose.to_lowercase().contains(&needle)
                || resource.contains(&needle)
        })
        .collect();

    out.sort_by(|a, b| (&b.date, &b.start_time).cmp(&(&a.date, &a.start_time)));
    out
}

/// Bookings grouped by date, dates ascending, insertion order within a date.
pub fn bookings_by_date<S: Storage>(store: &DirectoryStore<S>) -> BTreeMap<Date, Vec<&Booking>> {
    let mut grouped: BTreeMap<Date, Vec<&Booking>> = BTreeMap::new();
    for b in store.list_bookings() {
        grouped.entry(b.date.clone()).or_default().push(b);
    }
    grouped
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_bookings: usize,
    pub pending: usize,
    pub confirmed: usize,
    pub cancelled: usize,
    pub today: usize,
    pub total_resources: usize,
    /// Resources whose manual `available` flag is set.
    pub available_resources: usize,
}

pub fn dashboard_summary<S: Storage>(store: &DirectoryStore<S>, today: NaiveDate) -> DashboardSummary {
    let today = today.format("%Y-%m-%d").to_string();
    let mut summary = DashboardSummary {
        total_resources: store.list_resources().len(),
        available_resources: store.list_resources().iter().filter(|r| r.available).count(),
        ..DashboardSummary::default()
    };
    for b in store.list_bookings() {
        summary.total_bookings += 1;
        match b.status {
            BookingStatus::Pending => summary.pending += 1,
            BookingStatus::Confirmed => summary.confirmed += 1,
            BookingStatus::Cancelled => summary.cancelled += 1,
        }
        if b.date == today {
            summary.today += 1;
        }
    }
    summary
}
