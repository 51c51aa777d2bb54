//! Brazilian national holidays and the month grid of the calendar page.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use serde::Serialize;

use crate::model::Booking;
use crate::storage::Storage;
use crate::store::DirectoryStore;

const FIXED_HOLIDAYS: &[(u32, u32, &str)] = &[
    (1, 1, "Confraternização Universal"),
    (4, 21, "Tiradentes"),
    (5, 1, "Dia do Trabalhador"),
    (9, 7, "Independência do Brasil"),
    (10, 12, "Nossa Senhora Aparecida"),
    (11, 2, "Finados"),
    (11, 15, "Proclamação da República"),
    (12, 25, "Natal"),
];

/// Gregorian Easter Sunday (anonymous computus).
pub fn easter_date(year: i32) -> Option<NaiveDate> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}

/// National holidays of `year`, keyed by date. Movable feasts follow Easter:
/// Carnival 47 days before, Good Friday 2 days before, Corpus Christi 60 days
/// after. A movable feast replaces a fixed one falling on the same day.
pub fn holidays(year: i32) -> BTreeMap<NaiveDate, &'static str> {
    let mut out: BTreeMap<NaiveDate, &'static str> = FIXED_HOLIDAYS
        .iter()
        .filter_map(|&(month, day, name)| Some((NaiveDate::from_ymd_opt(year, month, day)?, name)))
        .collect();

    if let Some(easter) = easter_date(year) {
        let movable = [
            (easter.checked_sub_days(Days::new(47)), "Carnaval"),
            (easter.checked_sub_days(Days::new(2)), "Sexta-feira Santa"),
            (easter.checked_add_days(Days::new(60)), "Corpus Christi"),
        ];
        out.extend(movable.into_iter().filter_map(|(date, name)| Some((date?, name))));
    }
    out
}

/// Holiday name for a `YYYY-MM-DD` string, if any.
pub fn holiday_on(date: &str) -> Option<&'static str> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
    holidays(date.year()).get(&date).copied()
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub holiday: Option<&'static str>,
    /// Every booking on this date, cancelled ones included, in insertion order.
    pub bookings: Vec<&'a Booking>,
}

/// Every day of `month` with its holiday and bookings. Empty for an
/// out-of-range month.
pub fn month_view<S: Storage>(store: &DirectoryStore<S>, year: i32, month: u32) -> Vec<CalendarDay<'_>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };
    let holidays = holidays(year);

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .map(|date| {
            let key = date.format("%Y-%m-%d").to_string();
            CalendarDay {
                date,
                holiday: holidays.get(&date).copied(),
                bookings: store.find_bookings_by_date(&key),
            }
        })
        .collect()
}
