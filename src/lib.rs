pub mod auth;
pub mod calendar;
pub mod config;
pub mod limits;
pub mod model;
pub mod observability;
pub mod report;
pub mod schedule;
pub mod session;
pub mod storage;
pub mod store;
pub mod views;
