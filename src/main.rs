use std::sync::Arc;

use chrono::Datelike;
use tracing::info;

use reserva::auth::{Credentials, DirectoryAuthenticator};
use reserva::calendar::holidays;
use reserva::config::Config;
use reserva::report::{ReportFilter, export_csv, report_file_name, report_rows};
use reserva::session::SessionManager;
use reserva::storage::FileStorage;
use reserva::store::DirectoryStore;
use reserva::views::dashboard_summary;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env();
    reserva::observability::init(config.metrics_port)?;

    let storage = Arc::new(FileStorage::open(&config.data_dir)?);
    let store = DirectoryStore::open(storage.clone())?;
    info!("reserva data_dir: {}", config.data_dir.display());

    let sessions = SessionManager::new(storage);
    if let Some(email) = &config.login_email {
        let auth = DirectoryAuthenticator::from_store(&store);
        if let Some(previous) = sessions.restore() {
            sessions.logout(previous);
        }
        sessions.login(&auth, &Credentials::email(email.as_str())).await?;
    }
    match sessions.restore() {
        Some(session) => info!("  session: {} ({:?})", session.identity.email, session.identity.role),
        None => info!("  session: none"),
    }

    let today = chrono::Local::now().date_naive();
    if let Some(holiday) = holidays(today.year()).get(&today) {
        info!("  today is a holiday: {holiday}");
    }
    let summary = dashboard_summary(&store, today);
    info!(
        "  bookings: {} total, {} pending, {} confirmed, {} today",
        summary.total_bookings, summary.pending, summary.confirmed, summary.today
    );
    info!(
        "  resources: {} of {} available",
        summary.available_resources, summary.total_resources
    );

    let rows = report_rows(&store, &ReportFilter::default());
    let csv = export_csv(&rows)?;
    std::fs::create_dir_all(&config.report_dir)?;
    let path = config.report_dir.join(report_file_name(today));
    std::fs::write(&path, csv)?;
    info!("report written: {} ({} rows)", path.display(), rows.len());

    store.close();
    Ok(())
}
