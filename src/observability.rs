use std::net::SocketAddr;

/// Counter: bookings appended to the store.
pub const BOOKINGS_CREATED_TOTAL: &str = "reserva_bookings_created_total";

/// Counter: booking requests rejected because the window was taken.
pub const BOOKING_CONFLICTS_TOTAL: &str = "reserva_booking_conflicts_total";

/// Counter: admin/owner status changes. Labels: to.
pub const STATUS_TRANSITIONS_TOTAL: &str = "reserva_status_transitions_total";

/// Counter: storage writes that failed and were skipped. Labels: key.
pub const STORAGE_WRITE_FAILURES_TOTAL: &str = "reserva_storage_write_failures_total";

/// Counter: rejected logins.
pub const AUTH_FAILURES_TOTAL: &str = "reserva_auth_failures_total";

/// Install Prometheus metrics exporter on the given port. No-op if port is None.
pub fn init(port: Option<u16>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(port) = port else { return Ok(()) };
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();
    metrics_exporter_prometheus::PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()?;
    tracing::info!("metrics endpoint: http://0.0.0.0:{port}/metrics");
    Ok(())
}
