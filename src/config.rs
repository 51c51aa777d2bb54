use std::path::PathBuf;

/// Runtime settings, read from `RESERVA_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the JSON collections and the session live.
    pub data_dir: PathBuf,
    /// Where exported CSV reports are written.
    pub report_dir: PathBuf,
    /// Prometheus endpoint port; disabled when unset.
    pub metrics_port: Option<u16>,
    /// When set, log in as this email before reporting.
    pub login_email: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let data_dir = var("RESERVA_DATA_DIR").unwrap_or_else(|| "./data".into());
        let report_dir = var("RESERVA_REPORT_DIR").unwrap_or_else(|| data_dir.clone());
        let metrics_port = var("RESERVA_METRICS_PORT").and_then(|s| s.parse().ok());
        let login_email = var("RESERVA_LOGIN_EMAIL").filter(|s| !s.is_empty());
        Self {
            data_dir: PathBuf::from(data_dir),
            report_dir: PathBuf::from(report_dir),
            metrics_port,
            login_email,
        }
    }
}
