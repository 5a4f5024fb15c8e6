use std::str::FromStr;
use tracing::Level;

pub fn setup_tracing(level: &str) {
    let level = Level::from_str(level).unwrap_or(Level::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        // no module name in every log line
        .with_target(false)
        // ANSI color codes garble CloudWatch output
        .with_ansi(false)
        // CloudWatch adds the ingestion time
        .without_time()
        .json()
        .try_init();
}
