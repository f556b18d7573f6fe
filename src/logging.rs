/// Logging setup for the susceptibility service
///
/// Library code logs through the `log` facade only. Binaries call `init`
/// once at startup to install an env_logger backend writing lines of the
/// form:
///
/// ```text
/// 2026-10-19 08:15:02 UTC INFO  bhukamp_service::store: loaded 5000 catalog records from data/EarthquakeFeatures.csv
/// ```
///
/// The configured level is a default; `RUST_LOG` takes precedence.

use chrono::Utc;
use std::io::Write;

use crate::config::LoggingConfig;

/// Installs the global logger. Safe to call more than once; later calls
/// are ignored.
pub fn init(config: &LoggingConfig) {
    let env = env_logger::Env::default().default_filter_or(config.level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {:<5} {}: {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();
}
