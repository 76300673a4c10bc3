use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file prefix.
pub const LOG_ENV: &str = "REPLYDRAFT_LOG";

/// `{prefix}.{unix_secs}.{pid}`, so concurrent runs never share a file.
fn log_file_path(prefix: &str, unix_secs: u64, pid: u32) -> String {
    format!("{}.{}.{}", prefix, unix_secs, pid)
}

/// Install the global subscriber when `REPLYDRAFT_LOG` is set.
///
/// The TUI draws on stdout/stderr, so there is no console layer. Without the
/// variable this does nothing and every `tracing` macro is a no-op. The level
/// defaults to `info`; `RUST_LOG` overrides it.
pub fn init_tracing() {
    let Ok(prefix) = std::env::var(LOG_ENV) else {
        return;
    };

    let unix_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&prefix, unix_secs, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            // Terminal is not in raw mode yet, so this still reaches the user.
            eprintln!("Warning: cannot create log file {}: {}", path, err);
            return;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_path_is_unique_per_process() {
        assert_eq!(
            log_file_path("/tmp/replydraft.log", 1_700_000_000, 4242),
            "/tmp/replydraft.log.1700000000.4242"
        );
        assert_ne!(
            log_file_path("/tmp/replydraft.log", 1_700_000_000, 1),
            log_file_path("/tmp/replydraft.log", 1_700_000_000, 2)
        );
    }
}
