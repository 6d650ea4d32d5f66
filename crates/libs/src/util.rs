use std::{path::PathBuf, sync::Arc};

use tokio::sync::Notify;

/// Waits for Ctrl-C (or SIGTERM on unix) and wakes every task parked on `notify`.
pub async fn listen_for_shutdown(notify: Arc<Notify>) {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => {},
                    _ = sigterm.recv() => {},
                }
            }
            Err(e) => {
                tracing::warn!("cannot install SIGTERM handler, falling back to ctrl-c: {e}");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }

    #[cfg(not(unix))]
    tokio::signal::ctrl_c().await.ok();

    tracing::info!("shutdown signal received – starting graceful shutdown");
    notify.notify_waiters();
}

/// Per-user configuration directory of the service, created on first use.
pub fn get_config_dir() -> std::io::Result<PathBuf> {
    let mut config_dir = dirs::config_dir().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "no config directory for this user")
    })?;
    config_dir.push("picture_store");
    std::fs::create_dir_all(&config_dir)?;
    Ok(config_dir)
}

/// Resolves `file` against `base` unless it is already absolute.
pub fn resolve_path(base: &std::path::Path, file: &str) -> PathBuf {
    base.join(file)
}
