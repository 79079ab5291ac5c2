use chrono::Utc;

use reviewbot::api::PracticumClient;
use reviewbot::config;
use reviewbot::notification::TelegramNotifier;
use reviewbot::poller::PollWorker;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load configuration
    let config = config::Config::from_env().map_err(|e| {
        log::error!("Configuration error: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    log::info!(
        "Starting reviewbot, polling every {}s",
        config.poll.interval.as_secs()
    );

    let source = PracticumClient::new(&config.practicum, &config.poll);
    let dispatcher = TelegramNotifier::new(&config.telegram, &config.poll);

    // The first window starts at process start: earlier history is not replayed
    let checkpoint = Utc::now().timestamp();
    let mut worker = PollWorker::new(source, dispatcher, config.poll.interval, checkpoint);

    tokio::select! {
        _ = worker.run() => {}
        _ = shutdown_signal() => {
            log::info!("Shutdown signal received, stopping poller...");
        }
    }

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                // Wait forever if signal handler fails
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
