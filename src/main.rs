use clap::Parser;
use slotbook::utils::logger;
use slotbook::{
    format_slot_time, BookingService, CliConfig, LogNotifier, MemoryRepository,
    ScheduleConfigProvider, WebhookNotifier,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting slotbook");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let window = match config.window() {
        Ok(window) => window,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    };

    let repo = Arc::new(MemoryRepository::new(window));

    let available = match config.notify_endpoint() {
        Some(endpoint) => {
            tracing::info!(endpoint, "notifications will be posted as webhooks");
            let service =
                BookingService::new(repo, Arc::new(WebhookNotifier::new(endpoint)), window);
            service.list_available().await?
        }
        None => {
            let service = BookingService::new(repo, Arc::new(LogNotifier), window);
            service.list_available().await?
        }
    };

    println!(
        "✅ Booking window [{} .. {}) at {}-minute slots",
        window.start,
        window.end,
        window.granularity_minutes()
    );
    println!("📅 {} slots available:", available.len());
    for slot in available {
        println!("  {}  ({})", slot.to_rfc3339(), format_slot_time(slot));
    }

    Ok(())
}
