//! Myfxbook → Notion trade sync - Main Entry Point

use fxbook_notion_sync::*;
use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::time::{self, MissedTickBehavior};
use tracing::{error, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    utils::setup_output_directories()?;
    let _logging_guard = utils::setup_logging()?;

    // Load configuration
    let config = CONFIG.clone();

    info!("🔄 Myfxbook → Notion Trade Sync v{}", env!("CARGO_PKG_VERSION"));
    utils::print_configuration(&config);

    // Validate configuration
    config.validate()?;

    // Initialize components
    let http = network::build_http_client(&config)?;
    let myfxbook = myfxbook::MyfxbookClient::new(http.clone(), &config);
    let notion = notion::NotionClient::new(http, &config)?;

    let start_time = Instant::now();
    let mut stats = sync::SessionStats::default();

    let mut shutdown = std::pin::pin!(tokio::signal::ctrl_c());

    info!("\n🚀 Starting sync loop...\n");

    let mut interval = time::interval(Duration::from_secs(config.sync_interval_secs));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                let cycle_start = Instant::now();
                match sync::run_cycle(&myfxbook, &notion, &config).await {
                    Ok(report) => {
                        report.log_summary(cycle_start.elapsed());
                        stats.absorb(&report);
                    }
                    Err(e) => {
                        error!("Sync cycle error: {}", e);
                        stats.record_failed_cycle();
                    }
                }
            }
            _ = &mut shutdown => {
                info!("\n📛 Received shutdown signal (Ctrl+C), exiting sync loop...");
                break;
            }
        }
    }

    utils::print_final_statistics(start_time, &stats);

    Ok(())
}
