//! Display and printing utilities

use std::time::Instant;
use tracing::info;
use crate::{config::Config, sync::SessionStats};

pub fn print_configuration(config: &Config) {
    info!("📋 Configuration:");
    info!("   Myfxbook API: {}", config.myfxbook_base_url);
    let account = config
        .myfxbook_account_id
        .map(|id| id.to_string())
        .unwrap_or_default();
    info!("   Account: {}", account);
    info!("   Notion API: {}", config.notion_base_url);
    info!("   Notion Database: {}", config.notion_db_id);
    info!("   Filter Old History: {}", config.filter_old_data);
    info!("   Sync Interval: {}s", config.sync_interval_secs);
    info!("   HTTP Timeout: {}s", config.http_timeout_secs);
}

pub fn print_final_statistics(start_time: Instant, stats: &SessionStats) {
    let runtime = start_time.elapsed().as_secs() / 60;

    info!("\n📊 Session Statistics ({} minutes)", runtime);
    info!("   Cycles run: {}", stats.cycles);
    info!("   Cycles failed: {}", stats.failed_cycles);
    info!("   Pages created: {}", stats.created);
    info!("   Pages updated: {}", stats.updated);
    info!("   Failed writes: {}", stats.failed_writes);
}
