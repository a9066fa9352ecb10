//! Per-cycle tallies

use std::time::Duration;
use tracing::info;
use super::upsert::UpsertOutcome;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub accounts_matched: u32,
    pub created: u32,
    pub updated: u32,
    pub skipped: u32,
    pub failed: u32,
}

impl CycleReport {
    pub fn record(&mut self, outcome: &UpsertOutcome) {
        match outcome {
            UpsertOutcome::Created { .. } => self.created += 1,
            UpsertOutcome::Updated { .. } => self.updated += 1,
            UpsertOutcome::Skipped => self.skipped += 1,
            UpsertOutcome::Failed => self.failed += 1,
        }
    }

    pub fn written(&self) -> u32 {
        self.created + self.updated
    }

    pub fn log_summary(&self, elapsed: Duration) {
        info!(
            accounts = self.accounts_matched,
            written = self.written(),
            created = self.created,
            updated = self.updated,
            skipped = self.skipped,
            failed = self.failed,
            elapsed_ms = elapsed.as_millis() as u64,
            "📊 Sync cycle complete"
        );
    }
}

/// Running totals across cycles for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct SessionStats {
    pub cycles: u64,
    pub failed_cycles: u64,
    pub created: u64,
    pub updated: u64,
    pub failed_writes: u64,
}

impl SessionStats {
    pub fn absorb(&mut self, report: &CycleReport) {
        self.cycles += 1;
        self.created += u64::from(report.created);
        self.updated += u64::from(report.updated);
        self.failed_writes += u64::from(report.failed);
    }

    pub fn record_failed_cycle(&mut self) {
        self.cycles += 1;
        self.failed_cycles += 1;
    }
}
