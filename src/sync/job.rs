//! One login → index → reconcile → logout pass

use tracing::{error, info, warn};
use crate::{
    config::Config,
    errors::SyncResult,
    myfxbook::{MyfxbookClient, Session},
    notion::{fetch_existing_trades, NotionClient},
    types::{Account, ExistingTradeIndex, TradeKind},
    utils::{last_week_boundary, source_now},
};
use super::{
    history::filter_recent_history,
    report::CycleReport,
    upsert::upsert_trade,
};

/// Runs a full sync cycle.
///
/// The Myfxbook session is always logged out once login has succeeded,
/// whether or not the rest of the cycle does. Nothing is retried; the next
/// cycle starts again with a fresh session and index.
pub async fn run_cycle(
    myfxbook: &MyfxbookClient,
    notion: &NotionClient,
    config: &Config,
) -> SyncResult<CycleReport> {
    let session = myfxbook.login().await?;

    let result = sync_accounts(myfxbook, notion, &session, config).await;

    if let Err(e) = myfxbook.logout(session).await {
        warn!("Myfxbook logout failed: {}", e);
    }

    result
}

async fn sync_accounts(
    myfxbook: &MyfxbookClient,
    notion: &NotionClient,
    session: &Session,
    config: &Config,
) -> SyncResult<CycleReport> {
    let mut index = fetch_existing_trades(notion).await;

    let accounts = myfxbook.get_my_accounts(session).await.map_err(|e| {
        error!("Failed to fetch accounts: {}", e);
        e
    })?;

    let mut report = CycleReport::default();
    for account in accounts
        .iter()
        .filter(|a| config.myfxbook_account_id == Some(a.account_id))
    {
        report.accounts_matched += 1;
        sync_account(myfxbook, notion, session, config, account, &mut index, &mut report).await;
    }

    if report.accounts_matched == 0 {
        warn!(
            account_id = ?config.myfxbook_account_id,
            listed = accounts.len(),
            "Configured account not found in Myfxbook account list"
        );
    }

    Ok(report)
}

async fn sync_account(
    myfxbook: &MyfxbookClient,
    notion: &NotionClient,
    session: &Session,
    config: &Config,
    account: &Account,
    index: &mut ExistingTradeIndex,
    report: &mut CycleReport,
) {
    let Some(balance) = account.balance else {
        warn!(id = account.id, "Account has no balance; skipping");
        return;
    };
    info!(
        id = account.id,
        name = account.name.as_deref().unwrap_or(""),
        balance,
        "Syncing account"
    );

    match myfxbook.get_open_trades(session, account.id).await {
        Ok(trades) => {
            for trade in &trades {
                let outcome = upsert_trade(notion, index, trade, balance, TradeKind::Open).await;
                report.record(&outcome);
            }
        }
        Err(e) => warn!(id = account.id, "Failed to fetch open trades: {}", e),
    }

    match myfxbook.get_history(session, account.id).await {
        Ok(mut trades) => {
            if config.filter_old_data {
                trades = filter_recent_history(trades, last_week_boundary(source_now()));
            }
            for trade in &trades {
                let outcome = upsert_trade(notion, index, trade, balance, TradeKind::History).await;
                report.record(&outcome);
            }
        }
        Err(e) => warn!(id = account.id, "Failed to fetch history trades: {}", e),
    }
}
