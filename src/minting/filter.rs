use super::model::{MintingReceipt, Receipt};
use crate::period::calendar::Calendar;
use crate::period::TargetMonth;
use crate::report::model::{round_to, ReportRow, PERIOD_DAYS};
use chrono::{Datelike, Duration};
use tracing::warn;

const SECONDS_PER_DAY: f64 = 86_400.0;
const UNITS_PER_TFT: f64 = 10_000_000.0;

/// Upstream periods start up to this many days earlier than the month they are attributed to.
pub const PERIOD_SKEW_DAYS: i64 = 2;

/// Selects the minting receipts attributed to `month` and turns them into report rows.
///
/// Period starts are read in `calendar` and shifted by [`PERIOD_SKEW_DAYS`] of wall clock time.
/// Several matching receipts of one node are kept as separate rows, in input order.
pub fn filter_receipts(
    receipts: &[Receipt],
    month: &TargetMonth,
    calendar: &Calendar,
) -> Vec<ReportRow> {
    receipts
        .iter()
        .filter_map(|it| match it {
            Receipt::Minting(minting) => Some(minting),
            Receipt::Other(_) => None,
        })
        .filter(|it| match attributed_month(it.period_start, calendar) {
            Some(attributed) => attributed == *month,
            None => {
                warn!(
                    node_id = it.node_id,
                    period_start = it.period_start,
                    hash = %it.hash,
                    "Skipping receipt with unrepresentable period start",
                );
                false
            }
        })
        .map(to_row)
        .collect()
}

pub fn attributed_month(period_start: i64, calendar: &Calendar) -> Option<TargetMonth> {
    let adjusted = calendar
        .local_time(period_start)?
        .checked_add_signed(Duration::days(PERIOD_SKEW_DAYS))?;
    Some(TargetMonth::new(adjusted.month() as u8, adjusted.year()))
}

fn to_row(receipt: &MintingReceipt) -> ReportRow {
    let uptime_days = receipt.measured_uptime as f64 / SECONDS_PER_DAY;
    let uptime_percentage = uptime_days / PERIOD_DAYS * 100.0;
    ReportRow {
        node_id: receipt.node_id,
        reward_tft: round_to(receipt.reward_tft as f64 / UNITS_PER_TFT, 7),
        period_days: PERIOD_DAYS,
        uptime_days: round_to(uptime_days, 2),
        uptime_percentage: round_to(uptime_percentage, 2),
        hash: receipt.hash.clone(),
    }
}
