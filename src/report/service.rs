use super::model::{MonthReport, ReportRow};
use crate::grid::proxy::GridProxy;
use crate::minting::api::MintingApi;
use crate::minting::filter::filter_receipts;
use crate::period::calendar::Calendar;
use crate::period::TargetMonth;
use crate::Result;
use futures_util::stream::{self, StreamExt};
use std::num::NonZeroUsize;
use tracing::{info, warn};

pub struct ReportService {
    grid: GridProxy,
    minting: MintingApi,
    concurrency: NonZeroUsize,
    calendar: Calendar,
}

impl ReportService {
    pub fn new(
        grid: GridProxy,
        minting: MintingApi,
        concurrency: NonZeroUsize,
        calendar: Calendar,
    ) -> Self {
        Self {
            grid,
            minting,
            concurrency,
            calendar,
        }
    }

    /// Builds the report of every node in `farm_id` for a single month.
    ///
    /// Nodes are fetched concurrently, at most `concurrency` at a time. A node which can't be
    /// fetched contributes no rows. Rows are sorted by node ID.
    pub async fn month_report(&self, farm_id: &str, month: TargetMonth) -> Result<MonthReport> {
        info!(farm_id, month = %month, "Generating report");

        let node_ids = self.grid.farm_node_ids(farm_id).await?;
        let nodes = node_ids.len();

        let per_node: Vec<Vec<ReportRow>> = stream::iter(node_ids)
            .map(|node_id| self.node_rows(node_id, month))
            .buffer_unordered(self.concurrency.get())
            .collect()
            .await;

        let mut rows: Vec<ReportRow> = per_node.into_iter().flatten().collect();
        rows.sort_by_key(|it| it.node_id);

        info!(farm_id, month = %month, nodes, rows = rows.len(), "Generated report");

        Ok(MonthReport { month, rows })
    }

    /// Builds one report per month, in the order given.
    pub async fn month_reports(
        &self,
        farm_id: &str,
        months: &[TargetMonth],
    ) -> Result<Vec<MonthReport>> {
        let mut res = vec![];
        for month in months {
            res.push(self.month_report(farm_id, *month).await?);
        }
        Ok(res)
    }

    async fn node_rows(&self, node_id: i64, month: TargetMonth) -> Vec<ReportRow> {
        match self.minting.node_receipts(node_id).await {
            Ok(receipts) => filter_receipts(&receipts, &month, &self.calendar),
            Err(e) => {
                warn!(node_id, error = %e, "Node will be missing from the report");
                vec![]
            }
        }
    }
}
