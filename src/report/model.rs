use crate::period::TargetMonth;

/// Nominal length of a minting period.
pub const PERIOD_DAYS: f64 = 30.45;

pub const HEADER: [&str; 6] = [
    "Node ID",
    "TFT Earned",
    "Total Period (Days)",
    "Uptime (Days)",
    "Uptime (%)",
    "Receipt Hash",
];

#[derive(Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub node_id: i64,
    pub reward_tft: f64,
    pub period_days: f64,
    pub uptime_days: f64,
    pub uptime_percentage: f64,
    pub hash: String,
}

impl ReportRow {
    pub fn reward_tft_str(&self) -> String {
        format!("{:.7}", self.reward_tft)
    }

    pub fn period_days_str(&self) -> String {
        format!("{:.2}", self.period_days)
    }

    pub fn uptime_days_str(&self) -> String {
        format!("{:.2}", self.uptime_days)
    }

    pub fn uptime_percentage_str(&self) -> String {
        format!("{:.2}", self.uptime_percentage)
    }

    #[cfg(test)]
    pub fn mock(node_id: i64) -> ReportRow {
        ReportRow {
            node_id,
            reward_tft: 1.2345678,
            period_days: PERIOD_DAYS,
            uptime_days: 30.45,
            uptime_percentage: 100.0,
            hash: format!("hash-{node_id}"),
        }
    }
}

/// Rows of a single month, sorted by node ID.
#[derive(Clone, Debug, PartialEq)]
pub struct MonthReport {
    pub month: TargetMonth,
    pub rows: Vec<ReportRow>,
}

/// Rounds half away from zero.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod test {
    use super::{round_to, ReportRow};

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(0.13, round_to(0.125, 2));
        assert_eq!(-0.13, round_to(-0.125, 2));
        assert_eq!(1.3, round_to(1.25, 1));
        assert_eq!(99.99, round_to(99.994, 2));
        assert_eq!(1.2345678, round_to(1.2345678, 7));
    }

    #[test]
    fn fixed_decimal_strings() {
        let row = ReportRow {
            reward_tft: 3.0,
            uptime_days: 1.5,
            uptime_percentage: 4.926108,
            ..ReportRow::mock(1)
        };
        assert_eq!("3.0000000", row.reward_tft_str());
        assert_eq!("30.45", row.period_days_str());
        assert_eq!("1.50", row.uptime_days_str());
        assert_eq!("4.93", row.uptime_percentage_str());
    }
}
