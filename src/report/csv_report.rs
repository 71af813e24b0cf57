use super::model::{MonthReport, HEADER};
use crate::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub fn save(report: &MonthReport, path: &Path) -> Result<()> {
    write(report, File::create(path)?)
}

pub fn write(report: &MonthReport, out: impl Write) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;
    for row in &report.rows {
        writer.write_record([
            row.node_id.to_string(),
            row.reward_tft_str(),
            row.period_days_str(),
            row.uptime_days_str(),
            row.uptime_percentage_str(),
            row.hash.clone(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use crate::period::TargetMonth;
    use crate::report::model::{MonthReport, ReportRow};
    use crate::Result;
    use tempfile::tempdir;

    #[test]
    fn write() -> Result<()> {
        let report = MonthReport {
            month: TargetMonth::new(3, 2023),
            rows: vec![
                ReportRow::mock(1),
                ReportRow {
                    reward_tft: 0.5,
                    uptime_days: 15.0,
                    uptime_percentage: 49.26,
                    ..ReportRow::mock(2)
                },
            ],
        };
        let mut out = vec![];
        super::write(&report, &mut out)?;
        let expected = "\
Node ID,TFT Earned,Total Period (Days),Uptime (Days),Uptime (%),Receipt Hash
1,1.2345678,30.45,30.45,100.00,hash-1
2,0.5000000,30.45,15.00,49.26,hash-2
";
        assert_eq!(expected, String::from_utf8_lossy(&out));
        Ok(())
    }

    #[test]
    fn header_only() -> Result<()> {
        let report = MonthReport {
            month: TargetMonth::new(3, 2023),
            rows: vec![],
        };
        let mut out = vec![];
        super::write(&report, &mut out)?;
        assert_eq!(
            "Node ID,TFT Earned,Total Period (Days),Uptime (Days),Uptime (%),Receipt Hash\n",
            String::from_utf8_lossy(&out),
        );
        Ok(())
    }

    #[test]
    fn save() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("report.csv");
        let report = MonthReport {
            month: TargetMonth::new(3, 2023),
            rows: vec![ReportRow::mock(1)],
        };
        super::save(&report, &path)?;
        let content = std::fs::read_to_string(&path)?;
        assert_eq!(2, content.lines().count());
        assert!(content.ends_with("1,1.2345678,30.45,30.45,100.00,hash-1\n"));
        Ok(())
    }
}
