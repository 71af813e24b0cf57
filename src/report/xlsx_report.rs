use super::model::{MonthReport, HEADER};
use crate::Result;
use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

pub fn save(reports: &[MonthReport], path: &Path) -> Result<()> {
    workbook(reports)?.save(path)?;
    Ok(())
}

/// One worksheet per month, named `MM.YYYY`, in the order given.
pub fn workbook(reports: &[MonthReport]) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let tft = Format::new().set_num_format("0.0000000");
    let two_decimals = Format::new().set_num_format("0.00");

    for report in reports {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(report.month.label())?;

        for (col, title) in HEADER.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header)?;
        }

        for (i, row) in report.rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_number(r, 0, row.node_id as f64)?;
            worksheet.write_number_with_format(r, 1, row.reward_tft, &tft)?;
            worksheet.write_number_with_format(r, 2, row.period_days, &two_decimals)?;
            worksheet.write_number_with_format(r, 3, row.uptime_days, &two_decimals)?;
            worksheet.write_number_with_format(r, 4, row.uptime_percentage, &two_decimals)?;
            worksheet.write_string(r, 5, &row.hash)?;
        }

        worksheet.autofit();
    }

    Ok(workbook)
}

#[cfg(test)]
mod test {
    use crate::period::TargetMonth;
    use crate::report::model::{MonthReport, ReportRow};
    use crate::Result;
    use tempfile::tempdir;

    fn reports() -> Vec<MonthReport> {
        vec![
            MonthReport {
                month: TargetMonth::new(12, 2022),
                rows: vec![ReportRow::mock(1), ReportRow::mock(2)],
            },
            MonthReport {
                month: TargetMonth::new(1, 2023),
                rows: vec![],
            },
        ]
    }

    #[test]
    fn sheet_per_month() -> Result<()> {
        let mut workbook = super::workbook(&reports())?;
        assert_eq!("12.2022", workbook.worksheet_from_index(0)?.name());
        assert_eq!("01.2023", workbook.worksheet_from_index(1)?.name());
        assert!(workbook.worksheet_from_index(2).is_err());
        Ok(())
    }

    #[test]
    fn save() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("report.xlsx");
        super::save(&reports(), &path)?;
        let bytes = std::fs::read(&path)?;
        // xlsx is a zip archive
        assert!(bytes.starts_with(b"PK"));
        Ok(())
    }
}
