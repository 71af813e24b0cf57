use crate::conf::{Conf, OutputFormat};
use crate::grid::proxy::GridProxy;
use crate::minting::api::MintingApi;
use crate::period::calendar::Calendar;
use crate::period::{parse_months, TargetMonth};
use crate::report::service::ReportService;
use crate::report::{csv_report, xlsx_report};
use crate::{Error, Result};
use std::path::PathBuf;
use tracing::info;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

// Example: farm-earnings 1234 01.23-12.23
pub async fn run(
    farm_id: &str,
    months: &str,
    conf: &Conf,
    calendar: Calendar,
    current_year: i32,
) -> Result<Vec<PathBuf>> {
    if farm_id.is_empty() || farm_id.contains(['/', '\\']) {
        Err(Error::CLI(format!("Invalid farm ID: {farm_id}")))?
    }

    let months_arg = months;
    let months = parse_months(months_arg, current_year)?;

    let (first, last) = match (months.first(), months.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => Err(Error::EmptyRange(months_arg.into()))?,
    };

    let format = conf.format.unwrap_or(if months.len() == 1 {
        OutputFormat::Csv
    } else {
        OutputFormat::Xlsx
    });

    info!(
        farm_id,
        first = first.label(),
        last = last.label(),
        months = months.len(),
        %format,
        "Generating farm earnings",
    );

    let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
    let service = ReportService::new(
        GridProxy::new(client.clone(), conf.gridproxy_url.clone()),
        MintingApi::new(client, conf.minting_url.clone()),
        conf.concurrency,
        calendar,
    );

    let reports = service.month_reports(farm_id, &months).await?;
    let mut written = vec![];

    match format {
        OutputFormat::Csv => {
            for report in &reports {
                let path = conf.output_dir.join(csv_file_name(farm_id, &report.month));
                csv_report::save(report, &path)?;
                println!(
                    "Data for farm {farm_id} for {} has been written to {}",
                    report.month,
                    path.display(),
                );
                written.push(path);
            }
        }
        OutputFormat::Xlsx => {
            let path = conf
                .output_dir
                .join(xlsx_file_name(farm_id, &first, &last));
            xlsx_report::save(&reports, &path)?;
            println!("Workbook saved as {}", path.display());
            written.push(path);
        }
    }

    Ok(written)
}

fn csv_file_name(farm_id: &str, month: &TargetMonth) -> String {
    format!("{farm_id}_farm_earnings_{}.csv", month.label())
}

fn xlsx_file_name(farm_id: &str, first: &TargetMonth, last: &TargetMonth) -> String {
    if first == last {
        format!("{farm_id}_farm_earnings_{}.xlsx", first.label())
    } else {
        format!(
            "{farm_id}_farm_earnings_{}_to_{}.xlsx",
            first.label(),
            last.label(),
        )
    }
}
