use crate::period::calendar::Calendar;
use crate::{Error, Result};
use chrono_tz::Tz;
use std::env;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use strum::{Display, EnumString};
use time::macros::format_description;
use time::UtcOffset;
use url::Url;

const DEFAULT_GRIDPROXY_URL: &str = "https://gridproxy.grid.tf";
const DEFAULT_MINTING_URL: &str = "https://alpha.minting.tfchain.grid.tf";
const DEFAULT_CONCURRENCY: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

#[derive(Clone, Debug)]
pub struct Conf {
    pub gridproxy_url: Url,
    pub minting_url: Url,
    pub concurrency: NonZeroUsize,
    pub output_dir: PathBuf,
    pub format: Option<OutputFormat>,
    pub utc_offset: Option<UtcOffset>,
    pub time_zone: Option<Tz>,
}

impl Conf {
    pub fn from_env() -> Result<Conf> {
        Conf::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Conf> {
        let var = |key: &str| lookup(key).filter(|it| !it.trim().is_empty());

        let gridproxy_url = parse_url(
            "FARM_EARNINGS_GRIDPROXY_URL",
            &var("FARM_EARNINGS_GRIDPROXY_URL").unwrap_or(DEFAULT_GRIDPROXY_URL.into()),
        )?;

        let minting_url = parse_url(
            "FARM_EARNINGS_MINTING_URL",
            &var("FARM_EARNINGS_MINTING_URL").unwrap_or(DEFAULT_MINTING_URL.into()),
        )?;

        let concurrency = match var("FARM_EARNINGS_CONCURRENCY") {
            Some(concurrency) => concurrency.trim().parse::<NonZeroUsize>().map_err(|_| {
                Error::Conf(format!(
                    "FARM_EARNINGS_CONCURRENCY must be a positive integer, got {concurrency}"
                ))
            })?,
            None => NonZeroUsize::new(DEFAULT_CONCURRENCY).ok_or(Error::Conf(
                "Default concurrency must be positive".into(),
            ))?,
        };

        let output_dir = var("FARM_EARNINGS_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or(PathBuf::from("."));

        let format = match var("FARM_EARNINGS_FORMAT") {
            Some(format) => Some(format.trim().parse::<OutputFormat>().map_err(|_| {
                Error::Conf(format!(
                    "FARM_EARNINGS_FORMAT must be csv or xlsx, got {format}"
                ))
            })?),
            None => None,
        };

        let utc_offset = match var("FARM_EARNINGS_UTC_OFFSET") {
            Some(offset) => Some(parse_utc_offset(&offset)?),
            None => None,
        };

        let time_zone = match var("FARM_EARNINGS_TIME_ZONE") {
            Some(zone) => Some(zone.trim().parse::<Tz>().map_err(|_| {
                Error::Conf(format!(
                    "FARM_EARNINGS_TIME_ZONE must be an IANA zone name, got {zone}"
                ))
            })?),
            None => None,
        };

        Ok(Conf {
            gridproxy_url,
            minting_url,
            concurrency,
            output_dir,
            format,
            utc_offset,
            time_zone,
        })
    }

    /// Calendar receipts are attributed in. A fixed offset wins over a zone, the host zone is
    /// used when neither is set.
    pub fn calendar(&self) -> Result<Calendar> {
        match (self.utc_offset, self.time_zone) {
            (Some(offset), _) => Calendar::fixed(offset),
            (None, Some(zone)) => Ok(Calendar::Zone(zone)),
            (None, None) => Ok(Calendar::Local),
        }
    }
}

/// Endpoints are joined onto the base URL, so its path always ends with a slash.
fn parse_url(key: &str, value: &str) -> Result<Url> {
    let mut url = Url::parse(value.trim())?;
    if url.scheme() != "http" && url.scheme() != "https" {
        Err(Error::Conf(format!("{key} must be an http(s) URL, got {value}")))?
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn parse_utc_offset(value: &str) -> Result<UtcOffset> {
    let format = format_description!("[offset_hour sign:mandatory]:[offset_minute]");
    UtcOffset::parse(value.trim(), &format).map_err(|_| {
        Error::Conf(format!(
            "FARM_EARNINGS_UTC_OFFSET must look like +02:00, got {value}"
        ))
    })
}
