use chrono::{NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};

use super::scan_result::ScanResult;

const TIMESTAMP_WRITE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const TIMESTAMP_READ_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Local wall-clock time without offset, cut to microseconds so it survives
/// a trip through the intermediate artifact unchanged.
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local().trunc_subsecs(6)
}

/// Renders a timestamp as `YYYY-MM-DDTHH:MM:SS.ffffff`.
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_WRITE_FORMAT).to_string()
}

/// Serde adapter for artifact timestamps: always six fractional digits on
/// write, any fraction (or none) on read.
mod iso_micros {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&ts.format(super::TIMESTAMP_WRITE_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, super::TIMESTAMP_READ_FORMAT)
            .map_err(serde::de::Error::custom)
    }
}

/// One repository's scan within a collection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReportEntry {
    /// `owner/name`
    pub repository: String,
    #[serde(with = "iso_micros")]
    pub scan_time: NaiveDateTime,
    pub result: ScanResult,
}

/// The artifact handed from the collector to the reporter. Entries keep the
/// order of the repository configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateReport {
    #[serde(with = "iso_micros")]
    pub generated_at: NaiveDateTime,
    #[serde(default)]
    pub results: Vec<ScanReportEntry>,
}

impl AggregateReport {
    pub fn empty(generated_at: NaiveDateTime) -> Self {
        Self { generated_at, results: Vec::new() }
    }

    /// Sum of the integer counts. Missing or malformed counts are skipped.
    pub fn total_vulnerabilities(&self) -> i64 {
        self.results
            .iter()
            .filter_map(|entry| entry.result.vulnerability_count())
            .sum()
    }
}
