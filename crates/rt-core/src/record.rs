// File: crates/rt-core/src/record.rs
// Summary: Observation records and the decoded feed payload.

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One observation row from `state_data`.
///
/// Metric fields are optional: a results feed carries `Rt`/`infectionsPC`/`PEI`,
/// an input feed carries `cases`/`deaths`, and the test-adjusted feed carries the
/// `corr_*`/`onsets` columns.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RawRecord {
    #[serde(deserialize_with = "iso_date")]
    pub date: NaiveDate,
    #[serde(deserialize_with = "region_id")]
    pub fips: String,
    #[serde(rename = "run.date", default, deserialize_with = "opt_iso_date")]
    pub run_date: Option<NaiveDate>,
    #[serde(rename = "Rt", default)]
    pub rt: Option<f64>,
    #[serde(rename = "infectionsPC", default)]
    pub infections_pc: Option<f64>,
    #[serde(rename = "PEI", default)]
    pub pei: Option<f64>,
    #[serde(default)]
    pub cases: Option<f64>,
    #[serde(default)]
    pub deaths: Option<f64>,
    #[serde(default)]
    pub corr_cases_raw: Option<f64>,
    #[serde(default)]
    pub corr_cases_new: Option<f64>,
    #[serde(default)]
    pub onsets: Option<f64>,
}

impl RawRecord {
    /// Minimal record with no metric fields set.
    pub fn new(date: NaiveDate, fips: impl Into<String>) -> Self {
        Self {
            date,
            fips: fips.into(),
            run_date: None,
            rt: None,
            infections_pc: None,
            pei: None,
            cases: None,
            deaths: None,
            corr_cases_raw: None,
            corr_cases_new: None,
            onsets: None,
        }
    }

    pub fn with_run_date(mut self, run_date: NaiveDate) -> Self {
        self.run_date = Some(run_date);
        self
    }

    /// Set a metric by its wire name. Unknown names are ignored.
    pub fn with_value(mut self, metric: &str, value: f64) -> Self {
        if let Some(slot) = self.slot_mut(metric) {
            *slot = Some(value);
        }
        self
    }

    /// Look a metric up by its wire name (`"Rt"`, `"cases"`, ...).
    pub fn value(&self, metric: &str) -> Option<f64> {
        match metric {
            "Rt" => self.rt,
            "infectionsPC" => self.infections_pc,
            "PEI" => self.pei,
            "cases" => self.cases,
            "deaths" => self.deaths,
            "corr_cases_raw" => self.corr_cases_raw,
            "corr_cases_new" => self.corr_cases_new,
            "onsets" => self.onsets,
            _ => None,
        }
    }

    fn slot_mut(&mut self, metric: &str) -> Option<&mut Option<f64>> {
        Some(match metric {
            "Rt" => &mut self.rt,
            "infectionsPC" => &mut self.infections_pc,
            "PEI" => &mut self.pei,
            "cases" => &mut self.cases,
            "deaths" => &mut self.deaths,
            "corr_cases_raw" => &mut self.corr_cases_raw,
            "corr_cases_new" => &mut self.corr_cases_new,
            "onsets" => &mut self.onsets,
            _ => return None,
        })
    }

    /// Observation date as a UTC instant (midnight), the chart's x value.
    pub fn instant(&self) -> DateTime<Utc> {
        date_to_instant(self.date)
    }
}

pub fn date_to_instant(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

// The feed has shipped fips both as strings ("06037") and as bare integers.
fn region_id<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }
    Ok(match Id::deserialize(de)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}

/// `YYYY-MM-DD`, or a full ISO timestamp whose date part is used.
pub(crate) fn parse_iso_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    let head = s.get(..10)?;
    match s.as_bytes().get(10) {
        Some(b'T') | Some(b' ') => NaiveDate::parse_from_str(head, "%Y-%m-%d").ok(),
        _ => None,
    }
}

fn iso_date<'de, D: Deserializer<'de>>(de: D) -> Result<NaiveDate, D::Error> {
    let s = String::deserialize(de)?;
    parse_iso_date(&s).ok_or_else(|| de::Error::custom(format!("`{s}` is not an ISO-8601 date")))
}

fn opt_iso_date<'de, D: Deserializer<'de>>(de: D) -> Result<Option<NaiveDate>, D::Error> {
    match Option::<String>::deserialize(de)? {
        Some(s) => parse_iso_date(&s)
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("`{s}` is not an ISO-8601 date"))),
        None => Ok(None),
    }
}

/// Result of a fetch. Owned by the caller once resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct RTData {
    pub data_series: Vec<RawRecord>,
    pub model_last_run_date: DateTime<Utc>,
    pub last_rt_value_date: NaiveDate,
}

/// Root map of the packed feed, exactly as it appears on the wire. Only a
/// map is accepted; a positional array root is a decode error.
#[derive(Debug)]
pub(crate) struct WirePayload {
    pub state_data: Vec<RawRecord>,
    pub last_updated_ts: i64,
    pub last_r0_date: String,
}

impl<'de> Deserialize<'de> for WirePayload {
    fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
        de.deserialize_map(WirePayloadVisitor)
    }
}

struct WirePayloadVisitor;

impl<'de> Visitor<'de> for WirePayloadVisitor {
    type Value = WirePayload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map with state_data, last_updated_ts and last_r0_date")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<WirePayload, A::Error> {
        let mut state_data = None;
        let mut last_updated_ts = None;
        let mut last_r0_date = None;
        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "state_data" => state_data = Some(map.next_value()?),
                "last_updated_ts" => last_updated_ts = Some(map.next_value()?),
                "last_r0_date" => last_r0_date = Some(map.next_value()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(WirePayload {
            state_data: state_data.ok_or_else(|| de::Error::missing_field("state_data"))?,
            last_updated_ts: last_updated_ts.ok_or_else(|| de::Error::missing_field("last_updated_ts"))?,
            last_r0_date: last_r0_date.ok_or_else(|| de::Error::missing_field("last_r0_date"))?,
        })
    }
}
