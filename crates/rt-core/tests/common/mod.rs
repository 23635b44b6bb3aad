// File: crates/rt-core/tests/common/mod.rs
// Purpose: Shared fixtures: packed feed bodies and in-memory transports.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use chrono::NaiveDate;
use flate2::write::GzEncoder;
use flate2::Compression;
use rt_core::{RawRecord, Transport, TransportError};
use serde_json::{json, Value};

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("fixture date")
}

pub fn sample_root() -> Value {
    json!({
        "state_data": [
            {"date": "2021-01-01", "fips": "06037", "Rt": 1.2},
            {"date": "2021-01-02", "fips": "06037", "Rt": 1.1},
        ],
        "last_updated_ts": 1_614_556_800_000i64,
        "last_r0_date": "2021-02-28",
    })
}

pub fn pack(root: &Value) -> Vec<u8> {
    rmp_serde::to_vec(root).expect("msgpack encode")
}

pub fn gzip(bytes: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::default());
    enc.write_all(bytes).expect("gzip write");
    enc.finish().expect("gzip finish")
}

pub fn packed_feed(root: &Value) -> Vec<u8> {
    gzip(&pack(root))
}

/// Transport serving canned bodies keyed by URL.
#[derive(Default)]
pub struct StaticTransport {
    bodies: HashMap<String, Vec<u8>>,
    pub requests: RefCell<Vec<String>>,
}

impl StaticTransport {
    pub fn with(mut self, url: &str, body: Vec<u8>) -> Self {
        self.bodies.insert(url.to_string(), body);
        self
    }
}

impl Transport for StaticTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        self.requests.borrow_mut().push(url.to_string());
        self.bodies.get(url).cloned().ok_or(TransportError::Status(404))
    }
}

/// A daily Rt run for one region.
pub fn rt_run(run: &str, fips: &str, start: &str, values: &[f64]) -> Vec<RawRecord> {
    let start = day(start);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            RawRecord::new(start + chrono::Days::new(i as u64), fips)
                .with_run_date(day(run))
                .with_value("Rt", v)
        })
        .collect()
}
