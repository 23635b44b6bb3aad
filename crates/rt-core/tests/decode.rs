// File: crates/rt-core/tests/decode.rs
// Purpose: Wire decoding of the packed feed (gzip + msgpack map).

mod common;

use chrono::{TimeZone, Utc};
use common::{day, gzip, pack, packed_feed, sample_root};
use rt_core::{decode_payload, DecodeError};
use serde_json::json;

#[test]
fn decodes_gzipped_feed() {
    let data = decode_payload(&packed_feed(&sample_root())).expect("decode");
    assert_eq!(data.data_series.len(), 2);
    assert_eq!(data.model_last_run_date, Utc.timestamp_millis_opt(1_614_556_800_000).unwrap());
    assert_eq!(data.last_rt_value_date, day("2021-02-28"));

    let first = &data.data_series[0];
    assert_eq!(first.date, day("2021-01-01"));
    assert_eq!(first.fips, "06037");
    assert_eq!(first.rt, Some(1.2));
    assert_eq!(first.cases, None);
}

#[test]
fn accepts_body_already_inflated_by_transport() {
    let data = decode_payload(&pack(&sample_root())).expect("decode");
    assert_eq!(data.data_series.len(), 2);
}

#[test]
fn reads_run_date_numeric_fips_and_extra_fields() {
    let root = json!({
        "state_data": [
            {"date": "2021-03-01", "fips": 6037, "run.date": "2021-03-05", "Rt": 0.9,
             "infectionsPC": 120.5, "PEI": 0.4, "unrelated": "ignored"},
        ],
        "last_updated_ts": 0,
        "last_r0_date": "2021-03-01T00:00:00Z",
    });
    let data = decode_payload(&packed_feed(&root)).expect("decode");
    let r = &data.data_series[0];
    assert_eq!(r.fips, "6037");
    assert_eq!(r.run_date, Some(day("2021-03-05")));
    assert_eq!(r.value("infectionsPC"), Some(120.5));
    assert_eq!(r.value("PEI"), Some(0.4));
    assert_eq!(data.last_rt_value_date, day("2021-03-01"));
}

#[test]
fn empty_state_data_is_valid() {
    let root = json!({"state_data": [], "last_updated_ts": 5, "last_r0_date": "2020-12-31"});
    let data = decode_payload(&packed_feed(&root)).expect("decode");
    assert!(data.data_series.is_empty());
}

#[test]
fn missing_keys_are_decode_errors() {
    for key in ["state_data", "last_updated_ts", "last_r0_date"] {
        let mut root = sample_root();
        root.as_object_mut().unwrap().remove(key);
        let err = decode_payload(&packed_feed(&root)).expect_err(key);
        assert!(matches!(err, DecodeError::MsgPack(_)), "{key}: {err:?}");
    }
}

#[test]
fn bad_date_is_reported() {
    let mut root = sample_root();
    root["last_r0_date"] = json!("last tuesday");
    let err = decode_payload(&packed_feed(&root)).unwrap_err();
    assert!(matches!(err, DecodeError::Date(ref s) if s == "last tuesday"));
}

#[test]
fn root_must_be_a_map() {
    let err = decode_payload(&packed_feed(&json!([1, 2, 3]))).unwrap_err();
    assert!(matches!(err, DecodeError::MsgPack(_)));
}

#[test]
fn truncated_gzip_fails() {
    let body = gzip(&pack(&sample_root()));
    let err = decode_payload(&body[..body.len() / 2]).unwrap_err();
    assert!(matches!(err, DecodeError::Gzip(_) | DecodeError::MsgPack(_)), "{err:?}");
}

#[test]
fn positional_array_root_is_rejected() {
    let root = json!([[{"date": "2021-01-01", "fips": "06037", "Rt": 1.0}], 5, "2021-01-01"]);
    let err = decode_payload(&packed_feed(&root)).unwrap_err();
    assert!(matches!(err, DecodeError::MsgPack(_)), "{err:?}");
}

#[test]
fn record_dates_accept_full_timestamps() {
    let root = json!({
        "state_data": [
            {"date": "2021-03-01T00:00:00Z", "fips": "06037", "run.date": "2021-03-05 12:30:00", "Rt": 1.0},
            {"date": "2021-03-02", "fips": "06037", "run.date": null, "Rt": 1.1},
        ],
        "last_updated_ts": 0,
        "last_r0_date": "2021-03-02",
    });
    let data = decode_payload(&packed_feed(&root)).expect("decode");
    assert_eq!(data.data_series[0].date, day("2021-03-01"));
    assert_eq!(data.data_series[0].run_date, Some(day("2021-03-05")));
    assert_eq!(data.data_series[1].run_date, None);
}

#[test]
fn malformed_record_date_fails_decode() {
    let mut root = sample_root();
    root["state_data"][0]["date"] = json!("03/01/2021");
    let err = decode_payload(&packed_feed(&root)).unwrap_err();
    assert!(matches!(err, DecodeError::MsgPack(_)), "{err:?}");
}
