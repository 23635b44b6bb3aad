// File: crates/rt-core/tests/fetch.rs
// Purpose: DataFetcher contract: URL shape, error taxonomy, telemetry side effects.

mod common;

use std::cell::RefCell;

use common::{packed_feed, sample_root, StaticTransport};
use rt_core::{AreaConfig, DataFetcher, FetchError, TelemetryError, TelemetrySink, TransportError};

#[derive(Default)]
struct RecordingSink {
    freshness: RefCell<Vec<i64>>,
    errors: RefCell<Vec<String>>,
    fail: bool,
}

impl TelemetrySink for RecordingSink {
    fn data_freshness(&self, ts: i64) -> Result<(), TelemetryError> {
        self.freshness.borrow_mut().push(ts);
        if self.fail {
            return Err(TelemetryError("beacon blocked".into()));
        }
        Ok(())
    }

    fn report_error(&self, error: &FetchError) -> Result<(), TelemetryError> {
        self.errors.borrow_mut().push(error.to_string());
        if self.fail {
            return Err(TelemetryError("beacon blocked".into()));
        }
        Ok(())
    }
}

const BASE: &str = "https://data.example/counties/06037";
const URL: &str = "https://data.example/counties/06037.pack.gz";

#[test]
fn url_appends_pack_suffix_and_ignores_override() {
    let fetcher = DataFetcher::new(AreaConfig::new(BASE), StaticTransport::default());
    assert_eq!(fetcher.data_url(None), URL);
    assert_eq!(fetcher.data_url(Some("legacy-model")), URL);
}

#[test]
fn area_config_reads_legacy_key() {
    let cfg: AreaConfig = serde_json::from_str(r#"{"dataURLBase": "https://x/y"}"#).unwrap();
    assert_eq!(cfg, AreaConfig::new("https://x/y"));
    let cfg: AreaConfig = serde_json::from_str(r#"{"dataUrlBase": "https://x/z"}"#).unwrap();
    assert_eq!(cfg.data_url_base, "https://x/z");
}

#[tokio::test]
async fn fetch_decodes_and_emits_freshness() {
    let transport = StaticTransport::default().with(URL, packed_feed(&sample_root()));
    let sink = RecordingSink::default();
    let fetcher = DataFetcher::new(AreaConfig::new(BASE), &transport).with_telemetry(&sink);

    let data = fetcher.fetch_latest(None).await.expect("fetch");
    assert_eq!(data.data_series.len(), 2);
    assert_eq!(*sink.freshness.borrow(), vec![1_614_556_800_000]);
    assert!(sink.errors.borrow().is_empty());
    assert_eq!(*transport.requests.borrow(), vec![URL.to_string()]);
}

#[tokio::test]
async fn telemetry_failure_never_changes_the_result() {
    let transport = StaticTransport::default().with(URL, packed_feed(&sample_root()));
    let sink = RecordingSink { fail: true, ..Default::default() };
    let fetcher = DataFetcher::new(AreaConfig::new(BASE), &transport).with_telemetry(&sink);

    let data = fetcher.fetch_latest(None).await.expect("fetch despite sink failure");
    assert_eq!(data.data_series.len(), 2);
    assert_eq!(sink.freshness.borrow().len(), 1);
}

#[tokio::test]
async fn transport_failure_surfaces_once_without_retry() {
    let transport = StaticTransport::default();
    let sink = RecordingSink::default();
    let fetcher = DataFetcher::new(AreaConfig::new(BASE), &transport).with_telemetry(&sink);

    let err = fetcher.fetch_latest(None).await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(TransportError::Status(404))));
    assert_eq!(transport.requests.borrow().len(), 1);
    assert_eq!(sink.errors.borrow().len(), 1);
    assert!(sink.freshness.borrow().is_empty());
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let transport = StaticTransport::default().with(URL, b"<html>not found</html>".to_vec());
    let fetcher = DataFetcher::new(AreaConfig::new(BASE), &transport);

    let err = fetcher.fetch_latest(None).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
}
