// File: crates/rt-core/src/error.rs
// Summary: Error taxonomy for fetching and decoding the feed.

use thiserror::Error;

/// The request never produced a usable body.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("reading feed failed: {0}")]
    Io(#[from] std::io::Error),
}

/// The body was not the expected packed document.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("gzip inflate failed: {0}")]
    Gzip(#[source] std::io::Error),
    #[error("msgpack decode failed: {0}")]
    MsgPack(#[from] rmp_serde::decode::Error),
    #[error("last_updated_ts {0} is out of range")]
    Timestamp(i64),
    #[error("last_r0_date `{0}` is not an ISO-8601 date")]
    Date(String),
}

/// Single failed outcome surfaced to callers of a fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Telemetry sinks may fail; the fetcher logs and drops these.
#[derive(Debug, Error)]
#[error("telemetry emit failed: {0}")]
pub struct TelemetryError(pub String);
