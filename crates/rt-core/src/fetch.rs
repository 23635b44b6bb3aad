// File: crates/rt-core/src/fetch.rs
// Summary: Retrieves a region's packed feed and decodes it into `RTData`.

use std::future::Future;
use std::io::Read;
use std::time::Duration;

use chrono::DateTime;
use flate2::read::GzDecoder;
use serde::Deserialize;

use crate::error::{DecodeError, FetchError, TelemetryError, TransportError};
use crate::record::{parse_iso_date, RTData, WirePayload};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Per-region feed location.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaConfig {
    #[serde(alias = "dataURLBase")]
    pub data_url_base: String,
}

impl AreaConfig {
    pub fn new(data_url_base: impl Into<String>) -> Self {
        Self { data_url_base: data_url_base.into() }
    }
}

/// Knobs for [`HttpTransport`].
#[derive(Clone, Debug)]
pub struct FetcherOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetcherOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("rt-core/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Byte transport for the feed. The body must be returned untouched (binary).
pub trait Transport {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> impl Future<Output = Result<Vec<u8>, TransportError>> {
        (**self).get(url)
    }
}

/// HTTP GET via reqwest.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(opts: &FetcherOptions) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

/// Analytics / error-capture capability handed to the fetcher.
pub trait TelemetrySink {
    /// Successful fetch; `last_updated_ts` is the server's epoch-ms stamp.
    fn data_freshness(&self, last_updated_ts: i64) -> Result<(), TelemetryError>;

    fn report_error(&self, _error: &FetchError) -> Result<(), TelemetryError> {
        Ok(())
    }
}

impl<S: TelemetrySink + ?Sized> TelemetrySink for &S {
    fn data_freshness(&self, last_updated_ts: i64) -> Result<(), TelemetryError> {
        (**self).data_freshness(last_updated_ts)
    }

    fn report_error(&self, error: &FetchError) -> Result<(), TelemetryError> {
        (**self).report_error(error)
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopTelemetry;

impl TelemetrySink for NoopTelemetry {
    fn data_freshness(&self, _last_updated_ts: i64) -> Result<(), TelemetryError> {
        Ok(())
    }
}

/// Emits telemetry as structured tracing events (target `rt_core::telemetry`).
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTelemetry;

impl TelemetrySink for TracingTelemetry {
    fn data_freshness(&self, last_updated_ts: i64) -> Result<(), TelemetryError> {
        tracing::info!(target: "rt_core::telemetry", category = "data-freshness", ts = last_updated_ts, "event");
        Ok(())
    }

    fn report_error(&self, error: &FetchError) -> Result<(), TelemetryError> {
        tracing::error!(target: "rt_core::telemetry", %error, "exception");
        Ok(())
    }
}

/// Fetches one region's feed. No retries; callers own retry policy.
#[derive(Clone, Debug)]
pub struct DataFetcher<T, S = NoopTelemetry> {
    config: AreaConfig,
    transport: T,
    telemetry: S,
}

impl<T: Transport> DataFetcher<T> {
    pub fn new(config: AreaConfig, transport: T) -> Self {
        Self { config, transport, telemetry: NoopTelemetry }
    }
}

impl<T: Transport, S: TelemetrySink> DataFetcher<T, S> {
    pub fn with_telemetry<S2: TelemetrySink>(self, telemetry: S2) -> DataFetcher<T, S2> {
        DataFetcher { config: self.config, transport: self.transport, telemetry }
    }

    pub fn config(&self) -> &AreaConfig {
        &self.config
    }

    /// Feed URL. The model override is accepted for API stability but the
    /// current schema has a single model per region.
    pub fn data_url(&self, _model_override: Option<&str>) -> String {
        format!("{}.pack.gz", self.config.data_url_base)
    }

    pub async fn fetch_latest(&self, model_override: Option<&str>) -> Result<RTData, FetchError> {
        let url = self.data_url(model_override);
        tracing::debug!(%url, "fetching feed");
        let result = match self.transport.get(&url).await {
            Ok(body) => decode_payload(&body).map_err(FetchError::from),
            Err(e) => Err(FetchError::from(e)),
        };
        match result {
            Ok(data) => {
                let ts = data.model_last_run_date.timestamp_millis();
                if let Err(e) = self.telemetry.data_freshness(ts) {
                    tracing::debug!(error = %e, "dropping telemetry failure");
                }
                tracing::debug!(%url, records = data.data_series.len(), "feed decoded");
                Ok(data)
            }
            Err(err) => {
                tracing::warn!(%url, error = %err, "feed fetch failed");
                if let Err(e) = self.telemetry.report_error(&err) {
                    tracing::debug!(error = %e, "dropping telemetry failure");
                }
                Err(err)
            }
        }
    }
}

/// Decode a feed body: optional gzip layer, then a MessagePack map.
pub fn decode_payload(body: &[u8]) -> Result<RTData, DecodeError> {
    let inflated;
    let packed = if body.starts_with(&GZIP_MAGIC) {
        let mut out = Vec::new();
        GzDecoder::new(body).read_to_end(&mut out).map_err(DecodeError::Gzip)?;
        inflated = out;
        &inflated[..]
    } else {
        // Transport already removed the content encoding.
        body
    };
    let wire: WirePayload = rmp_serde::from_slice(packed)?;
    let model_last_run_date =
        DateTime::from_timestamp_millis(wire.last_updated_ts).ok_or(DecodeError::Timestamp(wire.last_updated_ts))?;
    let last_rt_value_date =
        parse_iso_date(&wire.last_r0_date).ok_or_else(|| DecodeError::Date(wire.last_r0_date.trim().to_string()))?;
    Ok(RTData { data_series: wire.state_data, model_last_run_date, last_rt_value_date })
}
