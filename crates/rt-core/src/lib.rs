// File: crates/rt-core/src/lib.rs
// Summary: Core library entry point; feed decoding, derived series and chart frame construction.

pub mod axis;
pub mod chart;
pub mod color;
pub mod config;
pub mod encode;
pub mod error;
pub mod fetch;
pub mod format;
pub mod group;
pub mod hint;
pub mod legend;
pub mod record;
pub mod region;
pub mod series;
pub mod session;
pub mod smooth;
pub mod view;

pub use axis::YAxis;
pub use chart::{ChartFrame, InputChart, ResultsChart, TestAdjustedChart};
pub use color::Color;
pub use config::SeriesConfig;
pub use encode::{OverlayMode, VisualEncoder};
pub use error::{DecodeError, FetchError, TelemetryError, TransportError};
pub use fetch::{
    decode_payload, AreaConfig, DataFetcher, FetcherOptions, HttpTransport, NoopTelemetry, TelemetrySink,
    TracingTelemetry, Transport,
};
pub use format::NumberFormat;
pub use group::{group_by, group_by_region, group_by_run_date, GroupedSeries};
pub use hint::{HintFormatter, HintLine, MetricHint, TestAdjustedHint};
pub use legend::{Legend, LegendRow};
pub use record::{RTData, RawRecord};
pub use region::{RegionDirectory, RegionInfo};
pub use series::{Point, Series, SeriesKind, SeriesStyle, StrokeDash};
pub use session::{Applied, FetchSession, FetchTicket, LoadOutcome};
pub use smooth::{moving_average, smooth_records, SmoothedPoint, SMOOTHING_WINDOW};
pub use view::{Selection, SharedViewport, Viewport};
