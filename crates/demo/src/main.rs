// File: crates/demo/src/main.rs
// Summary: Demo loads a packed feed (HTTP or local file), builds results and input frames, writes them as CSV.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rt_core::axis::x_tick_label;
use rt_core::region::{regions_from_json, RegionInfo};
use rt_core::{
    AreaConfig, ChartFrame, DataFetcher, FetchSession, FetcherOptions, HttpTransport, InputChart, LoadOutcome,
    MetricHint, OverlayMode, ResultsChart, Selection, SeriesConfig, SharedViewport, TracingTelemetry, Transport,
    TransportError,
};

#[derive(Parser, Debug)]
#[command(name = "rt-demo", about = "Decode an Rt feed and export chart frames")]
struct Args {
    /// Feed base URL; `.pack.gz` is appended.
    #[arg(long, env = "RT_DEMO_URL_BASE", conflicts_with = "file", required_unless_present = "file")]
    url_base: Option<String>,

    /// Local `.pack.gz` file instead of HTTP.
    #[arg(long, env = "RT_DEMO_FILE")]
    file: Option<PathBuf>,

    /// Results metric (Rt, infectionsPC, PEI, ...).
    #[arg(long, default_value = "Rt")]
    metric: String,

    /// Raw input metric for the paired chart (cases, deaths).
    #[arg(long, default_value = "cases")]
    input_metric: String,

    /// Overlay every model run instead of only the newest.
    #[arg(long)]
    history: bool,

    /// Moving-average window for the input chart.
    #[arg(long, default_value_t = rt_core::SMOOTHING_WINDOW)]
    window: usize,

    /// Optional `{fips: {county: ...}}` JSON table for tooltip names.
    #[arg(long)]
    regions: Option<PathBuf>,

    /// Brush the shared viewport to the last N days.
    #[arg(long)]
    zoom_days: Option<u64>,

    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,
}

/// Serves `<path>` for a URL equal to that path.
struct FileTransport;

impl Transport for FileTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        Ok(std::fs::read(url)?)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let session = FetchSession::new();

    let outcome = match (&args.url_base, &args.file) {
        (Some(base), _) => {
            let opts = FetcherOptions { timeout: std::time::Duration::from_secs(args.timeout_secs), ..Default::default() };
            let transport = HttpTransport::new(&opts).context("building http client")?;
            let fetcher = DataFetcher::new(AreaConfig::new(base.as_str()), transport).with_telemetry(TracingTelemetry);
            session.load(&fetcher).await.with_context(|| format!("fetching {}", fetcher.data_url(None)))?
        }
        (None, Some(file)) => {
            let base = file_base(file)?;
            let fetcher = DataFetcher::new(AreaConfig::new(base), FileTransport).with_telemetry(TracingTelemetry);
            session.load(&fetcher).await.with_context(|| format!("reading {}", file.display()))?
        }
        (None, None) => anyhow::bail!("one of --url-base or --file is required"),
    };
    if outcome != LoadOutcome::Applied {
        anyhow::bail!("fetch was superseded");
    }
    let data = session.current_data().context("no data applied")?;

    tracing::info!(
        records = data.data_series.len(),
        model_last_run = %data.model_last_run_date,
        last_rt_value = %data.last_rt_value_date,
        "feed loaded"
    );

    let regions: HashMap<String, RegionInfo> = match &args.regions {
        Some(path) => {
            let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            regions_from_json(&text).with_context(|| format!("parsing {}", path.display()))?
        }
        None => HashMap::new(),
    };

    let viewport = SharedViewport::new();
    if let Some(days) = args.zoom_days {
        if let Some(last) = data.data_series.iter().map(|r| r.instant()).max() {
            viewport.brush_end(last - chrono::Duration::days(days as i64), last);
        }
    }

    let mode = OverlayMode { show_history: args.history, show_neighbors: false };
    let hint = MetricHint::new(args.metric.as_str(), SeriesConfig::for_metric(&args.metric), &regions);
    let results = ResultsChart::new(args.metric.as_str(), hint).with_mode(mode);
    let results_frame = results.build(&data.data_series, None, &viewport, &Selection::None);

    let input = InputChart::new(args.input_metric.as_str()).with_window(args.window);
    let input_frame = input.build(&data.data_series, &viewport);

    std::fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;
    for (label, frame) in [(args.metric.as_str(), &results_frame), (args.input_metric.as_str(), &input_frame)] {
        let path = args.out.join(format!("frame_{label}.csv"));
        write_frame_csv(frame, &path).with_context(|| format!("writing {}", path.display()))?;
        println!("{label}: {} series -> {}", frame.series.len(), path.display());
        if let Some((l, r)) = frame.x_domain {
            println!("  x: {} .. {}", x_tick_label(l), x_tick_label(r));
        }
        if let Some(ticks) = &frame.y_axis.ticks {
            println!("  y ticks: {:?} {:?}", ticks, frame.y_axis.tick_labels());
        }
    }

    Ok(())
}

/// `foo/06037.pack.gz` -> `foo/06037`.
fn file_base(path: &Path) -> Result<String> {
    let s = path.to_str().context("feed path is not UTF-8")?;
    s.strip_suffix(".pack.gz")
        .map(str::to_string)
        .with_context(|| format!("{} does not end in .pack.gz", path.display()))
}

fn write_frame_csv(frame: &ChartFrame, path: &Path) -> Result<()> {
    let mut w = csv::Writer::from_path(path)?;
    w.write_record(["series", "kind", "date", "y", "color", "opacity", "stroke_width", "dash"])?;
    for s in &frame.series {
        for p in &s.points {
            w.write_record([
                s.name.clone(),
                format!("{:?}", s.kind),
                p.x.date_naive().to_string(),
                p.y.to_string(),
                s.style.color.to_string(),
                format!("{:.4}", s.style.opacity),
                s.style.stroke_width.to_string(),
                format!("{:?}", s.style.dash),
            ])?;
        }
    }
    w.flush()?;
    Ok(())
}
