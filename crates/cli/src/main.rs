mod provenance;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use orthopack::api::{draw_sizes, Heuristic, Metric, PackCfg, RectArrangement, SizeCfg};
use orthopack::Vec2;
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Greedy rectangle packing runner")]
struct Cmd {
    /// Log per-placement details
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Pack rectangles and write the arrangement as JSON plus a provenance sidecar
    Pack(PackArgs),
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct PackArgs {
    /// CSV with `area` and `aspect` columns
    #[arg(long, conflicts_with = "random", required_unless_present = "random")]
    input: Option<PathBuf>,
    /// Draw this many random sizes instead of reading a CSV
    #[arg(long)]
    random: Option<usize>,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long)]
    out: PathBuf,
    #[arg(long, default_value_t = Heuristic::First)]
    heuristic: Heuristic,
    #[arg(long, default_value_t = Metric::Euclidean)]
    metric: Metric,
    #[arg(long, default_value_t = 1)]
    close_frequency: usize,
    #[arg(long, default_value_t = 0.5)]
    close_factor: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_x: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    center_y: f64,
}

impl PackArgs {
    fn cfg(&self) -> PackCfg {
        PackCfg {
            heuristic: self.heuristic,
            metric: self.metric,
            close_frequency: self.close_frequency,
            close_factor: self.close_factor,
        }
    }
}

#[derive(Serialize, Debug)]
struct RectOut {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Serialize, Debug)]
struct CfgOut {
    heuristic: String,
    metric: String,
    close_frequency: usize,
    close_factor: f64,
}

#[derive(Serialize, Debug)]
struct ArrangementOut {
    center: [f64; 2],
    cfg: CfgOut,
    rects: Vec<RectOut>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_max_level(level)
        .with_target(false)
        .init();
    match cmd.action {
        Action::Pack(args) => pack(&args).map(|_| ()),
        Action::Report => report(),
    }
}

/// Read `(area, aspect)` rows from a CSV; both columns are cast to `f64`.
fn read_sizes(path: &Path) -> Result<Vec<(f64, f64)>> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()?
        .select([
            col("area").cast(DataType::Float64),
            col("aspect").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading area/aspect from {}", path.display()))?;
    let area = df.column("area")?.f64()?;
    let aspect = df.column("aspect")?.f64()?;
    area.into_iter()
        .zip(aspect)
        .enumerate()
        .map(|(row, pair)| match pair {
            (Some(a), Some(r)) => Ok((a, r)),
            _ => bail!("row {row}: missing area or aspect"),
        })
        .collect()
}

fn pack_sizes(args: &PackArgs, sizes: &[(f64, f64)]) -> Result<RectArrangement> {
    let center = Vec2::new(args.center_x, args.center_y);
    let mut arr = RectArrangement::new(center, args.cfg())?;
    for (i, &(area, aspect)) in sizes.iter().enumerate() {
        arr.add_rect(area, aspect)
            .with_context(|| format!("placing rect {i}"))?;
    }
    Ok(arr)
}

fn pack(args: &PackArgs) -> Result<ArrangementOut> {
    let sizes = match (&args.input, args.random) {
        (Some(path), _) => read_sizes(path)?,
        (None, Some(n)) => draw_sizes(SizeCfg::default(), args.seed, n)?,
        (None, None) => bail!("either --input or --random is required"),
    };
    tracing::info!(count = sizes.len(), heuristic = %args.heuristic, metric = %args.metric, "pack");

    let arr = pack_sizes(args, &sizes)?;
    let cfg = arr.cfg();
    let out = ArrangementOut {
        center: [arr.center().x, arr.center().y],
        cfg: CfgOut {
            heuristic: cfg.heuristic.to_string(),
            metric: cfg.metric.to_string(),
            close_frequency: cfg.close_frequency,
            close_factor: cfg.close_factor,
        },
        rects: arr
            .rects()
            .iter()
            .map(|r| RectOut {
                x: r.min.x,
                y: r.min.y,
                width: r.width(),
                height: r.height(),
            })
            .collect(),
    };

    if let Some(parent) = args.out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(file), &out)?;

    let params = json!({
        "cfg": &out.cfg,
        "center": out.center,
        "random": args.random,
        "seed": args.random.map(|_| args.seed),
    });
    let mut payload = provenance::Payload::new(params);
    if let Some(path) = &args.input {
        payload = payload.with_input(path.to_string_lossy());
    }
    let prov = provenance::write_sidecar(&args.out, payload)?;
    tracing::info!(
        rects = out.rects.len(),
        region_vertices = arr.polygon().len(),
        out = %args.out.display(),
        provenance = %prov.display(),
        "wrote arrangement"
    );
    Ok(out)
}

fn report() -> Result<()> {
    tracing::info!("report");
    let mut obj = provenance::header();
    let cfg = PackCfg::default();
    obj["params"] = json!({
        "default_cfg": {
            "heuristic": cfg.heuristic.to_string(),
            "metric": cfg.metric.to_string(),
            "close_frequency": cfg.close_frequency,
            "close_factor": cfg.close_factor,
        }
    });
    obj["outputs"] = json!([]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
