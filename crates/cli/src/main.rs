use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use maxplanar::api::{
    parse_adjacency, random_triangulation, read_adjacency, recognize_with, Backend, Graph,
    PivotChoice, Recognition, RecognizeCfg, StackedCfg,
};
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

#[derive(Parser)]
#[command(name = "maxplanar")]
#[command(about = "Recognize maximal planar graphs")]
struct Cmd {
    /// Diagnostics level (written to stderr)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read a graph (upper-triangle format) and print YES or NO
    Recognize {
        /// Input path, `-` for stdin
        #[arg(long, default_value = "-")]
        input: String,
        #[arg(long, value_enum, default_value_t = BackendArg::Sorted)]
        backend: BackendArg,
        #[arg(long, value_enum, default_value_t = PivotArg::Largest)]
        pivot: PivotArg,
        /// Give up after this many seed triangles
        #[arg(long)]
        max_seeds: Option<usize>,
        /// Print the full report as JSON instead of YES/NO
        #[arg(long)]
        json: bool,
    },
    /// Write a random triangulation in the input format
    Generate {
        #[arg(long)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        flips: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Output path (stdout if omitted); a provenance sidecar is written next to it
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Sorted,
    Tree,
    Bits,
}

impl From<BackendArg> for Backend {
    fn from(b: BackendArg) -> Self {
        match b {
            BackendArg::Sorted => Backend::Sorted,
            BackendArg::Tree => Backend::Tree,
            BackendArg::Bits => Backend::Bits,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum PivotArg {
    Largest,
    Smallest,
}

impl From<PivotArg> for PivotChoice {
    fn from(p: PivotArg) -> Self {
        match p {
            PivotArg::Largest => PivotChoice::Largest,
            PivotArg::Smallest => PivotChoice::Smallest,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(cmd.log_level)
        .with_writer(io::stderr)
        .init();
    match cmd.action {
        Action::Recognize {
            input,
            backend,
            pivot,
            max_seeds,
            json,
        } => {
            let cfg = RecognizeCfg {
                pivot: pivot.into(),
                max_seed_attempts: max_seeds,
            };
            recognize(&input, backend.into(), cfg, json)
        }
        Action::Generate {
            vertices,
            flips,
            seed,
            out,
        } => generate(vertices, flips, seed, out.as_deref()),
        Action::Report => report(),
    }
}

fn recognize(input: &str, backend: Backend, cfg: RecognizeCfg, json: bool) -> Result<()> {
    let graph = load_graph(input)?;
    tracing::info!(
        input,
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        %backend,
        "recognize"
    );
    let rec = recognize_with(&graph, backend, cfg);
    if let Some(reason) = rec.rejection {
        tracing::info!(%reason, seeds_tried = rec.seeds_tried(), "rejected");
    }
    if json {
        let view = RecognitionView::new(&graph, backend, &rec);
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", rec.verdict);
    }
    Ok(())
}

fn load_graph(input: &str) -> Result<Graph> {
    if input == "-" {
        return read_adjacency(io::stdin().lock()).context("parsing graph from stdin");
    }
    let text = fs::read_to_string(input).with_context(|| format!("reading {input}"))?;
    parse_adjacency(&text).with_context(|| format!("parsing {input}"))
}

/// JSON shape of a recognition report.
#[derive(Serialize)]
struct RecognitionView {
    verdict: &'static str,
    backend: &'static str,
    vertices: usize,
    edges: usize,
    rejection: Option<String>,
    seeds_tried: usize,
    seed: Option<[usize; 3]>,
    order: Option<Vec<usize>>,
}

impl RecognitionView {
    fn new(graph: &Graph, backend: Backend, rec: &Recognition) -> Self {
        Self {
            verdict: rec.verdict.as_str(),
            backend: backend.name(),
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            rejection: rec.rejection.map(|r| r.to_string()),
            seeds_tried: rec.seeds_tried(),
            seed: rec.witness.as_ref().map(|w| [w.seed.v1, w.seed.v2, w.seed.vn]),
            order: rec.witness.as_ref().map(|w| w.order.as_slice().to_vec()),
        }
    }
}

fn generate(vertices: usize, flips: usize, seed: u64, out: Option<&Path>) -> Result<()> {
    tracing::info!(vertices, flips, seed, "generate");
    let tri = random_triangulation(StackedCfg { vertices, flips }, seed)?;
    let text = tri.graph.to_adjacency_text();
    let Some(out_path) = out else {
        print!("{text}");
        return Ok(());
    };
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out_path, text).with_context(|| format!("writing {}", out_path.display()))?;
    let payload = provenance::Payload::new(serde_json::json!({
        "generator": "stacked+flips",
        "vertices": vertices,
        "flips": flips,
        "seed": seed,
        "edges": tri.graph.edge_count(),
    }));
    let prov_path = provenance::write_sidecar(out_path, payload)?;
    tracing::info!(
        out = %out_path.display(),
        provenance = %prov_path.display(),
        "wrote triangulation"
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": maxplanar::VERSION,
        "backends": Backend::ALL.iter().map(|b| b.name()).collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
