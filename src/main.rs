//! panelsynth - synthetic UI panel/icon dataset generator
//!
//! Writes images of icon panels plus normalized bounding-box labels
//! (`0` = icon, `1` = panel) for object-detector training.

mod batch;
mod config;

use anyhow::{bail, Context, Result};
use clap::Parser;
use config::GeneratorConfig;
use panelsynth_assets::{DirectoryResolver, GlyphResolver, IconCatalog, ProceduralResolver};
use panelsynth_scene::DatasetLayout;
use std::{path::PathBuf, sync::Arc};
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Synthetic UI panel/icon dataset generator", long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Dataset root directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of images to generate
    #[arg(short = 'n', long)]
    count: Option<u64>,

    /// Batch seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Directory containing `<icon-name>.png` glyphs
    #[arg(long)]
    icons: Option<PathBuf>,

    /// JSON array of icon names replacing the built-in catalog
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Worker threads
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Dataset split name (e.g. train, val)
    #[arg(long)]
    split: Option<String>,

    /// Write the effective configuration to this path and exit
    #[arg(long)]
    dump_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize tracing with INFO level by default (can be overridden via RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    run(args)
}

fn run(args: Args) -> Result<()> {
    let mut cfg = GeneratorConfig::load_from_path(&args.config);
    apply_overrides(&mut cfg, &args);

    if let Some(path) = &args.dump_config {
        cfg.save_to_path(path)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Configuration written to {}", path.display());
        return Ok(());
    }

    cfg.scene
        .validate()
        .context("Scene configuration is invalid")?;
    if cfg.jobs == 0 {
        bail!("jobs must be at least 1");
    }

    let catalog = match &cfg.catalog_path {
        Some(path) => IconCatalog::load_file(path)
            .with_context(|| format!("Failed to load icon catalog {}", path.display()))?,
        None => IconCatalog::default(),
    };

    let resolver: Arc<dyn GlyphResolver + Send + Sync> = match &cfg.icon_dir {
        Some(dir) => {
            if !dir.is_dir() {
                bail!("Icon path {:?} is not a directory", dir);
            }
            Arc::new(DirectoryResolver::new(dir))
        }
        None => {
            info!("No icon directory configured; using procedural glyphs");
            Arc::new(ProceduralResolver::default())
        }
    };

    let seed = cfg.seed.unwrap_or_else(rand::random);
    info!(
        "Starting panelsynth v{} (seed {seed}, {} images, {} icons in catalog)",
        env!("CARGO_PKG_VERSION"),
        cfg.image_count,
        catalog.len()
    );

    let layout =
        DatasetLayout::new(&cfg.output_dir, &cfg.split).with_extension(&cfg.image_extension);
    layout.create_dirs().with_context(|| {
        format!(
            "Failed to create dataset directories under {}",
            cfg.output_dir.display()
        )
    })?;

    let summary = batch::run_batch(&cfg, seed, &catalog, &layout, resolver)?;

    println!(
        "Generated {} images with {} panels and {} icons in {}",
        summary.images,
        summary.panels,
        summary.icons,
        cfg.output_dir.display()
    );

    Ok(())
}

fn apply_overrides(cfg: &mut GeneratorConfig, args: &Args) {
    if let Some(output) = &args.output {
        cfg.output_dir = output.clone();
    }
    if let Some(count) = args.count {
        cfg.image_count = count;
    }
    if args.seed.is_some() {
        cfg.seed = args.seed;
    }
    if args.icons.is_some() {
        cfg.icon_dir = args.icons.clone();
    }
    if args.catalog.is_some() {
        cfg.catalog_path = args.catalog.clone();
    }
    if let Some(jobs) = args.jobs {
        cfg.jobs = jobs;
    }
    if let Some(split) = &args.split {
        cfg.split = split.clone();
    }
}
