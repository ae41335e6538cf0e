use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use image::{DynamicImage, ImageReader};
use serde::Deserialize;
use sprite_packer_core::{InputImage, OverflowPolicy, PackerConfig, pack_images};
use tracing::{error, info};
use walkdir::WalkDir;

#[derive(Parser, Debug)]
#[command(
    name = "sprite-packer",
    about = "Pack PNG sprites into a spritesheet",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Show progress bars (disable with --progress=false or --quiet)
    #[arg(long, default_value_t = true, action=ArgAction::Set, global=true, help_heading = "Logging/UX")]
    progress: bool,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a folder of PNG sprites into a spritesheet (PNG + JSON atlas)
    Pack(PackArgs),
    /// Read an existing atlas and display a single named sheet entry
    Show(ShowArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Spritesheet name (canvas is written as <name>.png)
    #[arg(help_heading = "Input/Output")]
    name: String,
    /// Input directory of *.png files, read non-recursively
    #[arg(short, long, default_value = "images", help_heading = "Input/Output")]
    input: PathBuf,
    /// Output directory
    #[arg(short, long, default_value = "out", help_heading = "Input/Output")]
    out_dir: PathBuf,
    /// Atlas JSON file name, resolved under the output directory
    #[arg(long, default_value = "spritesheet.json", help_heading = "Input/Output")]
    atlas_file: String,
    /// YAML config file path (overrides canvas/input/name options)
    #[arg(long, help_heading = "Input/Output")]
    config: Option<PathBuf>,

    // Layout
    /// Canvas width
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    canvas_width: u32,
    /// Canvas height
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    canvas_height: u32,
    /// Policy when a sprite does not fit on the canvas: clip | error
    #[arg(long, default_value = "clip", help_heading = "Layout")]
    overflow: String,
}

#[derive(Parser, Debug, Clone)]
struct ShowArgs {
    /// Sheet entry name to display
    name: String,
    /// Atlas JSON path
    #[arg(short, long, default_value = "out/spritesheet.json")]
    atlas: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args, cli.progress && !cli.quiet),
        Commands::Show(args) => run_show(args),
    }
}

fn run_pack(cli: &PackArgs, show_progress: bool) -> anyhow::Result<()> {
    let overflow: OverflowPolicy = cli
        .overflow
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown overflow policy: {}", cli.overflow))?;

    let mut name = cli.name.clone();
    let mut input = cli.input.clone();
    let mut cfg = PackerConfig {
        canvas_width: cli.canvas_width,
        canvas_height: cli.canvas_height,
        overflow_policy: overflow,
    };

    // Config file, if provided, overrides the recognized options en bloc
    if let Some(path) = &cli.config {
        let file = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let y: YamlConfig = serde_yaml::from_str(&file)?;
        cfg = y.apply(cfg, &mut input, &mut name);
    }

    if !input.is_dir() {
        anyhow::bail!("input directory {} does not exist", input.display());
    }
    fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("create out_dir {}", cli.out_dir.display()))?;

    let paths = gather_paths(&input)?;
    let inputs = load_images_with_progress(&paths, show_progress)?;
    info!(count = inputs.len(), "loaded input images");

    let out = pack_images(name.clone(), inputs, cfg)?;

    let png_path = cli.out_dir.join(format!("{}.png", name));
    out.canvas
        .save(&png_path)
        .with_context(|| format!("write {}", png_path.display()))?;
    info!(?png_path, "wrote canvas");

    let json_path = cli.out_dir.join(&cli.atlas_file);
    let written = sprite_packer_core::save_atlas(&json_path, &out.sheet)
        .with_context(|| format!("write {}", json_path.display()))?;
    if written {
        info!(?json_path, frames = out.sheet.len(), "atlas written");
    }
    Ok(())
}

fn run_show(cli: &ShowArgs) -> anyhow::Result<()> {
    let sheets = sprite_packer_core::load_atlas(&cli.atlas)
        .with_context(|| format!("read {}", cli.atlas.display()))?;
    let sheet = sheets
        .iter()
        .find(|s| s.name == cli.name)
        .with_context(|| format!("no sheet named `{}` in {}", cli.name, cli.atlas.display()))?;
    println!("{}", sprite_packer_core::to_json_string(sheet)?);
    Ok(())
}

/// Lists *.png files directly under `dir`, sorted by file name for
/// deterministic packing order. An unreadable listing is unrecoverable.
fn gather_paths(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut list: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1).sort_by_file_name() {
        let entry = entry?;
        let p = entry.path();
        if p.is_file() && is_png(p) {
            list.push(p.to_path_buf());
        }
    }
    Ok(list)
}

fn is_png(p: &Path) -> bool {
    matches!(
        p.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if ext == "png"
    )
}

fn load_images_with_progress(paths: &[PathBuf], progress: bool) -> anyhow::Result<Vec<InputImage>> {
    use indicatif::{ProgressBar, ProgressStyle};
    let bar = if progress {
        let b = ProgressBar::new(paths.len() as u64);
        if let Ok(style) = ProgressStyle::with_template(
            "{spinner:.green} loading {pos}/{len} [{elapsed_precise}] {wide_msg}",
        ) {
            b.set_style(style);
        }
        Some(b)
    } else {
        None
    };
    let mut list = Vec::with_capacity(paths.len());
    for p in paths {
        let msg = p.file_name().and_then(|s| s.to_str()).unwrap_or("");
        if let Some(b) = &bar {
            b.set_message(msg.to_string());
        }
        match load_image(p) {
            Ok(img) => {
                // the file name is the frame key, unique within the directory
                list.push(InputImage {
                    key: msg.to_string(),
                    image: img,
                });
            }
            Err(e) => {
                error!(?p, error = %e, "skip image");
            }
        }
        if let Some(b) = &bar {
            b.inc(1);
        }
    }
    if let Some(b) = &bar {
        b.finish_and_clear();
    }
    Ok(list)
}

fn load_image(p: &Path) -> anyhow::Result<DynamicImage> {
    let img = ImageReader::open(p)?.with_guessed_format()?.decode()?;
    Ok(img)
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}

#[derive(Debug, Deserialize, Default)]
struct YamlConfig {
    canvas_width: Option<u32>,
    canvas_height: Option<u32>,
    input_path: Option<PathBuf>,
    output_name: Option<String>,
    overflow_policy: Option<String>,
}

impl YamlConfig {
    fn apply(self, mut cfg: PackerConfig, input: &mut PathBuf, name: &mut String) -> PackerConfig {
        if let Some(v) = self.canvas_width {
            cfg.canvas_width = v;
        }
        if let Some(v) = self.canvas_height {
            cfg.canvas_height = v;
        }
        if let Some(v) = self.overflow_policy {
            cfg.overflow_policy = v.parse().unwrap_or(cfg.overflow_policy);
        }
        if let Some(v) = self.input_path {
            *input = v;
        }
        if let Some(v) = self.output_name {
            *name = v;
        }
        cfg
    }
}
