use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "vatform", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write the center-symmetric calibration grid as a PNG.
    Grid(GridArgs),
    /// Write the honeycomb dot lattice as a PNG.
    Dots(LatticeArgs),
    /// Write the diagonal line lattice as a PNG.
    Lines(LatticeArgs),
    /// Print the declared numeric-parameter table as JSON.
    Params,
}

#[derive(Parser, Debug)]
struct GridArgs {
    /// Print resolution, e.g. 2560x1620.
    #[arg(long, value_parser = parse_size)]
    size: (u32, u32),

    /// Distance between adjacent parallel lines, px.
    #[arg(long, default_value_t = vatform::GRID_SPACING.default)]
    spacing: u32,

    /// Stroke thickness of each line, px.
    #[arg(long, default_value_t = vatform::GRID_LINE_WIDTH.default)]
    line_width: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct LatticeArgs {
    /// Print resolution, e.g. 2560x1620.
    #[arg(long, value_parser = parse_size)]
    size: (u32, u32),

    /// Dot diameter / stroke grain, px.
    #[arg(long, default_value_t = vatform::GRAIN_SIZE.default)]
    grain: u32,

    /// Free space between grains, px.
    #[arg(long, default_value_t = vatform::GRAIN_SPACING.default)]
    spacing: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w = w.parse::<u32>().map_err(|e| format!("bad width: {e}"))?;
    let h = h.parse::<u32>().map_err(|e| format!("bad height: {e}"))?;
    Ok((w, h))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Grid(args) => cmd_grid(args),
        Command::Dots(args) => cmd_lattice(args, LatticeKind::Dots),
        Command::Lines(args) => cmd_lattice(args, LatticeKind::Lines),
        Command::Params => cmd_params(),
    }
}

fn cmd_grid(args: GridArgs) -> anyhow::Result<()> {
    let (width, height) = args.size;
    let params = vatform::GridPatternParams {
        spacing_px: args.spacing,
        line_px: args.line_width,
    };
    let pattern = vatform::grid_pattern(width, height, &params)?;
    write_png(&pattern, &args.out)
}

enum LatticeKind {
    Dots,
    Lines,
}

fn cmd_lattice(args: LatticeArgs, kind: LatticeKind) -> anyhow::Result<()> {
    let (width, height) = args.size;
    let params = vatform::LatticeParams {
        grain_px: args.grain,
        spacing_px: args.spacing,
    };
    let pattern = match kind {
        LatticeKind::Dots => vatform::dot_lattice(width, height, &params)?,
        LatticeKind::Lines => vatform::line_lattice(width, height, &params)?,
    };
    write_png(&pattern, &args.out)
}

fn cmd_params() -> anyhow::Result<()> {
    let table = vatform::declared_params();
    println!("{}", serde_json::to_string_pretty(&table)?);
    Ok(())
}

fn write_png(buffer: &vatform::PixelBuffer, out: &Path) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        buffer.data(),
        buffer.width(),
        buffer.height(),
        image::ColorType::L8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
