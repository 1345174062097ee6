use anyhow::{Context, Result};
use boleto_reader::render::scan_image;
use boleto_reader::tools::frame_paths;
use boleto_reader::{BarcodeReader, ChecksumPolicy, ImageSequence, ReaderConfig, scan_frames};
use clap::{Args, Parser, Subcommand};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "boletool", version, about = "Boleto barcode reader tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Decode the barcode in a single image
    Decode {
        #[arg(long, default_value = "barcode.jpg")]
        image: PathBuf,
        #[command(flatten)]
        reader: ReaderArgs,
    },
    /// Render thresholded scanlines below the midpoint of an image
    Scan {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, default_value_t = 50)]
        lines: u32,
        #[arg(long, default_value_t = 10)]
        block: u32,
    },
    /// Play a folder of frames until one decodes
    Frames {
        #[arg(long)]
        dir: PathBuf,
        #[arg(long)]
        max_frames: Option<usize>,
        #[command(flatten)]
        reader: ReaderArgs,
    },
    /// Decode every image in a folder and report the reading rate
    Batch {
        #[arg(long)]
        root: PathBuf,
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        reader: ReaderArgs,
    },
}

/// Overrides on top of the `BOLETO_*` environment configuration
#[derive(Args)]
struct ReaderArgs {
    /// Rows averaged into the scanline
    #[arg(long)]
    band_height: Option<u32>,
    /// Offset of the band from the vertical midpoint
    #[arg(long, allow_hyphen_values = true)]
    offset: Option<i32>,
    /// Fail when the general check digit does not verify
    #[arg(long)]
    strict: bool,
}

impl ReaderArgs {
    fn reader(&self) -> BarcodeReader {
        BarcodeReader::with_config(self.apply(ReaderConfig::from_env()))
    }

    fn apply(&self, mut config: ReaderConfig) -> ReaderConfig {
        if let Some(band_height) = self.band_height {
            config = config.with_band_height(band_height.max(1));
        }
        if let Some(offset) = self.offset {
            config = config.with_vertical_offset(offset);
        }
        if self.strict {
            config = config.with_checksum_policy(ChecksumPolicy::Enforce);
        }
        config
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Decode { image, reader } => decode_cmd(&image, &reader.reader()),
        Command::Scan {
            image,
            output,
            lines,
            block,
        } => scan_cmd(&image, &output, lines, block),
        Command::Frames {
            dir,
            max_frames,
            reader,
        } => frames_cmd(&dir, max_frames, &reader.reader()),
        Command::Batch {
            root,
            limit,
            reader,
        } => batch_cmd(&root, limit, &reader.reader()),
    }
}

fn decode_cmd(image: &Path, reader: &BarcodeReader) -> Result<()> {
    match reader.decode_path(image) {
        Ok(barcode) => {
            if !barcode.general_check {
                eprintln!("warning: general check digit did not verify");
            }
            println!("{}", barcode);
        }
        Err(err) => {
            log::info!("{}: {}", image.display(), err);
            println!("None");
        }
    }
    Ok(())
}

fn scan_cmd(image: &Path, output: &Path, lines: u32, block: u32) -> Result<()> {
    let source =
        image::open(image).with_context(|| format!("failed to open {}", image.display()))?;
    let scan = scan_image(&BarcodeReader::from_env(), &source, lines, block);
    scan.save(output)
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!(
        "Wrote {} ({}x{})",
        output.display(),
        scan.width(),
        scan.height()
    );
    Ok(())
}

fn frames_cmd(dir: &Path, max_frames: Option<usize>, reader: &BarcodeReader) -> Result<()> {
    let source = ImageSequence::from_dir(dir, None);
    println!("Frames: {} in {}", source.remaining(), dir.display());
    match scan_frames(reader, source, max_frames) {
        Some(hit) => println!("Frame {}: {}", hit.frame, hit.barcode),
        None => println!("None"),
    }
    Ok(())
}

fn batch_cmd(root: &Path, limit: Option<usize>, reader: &BarcodeReader) -> Result<()> {
    let images = frame_paths(root, limit);
    if images.is_empty() {
        anyhow::bail!("no images found under {}", root.display());
    }

    let start = Instant::now();
    let results: Vec<_> = images
        .par_iter()
        .map(|path| (path, reader.decode_path(path)))
        .collect();
    let elapsed = start.elapsed();

    let mut decoded = 0usize;
    for (path, result) in &results {
        match result {
            Ok(barcode) => {
                decoded += 1;
                println!("OK   {} -> {}", path.display(), barcode);
            }
            Err(err) => println!("FAIL {} -> {}", path.display(), err),
        }
    }

    println!(
        "\nResult: {}/{} ({:.1}%) in {:.2?}",
        decoded,
        results.len(),
        100.0 * decoded as f64 / results.len() as f64,
        elapsed
    );
    Ok(())
}
