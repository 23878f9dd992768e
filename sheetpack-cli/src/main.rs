use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use sheetpack::image::ImageRgb8;
use sheetpack::layout;

/// Convert bitmap sheets into assembler .s files of packed .fill data
#[derive(Parser)]
#[command(name = "sheetpack", version)]
struct Args {
    /// Bitmap files to convert; with none given, every .bmp in the assets
    /// directory is converted
    images: Vec<PathBuf>,

    /// Directory scanned when no images are named, and fallback base for
    /// bare names that do not resolve from the current directory
    #[arg(long, default_value = ".")]
    assets_dir: PathBuf,

    /// Output directory for generated .s files (defaults to each source
    /// file's own directory)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Treat the top-left pixel of each cell as transparent and encode
    /// matching pixels as 0xFFFF (applies to all files, overriding the
    /// layout table default)
    #[arg(long)]
    transparent_top_left: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let inputs = resolve_inputs(&args.assets_dir, &args.images)?;
    anyhow::ensure!(!inputs.is_empty(), "no .bmp files found to convert");

    for source in &inputs {
        anyhow::ensure!(
            source.exists(),
            "input file not found: {}",
            source.display()
        );
        anyhow::ensure!(
            has_extension(source, "bmp"),
            "unsupported input (expected .bmp): {}",
            source.display()
        );
    }

    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory '{}'", dir.display()))?;
    }

    for source in &inputs {
        let out_path = out_path_for(source, args.out_dir.as_deref());
        convert_file(source, &out_path, args.transparent_top_left)
            .with_context(|| format!("failed to convert {}", source.display()))?;
        println!("wrote {}", out_path.display());
    }

    Ok(())
}

/// Resolve requested inputs: explicit paths, or every .bmp in the assets
/// directory, sorted for a deterministic batch order.
fn resolve_inputs(assets_dir: &Path, images: &[PathBuf]) -> Result<Vec<PathBuf>> {
    if images.is_empty() {
        let entries = fs::read_dir(assets_dir)
            .with_context(|| format!("reading assets directory '{}'", assets_dir.display()))?;
        let mut found = Vec::new();
        for entry in entries {
            let path = entry
                .with_context(|| format!("reading assets directory '{}'", assets_dir.display()))?
                .path();
            if has_extension(&path, "bmp") {
                found.push(path);
            }
        }
        found.sort();
        return Ok(found);
    }

    // Keep the caller's path semantics, but retry bare names against the
    // assets directory for compatibility with invoking from elsewhere.
    Ok(images
        .iter()
        .map(|p| {
            if p.is_absolute() || p.exists() {
                p.clone()
            } else {
                assets_dir.join(p)
            }
        })
        .collect())
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension().is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

/// Destination `.s` path for one source bitmap.
fn out_path_for(source: &Path, out_dir: Option<&Path>) -> PathBuf {
    match out_dir {
        Some(dir) => {
            let mut name = source.file_stem().unwrap_or_default().to_os_string();
            name.push(".s");
            dir.join(name)
        }
        None => source.with_extension("s"),
    }
}

/// Convert one bitmap file to one assembler file.
fn convert_file(source: &Path, out_path: &Path, force_transparent: bool) -> Result<()> {
    let decoded = image::open(source)
        .with_context(|| format!("opening {}", source.display()))?
        .into_rgb8();
    let (width, height) = decoded.dimensions();
    let img = ImageRgb8::from_buf(width, height, decoded.into_raw());

    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let layout = layout::layout_for(&name, force_transparent);

    let asm = sheetpack::convert(&img, &name, &layout)?;
    fs::write(out_path, asm).with_context(|| format!("writing {}", out_path.display()))?;
    Ok(())
}
