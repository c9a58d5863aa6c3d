use blob_detector::image::io::{load_grayscale_image, write_json_file, write_text_file};
use blob_detector::overlay::render_svg;
use blob_detector::{Blob, BlobDetector};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct OverlayToolConfig {
    pub input: PathBuf,
    pub output: OverlayOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OverlayOutputConfig {
    pub svg: PathBuf,
    #[serde(default)]
    pub blobs_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<OverlayToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let detector = BlobDetector::new();
    let blobs = detector.detect(gray.as_view(), Vec::new());

    let href = config.input.display().to_string();
    let svg = render_svg(&href, gray.width(), gray.height(), &blobs);
    write_text_file(&config.output.svg, &svg)?;
    println!(
        "Saved overlay with {} blobs to {}",
        blobs.len(),
        config.output.svg.display()
    );

    if let Some(json_path) = &config.output.blobs_json {
        let summary = BlobSummary {
            width: gray.width(),
            height: gray.height(),
            blob_count: blobs.len(),
            blobs,
        };
        write_json_file(json_path, &summary)?;
        println!(
            "Saved {} blob records to {}",
            summary.blob_count,
            json_path.display()
        );
    }

    Ok(())
}

fn usage() -> String {
    "Usage: blob_overlay <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BlobSummary {
    width: usize,
    height: usize,
    blob_count: usize,
    blobs: Vec<Blob>,
}
