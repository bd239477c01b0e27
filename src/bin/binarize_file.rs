use binarize::image::io::{load_grayscale, save_grayscale, write_json_file};
use binarize::prelude::*;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct BinarizeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default = "default_algorithm")]
    pub algorithm: String,
    #[serde(default)]
    pub parameters: Parameters,
    /// Optional JSON report with the run summary.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

fn default_algorithm() -> String {
    "otsu".to_string()
}

#[derive(Debug, Serialize)]
struct BinarizeReport {
    algorithm: String,
    width: usize,
    height: usize,
    black_pixels: usize,
    white_pixels: usize,
}

pub fn load_config(path: &Path) -> Result<BinarizeToolConfig, String> {
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
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "Usage: binarize_file <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale(&config.input)?;
    let binary = match config.algorithm.as_str() {
        "otsu" => Otsu::to_binary_image(gray.as_ref(), &config.parameters),
        "fixed" => FixedThreshold::to_binary_image(gray.as_ref(), &config.parameters),
        "bernsen" => Bernsen::to_binary_image(gray.as_ref(), &config.parameters),
        other => return Err(format!("Unknown algorithm '{other}'")),
    };
    save_grayscale(&binary, &config.output)?;

    let black = binary
        .data
        .iter()
        .filter(|&&px| px == binarize::palette::BLACK)
        .count();
    if let Some(report_path) = &config.report {
        let report = BinarizeReport {
            algorithm: config.algorithm.clone(),
            width: binary.width,
            height: binary.height,
            black_pixels: black,
            white_pixels: binary.size - black,
        };
        write_json_file(report_path, &report)?;
    }

    println!(
        "{} -> {} [{}] {}x{}, {black} black",
        config.input.display(),
        config.output.display(),
        config.algorithm,
        binary.width,
        binary.height
    );
    Ok(())
}
