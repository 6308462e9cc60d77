use anyhow::{Context, Result};
use chrono::NaiveTime;
use std::path::Path;
use std::str::FromStr;
use surplus_core::donation::ImageAttachment;

/// clap value parser for the strum-backed domain enums.
pub fn parse_enum<T: FromStr>(value: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("unknown value '{value}'"))
}

pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| format!("expected HH:MM: {e}"))
}

/// Reads an image from disk, guessing its content type from the extension.
pub fn read_image(path: &Path) -> Result<ImageAttachment> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .context("Image path has no file name")?;
    let content_type = mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string();
    Ok(ImageAttachment::new(file_name, content_type, bytes))
}

pub fn or_dash(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or("-")
}
