use crate::core_modules::sortable_color::SortOrder;
use crate::core_modules::utils::image_helper::image_helper::DEFAULT_JPEG_QUALITY;
use crate::error::{PixelSortError, Result};
use serde::Deserialize;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

/// The combiner the sorter used before combiners were selectable.
pub const DEFAULT_COMBINER: &str = "perceived (option 2)";

/// Qualities the JPEG encoder accepts without clamping.
pub const JPEG_QUALITY_RANGE: RangeInclusive<u8> = 1..=100;

/// Configuration for a sorting run. Every field is optional in a config file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Registry name of the combiner that scores each pixel.
    pub combiner: String,
    pub order: SortOrder,
    /// Score pixels on a worker pool instead of the calling thread.
    pub parallel: bool,
    /// Quality used when the output is a JPEG (1-100).
    pub jpeg_quality: u8,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            combiner: DEFAULT_COMBINER.to_string(),
            order: SortOrder::Descending,
            parallel: false,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl PipelineConfig {
    /// Checks the values serde cannot, returning the first problem found.
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !JPEG_QUALITY_RANGE.contains(&self.jpeg_quality) {
            return Err(format!(
                "jpeg_quality must be in {}..={}, got {}",
                JPEG_QUALITY_RANGE.start(),
                JPEG_QUALITY_RANGE.end(),
                self.jpeg_quality
            ));
        }
        Ok(())
    }
}

/// Reads and validates a JSON config file.
pub fn load_config(path: &Path) -> Result<PipelineConfig> {
    let contents = fs::read_to_string(path).map_err(|source| PixelSortError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: PipelineConfig =
        serde_json::from_str(&contents).map_err(|source| PixelSortError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    config
        .validate()
        .map_err(|reason| PixelSortError::InvalidConfig {
            path: path.to_path_buf(),
            reason,
        })?;
    Ok(config)
}
