// THEORY:
// Scoring is the only stage of the sort that is embarrassingly parallel: every
// combiner is pure, so each pixel can be scored independently. The
// `ParallelPipeline` splits the image into horizontal bands of whole rows,
// scores each band on tokio's blocking pool, and stitches the bands back
// together in band order. Because bands are contiguous row ranges, the stitched
// entries are already laid out by `y * width + x`, so the sort and the write
// stages are shared with the sequential `PixelSortPipeline` and the output is
// identical to it.

use crate::config::PipelineConfig;
use crate::core_modules::registry::{CombinerRegistry, SharedCombiner};
use crate::core_modules::sortable_color::{
    PixelSource, SortOrder, SortableBuffer, SortableColor,
};
use crate::core_modules::utils::image_helper::image_helper::Rgba16Image;
use crate::error::{PixelSortError, Result};
use crate::pipeline::PixelSortPipeline;
use futures::future::join_all;
use log::debug;
use std::ops::Range;
use std::sync::Arc;
use std::time::Instant;

/// Scores on a worker pool, then sorts and writes like `PixelSortPipeline`.
pub struct ParallelPipeline {
    sequential: PixelSortPipeline,
    workers: usize,
}

impl ParallelPipeline {
    /// One band per logical CPU.
    pub fn new(combiner: SharedCombiner, order: SortOrder) -> Self {
        Self::with_workers(combiner, order, num_cpus::get())
    }

    pub fn with_workers(combiner: SharedCombiner, order: SortOrder, workers: usize) -> Self {
        Self {
            sequential: PixelSortPipeline::new(combiner, order),
            workers: workers.max(1),
        }
    }

    /// Resolves the configured combiner name against `registry`.
    pub fn from_config(config: &PipelineConfig, registry: &CombinerRegistry) -> Result<Self> {
        Ok(Self::new(registry.lookup(&config.combiner)?, config.order))
    }

    pub fn combiner(&self) -> &SharedCombiner {
        self.sequential.combiner()
    }

    pub fn order(&self) -> SortOrder {
        self.sequential.order()
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Scores every pixel of `source` across the worker pool.
    pub async fn build<S>(&self, source: Arc<S>) -> Result<SortableBuffer>
    where
        S: PixelSource + Send + Sync + 'static,
    {
        let started = Instant::now();
        let (width, height) = source.dimensions();
        let bands = row_bands(height, self.workers);

        let tasks = bands.iter().cloned().map(|rows| {
            let source = Arc::clone(&source);
            let combiner = Arc::clone(self.sequential.combiner());
            tokio::task::spawn_blocking(move || {
                score_rows(source.as_ref(), combiner, width, rows)
            })
        });

        let mut entries = Vec::with_capacity(width as usize * height as usize);
        for band in join_all(tasks).await {
            let band = band.map_err(|e| PixelSortError::Worker(e.to_string()))?;
            entries.extend(band);
        }
        debug!(
            "Scored {} pixels in {} bands in {:?}",
            entries.len(),
            bands.len(),
            started.elapsed()
        );

        Ok(SortableBuffer::from_entries(width, height, entries))
    }

    pub async fn run<S>(&self, source: Arc<S>) -> Result<Rgba16Image>
    where
        S: PixelSource + Send + Sync + 'static,
    {
        let buffer = self.build(source).await?;
        Ok(self.sequential.finish(buffer))
    }
}

/// Splits `0..height` into at most `bands` contiguous, non-empty row ranges.
fn row_bands(height: u32, bands: usize) -> Vec<Range<u32>> {
    if height == 0 {
        return Vec::new();
    }
    let band_height = height.div_ceil(bands.max(1) as u32);
    (0..height)
        .step_by(band_height as usize)
        .map(|start| start..(start + band_height).min(height))
        .collect()
}

fn score_rows<S>(
    source: &S,
    combiner: SharedCombiner,
    width: u32,
    rows: Range<u32>,
) -> Vec<SortableColor>
where
    S: PixelSource + ?Sized,
{
    let mut band = Vec::with_capacity(width as usize * rows.len());
    for y in rows {
        for x in 0..width {
            band.push(SortableColor::new(source.pixel_at(x, y), combiner.as_ref()));
        }
    }
    band
}
