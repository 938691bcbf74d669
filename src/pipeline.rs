// THEORY:
// The `pipeline` module is the top-level API of the sorter. It strings the core
// pieces together in their only valid order:
//
//   image --(combiner)--> SortableBuffer --sort--> SortableBuffer --write--> image
//
// Each stage runs to completion before the next starts, on the calling thread.
// The pipeline owns nothing but its configuration and the chosen combiner, so a
// single instance can sort any number of images.

use crate::config::PipelineConfig;
use crate::core_modules::registry::{CombinerRegistry, SharedCombiner};
use crate::core_modules::sortable_color::{PixelSource, SortOrder, SortableBuffer};
use crate::core_modules::utils::image_helper::image_helper::Rgba16Image;
use crate::error::Result;
use log::debug;
use std::time::Instant;

/// Sorts whole images on the calling thread.
pub struct PixelSortPipeline {
    combiner: SharedCombiner,
    order: SortOrder,
}

impl PixelSortPipeline {
    pub fn new(combiner: SharedCombiner, order: SortOrder) -> Self {
        Self { combiner, order }
    }

    /// Resolves the configured combiner name against `registry`.
    pub fn from_config(config: &PipelineConfig, registry: &CombinerRegistry) -> Result<Self> {
        Ok(Self::new(registry.lookup(&config.combiner)?, config.order))
    }

    pub fn combiner(&self) -> &SharedCombiner {
        &self.combiner
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Reads and scores every pixel of `source`.
    pub fn build<S>(&self, source: &S) -> SortableBuffer
    where
        S: PixelSource + ?Sized,
    {
        let started = Instant::now();
        let buffer = SortableBuffer::from_image(source, self.combiner.as_ref());
        debug!(
            "Scored {} pixels with {:?} in {:?}",
            buffer.len(),
            self.combiner.name(),
            started.elapsed()
        );
        buffer
    }

    /// Sorts an already built buffer and writes it into a new image.
    pub fn finish(&self, mut buffer: SortableBuffer) -> Rgba16Image {
        let started = Instant::now();
        buffer.sort(self.order);
        debug!("Sorted {} pixels {:?} in {:?}", buffer.len(), self.order, started.elapsed());

        let (width, height) = buffer.dimensions();
        let mut sorted = Rgba16Image::new(width, height);
        buffer.write_to(&mut sorted);
        sorted
    }

    /// Build, sort and write in one go.
    pub fn run<S>(&self, source: &S) -> Rgba16Image
    where
        S: PixelSource + ?Sized,
    {
        self.finish(self.build(source))
    }
}
