// THEORY:
// This file is the entry point of the `pixelsort` library crate. It exposes the
// sorting pipelines and the pieces they are built from, so the bundled binary
// and any other caller go through the same API.
//
// The interesting parts live in `core_modules`:
// - `combiner`: the brightness scores a pixel can be sorted by,
// - `registry`: the list of combiners a caller can choose from,
// - `sortable_color`: the flattened, sortable pixel buffer.
// `pipeline` and `parallel_pipeline` wire them together; `config` and `error`
// are the ambient plumbing around them.

pub mod config;
pub mod core_modules;
pub mod error;
pub mod parallel_pipeline;
pub mod pipeline;

pub use crate::config::PipelineConfig;
pub use crate::core_modules::combiner::Combiner;
pub use crate::core_modules::pixel::pixel::Color;
pub use crate::core_modules::registry::{CombinerRegistry, SharedCombiner, all_combiners};
pub use crate::core_modules::sortable_color::{
    PixelSink, PixelSource, SortOrder, SortableBuffer, SortableColor,
};
pub use crate::core_modules::utils::image_helper::image_helper::Rgba16Image;
pub use crate::error::{PixelSortError, Result};
pub use crate::parallel_pipeline::ParallelPipeline;
pub use crate::pipeline::PixelSortPipeline;
