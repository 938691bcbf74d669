//! Luma weighting `0.3 R + 0.59 G + 0.11 B` after compositing over white.

use super::{Combiner, Score, blended_rgb};
use crate::core_modules::pixel::pixel::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBlend;

impl Combiner for AlphaBlend {
    fn name(&self) -> &'static str {
        "alpha blend"
    }

    fn combine(&self, color: &Color) -> Score {
        let (red, green, blue) = blended_rgb(color);

        (red * 0.3 + green * 0.59 + blue * 0.11) as Score
    }
}
