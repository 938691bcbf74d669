//! "Perceived, option 2": weighted Euclidean norm over the white-composited colour.

use super::{Combiner, Score, blended_rgb, weighted_norm};
use crate::core_modules::pixel::pixel::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct PerceivedOption2;

impl Combiner for PerceivedOption2 {
    fn name(&self) -> &'static str {
        "perceived (option 2)"
    }

    fn combine(&self, color: &Color) -> Score {
        let (red, green, blue) = blended_rgb(color);

        weighted_norm(red, green, blue) as Score
    }
}
