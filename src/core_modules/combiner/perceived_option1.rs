//! "Perceived, option 1": Rec. 601 luma weights over the white-composited colour.

use super::{Combiner, Score, blended_rgb};
use crate::core_modules::pixel::pixel::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct PerceivedOption1;

impl Combiner for PerceivedOption1 {
    fn name(&self) -> &'static str {
        "perceived (option 1)"
    }

    fn combine(&self, color: &Color) -> Score {
        let (red, green, blue) = blended_rgb(color);

        (red * 0.299 + green * 0.587 + blue * 0.114) as Score
    }
}
