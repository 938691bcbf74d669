//! "Standard, objective": Rec. 709 luminance weights over the white-composited colour.

use super::{Combiner, Score, blended_rgb};
use crate::core_modules::pixel::pixel::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct StandardObjective;

impl Combiner for StandardObjective {
    fn name(&self) -> &'static str {
        "standard objective"
    }

    fn combine(&self, color: &Color) -> Score {
        let (red, green, blue) = blended_rgb(color);

        (red * 0.2126 + green * 0.7152 + blue * 0.0722) as Score
    }
}
