//! "Perceived, option 2" applied to the raw samples; alpha is ignored entirely.

use super::{Combiner, Score, weighted_norm};
use crate::core_modules::pixel::pixel::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct PerceivedOption2NoAlpha;

impl Combiner for PerceivedOption2NoAlpha {
    fn name(&self) -> &'static str {
        "perceived (option 2, no alpha)"
    }

    fn combine(&self, color: &Color) -> Score {
        weighted_norm(
            f64::from(color.red),
            f64::from(color.green),
            f64::from(color.blue),
        ) as Score
    }
}
