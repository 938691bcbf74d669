//! The most basic combiner: the product of all four raw samples. Not a good
//! visual sort, but cheap and free of floating point.

use super::{Combiner, Score};
use crate::core_modules::pixel::pixel::Color;

#[derive(Debug, Clone, Copy, Default)]
pub struct Basic;

impl Combiner for Basic {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn combine(&self, color: &Color) -> Score {
        // Four 16-bit factors always fit in a u64. Forcing the low bit keeps a
        // single zero channel from zeroing the whole product.
        Score::from(color.red | 1)
            * Score::from(color.green | 1)
            * Score::from(color.blue | 1)
            * Score::from(color.alpha | 1)
    }
}
