// THEORY:
// A `Combiner` collapses the four channels of a colour into one unsigned number
// that can be sorted. Each implementation is a different idea of "brightness":
// a raw channel product, several luma weightings, and a perceived-brightness
// Euclidean norm. They are all stateless unit structs, so a single instance can
// be shared by reference across threads and called any number of times.
//
// Most combiners first composite the colour over an assumed white background
// with `alpha_blend`. That helper deliberately keeps the constants the sorter has
// always used: the alpha weight is `alpha / 255` and the background is `255`,
// even though samples are 16-bit. Dark opaque colours therefore blend to a
// negative value. The weighted sums saturate that to zero in the final `as u64`;
// the Euclidean norm squares it back into a positive score. Changing either
// constant changes the sort order of every existing output.

use crate::core_modules::pixel::pixel::Color;

pub mod alpha_blend;
pub mod basic;
pub mod perceived_option1;
pub mod perceived_option2;
pub mod perceived_option2_no_alpha;
pub mod standard_objective;

pub use alpha_blend::AlphaBlend;
pub use basic::Basic;
pub use perceived_option1::PerceivedOption1;
pub use perceived_option2::PerceivedOption2;
pub use perceived_option2_no_alpha::PerceivedOption2NoAlpha;
pub use standard_objective::StandardObjective;

pub type Score = u64;

/// Divisor applied to the alpha sample, and the background value blended against.
pub const BLEND_MAX: u32 = u8::MAX as u32;

/// Combines the channels of a colour into a numerically sortable value.
pub trait Combiner: Send + Sync {
    /// Human readable name, also used for lookup in the registry.
    fn name(&self) -> &'static str;

    /// Scores a colour. Must be deterministic and defined for every colour.
    fn combine(&self, color: &Color) -> Score;
}

/// Composites one channel sample over `background_value` using `alpha_value` as the weight.
pub fn alpha_blend(channel_value: u32, alpha_value: u32, background_value: u32) -> f64 {
    let alpha = f64::from(alpha_value) / f64::from(BLEND_MAX);

    (1.0 - alpha) * f64::from(background_value) + alpha * f64::from(channel_value)
}

/// Blends all three colour channels of `color` over the white background.
pub(crate) fn blended_rgb(color: &Color) -> (f64, f64, f64) {
    let alpha = u32::from(color.alpha);
    (
        alpha_blend(u32::from(color.red), alpha, BLEND_MAX),
        alpha_blend(u32::from(color.green), alpha, BLEND_MAX),
        alpha_blend(u32::from(color.blue), alpha, BLEND_MAX),
    )
}

/// `sqrt((wr*r)^2 + (wg*g)^2 + (wb*b)^2)`, the "perceived, option 2" norm.
pub(crate) fn weighted_norm(red: f64, green: f64, blue: f64) -> f64 {
    ((red * 0.241).powi(2) + (green * 0.691).powi(2) + (blue * 0.068).powi(2)).sqrt()
}
