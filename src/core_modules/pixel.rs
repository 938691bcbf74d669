// THEORY:
// The `pixel` module holds the single colour value that every other part of the
// sorter passes around. It is a "dumb" data container: four 16-bit samples and
// the conversions to and from the `image` crate's pixel types. It knows nothing
// about brightness; scoring a colour is the job of a `Combiner`.
//
// 16 bits per channel is the working depth because that is the widest depth the
// common codecs produce. 8-bit sources are widened on the way in (x * 257, so
// 0xFF maps to 0xFFFF) and narrowed on the way out (x >> 8).

pub mod pixel {
    use image::Rgba;

    pub type Channel = u16;

    /// The largest value a single channel sample can hold.
    pub const CHANNEL_MAX: Channel = Channel::MAX;

    /// A straight-alpha RGBA colour at 16 bits per channel.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Color {
        /// The red channel value (0-65535).
        pub red: Channel,
        /// The green channel value (0-65535).
        pub green: Channel,
        /// The blue channel value (0-65535).
        pub blue: Channel,
        /// The alpha (opacity) channel value (0-65535).
        pub alpha: Channel,
    }

    impl Color {
        pub const fn new(red: Channel, green: Channel, blue: Channel, alpha: Channel) -> Self {
            Color {
                red,
                green,
                blue,
                alpha,
            }
        }

        /// Opaque colour from three channel samples.
        pub const fn opaque(red: Channel, green: Channel, blue: Channel) -> Self {
            Color::new(red, green, blue, CHANNEL_MAX)
        }

        /// Narrows every sample to 8 bits by dropping the low byte.
        pub fn to_rgba8(&self) -> Rgba<u8> {
            Rgba([
                (self.red >> 8) as u8,
                (self.green >> 8) as u8,
                (self.blue >> 8) as u8,
                (self.alpha >> 8) as u8,
            ])
        }

        pub fn to_rgba16(&self) -> Rgba<u16> {
            Rgba([self.red, self.green, self.blue, self.alpha])
        }
    }

    impl From<Rgba<u16>> for Color {
        fn from(pixel: Rgba<u16>) -> Self {
            let [red, green, blue, alpha] = pixel.0;
            Color::new(red, green, blue, alpha)
        }
    }

    impl From<Rgba<u8>> for Color {
        fn from(pixel: Rgba<u8>) -> Self {
            let [red, green, blue, alpha] = pixel.0.map(|sample| sample as Channel * 257);
            Color::new(red, green, blue, alpha)
        }
    }
}
