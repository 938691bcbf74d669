// THEORY:
// `sortable_color` flattens a 2D image into a 1D sequence that can be sorted by
// brightness, and writes such a sequence back out as an image.
//
// Key architectural principles:
// 1.  **One linearization**: a coordinate (x, y) always lives at index
//     `y * width + x`. `linear_index` is the only place that formula is written,
//     and both `from_image` and `write_to` go through it, so building and writing
//     without sorting reproduces the source exactly.
// 2.  **Score once**: each `SortableColor` computes its value when it is created
//     and never again. Sorting compares cached values only.
// 3.  **Order is the output**: after `sort`, position in the buffer is the only
//     thing that decides where a colour lands. Where it came from is discarded.
// 4.  **Fail fast**: a buffer whose length is not `width * height`, or a sink of
//     a different size, is a caller bug and panics.

use crate::core_modules::combiner::{Combiner, Score};
use crate::core_modules::pixel::pixel::Color;
use image::{ImageBuffer, Rgba};
use serde::Deserialize;
use std::cmp::Ordering;
use std::ops::Deref;

/// Anything a buffer can be read from.
pub trait PixelSource {
    fn dimensions(&self) -> (u32, u32);
    fn pixel_at(&self, x: u32, y: u32) -> Color;
}

/// Anything a buffer can be written to. The sink converts colours to its own
/// representation.
pub trait PixelSink {
    fn dimensions(&self) -> (u32, u32);
    fn set_pixel(&mut self, x: u32, y: u32, color: Color);
}

impl<C> PixelSource for ImageBuffer<Rgba<u16>, C>
where
    C: Deref<Target = [u16]>,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> Color {
        Color::from(*self.get_pixel(x, y))
    }
}

impl<C> PixelSource for ImageBuffer<Rgba<u8>, C>
where
    C: Deref<Target = [u8]>,
{
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn pixel_at(&self, x: u32, y: u32) -> Color {
        Color::from(*self.get_pixel(x, y))
    }
}

impl PixelSink for ImageBuffer<Rgba<u16>, Vec<u16>> {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, color.to_rgba16());
    }
}

impl PixelSink for ImageBuffer<Rgba<u8>, Vec<u8>> {
    fn dimensions(&self) -> (u32, u32) {
        ImageBuffer::dimensions(self)
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.put_pixel(x, y, color.to_rgba8());
    }
}

/// Direction of the sort. The sorter has always put the brightest pixel first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Descending,
    Ascending,
}

/// Index of (x, y) in a buffer of the given width.
#[inline]
pub fn linear_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// A colour and the value it sorts by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortableColor {
    pub color: Color,
    value: Score,
}

impl SortableColor {
    /// Scores `color` with `combiner` and keeps both.
    pub fn new(color: Color, combiner: &dyn Combiner) -> Self {
        Self {
            color,
            value: combiner.combine(&color),
        }
    }

    pub fn value(&self) -> Score {
        self.value
    }

    /// Compares relative brightness only; the colours themselves are ignored.
    pub fn compare(&self, other: &SortableColor) -> Ordering {
        self.value.cmp(&other.value)
    }
}

/// The flattened pixels of one image.
#[derive(Debug, Clone)]
pub struct SortableBuffer {
    width: u32,
    height: u32,
    entries: Vec<SortableColor>,
}

impl SortableBuffer {
    /// Reads every pixel of `source` and scores it with `combiner`.
    pub fn from_image<S>(source: &S, combiner: &dyn Combiner) -> Self
    where
        S: PixelSource + ?Sized,
    {
        let (width, height) = source.dimensions();
        let mut entries = Vec::with_capacity(width as usize * height as usize);

        // Row-major traversal lines up with `linear_index`, so pushing fills the
        // buffer in index order.
        for y in 0..height {
            for x in 0..width {
                debug_assert_eq!(entries.len(), linear_index(x, y, width));
                entries.push(SortableColor::new(source.pixel_at(x, y), combiner));
            }
        }

        Self::from_entries(width, height, entries)
    }

    /// Wraps already scored entries laid out by `linear_index`.
    pub fn from_entries(width: u32, height: u32, entries: Vec<SortableColor>) -> Self {
        let expected = width as usize * height as usize;
        assert_eq!(
            entries.len(),
            expected,
            "buffer holds {} entries but a {width}x{height} image needs {expected}",
            entries.len(),
        );
        Self {
            width,
            height,
            entries,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether entry `i` is dimmer than entry `j`.
    pub fn less(&self, i: usize, j: usize) -> bool {
        self.entries[i].compare(&self.entries[j]) == Ordering::Less
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.entries.swap(i, j);
    }

    pub fn get(&self, index: usize) -> Option<&SortableColor> {
        self.entries.get(index)
    }

    /// The entry that will be written to (x, y).
    pub fn at(&self, x: u32, y: u32) -> &SortableColor {
        assert!(
            x < self.width && y < self.height,
            "({x}, {y}) is outside a {}x{} buffer",
            self.width,
            self.height
        );
        &self.entries[linear_index(x, y, self.width)]
    }

    pub fn iter(&self) -> impl Iterator<Item = &SortableColor> {
        self.entries.iter()
    }

    pub fn values(&self) -> Vec<Score> {
        self.entries.iter().map(SortableColor::value).collect()
    }

    /// Reorders the entries by value. Equal values keep no particular order.
    pub fn sort(&mut self, order: SortOrder) {
        match order {
            SortOrder::Descending => self.entries.sort_unstable_by(|a, b| b.compare(a)),
            SortOrder::Ascending => self.entries.sort_unstable_by(|a, b| a.compare(b)),
        }
    }

    /// Whether the values already follow `order`.
    pub fn is_sorted(&self, order: SortOrder) -> bool {
        self.entries.windows(2).all(|pair| match order {
            SortOrder::Descending => pair[0].value >= pair[1].value,
            SortOrder::Ascending => pair[0].value <= pair[1].value,
        })
    }

    /// Writes entry `y * width + x` to (x, y) for every coordinate of `sink`.
    pub fn write_to<S>(&self, sink: &mut S)
    where
        S: PixelSink + ?Sized,
    {
        let (width, height) = sink.dimensions();
        assert_eq!(
            (width, height),
            self.dimensions(),
            "sink dimensions differ from the buffer"
        );

        for x in 0..width {
            for y in 0..height {
                sink.set_pixel(x, y, self.entries[linear_index(x, y, width)].color);
            }
        }
    }
}
