pub mod combiner;
pub mod pixel;
pub mod registry;
pub mod sortable_color;
pub mod utils;
