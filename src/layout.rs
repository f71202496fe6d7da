pub mod fields;
pub mod geometry;
