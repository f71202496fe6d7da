pub mod measure;
pub mod paint;
pub mod wrap;
