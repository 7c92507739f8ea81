pub mod config;
pub mod consts;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod image_set;
pub mod markers;
pub mod overlay;
pub mod session;
pub mod source;
pub mod translate;
pub mod viewport;
