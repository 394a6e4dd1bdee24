pub mod components;
mod gallery;
pub mod logging;
pub mod perf;

pub use gallery::{launch_gallery, DemoKind, GalleryOptions, GalleryView};
