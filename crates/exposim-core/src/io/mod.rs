pub mod image_io;
pub mod scan;

pub use image_io::{ImageCodec, ImageRsCodec};
pub use scan::list_images;
