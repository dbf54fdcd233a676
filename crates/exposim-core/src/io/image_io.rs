use std::path::Path;

use image::{ColorType, ImageReader};

use crate::buffer::PixelBuffer;
use crate::error::{ExposimError, Result};

/// Decode/encode boundary between the transforms and an imaging library.
pub trait ImageCodec: Send + Sync {
    /// Read an image file into a pixel buffer.
    fn decode(&self, path: &Path) -> Result<PixelBuffer>;

    /// Write a pixel buffer to `path`. The format follows the extension.
    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()>;
}

/// Codec backed by the `image` crate.
///
/// Decoding always yields 3-channel RGB. Encoding accepts 1, 3 or 4
/// channel buffers.
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageRsCodec;

impl ImageCodec for ImageRsCodec {
    fn decode(&self, path: &Path) -> Result<PixelBuffer> {
        load_image(path)
    }

    fn encode(&self, buffer: &PixelBuffer, path: &Path) -> Result<()> {
        save_image(buffer, path)
    }
}

/// Load an image file as 8-bit RGB. The format is sniffed from content.
pub fn load_image(path: &Path) -> Result<PixelBuffer> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    let rgb = img.to_rgb8();
    let (w, h) = rgb.dimensions();
    PixelBuffer::from_raw(h as usize, w as usize, 3, rgb.into_raw())
}

/// Save a buffer, choosing the format from the file extension.
pub fn save_image(buffer: &PixelBuffer, path: &Path) -> Result<()> {
    let color = match buffer.channels() {
        1 => ColorType::L8,
        3 => ColorType::Rgb8,
        4 => ColorType::Rgba8,
        n => return Err(ExposimError::UnsupportedChannelCount(n)),
    };
    let (w, h) = (buffer.width() as u32, buffer.height() as u32);
    image::save_buffer(path, &buffer.to_raw(), w, h, color)?;
    Ok(())
}
