//! Pixel sinks: where rendered pixels go.

use std::path::Path;

/// Receives one RGB triple per pixel.
///
/// Renders call `set_pixel` exactly once per pixel, rows top to bottom and
/// pixels left to right within a row.
pub trait PixelSink {
    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]);
}

impl<F: FnMut(u32, u32, [u8; 3])> PixelSink for F {
    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self(x, y, rgb)
    }
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0]; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let index = self.index(x, y);
        self.pixels[index] = rgb;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Convert to packed RGB bytes (for display or saving).
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Save the image. The format is chosen from the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> image::ImageResult<()> {
        image::save_buffer(
            path,
            &self.to_rgb_bytes(),
            self.width,
            self.height,
            image::ColorType::Rgb8,
        )
    }
}

impl PixelSink for ImageBuffer {
    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.set(x, y, rgb);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_buffer_set_get() {
        let mut image = ImageBuffer::new(4, 3);
        assert_eq!(image.pixels.len(), 12);
        assert_eq!(image.get(3, 2), [0, 0, 0]);

        image.set_pixel(3, 2, [1, 2, 3]);
        assert_eq!(image.get(3, 2), [1, 2, 3]);
        assert_eq!(image.pixels[11], [1, 2, 3]);
    }

    #[test]
    fn test_to_rgb_bytes() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(0, 0, [10, 20, 30]);
        image.set(1, 0, [40, 50, 60]);
        assert_eq!(image.to_rgb_bytes(), vec![10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn test_closure_sink() {
        let mut calls = Vec::new();
        let mut sink = |x: u32, y: u32, rgb: [u8; 3]| calls.push((x, y, rgb));
        sink.set_pixel(1, 2, [3, 4, 5]);
        assert_eq!(calls, vec![(1, 2, [3, 4, 5])]);
    }
}
