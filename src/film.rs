use std::error::Error;
use std::path::Path;

use image::{Rgb, RgbImage};

/// Row-major pixel storage, `buffer[y * width + x]`.
#[derive(Clone, Debug)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }

    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }

    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

impl Film<Rgb<u8>> {
    pub fn to_image(&self) -> Result<RgbImage, Box<dyn Error>> {
        let raw: Vec<u8> = self.buffer.iter().flat_map(|px| px.0).collect();
        RgbImage::from_raw(self.width as u32, self.height as u32, raw)
            .ok_or_else(|| "film dimensions do not match its buffer".into())
    }

    /// Encodes as PNG, or whatever format the extension of `path` names.
    pub fn write_png<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        self.to_image()?.save(path)?;
        Ok(())
    }
}
