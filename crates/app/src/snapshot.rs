//! Still-frame export of the rendered figure.
//!
//! Whatever pixel layout the graphics backend hands back, frames are
//! normalized to tightly packed RGB8 before they are written.

use anyhow::{anyhow, Context, Result};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// An RGB raster of known size.
#[derive(Debug, Clone, PartialEq)]
pub struct RgbFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbFrame {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(anyhow!(
                "RGB frame {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                pixels.len()
            ));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Drops the trailing alpha byte of each RGBA pixel.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self> {
        Self::from_four_channel(width, height, rgba, 0)
    }

    /// Drops the leading alpha byte of each ARGB pixel.
    pub fn from_argb(width: u32, height: u32, argb: &[u8]) -> Result<Self> {
        Self::from_four_channel(width, height, argb, 1)
    }

    fn from_four_channel(width: u32, height: u32, data: &[u8], offset: usize) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if data.len() != expected {
            return Err(anyhow!(
                "4-channel frame {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                data.len()
            ));
        }
        let pixels = data
            .chunks_exact(4)
            .flat_map(|px| px[offset..offset + 3].iter().copied())
            .collect();
        Self::new(width, height, pixels)
    }

    /// Crops a screenshot to `region` (in points) and normalizes it to RGB.
    #[cfg(feature = "gui")]
    pub fn from_screenshot(
        image: &eframe::egui::ColorImage,
        region: eframe::egui::Rect,
        pixels_per_point: f32,
    ) -> Result<Self> {
        let cropped = image.region(&region, Some(pixels_per_point));
        let [width, height] = cropped.size;
        Self::from_rgba(width as u32, height as u32, cropped.as_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Writes the frame as PNG, replacing any existing file.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        let image = RgbImage::from_raw(self.width, self.height, self.pixels.clone())
            .context("Frame buffer does not match its dimensions")?;
        image
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
        log::info!(
            "Image saved as {} ({}x{})",
            path.display(),
            self.width,
            self.height
        );
        Ok(())
    }
}
