//!
//! The in-memory pixel canvas.
//!

use std::path::Path;

use plotters::backend::BitMapBackend;

use crate::output::error::Error as OutputError;

/// Bytes per RGB pixel.
const PIXEL_SIZE: usize = 3;

///
/// A rectangle of pixels, inclusive of both corners.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// The leftmost column.
    pub left: u32,
    /// The topmost row.
    pub top: u32,
    /// The rightmost column.
    pub right: u32,
    /// The bottommost row.
    pub bottom: u32,
}

impl Bounds {
    ///
    /// Grows the rectangle by `padding` on every side, staying within `width` by `height`.
    ///
    pub fn padded(self, padding: u32, width: u32, height: u32) -> Self {
        Self {
            left: self.left.saturating_sub(padding),
            top: self.top.saturating_sub(padding),
            right: self
                .right
                .saturating_add(padding)
                .min(width.saturating_sub(1)),
            bottom: self
                .bottom
                .saturating_add(padding)
                .min(height.saturating_sub(1)),
        }
    }

    ///
    /// The width in pixels.
    ///
    pub fn width(&self) -> u32 {
        self.right - self.left + 1
    }

    ///
    /// The height in pixels.
    ///
    pub fn height(&self) -> u32 {
        self.bottom - self.top + 1
    }
}

///
/// An RGB canvas owned by a single render call.
///
/// Dropping the canvas releases the pixel buffer, so every exit path of a render call
/// frees it before the next report is processed.
///
#[derive(Debug)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Row-major RGB pixels.
    buffer: Vec<u8>,
}

impl Canvas {
    /// The background color the canvas starts with.
    pub const BACKGROUND: [u8; PIXEL_SIZE] = [u8::MAX; PIXEL_SIZE];

    ///
    /// Allocates a canvas filled with the background color.
    ///
    pub fn new((width, height): (u32, u32)) -> Self {
        Self {
            width,
            height,
            buffer: vec![u8::MAX; width as usize * height as usize * PIXEL_SIZE],
        }
    }

    ///
    /// The canvas size in pixels.
    ///
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    ///
    /// A drawing backend writing into this canvas.
    ///
    pub fn backend(&mut self) -> BitMapBackend<'_> {
        BitMapBackend::with_buffer(self.buffer.as_mut_slice(), (self.width, self.height))
    }

    ///
    /// The color of a pixel.
    ///
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; PIXEL_SIZE]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * PIXEL_SIZE;
        let mut pixel = [0; PIXEL_SIZE];
        pixel.copy_from_slice(&self.buffer[offset..offset + PIXEL_SIZE]);
        Some(pixel)
    }

    ///
    /// The smallest rectangle containing every non-background pixel.
    ///
    /// Returns `None` for a blank canvas.
    ///
    pub fn content_bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        let row_size = self.width as usize * PIXEL_SIZE;
        if row_size == 0 {
            return None;
        }
        for (y, row) in self.buffer.chunks_exact(row_size).enumerate() {
            let mut columns = row
                .chunks_exact(PIXEL_SIZE)
                .enumerate()
                .filter(|(_, pixel)| *pixel != Self::BACKGROUND.as_slice())
                .map(|(x, _)| x as u32);
            let Some(first) = columns.next() else {
                continue;
            };
            let last = columns.last().unwrap_or(first);
            let y = y as u32;
            bounds = Some(match bounds {
                None => Bounds {
                    left: first,
                    top: y,
                    right: last,
                    bottom: y,
                },
                Some(bounds) => Bounds {
                    left: bounds.left.min(first),
                    top: bounds.top,
                    right: bounds.right.max(last),
                    bottom: y,
                },
            });
        }
        bounds
    }

    ///
    /// Crops the canvas to its content plus `padding` pixels on every side.
    ///
    /// A blank canvas is kept whole.
    ///
    pub fn into_cropped_image(self, padding: u32) -> Option<image::RgbImage> {
        let (width, height) = self.size();
        let bounds = self.content_bounds();
        let image = image::RgbImage::from_raw(width, height, self.buffer)?;
        let Some(bounds) = bounds else {
            return Some(image);
        };
        let bounds = bounds.padded(padding, width, height);
        Some(
            image::imageops::crop_imm(
                &image,
                bounds.left,
                bounds.top,
                bounds.width(),
                bounds.height(),
            )
            .to_image(),
        )
    }

    ///
    /// Crops the canvas and writes it as a PNG file, consuming the canvas.
    ///
    pub fn save(self, path: &Path, padding: u32) -> Result<(), OutputError> {
        let image = self
            .into_cropped_image(padding)
            .ok_or_else(|| OutputError::Drawing {
                message: "the pixel buffer does not match the canvas size".to_owned(),
                path: path.to_path_buf(),
            })?;
        image
            .save_with_format(path, image::ImageFormat::Png)
            .map_err(|error| OutputError::Saving {
                error,
                path: path.to_path_buf(),
            })
    }
}
