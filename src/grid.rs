//! Bounded pixel grid and zoom-cell geometry.
//!
//! The display-side contract of the rasterizer: a grid that consumes emitted
//! pixels, silently dropping anything outside its bounds (clipping belongs
//! to the consumer, never to the algorithms), and the arithmetic for the
//! magnified "zoom" view that shows each cell as a larger square.

use crate::error::{Error, Result};
use crate::geometry::Pixel;

/// A bounded grid of on/off cells consuming rasterized pixels.
#[derive(Debug, Clone)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    /// Row-major cell states.
    cells: Vec<bool>,
}

impl PixelGrid {
    /// Create a new grid with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; (width as usize) * (height as usize)],
        })
    }

    /// Grid width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Set the cell under a pixel. Out-of-bounds pixels are dropped.
    pub fn set(&mut self, pixel: Pixel) {
        if pixel.x < 0
            || pixel.y < 0
            || pixel.x >= self.width as i32
            || pixel.y >= self.height as i32
        {
            return;
        }
        let idx = (pixel.y as usize) * (self.width as usize) + pixel.x as usize;
        self.cells[idx] = true;
    }

    /// Consume a pixel sequence, painting each cell.
    pub fn paint<I>(&mut self, pixels: I)
    where
        I: IntoIterator<Item = Pixel>,
    {
        for pixel in pixels {
            self.set(pixel);
        }
    }

    /// Whether the cell at (x, y) is painted.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn is_set(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[(y as usize) * (self.width as usize) + x as usize])
    }

    /// Number of painted cells.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Clear all cells.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Render the grid as text, one row per line, `#` for painted cells and
    /// `.` for empty ones. Debug and test aid.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(if self.cells[(y as usize) * (self.width as usize) + x as usize] {
                    '#'
                } else {
                    '.'
                });
            }
            out.push('\n');
        }
        out
    }
}

/// Geometry of the magnified zoom view.
///
/// Each grid cell is shown as a `cell_size`-pixel square separated by
/// `border`-pixel grid lines, the whole view inset by `padding`. Mirrors the
/// cell layout of the reference demo's zoom canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomLayout {
    /// Side length of one magnified cell, in screen pixels.
    pub cell_size: u32,
    /// Width of the grid lines between cells.
    pub border: u32,
    /// Inset of the whole view from the screen origin.
    pub padding: u32,
}

/// Screen-space rectangle of one magnified cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoomRect {
    /// Left edge, inclusive.
    pub x0: u32,
    /// Top edge, inclusive.
    pub y0: u32,
    /// Right edge, inclusive.
    pub x1: u32,
    /// Bottom edge, inclusive.
    pub y1: u32,
}

impl ZoomLayout {
    /// Create a layout; `cell_size` of zero falls back to one.
    #[must_use]
    pub const fn new(cell_size: u32, border: u32, padding: u32) -> Self {
        Self {
            cell_size: if cell_size == 0 { 1 } else { cell_size },
            border,
            padding,
        }
    }

    /// How many magnified cells fit along a screen span of `extent` pixels.
    #[must_use]
    pub const fn cells_in(&self, extent: u32) -> u32 {
        let usable = extent.saturating_sub(self.padding + self.border);
        usable / (self.cell_size + self.border)
    }

    /// Screen rectangle for the cell under `pixel`, or `None` when the
    /// pixel is negative or past the `cols` x `rows` zoom window.
    #[must_use]
    pub fn cell_rect(&self, pixel: Pixel, cols: u32, rows: u32) -> Option<ZoomRect> {
        if pixel.x < 0 || pixel.y < 0 {
            return None;
        }
        let (x, y) = (pixel.x as u32, pixel.y as u32);
        if x >= cols || y >= rows {
            return None;
        }
        let pitch = self.cell_size + self.border;
        let x0 = x * pitch + self.border + self.padding;
        let y0 = y * pitch + self.border + self.padding;
        Some(ZoomRect {
            x0,
            y0,
            x1: x0 + self.cell_size - 1,
            y1: y0 + self.cell_size - 1,
        })
    }
}
