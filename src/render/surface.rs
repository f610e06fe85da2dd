use std::sync::Arc;

use crate::{
    foundation::core::{Bounds, Rgba8Premul},
    foundation::error::{SpinError, SpinResult},
    render::palette::Palette,
};

/// True-color surface storing **premultiplied** RGBA8 pixels in row-major order.
///
/// Coordinates passed to accessors are absolute (they include `bounds.min`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbaSurface {
    bounds: Bounds,
    data: Vec<u8>,
}

impl RgbaSurface {
    /// Fully transparent surface covering `bounds`.
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            data: vec![0u8; bounds.area() * 4],
        }
    }

    /// Surface covering `bounds` with every pixel set to `color`.
    pub fn filled(bounds: Bounds, color: Rgba8Premul) -> Self {
        Self {
            bounds,
            data: color.to_array().repeat(bounds.area()),
        }
    }

    /// Wrap an existing premultiplied RGBA8 buffer.
    pub fn from_premul_rgba8(bounds: Bounds, data: Vec<u8>) -> SpinResult<Self> {
        if data.len() != bounds.area() * 4 {
            return Err(SpinError::decode(format!(
                "rgba buffer length {} does not match {}x{} surface",
                data.len(),
                bounds.width,
                bounds.height
            )));
        }
        Ok(Self { bounds, data })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn fill(&mut self, color: Rgba8Premul) {
        let px = color.to_array();
        for d in self.data.chunks_exact_mut(4) {
            d.copy_from_slice(&px);
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Rgba8Premul> {
        let i = self.offset(x, y)?;
        Some(Rgba8Premul::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Write one pixel; returns `false` (and writes nothing) outside the bounds.
    pub fn put(&mut self, x: i32, y: i32, px: Rgba8Premul) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.data[i..i + 4].copy_from_slice(&px.to_array());
                true
            }
            None => false,
        }
    }

    /// Byte offset of the pixel at absolute `(x, y)`.
    #[inline]
    pub(crate) fn offset(&self, x: i32, y: i32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let col = x.abs_diff(self.bounds.min_x) as usize;
        let row = y.abs_diff(self.bounds.min_y) as usize;
        Some((row * self.bounds.width as usize + col) * 4)
    }

    #[inline]
    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

/// Palette-indexed surface; every frame of a sequence shares the same [`Palette`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PalettedSurface {
    bounds: Bounds,
    indices: Vec<u8>,
    palette: Arc<Palette>,
}

impl PalettedSurface {
    /// Surface with every pixel set to palette index 0.
    pub fn new(bounds: Bounds, palette: Arc<Palette>) -> Self {
        Self {
            bounds,
            indices: vec![0u8; bounds.area()],
            palette,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn palette(&self) -> &Arc<Palette> {
        &self.palette
    }

    /// Row-major index buffer, one byte per pixel.
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn index_at(&self, x: i32, y: i32) -> Option<u8> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let col = x.abs_diff(self.bounds.min_x) as usize;
        let row = y.abs_diff(self.bounds.min_y) as usize;
        Some(self.indices[row * self.bounds.width as usize + col])
    }

    /// Resolved palette color at `(x, y)`.
    pub fn color_at(&self, x: i32, y: i32) -> Option<[u8; 3]> {
        self.index_at(x, y)
            .and_then(|i| self.palette.color(usize::from(i)))
    }

    pub(crate) fn indices_mut(&mut self) -> &mut [u8] {
        &mut self.indices
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
