use crate::foundation::error::{SpinError, SpinResult};

/// Number of entries in [`Palette::web_safe`].
pub const WEB_SAFE_LEN: usize = 216;

/// Fixed, ordered table of opaque reference colors shared by every frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 3]>,
}

impl Palette {
    /// Build a palette from 1..=256 opaque RGB colors.
    pub fn new(colors: Vec<[u8; 3]>) -> SpinResult<Self> {
        if colors.is_empty() || colors.len() > 256 {
            return Err(SpinError::config(format!(
                "palette must hold 1..=256 colors, got {}",
                colors.len()
            )));
        }
        Ok(Self { colors })
    }

    /// The 216-color web-safe palette: channels step by `0x33`, index `r*36 + g*6 + b`.
    pub fn web_safe() -> Self {
        let mut colors = Vec::with_capacity(WEB_SAFE_LEN);
        for r in 0..6u8 {
            for g in 0..6u8 {
                for b in 0..6u8 {
                    colors.push([r * 0x33, g * 0x33, b * 0x33]);
                }
            }
        }
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[[u8; 3]] {
        &self.colors
    }

    pub fn color(&self, index: usize) -> Option<[u8; 3]> {
        self.colors.get(index).copied()
    }

    /// Index of the entry closest to `rgb` by squared Euclidean distance.
    ///
    /// Ties resolve to the lowest index. Inputs may lie outside `0..=255` (error-diffused values).
    pub fn nearest(&self, rgb: [i32; 3]) -> u8 {
        let mut best = 0usize;
        let mut best_dist = i64::MAX;
        for (i, c) in self.colors.iter().enumerate() {
            let mut dist = 0i64;
            for ch in 0..3 {
                let d = i64::from(rgb[ch] - i32::from(c[ch]));
                dist += d * d;
            }
            if dist < best_dist {
                best_dist = dist;
                best = i;
                if dist == 0 {
                    break;
                }
            }
        }
        // `new` caps the palette at 256 entries.
        best as u8
    }

    /// Flat `r,g,b,r,g,b,...` table, as stored in a GIF global color table.
    pub fn to_rgb_table(&self) -> Vec<u8> {
        self.colors.iter().flatten().copied().collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::web_safe()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/palette.rs"]
mod tests;
