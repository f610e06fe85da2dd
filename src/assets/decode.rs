use std::path::Path;

use crate::{
    foundation::core::Bounds,
    foundation::error::{SpinError, SpinResult},
    render::surface::RgbaSurface,
};

/// Read and decode a still image from disk.
///
/// Missing paths yield [`SpinError::NotFound`]; unreadable, corrupt or unsupported input yields
/// [`SpinError::Decode`].
pub fn open_image(path: impl AsRef<Path>) -> SpinResult<RgbaSurface> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => SpinError::NotFound(path.to_path_buf()),
        _ => SpinError::decode(format!("read '{}': {e}", path.display())),
    })?;
    decode_image(&bytes).map_err(|e| match e {
        SpinError::Decode(msg) => SpinError::decode(format!("'{}': {msg}", path.display())),
        other => other,
    })
}

/// Decode encoded image bytes (PNG, JPEG, GIF, ...) into a premultiplied RGBA8 surface.
pub fn decode_image(bytes: &[u8]) -> SpinResult<RgbaSurface> {
    let dyn_img = image::load_from_memory(bytes).map_err(|e| SpinError::decode(e.to_string()))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    RgbaSurface::from_premul_rgba8(Bounds::from_size(width, height), rgba8_premul)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
