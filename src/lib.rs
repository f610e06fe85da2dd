//! spingif turns a single still image into a looping rotation animation.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: [`open_image`] reads a PNG/JPEG/... into a premultiplied [`RgbaSurface`]
//! 2. **Synthesize**: [`synthesize`] renders `steps` evenly spaced rotations in parallel. Each
//!    frame backfills the canvas with the source's top-left pixel, paints the rotated source with
//!    bilinear resampling and quantizes to a shared palette with Floyd–Steinberg dithering.
//! 3. **Reorder**: completed frames are slotted back into ascending angle order
//! 4. **Encode**: [`write_animated_gif`] writes a looping GIF with one global color table
//!
//! Output is deterministic: the worker count and completion order never change a byte of the
//! result.
#![forbid(unsafe_code)]

mod assets;
mod encode;
mod foundation;
mod render;

/// Affine helpers for rotation about rectangle centers.
pub mod transform;

pub use assets::decode::{decode_image, open_image};
pub use encode::gif::{encode_gif, ensure_parent_dir, write_animated_gif};
pub use foundation::core::{Affine, Bounds, FrameIndex, Point, Rgba8Premul, Vec2};
pub use foundation::error::{SpinError, SpinResult};
pub use render::dither::floyd_steinberg;
pub use render::frame::{backfill_color, render_frame};
pub use render::palette::{Palette, WEB_SAFE_LEN};
pub use render::pipeline::{
    DEFAULT_DELAY, DEFAULT_STEPS, Frame, FrameReorder, FrameSequence, RenderThreading,
    SpinConfig, collect_frames, synthesize, synthesize_with,
};
pub use render::resample::{CompositeOp, transform as resample};
pub use render::surface::{PalettedSurface, RgbaSurface};
