use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    foundation::error::{SpinError, SpinResult},
    render::pipeline::FrameSequence,
};

/// Encode `seq` as an infinitely looping GIF into `w`.
///
/// The palette becomes the global color table; frames carry no local table. Each frame's delay
/// is written as-is (hundredths of a second).
pub fn encode_gif<W: Write>(w: W, seq: &FrameSequence) -> SpinResult<W> {
    validate_sequence(seq)?;

    let width = dimension(seq.bounds.width, "width")?;
    let height = dimension(seq.bounds.height, "height")?;

    let mut enc =
        gif::Encoder::new(w, width, height, &seq.palette.to_rgb_table()).map_err(map_gif)?;
    enc.set_repeat(gif::Repeat::Infinite).map_err(map_gif)?;

    for (frame, &delay) in seq.frames.iter().zip(&seq.delays) {
        let out = gif::Frame {
            width,
            height,
            delay,
            buffer: Cow::Borrowed(frame.image.indices()),
            ..gif::Frame::default()
        };
        enc.write_frame(&out).map_err(map_gif)?;
    }

    Ok(enc.into_inner()?)
}

/// Encode `seq` and persist it at `path`, creating the parent directory if needed.
pub fn write_animated_gif(path: impl AsRef<Path>, seq: &FrameSequence) -> SpinResult<()> {
    let path = path.as_ref();
    ensure_parent_dir(path)?;
    let file = File::create(path)?;
    let mut w = encode_gif(BufWriter::new(file), seq)?;
    w.flush()?;
    tracing::info!(path = %path.display(), frames = seq.len(), "wrote gif");
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> SpinResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn validate_sequence(seq: &FrameSequence) -> SpinResult<()> {
    if seq.frames.is_empty() {
        return Err(SpinError::encode("sequence has no frames"));
    }
    if seq.frames.len() != seq.delays.len() {
        return Err(SpinError::encode(format!(
            "{} frames but {} delays",
            seq.frames.len(),
            seq.delays.len()
        )));
    }
    for frame in &seq.frames {
        if frame.image.bounds() != seq.bounds {
            return Err(SpinError::encode(format!(
                "frame {} bounds {:?} differ from sequence bounds {:?}",
                frame.index.0,
                frame.image.bounds(),
                seq.bounds
            )));
        }
        if frame.image.palette() != &seq.palette {
            return Err(SpinError::encode(format!(
                "frame {} does not use the shared palette",
                frame.index.0
            )));
        }
    }
    Ok(())
}

fn dimension(v: u32, name: &str) -> SpinResult<u16> {
    match u16::try_from(v) {
        Ok(0) | Err(_) => Err(SpinError::encode(format!(
            "gif {name} must be in 1..=65535, got {v}"
        ))),
        Ok(v) => Ok(v),
    }
}

fn map_gif(e: gif::EncodingError) -> SpinError {
    match e {
        gif::EncodingError::Io(io) => SpinError::Write(io),
        other => SpinError::encode(other.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
