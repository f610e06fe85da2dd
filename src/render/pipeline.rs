use std::sync::{Arc, mpsc};

use rayon::prelude::*;

use crate::{
    foundation::core::{Bounds, FrameIndex},
    foundation::error::{SpinError, SpinResult},
    render::{
        frame::{backfill_color, render_frame},
        palette::Palette,
        surface::{PalettedSurface, RgbaSurface},
    },
};

/// Default number of rotation increments in a full turn.
pub const DEFAULT_STEPS: u32 = 25;
/// Default per-frame delay in hundredths of a second.
pub const DEFAULT_DELAY: u16 = 1;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Worker pool controls for frame rendering.
pub struct RenderThreading {
    /// Optional explicit worker thread count; `None` uses available parallelism.
    pub threads: Option<usize>,
}

/// Run configuration for [`synthesize_with`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpinConfig {
    /// Rotation increments in a full turn (must be >= 1).
    pub steps: u32,
    /// Per-frame delay in hundredths of a second.
    pub delay: u16,
    /// Render threading configuration.
    pub threading: RenderThreading,
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
            delay: DEFAULT_DELAY,
            threading: RenderThreading::default(),
        }
    }
}

impl SpinConfig {
    pub fn validate(&self) -> SpinResult<()> {
        if self.steps == 0 {
            return Err(SpinError::config("steps must be >= 1"));
        }
        if self.threading.threads == Some(0) {
            return Err(SpinError::config(
                "render threading 'threads' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Angle between consecutive frames, in radians.
    pub fn step_angle(&self) -> f64 {
        std::f64::consts::TAU / f64::from(self.steps.max(1))
    }
}

/// One rendered rotation step. `index` is assigned at dispatch and never changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    pub index: FrameIndex,
    pub image: PalettedSurface,
}

/// Frames in ascending index order plus one delay per frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameSequence {
    pub bounds: Bounds,
    pub palette: Arc<Palette>,
    pub frames: Vec<Frame>,
    /// Hundredths of a second; `delays.len() == frames.len()`.
    pub delays: Vec<u16>,
}

impl FrameSequence {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

/// Collects frames delivered in any order and hands them back by ascending index.
///
/// Every index in `[0, steps)` must be delivered exactly once.
#[derive(Debug)]
pub struct FrameReorder {
    slots: Vec<Option<PalettedSurface>>,
    filled: usize,
}

impl FrameReorder {
    pub fn new(steps: u32) -> Self {
        Self {
            slots: vec![None; steps as usize],
            filled: 0,
        }
    }

    pub fn accept(&mut self, frame: Frame) -> SpinResult<()> {
        let i = frame.index.0 as usize;
        let slot = self.slots.get_mut(i).ok_or_else(|| {
            SpinError::Other(anyhow::anyhow!(
                "internal error: frame index {i} outside sequence"
            ))
        })?;
        if slot.is_some() {
            return Err(SpinError::Other(anyhow::anyhow!(
                "internal error: frame {i} delivered twice"
            )));
        }
        *slot = Some(frame.image);
        self.filled += 1;
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.filled == self.slots.len()
    }

    pub fn finish(self) -> SpinResult<Vec<Frame>> {
        let mut out = Vec::with_capacity(self.slots.len());
        for (i, slot) in self.slots.into_iter().enumerate() {
            let image = slot.ok_or_else(|| {
                SpinError::Other(anyhow::anyhow!("internal error: frame {i} never arrived"))
            })?;
            tracing::info!("frame {} dequeued", i + 1);
            out.push(Frame {
                index: FrameIndex(i as u32),
                image,
            });
        }
        Ok(out)
    }
}

/// Reorder an arbitrary delivery of `steps` frames into ascending index order.
pub fn collect_frames(
    steps: u32,
    delivered: impl IntoIterator<Item = Frame>,
) -> SpinResult<Vec<Frame>> {
    let mut reorder = FrameReorder::new(steps);
    for frame in delivered {
        tracing::info!("frame {} queued", frame.index.0 + 1);
        reorder.accept(frame)?;
    }
    reorder.finish()
}

/// Render `steps` evenly spaced rotations of `src` with the web-safe palette.
pub fn synthesize(src: &RgbaSurface, steps: u32, delay: u16) -> SpinResult<FrameSequence> {
    let cfg = SpinConfig {
        steps,
        delay,
        ..SpinConfig::default()
    };
    synthesize_with(src, &cfg, Arc::new(Palette::web_safe()))
}

/// Render every rotation step in parallel and return the frames in angle order.
///
/// Workers share `src`, the backfill color and `palette` read-only; each owns its working
/// surface. Completed frames travel over a channel in completion order and are slotted back by
/// index once all workers have joined.
#[tracing::instrument(skip(src, palette), fields(src = ?src.bounds()))]
pub fn synthesize_with(
    src: &RgbaSurface,
    cfg: &SpinConfig,
    palette: Arc<Palette>,
) -> SpinResult<FrameSequence> {
    cfg.validate()?;

    let bounds = src.bounds();
    let backfill = backfill_color(src);
    let step_angle = cfg.step_angle();
    let pool = build_thread_pool(cfg.threading.threads)?;

    let (tx, rx) = mpsc::channel::<Frame>();
    pool.install(|| {
        (0..cfg.steps)
            .into_par_iter()
            .try_for_each_with(tx, |tx, i| -> SpinResult<()> {
                tracing::info!("frame {} starting", i + 1);
                let angle = step_angle * f64::from(i);
                let image = render_frame(src, bounds, backfill, &palette, angle);
                tracing::info!("frame {} done", i + 1);
                tx.send(Frame {
                    index: FrameIndex(i),
                    image,
                })
                .map_err(|_| {
                    SpinError::Other(anyhow::anyhow!("internal error: frame collector closed"))
                })
            })
    })?;

    // All senders are dropped once the parallel loop returns, so this drains and ends.
    let frames = collect_frames(cfg.steps, rx)?;
    let delays = vec![cfg.delay; frames.len()];

    Ok(FrameSequence {
        bounds,
        palette,
        frames,
        delays,
    })
}

fn build_thread_pool(threads: Option<usize>) -> SpinResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SpinError::config(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        SpinError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
