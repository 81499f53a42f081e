//! Parallel evaluation of one animation loop.

use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use terminus_scene::{FrameItem, Scene, Shape, frame_times};
use tracing::{debug, warn};

use crate::export::{ExportError, write_frame};

/// What one evaluated frame looked like.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameReport {
    pub index: u32,
    pub t: f64,
    /// Night segments inside the cutoff at `t`.
    pub visible_night_segments: usize,
    /// Points across every shape in the frame.
    pub points: usize,
}

/// Night paths in a frame: the paths of its last multi-line string.
fn visible_night_segments(frame: &[FrameItem<'_>]) -> usize {
    frame
        .iter()
        .rev()
        .find_map(|item| match item.shape.as_ref() {
            Shape::MultiLineString { paths } => Some(paths.len()),
            _ => None,
        })
        .unwrap_or(0)
}

/// Evaluate `frames` in order. Stops early once `abort` is raised, and raises
/// it on an export failure so sibling workers stop too.
fn evaluate(
    scene: &Scene,
    frames: &[(u32, f64)],
    export_dir: Option<&Path>,
    abort: &AtomicBool,
) -> Result<Vec<FrameReport>, ExportError> {
    let mut reports = Vec::with_capacity(frames.len());
    for &(index, t) in frames {
        if abort.load(Ordering::Relaxed) {
            break;
        }
        let frame = scene.frame(t);
        let report = FrameReport {
            index,
            t,
            visible_night_segments: visible_night_segments(&frame),
            points: frame.iter().map(|item| item.shape.point_count()).sum(),
        };
        debug!(
            frame = index,
            t,
            visible_night_segments = report.visible_night_segments,
            "frame evaluated"
        );
        if let Some(dir) = export_dir {
            if let Err(err) = write_frame(dir, index, &frame) {
                abort.store(true, Ordering::Relaxed);
                return Err(err);
            }
        }
        reports.push(report);
    }
    Ok(reports)
}

/// Evaluate `frame_count` evenly spaced frames across `workers` scoped threads.
///
/// Reports come back in frame order. An export failure stops every worker
/// before its next frame and is returned once all of them have finished.
pub fn run_loop(
    scene: &Scene,
    frame_count: u32,
    workers: NonZeroUsize,
    export_dir: Option<&Path>,
) -> Result<Vec<FrameReport>, ExportError> {
    let frames: Vec<(u32, f64)> = (0..).zip(frame_times(frame_count)).collect();
    if frames.is_empty() {
        return Ok(Vec::new());
    }
    let chunk_len = frames.len().div_ceil(workers.get());
    let abort = AtomicBool::new(false);
    let abort = &abort;

    let results: Vec<Result<Vec<FrameReport>, ExportError>> = thread::scope(|s| {
        let handles: Vec<_> = frames
            .chunks(chunk_len)
            .enumerate()
            .map(|(worker, chunk)| {
                let spawned = thread::Builder::new()
                    .name(format!("frame-worker-{worker}"))
                    .spawn_scoped(s, move || evaluate(scene, chunk, export_dir, abort));
                (chunk, spawned)
            })
            .collect();

        handles
            .into_iter()
            .map(|(chunk, spawned)| match spawned {
                Ok(handle) => match handle.join() {
                    Ok(result) => result,
                    Err(panic) => std::panic::resume_unwind(panic),
                },
                Err(err) => {
                    warn!(error = %err, "could not spawn frame worker, evaluating inline");
                    evaluate(scene, chunk, export_dir, abort)
                }
            })
            .collect()
    });

    let mut reports = Vec::with_capacity(frames.len());
    for result in results {
        reports.extend(result?);
    }
    Ok(reports)
}

/// Worker count: available parallelism capped at the number of frames.
pub fn worker_count(frame_count: u32) -> NonZeroUsize {
    let available = thread::available_parallelism().unwrap_or(NonZeroUsize::MIN);
    let frames = NonZeroUsize::new(frame_count as usize).unwrap_or(NonZeroUsize::MIN);
    available.min(frames)
}
