use rayon::prelude::*;

use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{MorphError, MorphResult};
use crate::morph::evaluator::{PreparedTransition, TransitionResult};

/// Options for [`sample_range`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SampleOpts {
    /// Evaluate frames on a dedicated rayon pool.
    pub parallel: bool,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

/// One evaluated frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FrameSample<'a> {
    /// Frame that was evaluated.
    pub frame: FrameIndex,
    /// Evaluation at that frame.
    pub result: TransitionResult<'a>,
}

/// Evaluate every frame of `range`, in ascending frame order.
///
/// Parallel and sequential sampling produce identical output.
#[tracing::instrument(skip(prepared), fields(transition_id = %prepared.config().transition_id))]
pub fn sample_range(
    prepared: &PreparedTransition,
    trigger_frame: FrameIndex,
    range: FrameRange,
    opts: SampleOpts,
) -> MorphResult<Vec<FrameSample<'_>>> {
    let sample = move |f: i64| FrameSample {
        frame: FrameIndex(f),
        result: prepared.evaluate(trigger_frame, FrameIndex(f)),
    };

    if !opts.parallel {
        return Ok(range.frames().map(|f| sample(f.0)).collect());
    }

    let pool = build_thread_pool(opts.threads)?;
    let out: Vec<FrameSample<'_>> =
        pool.install(|| (range.start.0..range.end.0).into_par_iter().map(sample).collect());
    tracing::debug!(frames = out.len(), "sampled range in parallel");
    Ok(out)
}

fn build_thread_pool(threads: Option<usize>) -> MorphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(MorphError::validation(
            "sample_range 'threads' must be >= 1 when set",
        ));
    }
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| MorphError::evaluation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/morph/timeline.rs"]
mod tests;
