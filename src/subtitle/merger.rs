//! Merging of closely spaced blocks.

use tracing::trace;

use super::Block;

/// Parameters for [`merge_adjacent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeOptions {
    /// Largest gap (seconds) between two blocks that still merges them.
    pub threshold: f64,
    /// Largest span (seconds) a merged block may reach.
    pub max_duration: f64,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            threshold: crate::constants::DEFAULT_THRESHOLD,
            max_duration: crate::constants::DEFAULT_MAX_DURATION,
        }
    }
}

/// Merge each block into its predecessor when the gap between them is small.
///
/// With `gap = next.start - current.end`, two neighbours merge when
/// `0 <= gap <= threshold` and the result spans at most `max_duration`.
/// Overlapping blocks (negative gap) never merge. Merging is chained: the
/// grown block is compared against the following one again. When the duration
/// cap stops a chain, the rejected block starts a new chain.
///
/// The first block of a chain keeps its index; absorbed indices are dropped.
pub fn merge_adjacent(blocks: Vec<Block>, options: &MergeOptions) -> Vec<Block> {
    let mut merged: Vec<Block> = Vec::with_capacity(blocks.len());

    for next in blocks {
        if let Some(current) = merged.last_mut()
            && can_merge(current, &next, options)
        {
            absorb(current, next);
        } else {
            merged.push(next);
        }
    }

    merged
}

fn can_merge(current: &Block, next: &Block, options: &MergeOptions) -> bool {
    let gap = next.start.seconds_since(current.end);
    if !(0.0..=options.threshold).contains(&gap) {
        return false;
    }

    let merged_duration = next.end.seconds_since(current.start);
    if merged_duration > options.max_duration {
        trace!(
            "Not merging {:?} into {:?}: span {merged_duration:.3}s exceeds {:.3}s",
            next.index, current.index, options.max_duration
        );
        return false;
    }

    true
}

fn absorb(current: &mut Block, next: Block) {
    trace!(
        "Merging {:?} into {:?} ({} --> {})",
        next.index, current.index, current.start, next.end
    );

    current.end = next.end;
    if current.text.is_empty() {
        current.text = next.text;
    } else {
        current.text.extend(next.text);
    }
}
