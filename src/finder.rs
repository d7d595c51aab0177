//! Exhaustive shared-substring search.
//!
//! Divide-and-conquer over rectangular windows: find the single longest
//! contiguous run common to both window slices, record it when it meets the
//! length threshold, then recurse into the four left/right sub-window
//! combinations. Sibling calls explore the same index range on one side
//! against different counterpart windows, so the returned blocks are not
//! disjoint on either side; downstream span building resolves overlap with
//! a per-position max.
//!
//! The search is a pure function of its arguments. Per-window state lives in
//! explicit parameters, and the char-position index over the right text is
//! built once per call and threaded through the recursion read-only.

use fxhash::FxHashMap;

use crate::types::{MatchBlock, MatchOutcome, SearchStatus};

/// Rectangular search window: half-open char ranges into each text.
#[derive(Debug, Clone, Copy)]
struct Window {
    left_start: usize,
    left_end: usize,
    right_start: usize,
    right_end: usize,
}

/// Find every maximal shared substring of length >= `min_len`.
///
/// `min_len` of zero is clamped to 1, which keeps every recorded block
/// strictly shrinking its window and therefore guarantees termination.
/// `node_budget` bounds the number of windows visited; when it runs out the
/// outcome is [`SearchStatus::Truncated`] and carries the blocks found so
/// far. Blocks come back sorted by `(len, left)` ascending.
pub fn find_matches(
    left: &[char],
    right: &[char],
    min_len: usize,
    node_budget: usize,
) -> MatchOutcome {
    let min_len = min_len.max(1);
    let mut budget = node_budget.max(1);

    // Char -> ascending positions over all of `right`; windows filter by
    // range during the scan.
    let mut positions: FxHashMap<char, Vec<usize>> = FxHashMap::default();
    for (j, &ch) in right.iter().enumerate() {
        positions.entry(ch).or_default().push(j);
    }

    let root = Window {
        left_start: 0,
        left_end: left.len(),
        right_start: 0,
        right_end: right.len(),
    };
    let mut blocks = Vec::new();
    let complete = search(left, &positions, root, min_len, &mut budget, &mut blocks);

    blocks.sort_unstable_by_key(|blk| (blk.len, blk.left));
    MatchOutcome {
        blocks,
        status: if complete {
            SearchStatus::Complete
        } else {
            SearchStatus::Truncated
        },
    }
}

/// Recursive window search. Returns `false` when the node budget ran out
/// somewhere under this window.
fn search(
    left: &[char],
    positions: &FxHashMap<char, Vec<usize>>,
    win: Window,
    min_len: usize,
    budget: &mut usize,
    blocks: &mut Vec<MatchBlock>,
) -> bool {
    if *budget == 0 {
        return false;
    }
    *budget -= 1;

    let Some(best) = longest_in_window(left, positions, win) else {
        return true;
    };
    if best.len < min_len {
        return true;
    }
    blocks.push(best);

    let left_halves = [
        (win.left_start, best.left),
        (best.left + best.len, win.left_end),
    ];
    let right_halves = [
        (win.right_start, best.right),
        (best.right + best.len, win.right_end),
    ];

    let mut complete = true;
    for &(left_start, left_end) in &left_halves {
        if left_end - left_start < min_len {
            continue;
        }
        for &(right_start, right_end) in &right_halves {
            if right_end - right_start < min_len {
                continue;
            }
            let sub = Window {
                left_start,
                left_end,
                right_start,
                right_end,
            };
            complete &= search(left, positions, sub, min_len, budget, blocks);
        }
    }
    complete
}

/// Longest contiguous run common to both window slices.
///
/// Equal-length candidates resolve to the smallest start in the left text,
/// then the smallest start in the right text. Returns `None` when the
/// windows share no char at all.
fn longest_in_window(
    left: &[char],
    positions: &FxHashMap<char, Vec<usize>>,
    win: Window,
) -> Option<MatchBlock> {
    let mut best = MatchBlock {
        left: win.left_start,
        right: win.right_start,
        len: 0,
    };
    // run_lens[j] = length of the common run ending at (i, j); rebuilt per
    // row from the previous row's map.
    let mut run_lens: FxHashMap<usize, usize> = FxHashMap::default();
    for i in win.left_start..win.left_end {
        let mut next_run_lens: FxHashMap<usize, usize> = FxHashMap::default();
        if let Some(js) = positions.get(&left[i]) {
            for &j in js {
                if j < win.right_start {
                    continue;
                }
                if j >= win.right_end {
                    break;
                }
                let k = if j == 0 {
                    1
                } else {
                    run_lens.get(&(j - 1)).copied().unwrap_or(0) + 1
                };
                next_run_lens.insert(j, k);
                // Strictly-greater keeps the first candidate of each length,
                // which is the smallest (left, right) pair in scan order.
                if k > best.len {
                    best = MatchBlock {
                        left: i + 1 - k,
                        right: j + 1 - k,
                        len: k,
                    };
                }
            }
        }
        run_lens = next_run_lens;
    }
    (best.len > 0).then_some(best)
}
