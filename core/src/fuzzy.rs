//! Character-level similarity between two words.
//!
//! The ratio is `2 * M / T`, where `T` is the total length of both strings and `M`
//! the number of characters covered by matching blocks. Blocks are found by taking
//! the longest common run, then recursing on what lies left and right of it.
//! Tie-breaking makes that decomposition order-sensitive, so `M` is taken as the
//! larger of the two directions; the ratio is symmetric in its arguments.

pub const DEFAULT_THRESHOLD: f64 = 0.70;

/// Similarity ratio in `[0, 1]` of the lowercased inputs. Two empty strings give 0.
pub fn similarity_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    ratio_chars(&a, &b)
}

/// True iff the ratio strictly exceeds `threshold`.
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    similarity_ratio(a, b) > threshold
}

/// Upper bound of the ratio for strings of these lengths; matched characters
/// cannot exceed the shorter length.
pub fn ratio_upper_bound(len_a: usize, len_b: usize) -> f64 {
    let total = len_a + len_b;
    if total == 0 {
        return 0.0;
    }
    2.0 * len_a.min(len_b) as f64 / total as f64
}

pub(crate) fn ratio_chars(a: &[char], b: &[char]) -> f64 {
    let total = a.len() + b.len();
    if total == 0 {
        return 0.0;
    }
    let matched = matched_len(a, b).max(matched_len(b, a));
    2.0 * matched as f64 / total as f64
}

fn matched_len(a: &[char], b: &[char]) -> usize {
    let mut matched = 0;
    let mut pending = vec![(0, a.len(), 0, b.len())];
    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let (i, j, k) = longest_match(a, b, alo, ahi, blo, bhi);
        if k == 0 {
            continue;
        }
        matched += k;
        if alo < i && blo < j {
            pending.push((alo, i, blo, j));
        }
        if i + k < ahi && j + k < bhi {
            pending.push((i + k, ahi, j + k, bhi));
        }
    }
    matched
}

/// Longest common run of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
/// Ties go to the earliest start in `a`, then in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> (usize, usize, usize) {
    let width = bhi - blo;
    let mut best = (alo, blo, 0);
    // prev[x] = length of the run ending at a[i-1], b[blo+x-1]
    let mut prev = vec![0usize; width + 1];
    let mut cur = vec![0usize; width + 1];
    for i in alo..ahi {
        for j in blo..bhi {
            let x = j - blo + 1;
            if a[i] == b[j] {
                let k = prev[x - 1] + 1;
                cur[x] = k;
                if k > best.2 {
                    best = (i + 1 - k, j + 1 - k, k);
                }
            } else {
                cur[x] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    best
}
