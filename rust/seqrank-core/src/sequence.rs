//! Integer sequence construction and in-place descending ranking.

/// Build the sequence `0, 1, …, n-1` by repeated append.
///
/// `build(0)` returns the empty sequence. This is a deliberate definition,
/// not an accident of the loop bounds.
pub fn build(n: usize) -> Vec<i64> {
    let mut seq = Vec::with_capacity(n);
    for i in 0..n {
        seq.push(i as i64);
    }
    seq
}

/// Rearrange `seq` in place into non-increasing order.
///
/// Double-index sweep: the outer cursor `i` ascends from 0, the inner
/// cursor `j` ascends from `i + 1`, and any pair with `seq[i] < seq[j]` is
/// swapped immediately. O(n²) comparisons; already-descending input takes
/// zero swaps, ascending input swaps on every pair.
pub fn rank_descending(seq: &mut [i64]) {
    let len = seq.len();
    if len < 2 {
        return;
    }
    for i in 0..len - 1 {
        for j in i + 1..len {
            if seq[i] < seq[j] {
                seq.swap(i, j);
            }
        }
    }
}
