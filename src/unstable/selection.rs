/// Sorts `v` with selection sort: the minimum of the unsorted suffix is swapped to its front.
///
/// Not stable, `O(n^2)` comparisons but at most `n - 1` swaps.
pub fn sort(v: &mut [i32]) {
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        let min_pos = min_position(&v[i..]) + i;

        if min_pos != i {
            v.swap(i, min_pos);
        }
    }
}

/// Position of the first minimum in `v`. `v` must not be empty.
fn min_position(v: &[i32]) -> usize {
    let mut min_pos = 0;
    for (pos, &val) in v.iter().enumerate().skip(1) {
        if val < v[min_pos] {
            min_pos = pos;
        }
    }

    min_pos
}
