/// Sorts `v` with quicksort, using the Hoare partition scheme around the middle element.
///
/// Not stable. `O(n * log(n))` on average, `O(n^2)` worst case. Stack depth is `O(log(n))`
/// because only the shorter side is sorted recursively.
pub fn sort(v: &mut [i32]) {
    quicksort(v);
}

fn quicksort(mut v: &mut [i32]) {
    while v.len() > 1 {
        let (left_len, right_start) = partition(v);

        let (left, rest) = v.split_at_mut(left_len);
        let right = &mut rest[(right_start - left_len)..];

        if left.len() < right.len() {
            quicksort(left);
            v = right;
        } else {
            quicksort(right);
            v = left;
        }
    }
}

/// Partitions `v` around its middle element and returns `(left_len, right_start)`.
///
/// Afterwards every element of `v[..left_len]` is `<=` the pivot, every element of
/// `v[right_start..]` is `>=` the pivot, and the elements in between, if any, equal it.
/// `left_len <= right_start` always holds, and both sides are strictly shorter than `v`.
///
/// Panics if `v` is empty.
pub fn partition(v: &mut [i32]) -> (usize, usize) {
    let pivot = v[(v.len() - 1) / 2];

    // `i` is the next candidate from the left, `end` is one past the next candidate from the
    // right. Keeping `end` exclusive avoids stepping below zero.
    let mut i = 0;
    let mut end = v.len();

    while i < end {
        while v[i] < pivot {
            i += 1;
        }

        while pivot < v[end - 1] {
            end -= 1;
        }

        if i < end {
            v.swap(i, end - 1);
            i += 1;
            end -= 1;
        }
    }

    (end, i)
}
