/// Sorts `v` with top-down merge sort.
///
/// Stable, `O(n * log(n))` worst case. Allocates a scratch buffer of `v.len()` elements once per
/// call.
pub fn sort(v: &mut [i32]) {
    if v.len() < 2 {
        return;
    }

    let mut buf = vec![0; v.len()];
    mergesort(v, &mut buf);
}

fn mergesort(v: &mut [i32], buf: &mut [i32]) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    mergesort(&mut v[..mid], buf);
    mergesort(&mut v[mid..], buf);
    merge(v, mid, buf);
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]` into one sorted run.
///
/// `buf` must hold at least `v.len()` elements. Ties are taken from the left run, so equal
/// elements keep their relative order.
pub fn merge(v: &mut [i32], mid: usize, buf: &mut [i32]) {
    let len = v.len();
    let buf = &mut buf[..len];
    buf.copy_from_slice(v);

    let (left, right) = buf.split_at(mid);
    let mut i = 0;
    let mut j = 0;
    let mut out = 0;

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            v[out] = left[i];
            i += 1;
        } else {
            v[out] = right[j];
            j += 1;
        }
        out += 1;
    }

    // The rest of the right run is already where it belongs.
    let left_rest = &left[i..];
    v[out..(out + left_rest.len())].copy_from_slice(left_rest);
}
