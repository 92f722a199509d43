/// Sorts `v` with heapsort: build a max-heap in place, then repeatedly move the root behind the
/// shrinking heap.
///
/// Not stable, `O(n * log(n))` worst case, no allocation.
pub fn sort(v: &mut [i32]) {
    build_heap(v);

    for end in (1..v.len()).rev() {
        v.swap(0, end);
        sift_down(&mut v[..end], 0);
    }
}

/// Rearranges `v` into a max-heap: `v[(n - 1) / 2] >= v[n]` for every `n > 0`.
pub fn build_heap(v: &mut [i32]) {
    for node in (0..v.len() / 2).rev() {
        sift_down(v, node);
    }
}

/// Moves `v[node]` down until neither child is larger, assuming both child subtrees already are
/// max-heaps.
pub fn sift_down(v: &mut [i32], mut node: usize) {
    let len = v.len();

    loop {
        let left = 2 * node + 1;
        let right = left + 1;

        let mut largest = node;
        if left < len && v[largest] < v[left] {
            largest = left;
        }
        if right < len && v[largest] < v[right] {
            largest = right;
        }

        if largest == node {
            return;
        }

        v.swap(node, largest);
        node = largest;
    }
}
