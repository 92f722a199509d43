/// Sorts `v` with bubble sort.
///
/// Each pass swaps adjacent out-of-order pairs, which carries the largest remaining element to
/// the end of the unsorted prefix. A pass without swaps means the prefix is already sorted.
pub fn sort(v: &mut [i32]) {
    for end in (1..v.len()).rev() {
        let mut swapped = false;

        for j in 0..end {
            if v[j] > v[j + 1] {
                v.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            return;
        }
    }
}
