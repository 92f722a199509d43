/// Sorts `v` with insertion sort, shifting each element left past every larger predecessor.
pub fn sort(v: &mut [i32]) {
    for i in 1..v.len() {
        insert_tail(&mut v[..=i]);
    }
}

/// Moves the last element of `v` left until its predecessor is no greater. `v[..v.len() - 1]`
/// must already be sorted.
fn insert_tail(v: &mut [i32]) {
    let mut j = v.len() - 1;
    while j > 0 && v[j] < v[j - 1] {
        v.swap(j, j - 1);
        j -= 1;
    }
}
