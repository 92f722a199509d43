/// Integer sort under test. Implementations mutate `arr` in place into non-decreasing order.
pub trait Sort {
    fn name() -> String;

    fn sort(arr: &mut [i32]);
}

pub mod patterns;
