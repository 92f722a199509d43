//! Input shapes for exercising and benchmarking the integer sorts.
//!
//! All random patterns draw from a seed that is fixed for the lifetime of the process, so a
//! failing test can be replayed with `OVERRIDE_SEED=<seed>`.

use std::env;
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;

use rand::distributions::Uniform;
use rand::prelude::*;

use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_rng();
    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_rng();
    let dist: Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

/// Few distinct values, `0..=log2(len)`.
pub fn random_dense(len: usize) -> Vec<i32> {
    let upper = (len.max(1) as f64).log2().round() as i32;
    random_uniform(len, 0..=upper)
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law
    if len == 0 {
        return Vec::new();
    }

    let mut rng = new_rng();
    let dist = ZipfDistribution::new(len, exponent).unwrap();

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_sorted(len: usize, sorted_percent: f64) -> Vec<i32> {
    //     .:
    //   .:::. :
    // .::::::.::
    // [----][--]
    // sorted  unsorted

    let mut v = random(len);
    let sorted_len = ((len as f64) * (sorted_percent / 100.0)).round() as usize;
    v[..sorted_len].sort_unstable();

    v
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.    .::.    .:
    // :::.:::..::::::..:::

    if len == 0 {
        return Vec::new();
    }

    let mut v = random(len);
    let chunk_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform(len / chunk_len + 1, 0..=1);

    for (chunk, direction) in v.chunks_mut(chunk_len).zip(directions) {
        if direction == 0 {
            chunk.sort_unstable();
        } else {
            chunk.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let mut v = random(len);
    let (first_half, second_half) = v.split_at_mut(len / 2);
    first_half.sort_unstable();
    second_half.sort_unstable_by(|a, b| b.cmp(a));

    v
}

/// Makes every later random pattern draw from a fresh seed.
///
/// Benchmarks want this, tests want the default once-per-process seed.
pub fn use_random_seed_each_time() {
    if seed_override().is_some() {
        panic!("use_random_seed_each_time conflicts with OVERRIDE_SEED.");
    }

    RANDOM_EACH_TIME.store(true, Ordering::Release);
}

pub fn random_init_seed() -> u64 {
    if RANDOM_EACH_TIME.load(Ordering::Acquire) {
        return thread_rng().gen();
    }

    static SEED: OnceCell<u64> = OnceCell::new();
    *SEED.get_or_init(|| seed_override().unwrap_or_else(|| thread_rng().gen()))
}

// --- Private ---

static RANDOM_EACH_TIME: AtomicBool = AtomicBool::new(false);

fn seed_override() -> Option<u64> {
    env::var("OVERRIDE_SEED")
        .ok()
        .map(|seed| u64::from_str(&seed).expect("OVERRIDE_SEED must be a u64"))
}

fn new_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
