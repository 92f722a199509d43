#![no_main]

use libfuzzer_sys::fuzz_target;

use classic_sorts::Algorithm;

fuzz_target!(|data: &[u8]| {
    let input = fuzz_util::u8_as_i32(data);

    let mut expected = input.clone();
    expected.sort_unstable();

    for algorithm in Algorithm::SORTS {
        let mut v = input.clone();
        algorithm.apply(&mut v);
        assert_eq!(v, expected, "{algorithm} on {input:?}");
    }
});
