#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the string-level boundary functions.
///
/// Splits the input in two and exercises `compare_versions` and
/// `has_update`, checking the antisymmetry of whatever ordering comes
/// back. Most random pairs fail to parse, which is itself the interesting
/// path: failures must be reported, never panic.
fuzz_target!(|data: &[u8]| {
    let (left, right) = data.split_at(data.len() / 2);
    if let (Ok(a), Ok(b)) = (std::str::from_utf8(left), std::str::from_utf8(right)) {
        if let (Ok(forward), Ok(backward)) = (
            version_tools::compare_versions(a, b),
            version_tools::compare_versions(b, a),
        ) {
            assert_eq!(forward, backward.reverse());
        }
        let _ = version_tools::has_update(a, b);
    }
});
