#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz the strict version parser.
///
/// Feeds arbitrary UTF-8 strings to `Version::parse`; malformed input must
/// return an error, never panic, and accepted input must survive a
/// display/reparse cycle at equal precedence.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(version) = version_tools::Version::parse(s) {
            let reparsed = version_tools::Version::parse(&version.to_string())
                .expect("displayed version must reparse");
            assert_eq!(version, reparsed);
        }
    }
});
