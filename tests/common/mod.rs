use std::fs;
use std::io;
use std::path::PathBuf;

/// Runs `demo` into a buffer and compares it with `tests/test_files/expected/<name>`
pub fn check_transcript(name: &str, demo: fn(&mut Vec<u8>) -> io::Result<()>) {
    let _ = env_logger::builder().is_test(true).try_init();

    let expected_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("test_files")
        .join("expected")
        .join(name);

    let mut output_stream: Vec<u8> = Vec::new();
    demo(&mut output_stream).unwrap();

    let output = String::from_utf8(output_stream).unwrap();

    let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
        panic!("Could not read expected output file for `{}`: {}", name, e)
    });

    let normalized_output = output.trim().replace("\r\n", "\n");
    let normalized_expected = expected.trim().replace("\r\n", "\n");

    assert_eq!(
        normalized_output, normalized_expected,
        "Output mismatch for transcript `{}`",
        name,
    );
}
