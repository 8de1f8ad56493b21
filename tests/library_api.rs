// tests/library_api.rs

use b64file::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{tempdir, TempDir};

// --- Test Harness for reducing boilerplate ---

/// A helper struct to manage a temporary directory for one library API test.
struct TestHarness {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestHarness {
    fn new() -> Self {
        let temp_dir = tempdir().unwrap();
        let root = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    /// Creates a file with content and returns its path.
    fn file(&self, name: &str, content: &[u8]) -> PathBuf {
        let path = self.root.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config(&self, mode: Direction, input: &str) -> Config {
        ConfigBuilder::new()
            .mode(mode)
            .input_path(self.root.join(input))
            .build()
            .unwrap()
    }
}

// --- Tests ---

#[test]
fn test_plan_then_transform() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.file("hello.bin", b"hello");

    let job = plan(&harness.config(Direction::Encode, "hello.bin"))?;
    assert_eq!(job.direction, Direction::Encode);
    assert_eq!(job.output_path, harness.root.join("hello.bin.b64"));

    let report = transform(&job, &Base64Codec)?;
    assert_eq!(report.input.size()?, 5);
    assert_eq!(report.output.size()?, 8);
    assert_eq!(report.original().path(), harness.root.join("hello.bin"));
    Ok(())
}

#[test]
fn test_hash_matches_content() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.file("hello.bin.b64", b"aGVsbG8=");

    let report = execute(&harness.config(Direction::Decode, "hello.bin.b64"))?;
    assert_eq!(
        report.output.content_hash()?,
        "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
    );
    Ok(())
}

#[test]
fn test_validation_is_repeatable() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    let path = harness.file("same.bin", b"x");
    validate_file(&path, None)?;
    validate_file(&path, None)?;

    let empty = harness.file("empty.bin", b"");
    for _ in 0..2 {
        assert!(matches!(
            validate_file(&empty, None),
            Err(Error::EmptyFile { .. })
        ));
    }
    Ok(())
}

#[test]
fn test_decode_error_is_distinct_from_io() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.file("bad.b64", b"@@@@");

    let err = execute(&harness.config(Direction::Decode, "bad.b64")).unwrap_err();
    assert!(matches!(err, Error::Decode { .. }));
    assert!(!harness.root.join("bad").exists());
    Ok(())
}

#[test]
fn test_run_writes_report() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.file("a.bin", b"abc");

    let mut out = Vec::new();
    run(&harness.config(Direction::Encode, "a.bin"), &mut out)?;
    let text = String::from_utf8(out)?;
    assert!(text.contains("File Encoding Summary"));
    assert!(!text.contains("YWJj"));
    assert!(text.ends_with("'.\n"));
    Ok(())
}

/// A codec that reverses bytes, to exercise the `Codec` seam.
struct Reverse;

impl Codec for Reverse {
    fn name(&self) -> &'static str {
        "reverse"
    }
    fn encode(&self, data: &[u8]) -> std::result::Result<Vec<u8>, CodecError> {
        Ok(data.iter().rev().copied().collect())
    }
    fn decode(&self, data: &[u8]) -> std::result::Result<Vec<u8>, CodecError> {
        self.encode(data)
    }
}

#[test]
fn test_custom_codec() -> anyhow::Result<()> {
    let harness = TestHarness::new();
    harness.file("abc.txt", b"abc");

    let job = plan(&harness.config(Direction::Encode, "abc.txt"))?;
    transform(&job, &Reverse)?;
    assert_eq!(fs::read(harness.root.join("abc.txt.b64"))?, b"cba");
    Ok(())
}
