mod common;

use assert_cmd::prelude::*;
use common::b64file_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_encode_hello_default_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("hello.bin"), [0x68, 0x65, 0x6C, 0x6C, 0x6F])?;

    b64file_cmd()
        .args(["--encode", "--file", "hello.bin"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File Encoding Summary"))
        .stdout(predicate::str::contains(
            "File 'hello.bin' has been successfully encoded to 'hello.bin.b64'.",
        ));

    assert_eq!(fs::read(temp.path().join("hello.bin.b64"))?, b"aGVsbG8=");

    temp.close()?;
    Ok(())
}

#[test]
fn test_decode_hello_default_output() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("hello.bin.b64"), "aGVsbG8=")?;

    b64file_cmd()
        .args(["-d", "-f", "hello.bin.b64"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("File Decoding Summary"))
        .stdout(predicate::str::contains(
            "File 'hello.bin.b64' has been successfully decoded to 'hello.bin'.",
        ));

    assert_eq!(
        fs::read(temp.path().join("hello.bin"))?,
        [0x68, 0x65, 0x6C, 0x6C, 0x6F]
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_summary_lists_sizes_and_hashes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("hello.bin"), "hello")?;

    b64file_cmd()
        .args(["-e", "-f", "hello.bin"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Size (bytes)"))
        .stdout(predicate::str::contains("SHA256 Hash"))
        // sha256("hello")
        .stdout(predicate::str::contains(
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824",
        ))
        .stdout(predicate::str::is_match(r"hello\.bin\.b64 \|\s+8 \| [0-9a-f]{64}\n")?);

    temp.close()?;
    Ok(())
}

#[test]
fn test_binary_round_trip() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let original: Vec<u8> = (0..=255u8).rev().cycle().take(4099).collect();
    fs::write(temp.path().join("blob.dat"), &original)?;

    b64file_cmd()
        .args(["-e", "-f", "blob.dat"])
        .current_dir(temp.path())
        .assert()
        .success();
    fs::remove_file(temp.path().join("blob.dat"))?;

    b64file_cmd()
        .args(["-d", "-f", "blob.dat.b64"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(fs::read(temp.path().join("blob.dat"))?, original);

    temp.close()?;
    Ok(())
}

#[test]
fn test_decode_tolerates_wrapped_input() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("msg.b64"), "aGVs\nbG8s\nIHdv\ncmxk\n")?;

    b64file_cmd()
        .args(["-d", "-f", "msg.b64"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("msg"))?, "hello, world");

    temp.close()?;
    Ok(())
}

#[test]
fn test_missing_file_path_read_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("piped.bin"), "abc")?;

    let mut cmd = assert_cmd::Command::from_std(b64file_cmd());
    cmd.arg("-e")
        .current_dir(temp.path())
        .write_stdin("piped.bin\n")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(temp.path().join("piped.bin.b64"))?, "YWJj");

    temp.close()?;
    Ok(())
}

#[test]
fn test_rust_log_overrides_default_filter() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    fs::write(temp.path().join("a.bin"), "abc")?;

    b64file_cmd()
        .args(["-e", "-f", "a.bin"])
        .env("RUST_LOG", "b64file=warn")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting Base64").not())
        .stderr(predicate::str::contains("DEBUG").not());

    b64file_cmd()
        .args(["-e", "-f", "a.bin", "-o", "b.b64"])
        .env("RUST_LOG", "b64file=info")
        .current_dir(temp.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting Base64"));

    temp.close()?;
    Ok(())
}
