use std::process::Command;

use pnginject_png::MAGIC_BYTES;

const BIN: &str = env!("CARGO_BIN_EXE_png-inject");

fn chunk(chunk_type: &[u8; 4], data: &[u8]) -> Vec<u8> {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);

    let mut buf = Vec::new();
    buf.extend_from_slice(&u32::try_from(data.len()).unwrap().to_be_bytes());
    buf.extend_from_slice(chunk_type);
    buf.extend_from_slice(data);
    buf.extend_from_slice(&hasher.finalize().to_be_bytes());
    buf
}

fn injected() -> Vec<u8> {
    chunk(b"coCK", b"YEP")
}

#[test]
fn inject_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");

    let ihdr = chunk(b"IHDR", &[0; 13]);
    let idat = chunk(b"IDAT", &[1, 2, 3, 4]);
    let iend = chunk(b"IEND", &[]);

    let mut data = MAGIC_BYTES.to_vec();
    data.extend_from_slice(&ihdr);
    data.extend_from_slice(&idat);
    data.extend_from_slice(&iend);
    std::fs::write(&input, &data).unwrap();

    let status = Command::new(BIN).arg(&input).arg(&output).status().unwrap();
    assert!(status.success());

    let mut expected = MAGIC_BYTES.to_vec();
    expected.extend_from_slice(&ihdr);
    expected.extend_from_slice(&idat);
    expected.extend_from_slice(&injected());
    expected.extend_from_slice(&iend);

    assert_eq!(std::fs::read(&output).unwrap(), expected);
}

#[test]
fn missing_arguments() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");

    let out = Command::new(BIN).arg(&input).output().unwrap();
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Usage"));

    let out = Command::new(BIN).output().unwrap();
    assert!(!out.status.success());
}

#[test]
fn invalid_signature_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.jpg");
    let output = dir.path().join("out.png");
    std::fs::write(&input, b"\xFF\xD8\xFF\xE0 not a png").unwrap();

    let out = Command::new(BIN).arg(&input).arg(&output).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not a valid PNG file"));
    assert!(!output.exists());
}

#[test]
fn missing_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("does-not-exist.png");
    let output = dir.path().join("out.png");

    let out = Command::new(BIN).arg(&input).arg(&output).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Could not read"));
    assert!(stderr.contains("does-not-exist.png"));
    assert!(!output.exists());
}

#[test]
fn truncated_chunk_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.png");
    let output = dir.path().join("out.png");

    let mut data = MAGIC_BYTES.to_vec();
    data.extend_from_slice(&chunk(b"IHDR", &[0; 13]));
    // Claims 100 bytes of data but ends early
    data.extend_from_slice(&100_u32.to_be_bytes());
    data.extend_from_slice(b"IDAT");
    data.extend_from_slice(&[0; 10]);
    std::fs::write(&input, &data).unwrap();

    let out = Command::new(BIN).arg(&input).arg(&output).output().unwrap();
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Unexpected end of file"));
}
