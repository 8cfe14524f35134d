use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::binary::{BinaryWidth, decode_le};
use super::text::parse_text_scores;
use super::{InputError, ScoreFormat, detect_format, load_scores};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("kira_unlinkability_input_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn f64_bytes(values: &[f64]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn write_gz(path: &Path, contents: &[u8]) {
    let mut enc = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    enc.write_all(contents).unwrap();
    enc.finish().unwrap();
}

#[test]
fn test_detect_format() {
    assert_eq!(detect_format(Path::new("mated.bin")), ScoreFormat::F64);
    assert_eq!(detect_format(Path::new("mated")), ScoreFormat::F64);
    assert_eq!(detect_format(Path::new("mated.f32")), ScoreFormat::F32);
    assert_eq!(detect_format(Path::new("mated.txt")), ScoreFormat::Text);
    assert_eq!(detect_format(Path::new("mated.CSV")), ScoreFormat::Text);
    assert_eq!(detect_format(Path::new("mated.txt.gz")), ScoreFormat::Text);
    assert_eq!(detect_format(Path::new("mated.bin.gz")), ScoreFormat::F64);
}

#[test]
fn test_load_raw_f64() {
    let dir = make_temp_dir();
    let path = dir.join("mated.bin");
    let values = [0.8, 0.8, 0.9, 1.0];
    fs::write(&path, f64_bytes(&values)).unwrap();

    let set = load_scores(&path, ScoreFormat::Auto).unwrap();
    assert_eq!(set.format, ScoreFormat::F64);
    assert!(!set.compressed);
    assert_eq!(set.scores, values.to_vec());
    assert_eq!(set.range(), Some((0.8, 1.0)));
}

#[test]
fn test_load_raw_f64_gz() {
    let dir = make_temp_dir();
    let path = dir.join("non_mated.bin.gz");
    let values = [0.1, 0.2, 0.1, 0.3];
    write_gz(&path, &f64_bytes(&values));

    let set = load_scores(&path, ScoreFormat::Auto).unwrap();
    assert!(set.compressed);
    assert_eq!(set.scores, values.to_vec());
}

#[test]
fn test_load_f32_forced() {
    let dir = make_temp_dir();
    let path = dir.join("scores.raw");
    let bytes: Vec<u8> = [0.5f32, 0.25].iter().flat_map(|v| v.to_le_bytes()).collect();
    fs::write(&path, bytes).unwrap();

    let set = load_scores(&path, ScoreFormat::F32).unwrap();
    assert_eq!(set.scores, vec![0.5, 0.25]);
}

#[test]
fn test_load_text_gz() {
    let dir = make_temp_dir();
    let path = dir.join("scores.txt.gz");
    write_gz(&path, b"# header\n0.1, 0.2\n\n0.3;0.4 0.5\n");

    let set = load_scores(&path, ScoreFormat::Auto).unwrap();
    assert_eq!(set.format, ScoreFormat::Text);
    assert_eq!(set.scores, vec![0.1, 0.2, 0.3, 0.4, 0.5]);
}

#[test]
fn test_empty_binary_file() {
    let dir = make_temp_dir();
    let path = dir.join("empty.bin");
    fs::write(&path, b"").unwrap();
    let set = load_scores(&path, ScoreFormat::Auto).unwrap();
    assert!(set.scores.is_empty());
    assert_eq!(set.range(), None);
}

#[test]
fn test_misaligned_binary_is_rejected() {
    let err = decode_le(&[0u8; 12], BinaryWidth::F64).unwrap_err();
    assert!(matches!(err, InputError::InvalidInput(_)));
    assert_eq!(decode_le(&[0u8; 12], BinaryWidth::F32).unwrap().len(), 3);
}

#[test]
fn test_text_parse_error_has_line() {
    let err = parse_text_scores(Cursor::new("0.1\n0.2 abc\n")).unwrap_err();
    match err {
        InputError::Parse(msg) => assert!(msg.contains("line 2") && msg.contains("abc")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_missing_file() {
    let dir = make_temp_dir();
    let err = load_scores(&dir.join("nope.bin"), ScoreFormat::Auto).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}
