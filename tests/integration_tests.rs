use std::fs;
use tempfile::TempDir;
use wordlist_json::{
    convert, ConvertConfig, ConvertEngine, ConvertError, LocalStorage, WordListPipeline,
};

fn run_in(dir: &TempDir) -> wordlist_json::Result<wordlist_json::ConvertOutput> {
    let storage = LocalStorage::new(dir.path());
    let pipeline = WordListPipeline::new(storage, ConvertConfig::default());
    ConvertEngine::new(pipeline).run()
}

fn read_output(dir: &TempDir) -> String {
    fs::read_to_string(dir.path().join("words.json")).unwrap()
}

#[test]
fn test_end_to_end_example_word_list() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("100k.txt"), "Hello\n  WORLD  \ncafé\n").unwrap();

    let output = run_in(&dir).unwrap();

    assert_eq!(output.word_count, 3);
    assert_eq!(
        read_output(&dir),
        "[\n  \"hello\",\n  \"world\",\n  \"café\"\n]"
    );
}

#[test]
fn test_output_length_matches_line_count() {
    let dir = TempDir::new().unwrap();
    let lines: Vec<String> = (0..250).map(|i| format!("  Word{}\t", i)).collect();
    fs::write(dir.path().join("100k.txt"), lines.join("\n") + "\n").unwrap();

    run_in(&dir).unwrap();

    let parsed: Vec<String> = serde_json::from_str(&read_output(&dir)).unwrap();
    assert_eq!(parsed.len(), lines.len());
    for (raw, word) in lines.iter().zip(&parsed) {
        assert_eq!(word, &raw.trim().to_lowercase());
    }
}

#[test]
fn test_running_twice_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("100k.txt"), "Ünïcode\nMIXED case\n\n").unwrap();

    run_in(&dir).unwrap();
    let first = fs::read(dir.path().join("words.json")).unwrap();
    run_in(&dir).unwrap();
    let second = fs::read(dir.path().join("words.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_empty_input_writes_empty_array() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("100k.txt"), "").unwrap();

    let output = run_in(&dir).unwrap();

    assert_eq!(output.word_count, 0);
    assert_eq!(read_output(&dir), "[]");
}

#[test]
fn test_whitespace_only_line_becomes_empty_string() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("100k.txt"), "one\n   \t \ntwo").unwrap();

    run_in(&dir).unwrap();

    let parsed: Vec<String> = serde_json::from_str(&read_output(&dir)).unwrap();
    assert_eq!(parsed, vec!["one", "", "two"]);
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = TempDir::new().unwrap();

    let err = run_in(&dir).unwrap_err();

    assert!(matches!(err, ConvertError::ReadError { .. }));
    assert!(!dir.path().join("words.json").exists());
}

#[test]
fn test_invalid_utf8_is_rejected() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("100k.txt"), b"fine\n\xff\xfe\n").unwrap();

    let err = run_in(&dir).unwrap_err();

    assert!(matches!(err, ConvertError::EncodingError { offset: 5, .. }));
    assert!(!dir.path().join("words.json").exists());
}

#[test]
fn test_unwritable_output_path_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("100k.txt"), "word\n").unwrap();
    let config = ConvertConfig::new(
        dir.path().join("100k.txt").to_str().unwrap(),
        dir.path().join("no_such_dir/words.json").to_str().unwrap(),
    );

    let err = convert(&config).unwrap_err();

    assert!(matches!(err, ConvertError::WriteError { .. }));
}

#[test]
fn test_convert_with_absolute_paths() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("list.txt");
    let output = dir.path().join("out.json");
    fs::write(&input, "B\nA\n").unwrap();

    let config = ConvertConfig::new(input.to_str().unwrap(), output.to_str().unwrap());
    let result = convert(&config).unwrap();

    assert_eq!(result.word_count, 2);
    assert_eq!(fs::read_to_string(output).unwrap(), "[\n  \"b\",\n  \"a\"\n]");
}

#[test]
fn test_mixed_line_endings_count_as_separate_lines() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("100k.txt"), "Apple\rBanana\r\nCherry\n\x1fDate\x1f").unwrap();

    let output = run_in(&dir).unwrap();

    assert_eq!(output.word_count, 4);
    let parsed: Vec<String> = serde_json::from_str(&read_output(&dir)).unwrap();
    assert_eq!(parsed, vec!["apple", "banana", "cherry", "date"]);
}
