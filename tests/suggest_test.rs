use std::fs;
use tempfile::TempDir;
use wordlist_json::core::etl::load_word_list;
use wordlist_json::{ConvertConfig, ConvertEngine, LocalStorage, Trie, WordListPipeline};

#[test]
fn test_suggestions_from_converted_word_list() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("100k.txt"),
        "Cat\nCaterpillar\nCattle\nCamera\nCamp\nCall\nDog\n",
    )
    .unwrap();

    let storage = LocalStorage::new(dir.path());
    ConvertEngine::new(WordListPipeline::new(storage.clone(), ConvertConfig::default()))
        .run()
        .unwrap();

    let words = load_word_list(&storage, "words.json").unwrap();
    assert_eq!(words.len(), 7);

    let trie = Trie::from_words(words.iter());
    assert_eq!(trie.search("CAT"), vec!["cat", "caterpillar", "cattle"]);
    assert_eq!(trie.search("ca").len(), 5);
    assert!(trie.search("x").is_empty());
}
