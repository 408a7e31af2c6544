//! Examples of using the weighted trie
use weighted_trie::{BytesTrie, StringTrie};

fn main() {
    // Create a new trie with string keys
    let mut trie = StringTrie::new();

    // Insert some weighted words
    trie.insert("cat", 5.0);
    trie.insert("car", 5.0);
    trie.insert("can", 3.0);
    trie.insert("dog", 1.0);

    // Ranked completion: heaviest first, ties by word
    assert_eq!(trie.complete("ca", 2), vec!["car", "cat"]);
    assert!(trie.complete("x", 5).is_empty());

    // Re-inserting replaces the weight
    trie.insert("can", 9.0);
    assert_eq!(trie.complete("ca", 1), vec!["can"]);

    // Removal prunes only what the word alone kept alive
    assert!(trie.remove("cat"));
    assert!(trie.contains("car"));
    assert!(!trie.contains("cat"));

    println!("{}", trie.stats());
    for (word, weight) in trie.items() {
        println!("  {} → {}", word, weight);
    }

    // Or branch on raw bytes
    let mut bytes = BytesTrie::new();
    bytes.insert(b"\x01\x02", 1.0);
    assert_eq!(bytes.complete(b"\x01", 1), vec![vec![1u8, 2]]);
}

#[test]
fn test_prefix_view() {
    let mut trie = StringTrie::new();
    trie.insert("hello", 1.0);
    trie.insert("help", 2.0);
    trie.insert("world", 3.0);

    // Create a view of the "hel" prefix
    let view = trie.view_prefix("hel");

    assert!(view.exists());
    assert_eq!(view.len(), 2);
    assert!(view.contains("hello"));
    assert!(!view.contains("world"));
    assert_eq!(view.weight("help"), Some(2.0));
}
