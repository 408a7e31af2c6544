//! Seeds a trie from a word listing and answers a few completion queries.
use weighted_trie::{parse_entries, StringTrie};

const SEED: &str = "\
# word      weight
world       50
would       30
work        30
thanks      40
thank       25
there       35
their       20
because     25
please      30
tomorrow    20
regards     25
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let trie: StringTrie = parse_entries(SEED)?.into_iter().collect();
    println!("{}", trie.stats());

    for prefix in ["w", "th", "the", "p", "x"] {
        let completions = trie.complete_with_weights(prefix, 3);
        println!("{:>4} → {:?}", prefix, completions);
    }

    Ok(())
}
