use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/wordbank.txt");

fn is_playable(word: &str, word_len: usize) -> bool {
    word.len() == word_len && word.bytes().all(|b| b.is_ascii_lowercase())
}

/// Loads a newline-delimited word list, normalizing to lowercase and keeping
/// only words of the requested length. Line order is preserved; the first
/// surviving word becomes the opening guess.
pub fn load_wordbank_from_str(data: &str, word_len: usize) -> Vec<String> {
    data.lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_playable(word, word_len))
        .collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P, word_len: usize) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        let word = line?.trim().to_lowercase();
        if is_playable(&word, word_len) {
            words.push(word);
        }
    }
    Ok(words)
}
