use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io::Write;
use triecheck::{Checker, Trie};

const WORDS: &[&str] = &[
    "the", "be", "to", "of", "and", "a", "in", "that", "have", "it", "for", "not", "on", "with",
    "he", "as", "you", "do", "at", "this", "but", "his", "by", "from", "they", "we", "say", "her",
    "she", "or", "an", "will", "my", "one", "all", "would", "there", "their", "what", "so", "up",
    "out", "if", "about", "who", "get", "which", "go", "me", "when", "make", "can", "like", "time",
    "no", "just", "him", "know", "take", "people", "into", "year", "your", "good", "some", "could",
    "them", "see", "other", "than", "then", "now", "look", "only", "come", "its", "over", "think",
    "also", "back", "after", "use", "two", "how", "our", "work", "first", "well", "way", "even",
    "new", "want", "because", "any", "these", "give", "day", "most", "us",
];

const PARAGRAPH: &str =
    "it was a good day to think about the work that people would take on after this year";

fn bench_load(c: &mut Criterion) {
    c.bench_function("trie_from_words", |b| {
        b.iter(|| Trie::from_words(black_box(WORDS)))
    });
}

fn bench_check_words(c: &mut Criterion) {
    let trie = Trie::from_words(WORDS);
    let checker = Checker::default();
    let tokens: Vec<&str> = PARAGRAPH.split(' ').collect();

    c.bench_function("check_words", |b| {
        b.iter(|| checker.check_words(&trie, black_box(&tokens).iter().copied()))
    });
}

fn bench_check_file(c: &mut Criterion) {
    let trie = Trie::from_words(WORDS);
    let checker = Checker::default();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    for _ in 0..100 {
        writeln!(file, "{}", PARAGRAPH).unwrap();
    }
    let path = file.path().to_path_buf();

    c.bench_function("check_file_100_lines", |b| {
        b.iter(|| checker.check_file(&trie, black_box(&path)).unwrap())
    });
}

criterion_group!(benches, bench_load, bench_check_words, bench_check_file);
criterion_main!(benches);
