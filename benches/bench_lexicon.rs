use criterion::{criterion_group, criterion_main, Criterion};
use std::convert::TryFrom;
use scrabble_helper::{Letter, Lexicon, Rack, DEFAULT_WORDS};

const WORDS: &[&str] = &[
    "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel",
];

fn bench_from_words() {
    let _lexicon = Lexicon::from_words(WORDS);
}

fn bench_candidates(c: &mut Criterion, name: &str, rack: &str, required: Option<char>) {
    let lexicon = Lexicon::builtin();
    let rack: Rack = rack.parse().unwrap();
    let required = required.map(|ch| Letter::try_from(ch).unwrap());
    c.bench_function(name, |b| b.iter(|| lexicon.candidates(&rack, required)));
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("lexicon.from_words", |b| b.iter(bench_from_words));
    c.bench_function("lexicon.builtin", |b| {
        b.iter(|| Lexicon::from_words(DEFAULT_WORDS))
    });
    bench_candidates(c, "lexicon.candidates.1", "abel", None);
    bench_candidates(c, "lexicon.candidates.2", "retains", None);
    bench_candidates(c, "lexicon.candidates.3", "retains", Some('o'));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
