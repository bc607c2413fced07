//! Corpus Profiling Benchmark
//!
//! Measures the throughput of the trigram pipeline on a large corpus file,
//! such as a Wikipedia dump in the target language.
//!
//! ## What It Benchmarks
//!
//! 1. **Normalize**: Lowercasing the whole corpus
//! 2. **Tokenize**: Splitting normalized text into letter runs
//! 3. **Profile**: Normalize + tokenize + pad + count + rank
//!
//! ## Usage
//!
//! ```bash
//! ./target/release/corpus_bench /path/to/corpus.txt
//! ```
//!
//! ## Example Output
//!
//! ```text
//! === Profile ===
//! --------------------------------
//! Mode        : Profile
//! Elapsed     : 0.812 s
//! Throughput  : 0.231 GiB/s
//! Words       : 31_402_117
//! Words/sec   : 38_672_557
//! --------------------------------
//! ```
//!
//! Build with `--release`; debug builds are an order of magnitude slower.

use std::env;
use std::error::Error;
use std::time::{Duration, Instant};

use trigram_core::analyzer::{TextNormalizer, WordTokenizer};
use trigram_core::corpus::load_corpus;
use trigram_core::TrigramProfile;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path>");
        std::process::exit(1);
    }

    println!("Loading file...");
    let input = load_corpus(&args[1])?;

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    bench_normalize(&input);
    bench_tokenize(&input);
    bench_profile(&input);

    Ok(())
}

fn bench_normalize(input: &str) {
    let normalizer = TextNormalizer::new();
    let mut out = String::with_capacity(input.len());

    println!("=== Normalize ===");

    warmup(|| normalizer.normalize_into(input, &mut out));
    let elapsed = measure(|| normalizer.normalize_into(input, &mut out));

    print_perf("Normalize", input.len(), elapsed, 0);
}

fn bench_tokenize(input: &str) {
    let normalized = TextNormalizer::new().normalize(input);
    let tokenizer = WordTokenizer::new();

    println!("=== Tokenize ===");

    warmup(|| {
        std::hint::black_box(tokenizer.count_words(&normalized));
    });

    let mut words = 0u64;
    let elapsed = measure(|| {
        words = tokenizer.count_words(&normalized) as u64;
        std::hint::black_box(words);
    });

    print_perf("Tokenize", input.len(), elapsed, words);
}

fn bench_profile(input: &str) {
    println!("=== Profile ===");

    warmup(|| {
        let mut profile = TrigramProfile::new();
        profile.add_text(input);
        std::hint::black_box(profile.top_trigrams());
    });

    let mut words = 0u64;
    let mut distinct = 0usize;
    let elapsed = measure(|| {
        let mut profile = TrigramProfile::new();
        profile.add_text(input);
        std::hint::black_box(profile.top_trigrams());

        let stats = profile.stats();
        words = stats.words_seen;
        distinct = stats.distinct_trigrams;
    });

    print_perf("Profile", input.len(), elapsed, words);
    println!("Distinct trigrams: {}\n", fmt_count(distinct as u64));
}

fn warmup<F: FnMut()>(mut f: F) {
    for _ in 0..WARMUP_RUNS {
        f();
    }
}

fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut total = Duration::ZERO;

    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        f();
        total += start.elapsed();
    }

    total / MEASURE_RUNS as u32
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, words: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if words > 0 {
        println!("Words       : {}", fmt_count(words));
        println!("Words/sec   : {}", fmt_count((words as f64 / secs) as u64));
    }

    println!("--------------------------------\n");
}

fn fmt_bytes(b: u64) -> String {
    if b >= 1024 * 1024 * 1024 {
        format!("{:.2} GiB", b as f64 / (1024.0 * 1024.0 * 1024.0))
    } else if b >= 1024 * 1024 {
        format!("{:.2} MiB", b as f64 / (1024.0 * 1024.0))
    } else if b >= 1024 {
        format!("{:.2} KiB", b as f64 / 1024.0)
    } else {
        format!("{} B", b)
    }
}

fn fmt_count(n: u64) -> String {
    let s = n.to_string();
    let mut out = String::with_capacity(s.len() + s.len() / 3);

    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out.chars().rev().collect()
}
