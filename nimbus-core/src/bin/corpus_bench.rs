//! Corpus Benchmarking Tool
//!
//! This binary measures the throughput of the frequency pipeline on large
//! text files, like book dumps or scraped article corpora. It's designed to
//! give realistic numbers for production-like workloads.
//!
//! ## What It Benchmarks
//!
//! 1. **Tokenization**: Splitting raw text into tokens
//! 2. **Normalization**: Canonicalizing every token through the default chain
//! 3. **Full Analysis**: The complete tokenize → filter → normalize →
//!    aggregate → rank run
//!
//! ## Usage
//!
//! ```bash
//! # Benchmark tokenization only
//! ./target/release/corpus_bench /path/to/corpus.txt tokenize
//!
//! # Benchmark normalization only
//! ./target/release/corpus_bench /path/to/corpus.txt normalize
//!
//! # Benchmark the full analysis
//! ./target/release/corpus_bench /path/to/corpus.txt analyze
//!
//! # Run all three modes
//! ./target/release/corpus_bench /path/to/corpus.txt all
//! ```
//!
//! ## Output
//!
//! The benchmark prints:
//! - **Elapsed time**: How long the operation took
//! - **Throughput**: GiB/second processed
//! - **Token count**: Number of tokens produced
//! - **Tokens/sec**: Token processing rate
//!
//! ## Tips for Accurate Results
//!
//! - Run with `--release` flag (this binary should be built in release mode)
//! - Use a large input file (100MB+) for stable measurements
//! - Consider using `taskset` to pin to a specific CPU core
//! - Disable turbo boost and CPU frequency scaling for consistent results

use std::env;
use std::fs;
use std::time::{Duration, Instant};

use nimbus_core::analyzer::normalizer::{apply_chain, default_chain};
use nimbus_core::analyzer::tokenizer::{Tokenizer, WhitespaceTokenizer};
use nimbus_core::FrequencyAnalyzer;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;

fn main() -> std::io::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: corpus_bench <path> [tokenize|normalize|analyze|all]");
        std::process::exit(1);
    }

    let path = &args[1];
    let mode = args.get(2).map(String::as_str).unwrap_or("all");

    println!("Loading file...");
    let bytes = fs::read(path)?;
    let input = std::str::from_utf8(&bytes).expect("input must be valid UTF-8");

    println!("File size: {}\n", fmt_bytes(input.len() as u64));

    if mode == "tokenize" || mode == "all" {
        bench_tokenize(input);
    }
    if mode == "normalize" || mode == "all" {
        bench_normalize(input);
    }
    if mode == "analyze" || mode == "all" {
        bench_analyze(input);
    }

    Ok(())
}

fn bench_tokenize(input: &str) {
    let tokenizer = WhitespaceTokenizer;

    println!("=== Tokenize ===");

    warmup(|| {
        std::hint::black_box(tokenizer.tokenize(input).len());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        tokens = tokenizer.tokenize(input).len() as u64;
        std::hint::black_box(tokens);
    });

    print_perf("Tokenize", input.len(), elapsed, tokens);
}

fn bench_normalize(input: &str) {
    let tokenizer = WhitespaceTokenizer;
    let chain = default_chain();
    let raw = tokenizer.tokenize(input);

    println!("=== Normalize ===");

    warmup(|| {
        let mut sink = 0usize;
        for token in &raw {
            sink += apply_chain(&chain, token).len();
        }
        std::hint::black_box(sink);
    });

    let elapsed = measure(|| {
        let mut sink = 0usize;
        for token in &raw {
            sink += apply_chain(&chain, token).len();
        }
        std::hint::black_box(sink);
    });

    print_perf("Normalize", input.len(), elapsed, raw.len() as u64);
}

fn bench_analyze(input: &str) {
    let lines: Vec<&str> = input.lines().collect();
    let mut analyzer = FrequencyAnalyzer::new();

    println!("=== Full analysis ===");

    warmup(|| {
        std::hint::black_box(analyzer.load(&lines).len());
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| {
        std::hint::black_box(analyzer.load(&lines).len());
        tokens = analyzer.stats().raw_tokens as u64;
    });

    print_perf("Analyze", input.len(), elapsed, tokens);
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

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64();
    let gib = input_bytes as f64 / (1024.0 * 1024.0 * 1024.0);

    println!("--------------------------------");
    println!("Mode        : {}", label);
    println!("Elapsed     : {:.3} s", secs);
    println!("Throughput  : {:.3} GiB/s", gib / secs);

    if tokens > 0 {
        println!("Tokens      : {}", fmt_count(tokens));
        println!("Tokens/sec  : {}", fmt_count((tokens as f64 / secs) as u64));
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
