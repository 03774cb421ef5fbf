//! Phrase Scan Tool
//!
//! Loads a phrase vocabulary (one phrase per line) and a text file, prints
//! every phrase found in the text, then reports throughput for the scan.
//!
//! ## Usage
//!
//! ```bash
//! # Classic walk
//! ./target/release/phrase_scan phrases.txt document.txt
//!
//! # Flush a trailing match and retry breaking words
//! ./target/release/phrase_scan phrases.txt document.txt --eager
//! ```
//!
//! Logging goes to stderr and is filtered with `PHRASE_SCAN_LOG`, using
//! `tracing-subscriber` directives (`debug`, `phrase_core=trace`, ...).
//! At `debug` it shows the trie summary and per-scan counts.
//!
//! ## Example Output
//!
//! ```text
//! 12	quick fox
//! 57	lazy dog
//! --------------------------------
//! Vocabulary  : 2 phrases, 4 nodes, 2 leaves, depth 2
//! Text        : 1.20 KiB
//! Tokens      : 231
//! Matches     : 2
//! Elapsed     : 0.000 s
//! Throughput  : 0.215 GiB/s
//! Tokens/sec  : 43_108_412
//! --------------------------------
//! ```

use std::env;
use std::fs;
use std::io;
use std::time::{Duration, Instant};

use phrase_core::analyzer::WordTokenizer;
use phrase_core::{PhraseScanner, PhraseTrie, ScanConfig};
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: u32 = 5;

/// Averaged result of repeated scans over the same text.
struct ScanTiming {
    elapsed: Duration,
    tokens: u64,
    matches: usize,
}

fn main() -> io::Result<()> {
    init_logging();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: phrase_scan <phrases> <text> [--eager]");
        std::process::exit(1);
    }

    let config = match args.get(3).map(String::as_str) {
        Some("--eager") => ScanConfig::eager(),
        Some(other) => {
            eprintln!("Unknown option: {other}");
            std::process::exit(1);
        }
        None => ScanConfig::compatible(),
    };

    let vocabulary = read_utf8(&args[1])?;
    let text = read_utf8(&args[2])?;

    let trie = PhraseTrie::from_lines(&vocabulary);
    let scanner = PhraseScanner::with_config(&trie, config);

    for m in scanner.scan_matches(&text) {
        println!("{}\t{}", m.start, m.phrase);
    }

    let timing = time_scans(&scanner, &text);
    report(&trie, text.len(), &timing);

    Ok(())
}

fn init_logging() {
    let filter =
        EnvFilter::try_from_env("PHRASE_SCAN_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_utf8(path: &str) -> io::Result<String> {
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{path}: input must be valid UTF-8 ({e})"),
        )
    })
}

fn time_scans(scanner: &PhraseScanner<'_>, text: &str) -> ScanTiming {
    let mut tokens = 0u64;
    WordTokenizer::new().tokenize(text, |_, _| tokens += 1);

    for _ in 0..WARMUP_RUNS {
        std::hint::black_box(scanner.scan_matches(text));
    }

    let mut total = Duration::ZERO;
    let mut matches = 0usize;
    for _ in 0..MEASURE_RUNS {
        let start = Instant::now();
        let found = std::hint::black_box(scanner.scan_matches(text));
        total += start.elapsed();
        matches = found.len();
    }

    ScanTiming {
        elapsed: total / MEASURE_RUNS,
        tokens,
        matches,
    }
}

fn report(trie: &PhraseTrie, text_bytes: usize, timing: &ScanTiming) {
    let secs = timing.elapsed.as_secs_f64();

    println!("--------------------------------");
    println!("Vocabulary  : {}", trie.stats());
    println!("Text        : {}", fmt_size(text_bytes));
    println!("Tokens      : {}", timing.tokens);
    println!("Matches     : {}", timing.matches);
    println!("Elapsed     : {:.3} s", secs);
    if secs > 0.0 {
        let gib = text_bytes as f64 / (1u64 << 30) as f64;
        println!("Throughput  : {:.3} GiB/s", gib / secs);
        println!("Tokens/sec  : {}", fmt_count((timing.tokens as f64 / secs) as u64));
    }
    println!("--------------------------------");
}

fn fmt_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    let mut value = bytes as f64;
    let mut unit = None;
    for name in UNITS {
        if value < 1024.0 {
            break;
        }
        value /= 1024.0;
        unit = Some(name);
    }

    match unit {
        Some(name) => format!("{value:.2} {name}"),
        None => format!("{bytes} B"),
    }
}

fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('_');
        }
        out.push(ch);
    }

    out
}
