//! Inspect a deck's frequency cache
//!
//! Usage: cargo run --release --bin cache_stats -- <frequency_cache.json> [--top N]

use anyhow::{bail, Result};
use freqdeck::{FrequencyCache, Lookup};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <frequency_cache.json> [--top N]", args[0]);
        eprintln!("  --top N    : Show the N most frequent keys (default: 20)");
        std::process::exit(2);
    }

    let path = &args[1];
    let top_n: usize = parse_arg(&args, "--top").unwrap_or(20);

    if !std::path::Path::new(path).exists() {
        bail!("No cache file at {}", path);
    }
    let cache = FrequencyCache::load(path.as_str())?;

    let mut found: Vec<(&str, &freqdeck::FrequencyRecord)> = Vec::new();
    let mut absent: Vec<&str> = Vec::new();
    for (key, lookup) in cache.iter() {
        match lookup {
            Lookup::Found(record) => found.push((key, record)),
            Lookup::NotFound => absent.push(key),
        }
    }

    println!("=== {} ===", path);
    println!("Keys:    {}", cache.len());
    println!("Found:   {}", found.len());
    println!("Absent:  {}", absent.len());
    if cache.unreadable_len() > 0 {
        println!("Unreadable: {}", cache.unreadable_len());
    }

    // Stable sort keeps key order among equal ranks
    found.sort_by_key(|(_, record)| record.rank());

    if !found.is_empty() {
        println!("\nMost frequent:");
        for (i, (key, record)) in found.iter().take(top_n).enumerate() {
            println!(
                "  {:3}. {} (rank={}, hits={}, total={}, frequency={})",
                i + 1,
                key,
                record.rank(),
                record.hits,
                record.total,
                record.frequency
            );
        }
    }

    if !absent.is_empty() {
        println!("\nAbsent:");
        for key in &absent {
            println!("  {}", key);
        }
    }

    Ok(())
}

fn parse_arg(args: &[String], flag: &str) -> Option<usize> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}
