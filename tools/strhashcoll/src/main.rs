// strhashcoll hashes every line of the input and reports keys that ended up with the same hash.
// useful for checking a set of identifiers before relying on their hashes as table keys.

use std::fs::File;
use std::hash::BuildHasherDefault;
use std::io::{self, BufRead, BufReader};

use anyhow::Result;
use hashbrown::HashMap;
use nohash::NoHashHasher;
use strhash::hash_str;

// NOTE: keys are hashes already, there's no point in hashing them again.
type SeenMap = HashMap<u64, String, BuildHasherDefault<NoHashHasher<u64>>>;

#[derive(Debug, Default, PartialEq, Eq)]
struct Report {
    lines: usize,
    unique: usize,
    collisions: Vec<(u64, String, String)>,
}

fn scan<R: BufRead>(rdr: R) -> Result<Report> {
    let mut seen = SeenMap::default();
    let mut report = Report::default();

    for line in rdr.lines() {
        let line = line?;
        report.lines += 1;

        let hash = hash_str(&line);
        match seen.get(&hash) {
            Some(prev) if *prev == line => {}
            Some(prev) => report.collisions.push((hash, prev.clone(), line)),
            None => {
                seen.insert(hash, line);
                report.unique += 1;
            }
        }
    }

    Ok(report)
}

fn main() -> Result<()> {
    let mut quiet = false;
    let mut filepath = None;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-q" => quiet = true,
            _ if filepath.is_none() => filepath = Some(arg),
            _ => {
                eprintln!("usage: strhashcoll [-q] [FILE]");
                std::process::exit(42);
            }
        }
    }

    let report = match filepath.as_deref() {
        None | Some("-") => scan(io::stdin().lock())?,
        Some(path) => scan(BufReader::new(File::open(path)?))?,
    };

    if !quiet {
        for (hash, a, b) in report.collisions.iter() {
            println!("{hash:016x}  {a:?}  {b:?}");
        }
    }
    println!(
        "lines {}, unique {}, collisions {}",
        report.lines,
        report.unique,
        report.collisions.len()
    );

    Ok(())
}
