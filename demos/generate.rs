//! Generate a bingo sheet with specified size, owner, and seed.
//!
//! Usage: cargo run --release --example generate -- <size> <owner> [seed]
//!
//! Example:
//!   cargo run --release --example generate -- 7 10 42

use bingo_sheet::{SheetParams, build_sheet};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();

    let (Some(size), Some(owner)) = (
        args.get(1).and_then(|s| s.parse::<usize>().ok()),
        args.get(2).and_then(|s| s.parse::<u32>().ok()),
    ) else {
        eprintln!("Usage: {} <size> <owner> [seed]", args[0]);
        std::process::exit(1);
    };

    let seed: u64 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(0);

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    match build_sheet(owner, size, &mut rng, &SheetParams::default()) {
        Ok(sheet) => {
            println!("{sheet}");
            println!();
            println!("lines missing a category: {}", sheet.lacking_lines());
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
