use deckscene::{deck_outline, SlideMetadata};

use anyhow::Context;
use std::{env, fs};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example deck_outline -- <DECK_METADATA_JSON>");
        eprintln!("Pass a file produced by the extract_deck demo.");
        return Ok(());
    }

    let raw = fs::read_to_string(&args[1])
        .with_context(|| format!("reading slide metadata from '{}'", args[1]))?;
    let slides: Vec<SlideMetadata> = serde_json::from_str(&raw)?;

    print!("{}", deck_outline(&slides));
    Ok(())
}
