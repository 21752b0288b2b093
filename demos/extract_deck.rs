use deckscene::{
    get_slide_metadata_with_options, CustomColors, ExtractOptions, ExtractorError, SlideElement,
};

use anyhow::Context;
use std::env;
use std::fs;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!(
            "Usage: cargo run --example extract_deck -- <DECK_URL> <THEME> [CUSTOM_COLORS_JSON]"
        );
        eprintln!("Set DECKSCENE_ASSET_DIR to control where chart snapshots are written.");
        return Ok(());
    }
    let url = &args[1];
    let theme = &args[2];

    let custom_colors: Option<CustomColors> = match args.get(3) {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading custom colors from '{path}'"))?;
            Some(serde_json::from_str(&raw)?)
        }
        None => None,
    };

    let mut options = ExtractOptions::default();
    if let Ok(dir) = env::var("DECKSCENE_ASSET_DIR") {
        options.asset_dir = PathBuf::from(dir);
    }

    println!("Extracting slide metadata from: {url}");
    match get_slide_metadata_with_options(url, theme, custom_colors.as_ref(), &options).await {
        Ok(slides) => {
            println!("\nSuccessfully extracted {} slide(s)!", slides.len());
            for slide in &slides {
                let graphs = slide
                    .elements
                    .iter()
                    .filter(|e| matches!(e, SlideElement::Graph(_)))
                    .count();
                println!(
                    "  slide {:>2}: {} element(s), {} chart snapshot(s), bg #{}",
                    slide.slide_index,
                    slide.elements.len(),
                    graphs,
                    slide.background_color
                );
            }

            let output = "deck_metadata.json";
            let json = serde_json::to_string_pretty(&slides)?;
            fs::write(output, json).with_context(|| format!("writing '{output}'"))?;
            println!("\nSlide metadata written to {output}");
        }
        Err(e) => {
            eprintln!("\nError extracting slide metadata:");
            match e {
                ExtractorError::NavigationTimeout { .. } => {
                    eprintln!("  {e}");
                    eprintln!("  (The deck server may be slow or unreachable; retry may help.)");
                }
                ExtractorError::ContentNotReady { .. } => {
                    eprintln!("  {e}");
                    eprintln!("  (Check that the URL renders the full deck with slide markers.)");
                }
                other => eprintln!("  {other}"),
            }
        }
    }

    Ok(())
}
