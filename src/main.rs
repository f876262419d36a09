use folio::{FolioConfig, FolioError, FormatterBuilder};
use std::env;
use std::path::Path;

/// Paginates a JSON document and prints the text of every page.
fn main() -> Result<(), FolioError> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Lays out a JSON formatting-object document into pages.");
        eprintln!();
        eprintln!("Usage: {} <path/to/document.json> [path/to/config.json]", args[0]);
        std::process::exit(1);
    }

    let document_path = Path::new(&args[1]);
    let mut config = match args.get(2) {
        Some(config_path) => {
            println!("Loading configuration from {}", config_path);
            FolioConfig::from_file(config_path)?
        }
        None => FolioConfig::default(),
    };
    // Font paths in the document are relative to the document by default.
    if config.resource_root.is_none() {
        config.resource_root = document_path.parent().map(Path::to_path_buf);
    }
    let formatter = FormatterBuilder::new().with_config(config).build()?;

    println!("Formatting {}", document_path.display());
    let pages = formatter.format_file(document_path)?;

    for page in &pages {
        if page.is_blank {
            println!("--- page {} (blank) ---", page.number);
            continue;
        }
        println!("--- page {} ---", page.number);
        for (index, text) in page.area_texts().iter().enumerate() {
            println!("[area {}] {}", index, text);
        }
    }
    println!("{} pages", pages.len());
    Ok(())
}
