use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use citelink_core::render::{html, plain};
use citelink_core::{
    append_reference_list, document_from_djot, link_references, load_references, LinkerError,
};

#[derive(Parser)]
#[command(name = "citelink")]
#[command(about = "Rewrite bracketed citation markers into hyperlinks")]
struct Cli {
    /// Article in djot markup
    article: PathBuf,

    /// Reference table (YAML or JSON, citation number to URL)
    #[arg(long)]
    refs: PathBuf,

    #[arg(long, default_value = "html")]
    format: OutputFormat,

    /// Write here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Skip the appended References section
    #[arg(long)]
    no_reflist: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Html,
    Plain,
}

fn run(cli: &Cli) -> Result<(), LinkerError> {
    let refs = load_references(&cli.refs)?;
    let article = fs::read_to_string(&cli.article)?;

    let mut doc = document_from_djot(&article);
    link_references(&mut doc, &refs);
    if !cli.no_reflist {
        append_reference_list(&mut doc, &refs);
    }

    let rendered = match cli.format {
        OutputFormat::Html => html::document_to_html(&doc),
        OutputFormat::Plain => plain::document_to_plain(&doc),
    };

    match &cli.output {
        Some(path) => fs::write(path, rendered)?,
        None => println!("{}", rendered),
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
