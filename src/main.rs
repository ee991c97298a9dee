// ABOUTME: Main entry point for the markdeck program.
// ABOUTME: Provides the CLI interface and runs a full deck build.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the markdown presentation file
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to the page template file
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Path to the output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory of static resources copied into the output
    #[arg(long)]
    resources: Option<PathBuf>,

    /// Directory of vendor assets copied into the output
    #[arg(long)]
    vendor: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = markdeck::Config::from_env();
    if let Some(input) = cli.input {
        config.source = input;
    }
    if let Some(template) = cli.template {
        config.template = template;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if let Some(resources) = cli.resources {
        config.resources_dir = resources;
    }
    if let Some(vendor) = cli.vendor {
        config.vendor_dir = Some(vendor);
    }

    match run(&config) {
        Ok(()) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run(config: &markdeck::Config) -> markdeck::Result<()> {
    let mut presentation = markdeck::load_presentation(config)?;
    presentation.assemble()?;

    let written = markdeck::build(&presentation, config)?;

    for (index, slide) in presentation.slides.iter().enumerate() {
        println!("slide: {}", index);
        println!("  url: {}", slide.url);
        println!("   prev: {}", slide.navigation.prev.as_deref().unwrap_or("-"));
        println!("   next: {}", slide.navigation.next.as_deref().unwrap_or("-"));
    }
    println!("Built {} slides into {:?}", written.len(), config.output_dir);

    Ok(())
}
