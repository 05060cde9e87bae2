use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "docmirror")]
#[command(about = "Mirror a documentation tree, converting .rst files to .pug")]
struct Cli {
    /// Config file with the source and destination roots
    #[arg(short, long, default_value = docmirror::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match docmirror::Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = docmirror::run(&config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!(
        "Mirrored {} into {}",
        config.source_root.display(),
        config.dest_root.display()
    );
}
