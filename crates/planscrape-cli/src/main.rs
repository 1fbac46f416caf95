mod cli;
mod extract_cmd;
mod links_cmd;

use clap::Parser;
use cli::Cli;

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        cli::Commands::Extract {
            ref file,
            format,
            ref source_url,
        } => extract_cmd::run(file, format, source_url),
        cli::Commands::Links { ref url } => links_cmd::run(url.as_deref()),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
