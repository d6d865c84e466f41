//! # cartel
//!
//! Cartel - Vue component tag and attribute resolution.
//!
//! ## Name Origin
//!
//! A **cartel** (/kaʁ.tɛl/) is the small label hung beside a work in a gallery,
//! naming it and telling where it comes from. This command line does the same
//! for the tags of a template: it names the component behind each tag, where it
//! was declared, and which attributes it takes.

mod commands;
mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cartel")]
#[command(about = "Vue component tag and attribute resolution", long_about = None)]
#[command(version, disable_version_flag = true)]
struct Cli {
    /// Print version
    #[arg(short = 'v', short_alias = 'V', long, action = clap::ArgAction::Version)]
    version: (),

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a tag to the components it refers to
    Tag(commands::tag::TagArgs),

    /// Describe attributes written on a tag
    Attr(commands::attr::AttrArgs),

    /// List tag-name completions for a template
    Complete(commands::complete::CompleteArgs),

    /// Print the JSON Schema of cartel.config.json
    Schema,
}

fn init_logging(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_max_level(level)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.command {
        Commands::Tag(args) => commands::tag::run(args),
        Commands::Attr(args) => commands::attr::run(args),
        Commands::Complete(args) => commands::complete::run(args),
        Commands::Schema => println!("{}", config::CARTEL_CONFIG_SCHEMA),
    }
}
