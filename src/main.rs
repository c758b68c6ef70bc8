use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{error, info};

use clashgen::interfaces::subconverter::{convert, write_documents};
use clashgen::parser::split_links;
use clashgen::{ClashTarget, Settings};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Target {
    General,
    Meta,
    Both,
}

impl Target {
    fn clash_targets(self) -> Vec<ClashTarget> {
        match self {
            Target::General => vec![ClashTarget::General],
            Target::Meta => vec![ClashTarget::Meta],
            Target::Both => vec![ClashTarget::General, ClashTarget::Meta],
        }
    }
}

/// Convert proxy share links into Clash configuration files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File with one share link per line, or a base64 subscription body ("-" reads stdin)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path to the settings file (.toml, .yml or .yaml)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Which documents to generate
    #[arg(short, long, value_enum, default_value_t = Target::Both)]
    target: Target,

    /// Output file for the rule-set based config
    #[arg(long, value_name = "FILE")]
    general_output: Option<String>,

    /// Output file for the Clash.Meta config
    #[arg(long, value_name = "FILE")]
    meta_output: Option<String>,
}

fn read_input(input: &Path) -> Result<String> {
    if input.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read links from stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read links from '{}'", input.display()))
}

fn run(args: Args) -> Result<usize> {
    let mut settings = match &args.config {
        Some(path) => Settings::load_from_file(path)?,
        None => Settings::default(),
    };
    if let Some(path) = args.general_output {
        settings.general_output = path;
    }
    if let Some(path) = args.meta_output {
        settings.meta_output = path;
    }

    let links = split_links(&read_input(&args.input)?);
    info!("Loaded {} links", links.len());

    let conversion = convert(&links, &args.target.clash_targets(), &settings);
    Ok(write_documents(&conversion, &settings))
}

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let args = Args::parse();

    match run(args) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(failed) => {
            error!("{} config file(s) could not be saved", failed);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
