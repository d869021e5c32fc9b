use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::Parser;

use starimage::core::{
    extract_with, print_error_message, print_info_message, ExtractionResult, StarImageError,
};
use starimage::env::{generate_env_docs, EnvConfig, EnvVar, NoColor};
use starimage::logging::init_logging;
use starimage::network::session::Session;

const EXIT_NOT_FOUND: i32 = 1;
const EXIT_USAGE: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "starimage",
    version,
    about = "Finds the largest image (in bytes) referenced by a web page",
    after_help = generate_env_docs()
)]
struct Cli {
    /// URL, HTML document or HTML fragment ("-" reads markup from stdin)
    #[arg(required_unless_present = "file")]
    target: Option<String>,

    /// Read markup from a file
    #[arg(short, long, value_name = "PATH", conflicts_with = "target")]
    file: Option<String>,

    /// Base URL used to resolve relative image paths
    #[arg(short, long, value_name = "URL")]
    base_url: Option<String>,

    /// Per-request timeout in seconds (0 keeps the HTTP client default)
    #[arg(short, long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Custom User-Agent string
    #[arg(short, long, value_name = "UA")]
    user_agent: Option<String>,

    /// Accept invalid TLS certificates
    #[arg(short = 'k', long)]
    insecure: bool,

    /// Print the result as JSON
    #[arg(short, long)]
    json: bool,

    /// Suppress diagnostics other than errors
    #[arg(short, long)]
    silent: bool,
}

fn read_input(cli: &Cli) -> Result<String, StarImageError> {
    if let Some(path) = &cli.file {
        return Ok(fs::read_to_string(path)?);
    }

    match cli.target.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
        Some(target) => Ok(target.to_string()),
        None => Ok(String::new()),
    }
}

fn render(result: &ExtractionResult, json: bool) -> Result<String, serde_json::Error> {
    if json {
        return serde_json::to_string(result);
    }

    let mut lines = vec![
        format!("url: {}", result.url),
        format!("filename: {}", result.filename),
        format!("size: {}", result.size),
    ];
    if let Some(width) = result.width {
        lines.push(format!("width: {}", width));
    }
    if let Some(height) = result.height {
        lines.push(format!("height: {}", height));
    }
    Ok(lines.join("\n"))
}

fn run(cli: &Cli) -> Result<Option<ExtractionResult>, StarImageError> {
    let env_config = EnvConfig::from_env()?;
    init_logging(&env_config, cli.silent);

    let mut options = env_config.to_options();
    options.base_url = cli.base_url.clone();
    options.insecure |= cli.insecure;
    if let Some(timeout) = cli.timeout {
        options.timeout = timeout;
    }
    if let Some(user_agent) = &cli.user_agent {
        options.user_agent = Some(user_agent.clone());
    }

    let input = read_input(cli)?;
    let base_url = options.base_url.clone();
    let session = Session::new(options)?;

    Ok(extract_with(&session, Some(&input), base_url.as_deref()))
}

fn main() {
    let cli = Cli::parse();
    let no_color = NoColor::get_or_default(false);

    match run(&cli) {
        Ok(Some(result)) => match render(&result, cli.json) {
            Ok(output) => {
                print_info_message(&output);
                let _ = io::stdout().flush();
            }
            Err(e) => {
                print_error_message(&e.to_string(), no_color);
                process::exit(EXIT_USAGE);
            }
        },
        Ok(None) => {
            if !cli.silent {
                print_error_message("No image found", no_color);
            }
            process::exit(EXIT_NOT_FOUND);
        }
        Err(e) => {
            print_error_message(&e.to_string(), no_color);
            process::exit(EXIT_USAGE);
        }
    }
}
