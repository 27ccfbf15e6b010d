//! Command-line interface implementation

use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::export::{tokens_file_name, tokens_output_path, write_tokens};
use crate::layout::{layout, LayoutOptions};
use crate::models::Palette;
use crate::output::{generate_output_path, save_svg};
use crate::parser::parse_str;
use crate::renderer::render;

/// Exit codes
const EXIT_SUCCESS: u8 = 0;
const EXIT_ERROR: u8 = 1;
const EXIT_INVALID_ARGS: u8 = 2;

/// Swatchgrid - render palette files as light/dark SVG swatch sheets
#[derive(Parser)]
#[command(name = "swatchgrid")]
#[command(about = "Swatchgrid - render palette files as light/dark SVG swatch sheets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a palette file to an SVG swatch sheet
    Generate {
        /// Input text file, one "Label: #RRGGBB" per line
        input: PathBuf,

        /// Output file or directory.
        /// If omitted: {timestamp}_{input}.svg next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum swatches per row before a group wraps
        #[arg(long, default_value = "7", value_parser = clap::value_parser!(u8).range(1..=32))]
        per_row: u8,

        /// Also write a {input}_tokens.json next to the sheet
        #[arg(long)]
        tokens: bool,

        /// Strict mode: treat skipped lines as errors
        #[arg(long)]
        strict: bool,
    },

    /// Write only the group -> label -> hex tokens JSON
    Tokens {
        /// Input text file, one "Label: #RRGGBB" per line
        input: PathBuf,

        /// Output file or directory.
        /// If omitted: {input}_tokens.json next to the input
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Strict mode: treat skipped lines as errors
        #[arg(long)]
        strict: bool,
    },
}

/// Run the CLI application
pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            input,
            output,
            per_row,
            tokens,
            strict,
        } => run_generate(&input, output.as_deref(), per_row, tokens, strict),
        Commands::Tokens {
            input,
            output,
            strict,
        } => run_tokens(&input, output.as_deref(), strict),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Execute the generate command
fn run_generate(
    input: &Path,
    output: Option<&Path>,
    per_row: u8,
    tokens: bool,
    strict: bool,
) -> ExitCode {
    let palette = match load_palette(input, strict) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let options = LayoutOptions {
        per_row: per_row as usize,
        ..LayoutOptions::default()
    };
    let laid_out = layout(&palette, &options);
    debug!(
        cells = laid_out.cells.len(),
        width = laid_out.canvas.width,
        height = laid_out.canvas.height,
        "layout computed"
    );

    let document = render(&laid_out, &options);
    let output_path = generate_output_path(input, output);
    if let Err(e) = save_svg(&document, &output_path) {
        eprintln!("Error: Failed to save '{}': {}", output_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Saved: {}", output_path.display());

    if tokens {
        let tokens_path = match output_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                parent.join(tokens_file_name(input))
            }
            _ => PathBuf::from(tokens_file_name(input)),
        };
        if let Err(e) = write_tokens(&palette, &tokens_path) {
            eprintln!("Error: Failed to save '{}': {}", tokens_path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        println!("Tokens: {}", tokens_path.display());
    }

    ExitCode::from(EXIT_SUCCESS)
}

/// Execute the tokens command
fn run_tokens(input: &Path, output: Option<&Path>, strict: bool) -> ExitCode {
    let palette = match load_palette(input, strict) {
        Ok(p) => p,
        Err(code) => return code,
    };

    let tokens_path = tokens_output_path(input, output);
    if let Err(e) = write_tokens(&palette, &tokens_path) {
        eprintln!("Error: Failed to save '{}': {}", tokens_path.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }
    println!("Tokens: {}", tokens_path.display());

    ExitCode::from(EXIT_SUCCESS)
}

/// Read and parse the input file, applying strict/lenient warning policy.
fn load_palette(input: &Path, strict: bool) -> Result<Palette, ExitCode> {
    let text = match fs::read_to_string(input) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: Cannot open input file '{}': {}", input.display(), e);
            return Err(ExitCode::from(EXIT_INVALID_ARGS));
        }
    };

    let result = parse_str(&text);

    if strict && !result.warnings.is_empty() {
        for warning in &result.warnings {
            eprintln!("Error: line {}: {}", warning.line, warning.message);
        }
        return Err(ExitCode::from(EXIT_ERROR));
    }
    for warning in &result.warnings {
        eprintln!("Warning: line {}: {}", warning.line, warning.message);
    }

    if result.palette.is_empty() {
        eprintln!("Error: No valid colors found in '{}'", input.display());
        return Err(ExitCode::from(EXIT_ERROR));
    }

    info!(
        colors = result.palette.len(),
        groups = result.palette.group_count(),
        "palette loaded"
    );
    Ok(result.palette)
}
