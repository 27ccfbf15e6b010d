//! Swatchgrid - Command-line tool for rendering palette files as SVG swatch sheets

use std::process::ExitCode;

use swatchgrid::cli;

fn main() -> ExitCode {
    cli::run()
}
