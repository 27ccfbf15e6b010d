//! Swatchgrid - Library for turning palette files into SVG swatch sheets
//!
//! This library provides functionality to:
//! - Parse plain-text palette files into ordered, validated color groups
//! - Compute a deterministic two-band (light/dark) grid layout
//! - Render the layout as a single SVG document and save it
//! - Export the palette as design-tool tokens JSON

pub mod cli;
pub mod color;
pub mod export;
pub mod ident;
pub mod layout;
pub mod models;
pub mod output;
pub mod parser;
pub mod renderer;
