//! CLI logic for the sbp blueprint generator.
//!
//! This module contains the core CLI logic for the sbp tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use sbp::{BlueprintBuilder, SbpError};

/// Run the sbp CLI application
///
/// This function processes the input file through the parse → layout →
/// render pipeline and writes the resulting SVG to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `SbpError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Layout errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), SbpError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing blueprint"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Read input file
    let source = fs::read_to_string(&args.input)?;

    // Process the blueprint through the builder API
    let builder = BlueprintBuilder::new(app_config);
    let blueprint = builder.parse(&source)?;
    let scene = builder.layout(&blueprint)?;
    let rendered = builder.render_svg(&scene)?;

    // Write output file
    fs::write(&args.output, rendered)?;

    info!(output_file = args.output; "SVG exported successfully");

    Ok(())
}
