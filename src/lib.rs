//! msa-starter materializes a new microservice project from a template tree.
//! It walks the template files, skips excluded paths, moves Java sources under
//! the chosen package, renders text templates against the collected build
//! information and copies binary files unchanged.

/// Text/binary classification of template files
pub mod classify;

/// Command-line interface module
pub mod cli;

/// Build information and answers files
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling
pub mod error;

/// Post-generation steps
pub mod hooks;

/// Skip rules based on substring tokens
pub mod ignore;

/// Logger setup
pub mod logger;

/// Core materialization orchestration
/// Combines all components to generate the final output
pub mod processor;

/// Interactive collection of build information
pub mod prompt;

/// Destination path computation
pub mod remap;

/// Template rendering
pub mod renderer;

/// Template variant selection
pub mod template;
