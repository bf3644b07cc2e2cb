//! Glyph - template icon preloader
//!
//! Glyph is a CLI tool and library for warming the icon cache of template
//! projects. It scans a project's template files for statically-declared
//! `<x-icon name="...">` references, deduplicates and sorts the discovered
//! names, and renders each one into the on-disk cache so runtime lookups
//! never pay the resolution cost.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands and reporting)
//! - `config`: Configuration file loading and parsing
//! - `scan`: Recursive template file discovery
//! - `extract`: Static icon-name extraction from template markup
//! - `render`: Icon renderer seam and the default SVG cache-warmer

pub mod cli;
pub mod config;
pub mod extract;
pub mod render;
pub mod scan;
