use std::{collections::BTreeSet, fs, path::PathBuf};

use anyhow::Result;
use colored::Colorize;
use rayon::prelude::*;

use super::super::args::PreloadCommand;
use super::super::exit_status::ExitStatus;
use super::super::report;
use crate::config;
use crate::extract::{IconPattern, snake_case};
use crate::render::{Renderer, SvgRenderer};
use crate::scan::collect_template_files;

/// The `preload` command: discover every statically referenced icon under
/// the project root and warm the cache for each distinct name, in sorted
/// order.
pub fn preload(cmd: PreloadCommand) -> Result<ExitStatus> {
    let args = &cmd.common;

    if args.root.exists() && !args.root.is_dir() {
        anyhow::bail!("Project root is not a directory: {}", args.root.display());
    }

    let mut config = config::load_or_default(&args.root)?;
    if let Some(name) = &args.name {
        config.name = name.clone();
    }
    config.validate()?;

    let tag = snake_case(&config.name);
    let pattern = IconPattern::new(&tag)?;
    let templates = config.template_pattern()?;

    report::print_scan_start();

    let files = collect_template_files(&args.root, &templates, &config.exclude_set(), args.verbose);
    let icons = discover_icons(&files, &pattern, args.verbose);

    let renderer = SvgRenderer::new(
        args.root.join(&config.icon_dir),
        args.root.join(&config.cache_dir),
    );
    preload_icons(&icons, &renderer)?;

    report::print_summary(icons.len(), files.len());

    Ok(ExitStatus::Success)
}

/// Read and extract all files in parallel, then merge into one sorted,
/// deduplicated set. Files that cannot be read are skipped.
fn discover_icons(files: &[PathBuf], pattern: &IconPattern, verbose: bool) -> BTreeSet<String> {
    // Parallel file reading and extraction (no shared state across files)
    let per_file: Vec<Vec<String>> = files
        .par_iter()
        .map(|path| match fs::read_to_string(path) {
            Ok(contents) => pattern.extract(&contents),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Cannot read {}: {}",
                        "warning:".bold().yellow(),
                        path.display(),
                        e
                    );
                }
                Vec::new()
            }
        })
        .collect();

    // Sequential merge, so the result is identical to a sequential run
    per_file.into_iter().flatten().collect()
}

/// Render each icon exactly once, in sorted order. Renderer failures are
/// not caught here; the first one aborts the run.
fn preload_icons<R: Renderer>(icons: &BTreeSet<String>, renderer: &R) -> Result<()> {
    for icon in icons {
        report::print_preloading(icon);
        renderer.render(icon)?;
    }

    Ok(())
}
