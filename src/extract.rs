use anyhow::{Context, Result};
use regex::Regex;

/// Compiled matcher for one icon component tag.
///
/// Matches `<x-TAG ... name="VALUE" ...>` (or single-quoted) anywhere in a
/// template, including across line breaks. Only plain quoted literals are
/// matched: `name` must be preceded by whitespace, so dynamic bindings like
/// `:name="$var"` and unrelated attributes like `data-name=` never count.
/// This is a deliberately narrow pattern, not a markup parser; names built
/// at runtime are invisible to it.
#[derive(Debug)]
pub struct IconPattern {
    regex: Regex,
}

impl IconPattern {
    /// Build the extraction pattern for a component tag.
    ///
    /// The tag is escaped before being embedded, so configured names can
    /// never change the shape of the pattern itself.
    pub fn new(tag: &str) -> Result<Self> {
        let pattern = format!(
            r#"<x-{}\s(?:[^>]*?\s)?name\s*=\s*(?:"([^"]*)"|'([^']*)')"#,
            regex::escape(tag)
        );
        let regex = Regex::new(&pattern)
            .with_context(|| format!("Failed to build extraction pattern for tag \"{}\"", tag))?;

        Ok(Self { regex })
    }

    /// Extract every statically-declared icon name, in file order.
    ///
    /// Duplicates are kept; deduplication happens once, globally, after all
    /// files have been merged.
    pub fn extract(&self, contents: &str) -> Vec<String> {
        self.regex
            .captures_iter(contents)
            .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Convert a component identifier to snake_case (`AppIcon` -> `app_icon`).
pub fn snake_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());

    for ch in identifier.trim().chars() {
        if matches!(ch, ' ' | '-' | '_') {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
        } else if ch.is_uppercase() {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            out.extend(ch.to_lowercase());
        } else {
            out.push(ch);
        }
    }

    out.trim_end_matches('_').to_string()
}
