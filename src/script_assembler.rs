//! Script assembly.
//!
//! Merges directive fragments into either a fully managed user template
//! (placeholder substitution) or the fixed default layout.

use crate::script_template::{ScriptTemplate, MOVIE_FILENAME_TOKEN, MOVIE_TOKEN, SUB_TOKEN};

/// Terminal statement returning the assembled clip.
pub const CLIP_RETURN: &str = "clip";

/// Comment marker substituted for the subtitle placeholder when no
/// subtitle directive exists, keeping the template line inert.
pub const COMMENT_MARKER: &str = "#";

/// Directive fragments feeding one assembly.
///
/// Empty strings mean the owning toggle was off; `subtitle_line` is
/// `None` when any subtitle-enablement condition failed.
#[derive(Debug, Clone, Default)]
pub struct ScriptFragments {
    /// Media path after platform shortening
    pub media_path: String,

    /// Complete source-loading line
    pub source_line: String,

    /// Multithreading prologue for the top of the script
    pub mt_prologue: String,

    /// Threading-mode switch for just after the source line
    pub mt_post_source: String,

    /// Frame-interpolation directive
    pub interframe_line: String,

    /// Subtitle overlay directive
    pub subtitle_line: Option<String>,
}

/// Assemble the final line sequence for one script.
pub fn assemble(template: &ScriptTemplate, fragments: &ScriptFragments) -> Vec<String> {
    if template.fully_managed {
        assemble_managed(template, fragments)
    } else {
        assemble_default(fragments)
    }
}

/// Substitute fragments into a fully managed template, line by line.
///
/// Lines keep template order and nothing is inserted; placing the
/// threading prologue at the top is the template author's job.
fn assemble_managed(template: &ScriptTemplate, fragments: &ScriptFragments) -> Vec<String> {
    let sub_replacement = fragments.subtitle_line.as_deref().unwrap_or(COMMENT_MARKER);
    template
        .lines
        .iter()
        .map(|line| {
            let mut line = line.replace(MOVIE_FILENAME_TOKEN, &fragments.media_path);
            // An unset source line keeps the placeholder literal rather
            // than collapsing it to an empty statement.
            if !fragments.source_line.is_empty() {
                line = line.replace(MOVIE_TOKEN, &fragments.source_line);
            }
            line.replace(SUB_TOKEN, sub_replacement)
        })
        .collect()
}

/// Emit the fixed default layout.
///
/// Execution-mode directives come before the source line, directives
/// operating on the clip come after it, and the clip return closes the
/// script.
fn assemble_default(fragments: &ScriptFragments) -> Vec<String> {
    let mut lines = Vec::new();

    if !fragments.mt_prologue.is_empty() {
        lines.extend(fragments.mt_prologue.lines().map(str::to_string));
    }

    lines.push(fragments.source_line.clone());

    if !fragments.mt_post_source.is_empty() {
        lines.push(fragments.mt_post_source.clone());
    }
    if !fragments.interframe_line.is_empty() {
        lines.push(fragments.interframe_line.clone());
    }
    if let Some(subtitle) = &fragments.subtitle_line {
        lines.push(subtitle.clone());
    }

    lines.push(CLIP_RETURN.to_string());
    lines
}
