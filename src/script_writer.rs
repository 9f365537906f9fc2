//! Script artifact writing.
//!
//! Serializes an assembled line sequence into a script file named after
//! the media it belongs to, inside the configured temp directory.

use std::fs;
use std::io;
use std::mem;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Marker prefix identifying artifacts produced by this generator.
pub const SCRIPT_FILE_PREFIX: &str = "avsprep-";

/// Extension the script interpreter associates with its input files.
pub const SCRIPT_FILE_EXTENSION: &str = ".avs";

/// Errors surfaced by script generation.
#[derive(Debug, Error)]
pub enum ScriptError {
    /// The media path has no file-name component to derive the artifact
    /// name from.
    #[error("media path has no file name: {0:?}")]
    NoFileName(String),

    /// The artifact could not be written.
    #[error("failed to write script to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A generated script file, removed from disk when this guard drops.
///
/// Callers handing the script to a longer-lived process take the path
/// with [`ScriptArtifact::into_path`], which disarms the cleanup.
#[derive(Debug)]
pub struct ScriptArtifact {
    path: PathBuf,
    persisted: bool,
}

impl ScriptArtifact {
    /// Path of the script on disk.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Take ownership of the file, disabling removal on drop.
    pub fn into_path(mut self) -> PathBuf {
        self.persisted = true;
        mem::take(&mut self.path)
    }
}

impl Drop for ScriptArtifact {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Write the assembled script in a single pass.
///
/// The artifact is named after the media file, so concurrent requests
/// for the same title contend for one path and the last writer wins.
pub fn write_script(
    temp_dir: &Path,
    media_path: &str,
    lines: &[String],
) -> Result<ScriptArtifact, ScriptError> {
    let base_name = file_name_component(media_path);
    if base_name.is_empty() {
        return Err(ScriptError::NoFileName(media_path.to_string()));
    }

    let path = temp_dir.join(format!(
        "{}{}{}",
        SCRIPT_FILE_PREFIX, base_name, SCRIPT_FILE_EXTENSION
    ));

    let mut content = String::new();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }

    fs::write(&path, content).map_err(|source| ScriptError::Write {
        path: path.clone(),
        source,
    })?;

    Ok(ScriptArtifact {
        path,
        persisted: false,
    })
}

/// Substring after the last path separator. Job paths arrive from either
/// platform, so both separator styles count.
fn file_name_component(media_path: &str) -> &str {
    match media_path.rfind(|c| c == '/' || c == '\\') {
        Some(index) => &media_path[index + 1..],
        None => media_path,
    }
}
