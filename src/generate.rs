//! The read → encode → render → write pipeline.

use crate::diagnostics;
use crate::encode;
use crate::error::FileError;
use crate::render::{self, PageContext};
use crate::stats::BookmarkletStats;
use crate::Result;

use anyhow::{bail, Context};
use serde::Serialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DEFAULT_INPUT: &str = "activation-poc.js";
pub const DEFAULT_OUTPUT: &str = "bookmarklet-complete.html";
pub const DEFAULT_NAME: &str = "SuperSeymour";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub name: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

/// A script packed into a `javascript:` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmarklet {
    pub uri: String,
    pub stats: BookmarkletStats,
}

/// Pure core of the pipeline: no I/O.
pub fn build_bookmarklet(script: &str) -> Bookmarklet {
    let uri = encode::bookmarklet_uri(script);
    let stats = BookmarkletStats::new(script, &uri);
    Bookmarklet { uri, stats }
}

#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output: PathBuf,
    pub stats: BookmarkletStats,
}

#[derive(Debug, Clone, Serialize)]
struct SummaryView {
    output: String,
    original_bytes: usize,
    original_kb: usize,
    bookmarklet_bytes: usize,
    bookmarklet_kb: usize,
    expansion_percent: Option<usize>,
}

impl GenerateSummary {
    /// Human-readable completion lines for stdout.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Generated {}", self.output.display()),
            format!("Bookmarklet size: {} KB", self.stats.bookmarklet_kb()),
        ];
        if let Some(pct) = self.stats.expansion_percent() {
            lines.push(format!("Expansion: {}% of original", pct));
        }
        lines
    }

    pub fn to_json(&self) -> Result<String> {
        let view = SummaryView {
            output: self.output.display().to_string(),
            original_bytes: self.stats.original_bytes,
            original_kb: self.stats.original_kb(),
            bookmarklet_bytes: self.stats.bookmarklet_bytes,
            bookmarklet_kb: self.stats.bookmarklet_kb(),
            expansion_percent: self.stats.expansion_percent(),
        };
        Ok(serde_json::to_string(&view)?)
    }
}

/// Read the script, build the page and write it to `opts.output`.
///
/// Nothing is written unless every earlier step succeeded, and the write
/// itself goes through a temporary file so the output is never truncated.
pub fn generate(opts: &GenerateOptions) -> Result<GenerateSummary> {
    // 1) Read.
    let script =
        fs::read_to_string(&opts.input).map_err(|e| FileError::read(&opts.input, e))?;
    if script.is_empty() {
        diagnostics::warn(format!(
            "{} is empty; the bookmarklet will do nothing",
            opts.input.display()
        ));
    }

    // 2) Encode + measure.
    let bookmarklet = build_bookmarklet(&script);
    let decoded = encode::decode_bookmarklet(&bookmarklet.uri)
        .with_context(|| diagnostics::error_message("decode generated bookmarklet"))?;
    if decoded != script {
        bail!(
            "{}",
            diagnostics::error_message(format!(
                "bookmarklet for {} does not decode back to the source",
                opts.input.display()
            ))
        );
    }

    // 3) Render.
    let script_label = opts
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| opts.input.display().to_string());
    let html = render::render_bookmarklet_page(&PageContext {
        name: &opts.name,
        script_label: &script_label,
        bookmarklet: &bookmarklet.uri,
        stats: bookmarklet.stats,
    })?;

    // 4) Write.
    write_atomic(&opts.output, &html)?;

    Ok(GenerateSummary {
        output: opts.output.clone(),
        stats: bookmarklet.stats,
    })
}

/// Write `contents` to a temp file next to the target, then rename it over
/// the target.
///
/// A symlinked `path` is followed so the link keeps pointing at the new page.
/// An existing page keeps its permissions; a new one gets 0644.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let target = resolve_target(path)?;
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FileError::write(path, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| FileError::write(path, e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| FileError::write(path, e))?;

    // NamedTempFile is created 0600.
    if let Some(perms) = page_permissions(&target) {
        tmp.as_file()
            .set_permissions(perms)
            .map_err(|e| FileError::write(path, e))?;
    }

    tmp.persist(&target)
        .map_err(|e| FileError::write(path, e.error))?;
    Ok(())
}

fn resolve_target(path: &Path) -> Result<PathBuf> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            Ok(fs::canonicalize(path).map_err(|e| FileError::write(path, e))?)
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn page_permissions(target: &Path) -> Option<fs::Permissions> {
    if let Ok(meta) = fs::metadata(target) {
        return Some(meta.permissions());
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Some(fs::Permissions::from_mode(0o644))
    }
    #[cfg(not(unix))]
    {
        None
    }
}
