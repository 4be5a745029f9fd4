//! In-place transformation of files and directory trees.

use std::fs;
use std::path::{Path, PathBuf};

use asciiart::{BlockFilter, RenderConfig};
use tracing::{debug, error, info};
use walkdir::WalkDir;

use crate::CliError;

/// Suffix of the backup written by `--keep-originals`.
pub const ORIGINAL_SUFFIX: &str = "orig";

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Report what would change, write nothing.
    pub check: bool,
    /// Save the previous content as `<name>.orig` before rewriting.
    pub keep_originals: bool,
    /// Write results under this root instead of in place.
    pub output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Unchanged,
    Written,
    WouldChange,
}

/// Totals of one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub changed: usize,
    pub blocks: usize,
    pub failed: usize,
}

impl Summary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }
}

#[derive(Debug)]
pub struct Transformer<'a> {
    filter: &'a BlockFilter,
    render: &'a RenderConfig,
    options: Options,
}

impl<'a> Transformer<'a> {
    #[must_use]
    pub fn new(filter: &'a BlockFilter, render: &'a RenderConfig, options: Options) -> Self {
        Self { filter, render, options }
    }

    /// Transforms every regular file under `roots`, in sorted order.
    ///
    /// Failures are logged and counted; they never stop the run.
    pub fn run(&self, roots: &[PathBuf]) -> Summary {
        let mut summary = Summary::default();
        for root in roots {
            for entry in WalkDir::new(root).sort_by_file_name() {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(e) => {
                        error!(root = %root.display(), error = %e, "traversal failed");
                        summary.failed += 1;
                        continue;
                    }
                };
                if !entry.file_type().is_file() || is_backup(entry.path()) {
                    continue;
                }
                summary.files += 1;
                match self.transform_file(root, entry.path()) {
                    Ok((outcome, blocks)) => {
                        summary.blocks += blocks;
                        if outcome != Outcome::Unchanged {
                            summary.changed += 1;
                        }
                    }
                    Err(e) => {
                        error!(path = %entry.path().display(), error = %e, "transform failed");
                        summary.failed += 1;
                    }
                }
            }
        }
        info!(
            files = summary.files,
            changed = summary.changed,
            blocks = summary.blocks,
            failed = summary.failed,
            "run complete"
        );
        summary
    }

    /// Transforms one file found under `root`.
    ///
    /// Returns what happened and how many blocks were converted.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] for unreadable or non-UTF-8 files, conversion
    /// failures and failed writes.
    pub fn transform_file(&self, root: &Path, path: &Path) -> Result<(Outcome, usize), CliError> {
        let bytes = fs::read(path).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
        let document = String::from_utf8(bytes).map_err(|_| CliError::Decode { path: path.to_owned() })?;
        let (converted, blocks) = self.filter.filter(&document, self.render)?;
        let changed = converted != document;
        debug!(path = %path.display(), blocks, changed, "filtered file");

        if self.options.check {
            if changed {
                info!(path = %path.display(), "would change");
                return Ok((Outcome::WouldChange, blocks));
            }
            return Ok((Outcome::Unchanged, blocks));
        }

        match &self.options.output {
            Some(output) => {
                let target = mirror_path(root, path, output);
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent).map_err(|source| CliError::Io { path: parent.to_owned(), source })?;
                }
                write(&target, &converted)?;
                Ok((if changed { Outcome::Written } else { Outcome::Unchanged }, blocks))
            }
            None if changed => {
                if self.options.keep_originals {
                    write(&backup_path(path), &document)?;
                }
                write(path, &converted)?;
                Ok((Outcome::Written, blocks))
            }
            None => Ok((Outcome::Unchanged, blocks)),
        }
    }
}

fn write(path: &Path, content: &str) -> Result<(), CliError> {
    fs::write(path, content).map_err(|source| CliError::Io { path: path.to_owned(), source })
}

/// `dir/name.ext` becomes `dir/name.ext.orig`.
#[must_use]
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_owned();
    name.push(".");
    name.push(ORIGINAL_SUFFIX);
    path.with_file_name(name)
}

fn is_backup(path: &Path) -> bool {
    path.extension().is_some_and(|e| e == ORIGINAL_SUFFIX)
}

/// Where `path`, found while walking `root`, lands under `output`.
///
/// A root that is itself a file maps to `output/<file name>`.
#[must_use]
pub fn mirror_path(root: &Path, path: &Path, output: &Path) -> PathBuf {
    match path.strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => output.join(relative),
        _ => output.join(path.file_name().unwrap_or_default()),
    }
}

#[cfg(test)]
#[path = "transform_test.rs"]
mod tests;
