//! Input discovery: Python sources from files, directories and glob patterns.

use anyhow::{bail, Context, Result};
use std::path::{Component, Path, PathBuf};
use tracing::{debug, warn};

/// A source file and its project-relative name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Where to read the file from.
    pub path: PathBuf,
    /// `./`-prefixed path with `/` separators.
    pub rel: String,
}

/// Expand inputs into Python source files, sorted by relative name.
///
/// A directory is walked recursively for `*.py` and its files are named
/// relative to it. Anything that is neither a file nor a directory is
/// treated as a glob pattern whose matches are named relative to the
/// pattern's literal leading directories. Files under `exclude` (the
/// output directory) are skipped. Two different files that end up with the
/// same name are an error.
pub fn discover(inputs: &[String], exclude: Option<&Path>) -> Result<Vec<SourceFile>> {
    let exclude = exclude.and_then(|p| p.canonicalize().ok());
    let mut files = Vec::new();

    for input in inputs {
        let path = Path::new(input);
        if path.is_file() {
            files.push(SourceFile {
                path: path.to_path_buf(),
                rel: file_name_for(path),
            });
            continue;
        }
        if path.is_dir() {
            let pattern = format!("{}/**/*.py", glob::Pattern::escape(input));
            collect_glob(&pattern, path, &mut files)
                .with_context(|| format!("invalid directory path: {}", input))?;
            continue;
        }
        let found = collect_glob(input, &glob_base(input), &mut files)
            .with_context(|| format!("invalid glob pattern: {}", input))?;
        if found == 0 {
            warn!(pattern = %input, "no files matched");
        }
    }

    if let Some(exclude) = &exclude {
        files.retain(|f| match f.path.canonicalize() {
            Ok(p) if p.starts_with(exclude) => {
                debug!(file = %f.path.display(), "skipping generated output");
                false
            }
            _ => true,
        });
    }

    files.sort_by(|a, b| a.rel.cmp(&b.rel));
    let mut unique: Vec<SourceFile> = Vec::with_capacity(files.len());
    for file in files {
        if let Some(last) = unique.last() {
            if last.rel == file.rel {
                if !same_file(&last.path, &file.path) {
                    bail!(
                        "{} and {} would both be documented as {}",
                        last.path.display(),
                        file.path.display(),
                        file.rel
                    );
                }
                continue;
            }
        }
        unique.push(file);
    }
    Ok(unique)
}

/// Push every file matching `pattern`, named relative to `base`.
fn collect_glob(pattern: &str, base: &Path, files: &mut Vec<SourceFile>) -> Result<usize> {
    let mut count = 0;
    for found in glob::glob(pattern)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
    {
        let rel = match found.strip_prefix(base) {
            Ok(rel) => relative_name(rel),
            Err(_) => file_name_for(&found),
        };
        files.push(SourceFile { path: found, rel });
        count += 1;
    }
    Ok(count)
}

/// Leading components of a glob pattern that contain no wildcard.
fn glob_base(pattern: &str) -> PathBuf {
    Path::new(pattern)
        .components()
        .take_while(|c| {
            !c.as_os_str()
                .to_string_lossy()
                .contains(|ch: char| matches!(ch, '*' | '?' | '['))
        })
        .collect()
}

/// Name of a file given directly: its path as written when that stays
/// inside the working directory, otherwise its path relative to the
/// working directory, falling back to the bare file name.
fn file_name_for(path: &Path) -> String {
    let climbs = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if !climbs {
        return relative_name(path);
    }
    let under_cwd = std::env::current_dir()
        .ok()
        .and_then(|cwd| cwd.canonicalize().ok())
        .zip(path.canonicalize().ok())
        .and_then(|(cwd, full)| full.strip_prefix(&cwd).ok().map(relative_name));
    under_cwd.unwrap_or_else(|| {
        format!("./{}", path.file_name().unwrap_or_default().to_string_lossy())
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// `./`-prefixed name of a path relative to its project root.
fn relative_name(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    format!("./{}", parts.join("/"))
}
