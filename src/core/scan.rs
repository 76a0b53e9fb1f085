use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Result, bail};
use glob::Pattern;
use rayon::prelude::*;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::core::{
    data::Catalog,
    locate::CATALOG_EXTENSION,
    parsers::{looks_like_ts, parse_ts_str},
};

/// A catalog parsed from disk.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    /// Path for reports, relative to the scan base when inside it.
    pub path: String,
    /// Path to read or write the file.
    pub file: PathBuf,
    pub catalog: Catalog,
}

impl LoadedCatalog {
    pub fn new(path: impl Into<String>, catalog: Catalog) -> Self {
        let path = path.into();
        Self {
            file: PathBuf::from(&path),
            path,
            catalog,
        }
    }
}

/// A file that could not be read or parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogScanWarning {
    pub file_path: String,
    pub line: Option<usize>,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanCatalogsResult {
    /// Parsed catalogs, sorted by path.
    pub catalogs: Vec<LoadedCatalog>,
    pub warnings: Vec<CatalogScanWarning>,
    /// Directory entries that could not be accessed.
    pub skipped_count: usize,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    globs: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, patterns: &[String]) -> Self {
        let mut literal_paths = Vec::new();
        let mut globs = Vec::new();
        for p in patterns {
            if is_glob_pattern(p) {
                match Pattern::new(p) {
                    Ok(pattern) => globs.push(pattern),
                    Err(e) => warn!(pattern = %p, error = %e, "invalid ignore pattern"),
                }
            } else {
                literal_paths.push(base_dir.join(p));
            }
        }
        Self {
            literal_paths,
            globs,
        }
    }

    fn is_ignored(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.literal_paths.iter().any(|p| path.starts_with(p))
            || self.globs.iter().any(|p| p.matches(&path_str))
    }
}

/// A file to parse and whether the user named it directly.
struct Candidate {
    path: PathBuf,
    explicit: bool,
}

/// `path` relative to `base_dir` when it lies inside it.
fn display_path(base_dir: &Path, path: &Path) -> String {
    path.strip_prefix(base_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn has_catalog_extension(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(CATALOG_EXTENSION)
}

/// Find and parse catalogs under `paths`.
///
/// Directories are walked recursively and `.ts` files that are not Linguist
/// catalogs (TypeScript sources) are skipped. Files named directly are always
/// parsed. Parse failures become warnings so one broken catalog does not hide
/// the others.
pub fn scan_catalogs(
    base_dir: &Path,
    paths: &[PathBuf],
    ignore_patterns: &[String],
) -> Result<ScanCatalogsResult> {
    let ignores = IgnoreSet::new(base_dir, ignore_patterns);
    let mut result = ScanCatalogsResult::default();
    let mut candidates = Vec::new();

    for root in paths {
        if !root.exists() {
            bail!(
                "Path '{}' does not exist.\n\
                 Hint: Check your .tscatrc.json 'translationsRoot' setting.",
                root.display()
            );
        }

        if root.is_file() {
            candidates.push(Candidate {
                path: root.clone(),
                explicit: true,
            });
            continue;
        }

        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    result.skipped_count += 1;
                    debug!(error = %e, "cannot access path");
                    continue;
                }
            };
            let path = entry.path();
            if ignores.is_ignored(path) {
                continue;
            }
            if entry.file_type().is_file() && has_catalog_extension(path) {
                candidates.push(Candidate {
                    path: path.to_path_buf(),
                    explicit: false,
                });
            }
        }
    }

    let parsed: Vec<_> = candidates
        .par_iter()
        .filter_map(|candidate| {
            let file_path = display_path(base_dir, &candidate.path);
            let content = match fs::read_to_string(&candidate.path) {
                Ok(content) => content,
                Err(e) => {
                    return Some(Err(CatalogScanWarning {
                        file_path,
                        line: None,
                        error: format!("Failed to read file: {}", e),
                    }));
                }
            };
            if !candidate.explicit && !looks_like_ts(&content) {
                debug!(file = %file_path, "skipping non-catalog .ts file");
                return None;
            }
            Some(
                parse_ts_str(&content, &file_path)
                    .map(|catalog| LoadedCatalog {
                        path: file_path.clone(),
                        file: candidate.path.clone(),
                        catalog,
                    })
                    .map_err(|e| CatalogScanWarning {
                        file_path: file_path.clone(),
                        line: e.line(),
                        error: e.detail(),
                    }),
            )
        })
        .collect();

    for item in parsed {
        match item {
            Ok(loaded) => result.catalogs.push(loaded),
            Err(warning) => result.warnings.push(warning),
        }
    }
    result.catalogs.sort_by(|a, b| a.path.cmp(&b.path));
    result.catalogs.dedup_by(|a, b| a.path == b.path);
    result.warnings.sort_by(|a, b| a.file_path.cmp(&b.file_path));

    debug!(
        catalogs = result.catalogs.len(),
        warnings = result.warnings.len(),
        "scanned catalogs"
    );
    Ok(result)
}
