//! A source set: the collection of source files rooted at a directory, with
//! filtered views for resource-mapping files and package membership.

// Parts of the scan surface are library-only
#![allow(dead_code)]

use super::rules::ScanRules;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Error raised by the explicit `try_*` scan variants.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The walk over the root directory faulted (missing root, permission
    /// denied, unreadable subdirectory).
    #[error("failed to traverse source tree: {0}")]
    Traversal(#[from] walkdir::Error),
}

/// A collection of source files rooted at a single directory.
///
/// Nothing is cached: every call re-scans the live filesystem, so two
/// successive calls may disagree if the tree changed in between. There is no
/// snapshot isolation across the scan-then-read pipeline.
///
/// The public accessors absorb every traversal failure into an empty set, so
/// callers observe "no files found" rather than an error; the `try_*`
/// variants surface the cause instead.
#[derive(Debug, Clone)]
pub struct SourceSet {
    root: PathBuf,
    rules: ScanRules,
}

impl SourceSet {
    /// Create a source set over `root` with the default Android rules.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_rules(root, ScanRules::default())
    }

    pub fn with_rules(root: impl Into<PathBuf>, rules: ScanRules) -> Self {
        Self {
            root: root.into(),
            rules,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn rules(&self) -> &ScanRules {
        &self.rules
    }

    /// All source files anywhere under the root.
    pub fn source_files(&self) -> BTreeSet<PathBuf> {
        self.absorb(self.try_source_files())
    }

    /// Source files whose declared package starts with `package_name`.
    pub fn source_files_in_package(&self, package_name: &str) -> BTreeSet<PathBuf> {
        self.absorb(self.try_source_files_in_package(package_name))
    }

    /// Resource-mapping files (`R.java`, `R$anim.java`, ...) under the root.
    pub fn r_files(&self) -> BTreeSet<PathBuf> {
        self.absorb(self.try_r_files())
    }

    /// Resource-mapping files whose declared package starts with
    /// `package_name`.
    pub fn r_files_in_package(&self, package_name: &str) -> BTreeSet<PathBuf> {
        self.absorb(self.try_r_files_in_package(package_name))
    }

    /// Like [`SourceSet::source_files`], but surfaces traversal failures.
    ///
    /// A single faulted directory entry fails the whole scan.
    pub fn try_source_files(&self) -> Result<BTreeSet<PathBuf>, ScanError> {
        let mut files = BTreeSet::new();

        for entry in WalkDir::new(&self.root).follow_links(false) {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                continue;
            };
            if self.rules.is_source_name(name) {
                trace!("Found source file: {}", entry.path().display());
                files.insert(entry.into_path());
            }
        }

        Ok(files)
    }

    /// Like [`SourceSet::source_files_in_package`], but surfaces traversal
    /// failures.
    pub fn try_source_files_in_package(
        &self,
        package_name: &str,
    ) -> Result<BTreeSet<PathBuf>, ScanError> {
        Ok(self
            .try_source_files()?
            .into_iter()
            .filter(|path| self.is_in_package(path, package_name))
            .collect())
    }

    /// Like [`SourceSet::r_files`], but surfaces traversal failures.
    pub fn try_r_files(&self) -> Result<BTreeSet<PathBuf>, ScanError> {
        Ok(self
            .try_source_files()?
            .into_iter()
            .filter(|path| self.matches_r_name(path))
            .collect())
    }

    /// Like [`SourceSet::r_files_in_package`], but surfaces traversal
    /// failures.
    pub fn try_r_files_in_package(
        &self,
        package_name: &str,
    ) -> Result<BTreeSet<PathBuf>, ScanError> {
        Ok(self
            .try_r_files()?
            .into_iter()
            .filter(|path| self.is_in_package(path, package_name))
            .collect())
    }

    /// Whether the file at `path` declares a package starting with
    /// `package_name`.
    ///
    /// The check is a line-by-line pattern scan rather than a real parse:
    /// de-obfuscated code carries labels and other artifacts that choke Java
    /// parsers, so only the declaration line is inspected. A file that cannot
    /// be read as UTF-8 text is never a member.
    pub fn is_in_package(&self, path: &Path, package_name: &str) -> bool {
        let declaration = match self.rules.package_declaration(package_name) {
            Ok(pattern) => pattern,
            Err(err) => {
                debug!("Bad declaration pattern for {package_name}: {err}");
                return false;
            }
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) => {
                trace!("Skipping unreadable file {}: {err}", path.display());
                return false;
            }
        };

        contents.lines().any(|line| declaration.is_match(line))
    }

    fn matches_r_name(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.rules.is_r_file_name(name))
    }

    fn absorb(&self, result: Result<BTreeSet<PathBuf>, ScanError>) -> BTreeSet<PathBuf> {
        match result {
            Ok(files) => files,
            Err(err) => {
                debug!("Scan of {} failed: {err}", self.root.display());
                BTreeSet::new()
            }
        }
    }
}
