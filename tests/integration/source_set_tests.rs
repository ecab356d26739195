//! SourceSet integration tests
//!
//! Builds a small decompiled-style source tree and verifies discovery, name
//! filtering, and package membership against it.

use reverser::{ScanRules, SourceSet};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PACKAGE_ROOT: &str = "com.domain";
const ALPHA_PACKAGE: &str = "com.domain.alpha";
const BRAVO_PACKAGE: &str = "com.domain.bravo";

struct Fixture {
    _temp: TempDir,
    root: PathBuf,
    root_class: PathBuf,
    root_r: PathBuf,
    alpha_class: PathBuf,
    alpha_r: PathBuf,
    bravo_class: PathBuf,
    bravo_r: PathBuf,
}

fn write_source(path: &Path, package: &str) {
    fs::write(
        path,
        format!("package {};\n\npublic final class Stub {{\n}}\n", package),
    )
    .unwrap();
}

/// Root holds Root.java and R$string.java in com.domain; alpha/ and bravo/
/// each hold a class and an R$string.java in their own subpackage.
fn fixture() -> Fixture {
    let temp = TempDir::new().unwrap();
    let root = temp.path().to_path_buf();
    let alpha = root.join("alpha");
    let bravo = root.join("bravo");
    fs::create_dir(&alpha).unwrap();
    fs::create_dir(&bravo).unwrap();

    let root_class = root.join("Root.java");
    let root_r = root.join("R$string.java");
    let alpha_class = alpha.join("ClassA.java");
    let alpha_r = alpha.join("R$string.java");
    let bravo_class = bravo.join("ClassB.java");
    let bravo_r = bravo.join("R$string.java");

    write_source(&root_class, PACKAGE_ROOT);
    write_source(&root_r, PACKAGE_ROOT);
    write_source(&alpha_class, ALPHA_PACKAGE);
    write_source(&alpha_r, ALPHA_PACKAGE);
    write_source(&bravo_class, BRAVO_PACKAGE);
    write_source(&bravo_r, BRAVO_PACKAGE);

    Fixture {
        _temp: temp,
        root,
        root_class,
        root_r,
        alpha_class,
        alpha_r,
        bravo_class,
        bravo_r,
    }
}

#[test]
fn locates_all_source_files() {
    let fx = fixture();
    let files = SourceSet::new(&fx.root).source_files();

    assert_eq!(files.len(), 6);
    for path in [
        &fx.root_class,
        &fx.root_r,
        &fx.alpha_class,
        &fx.alpha_r,
        &fx.bravo_class,
        &fx.bravo_r,
    ] {
        assert!(files.contains(path), "missing {}", path.display());
    }
}

#[test]
fn locates_source_files_in_bravo_package() {
    let fx = fixture();
    let files = SourceSet::new(&fx.root).source_files_in_package(BRAVO_PACKAGE);

    let expected: BTreeSet<PathBuf> = [fx.bravo_class.clone(), fx.bravo_r.clone()].into();
    assert_eq!(files, expected);
}

#[test]
fn locates_all_r_files() {
    let fx = fixture();
    let files = SourceSet::new(&fx.root).r_files();

    let expected: BTreeSet<PathBuf> =
        [fx.root_r.clone(), fx.alpha_r.clone(), fx.bravo_r.clone()].into();
    assert_eq!(files, expected);
}

#[test]
fn locates_r_files_in_bravo_package() {
    let fx = fixture();
    let files = SourceSet::new(&fx.root).r_files_in_package(BRAVO_PACKAGE);

    let expected: BTreeSet<PathBuf> = [fx.bravo_r.clone()].into();
    assert_eq!(files, expected);
}

#[test]
fn filtered_results_are_subsets() {
    let fx = fixture();
    let set = SourceSet::new(&fx.root);

    let all = set.source_files();
    let r_files = set.r_files();
    let in_bravo = set.source_files_in_package(BRAVO_PACKAGE);
    let r_in_bravo = set.r_files_in_package(BRAVO_PACKAGE);

    assert!(r_files.is_subset(&all));
    assert!(in_bravo.is_subset(&all));
    assert!(r_in_bravo.is_subset(&r_files));
    assert!(r_in_bravo.is_subset(&in_bravo));
}

#[test]
fn membership_distinguishes_sibling_packages() {
    let fx = fixture();
    let set = SourceSet::new(&fx.root);

    assert!(set.is_in_package(&fx.bravo_r, BRAVO_PACKAGE));
    assert!(!set.is_in_package(&fx.alpha_r, BRAVO_PACKAGE));
}

#[test]
fn parent_package_query_matches_subpackages() {
    let fx = fixture();
    let files = SourceSet::new(&fx.root).source_files_in_package(PACKAGE_ROOT);

    // "com.domain" is a textual prefix of every declared package here
    assert_eq!(files.len(), 6);
}

#[test]
fn membership_is_a_literal_prefix_match() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Alphabet.java");
    write_source(&path, "com.domain.alphabet");

    let set = SourceSet::new(temp.path());
    assert!(set.is_in_package(&path, "com.domain.alpha"));
}

#[test]
fn uppercase_r_category_is_not_a_mapping_file() {
    let fx = fixture();
    let drawable = fx.root.join("R$Drawable.java");
    write_source(&drawable, PACKAGE_ROOT);

    let set = SourceSet::new(&fx.root);
    assert!(!set.r_files().contains(&drawable));
    // Still an ordinary source file
    assert!(set.source_files().contains(&drawable));
}

#[test]
fn lowercase_r_file_matches_case_insensitively() {
    let fx = fixture();
    let lower = fx.root.join("r.java");
    write_source(&lower, PACKAGE_ROOT);

    assert!(SourceSet::new(&fx.root).r_files().contains(&lower));
}

#[test]
fn missing_root_yields_empty_sets() {
    let temp = TempDir::new().unwrap();
    let set = SourceSet::new(temp.path().join("missing"));

    assert!(set.source_files().is_empty());
    assert!(set.source_files_in_package(PACKAGE_ROOT).is_empty());
    assert!(set.r_files().is_empty());
    assert!(set.r_files_in_package(PACKAGE_ROOT).is_empty());
}

#[test]
fn missing_root_is_an_error_through_try_variants() {
    let temp = TempDir::new().unwrap();
    let set = SourceSet::new(temp.path().join("missing"));

    assert!(set.try_source_files().is_err());
    assert!(set.try_r_files().is_err());
}

#[test]
fn file_without_declaration_is_never_a_member() {
    let fx = fixture();
    let bare = fx.root.join("Bare.java");
    fs::write(&bare, "public class Bare {}\n").unwrap();

    let set = SourceSet::new(&fx.root);
    assert!(set.source_files().contains(&bare));
    assert!(!set.source_files_in_package(PACKAGE_ROOT).contains(&bare));
}

#[test]
fn custom_rules_scan_alternate_toolchains() {
    let temp = TempDir::new().unwrap();
    let main = temp.path().join("Main.kt");
    let r_file = temp.path().join("R$string.kt");
    let java = temp.path().join("Legacy.java");
    fs::write(&main, "package com.domain\nfun main() {}\n").unwrap();
    fs::write(&r_file, "package com.domain\n").unwrap();
    write_source(&java, PACKAGE_ROOT);

    let rules = ScanRules::new("kt", "package", None).unwrap();
    let set = SourceSet::with_rules(temp.path(), rules);

    let files = set.source_files();
    assert!(files.contains(&main));
    assert!(files.contains(&r_file));
    assert!(!files.contains(&java));

    let expected: BTreeSet<PathBuf> = [r_file].into();
    assert_eq!(set.r_files(), expected);
}
