//! Naming rules for a scan: which filenames count as source files, which
//! count as resource-mapping files, and what a package declaration line
//! looks like.

use miette::{IntoDiagnostic, Result, WrapErr};
use regex::Regex;

/// Extension of the source files produced by the decompiler.
pub const DEFAULT_SOURCE_EXTENSION: &str = "java";

/// Keyword opening a package declaration line.
pub const DEFAULT_DECLARATION_KEYWORD: &str = "package";

/// Immutable naming rules used by a [`SourceSet`](super::SourceSet).
///
/// The defaults match the Android build toolchain: sources end in `.java`,
/// and resource-mapping files are named `R` or `R$<category>` where the
/// category is one of the lowercase nested resource classes (`anim`,
/// `string`, `id`, ...). The extension, the declaration keyword, and the
/// mapping-file pattern can all be swapped out to scan trees produced by
/// other toolchains.
#[derive(Debug, Clone)]
pub struct ScanRules {
    source_extension: String,
    declaration_keyword: String,
    r_file: Regex,
}

impl ScanRules {
    /// Build rules for a custom toolchain. `r_file_pattern` overrides the
    /// resource-mapping filename regex; when absent it is derived from the
    /// extension.
    pub fn new(
        source_extension: &str,
        declaration_keyword: &str,
        r_file_pattern: Option<&str>,
    ) -> Result<Self> {
        let r_file = match r_file_pattern {
            Some(pattern) => Regex::new(pattern)
                .into_diagnostic()
                .wrap_err_with(|| format!("Invalid resource file pattern: {pattern}"))?,
            None => Regex::new(&default_r_file_pattern(source_extension))
                .into_diagnostic()
                .wrap_err_with(|| format!("Invalid source extension: {source_extension}"))?,
        };

        Ok(Self {
            source_extension: source_extension.to_string(),
            declaration_keyword: declaration_keyword.to_string(),
            r_file,
        })
    }

    /// Whether a filename ends in the source extension, case-insensitively.
    pub fn is_source_name(&self, name: &str) -> bool {
        let suffix = format!(".{}", self.source_extension.to_lowercase());
        name.to_lowercase().ends_with(&suffix)
    }

    /// Whether a filename is a resource-mapping file (`R.java`,
    /// `R$anim.java`, ...). Only the filename is inspected; directory
    /// components never influence the decision.
    pub fn is_r_file_name(&self, name: &str) -> bool {
        self.r_file.is_match(name)
    }

    /// Build the line pattern for a declaration of `package_name`.
    ///
    /// The pattern matches a whole line: the declaration keyword, whitespace,
    /// the literal package name, any trailing characters, then `;`. Because
    /// trailing characters are allowed before the semicolon, this is a
    /// prefix match on the package text: a query for `com.domain.alpha` also
    /// matches a file declaring `com.domain.alphabet`.
    pub fn package_declaration(&self, package_name: &str) -> Result<Regex, regex::Error> {
        Regex::new(&format!(
            r"(?i)^{}\s+{}.*;$",
            regex::escape(&self.declaration_keyword),
            regex::escape(package_name),
        ))
    }
}

impl Default for ScanRules {
    fn default() -> Self {
        Self {
            source_extension: DEFAULT_SOURCE_EXTENSION.to_string(),
            declaration_keyword: DEFAULT_DECLARATION_KEYWORD.to_string(),
            r_file: Regex::new(&default_r_file_pattern(DEFAULT_SOURCE_EXTENSION))
                .expect("default resource file pattern is valid"),
        }
    }
}

/// `R` and the extension match case-insensitively; the category letters
/// after `$` must be lowercase, like the nested resource classes the Android
/// toolchain generates.
fn default_r_file_pattern(extension: &str) -> String {
    format!(r"(?i)^R(?-i:\$[a-z]+)?\.{}$", regex::escape(extension))
}
