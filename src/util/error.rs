// desclint - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// Errors are categorised by the check stage that produced them; every
// variant carries enough context (sample name, path, field) to be
// printed as a self-contained console line.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all desclint operations.
#[derive(Debug)]
pub enum DescLintError {
    /// Catalog loading or entry lookup failed.
    Load(LoadError),

    /// Metadata JSON parsing failed.
    Parse(ParseError),

    /// README document is structurally malformed.
    Format(FormatError),

    /// Descriptions disagree for one sample.
    Mismatch(MismatchError),

    /// Tree-wide aggregate raised once after all samples were visited.
    ChecksFailed { failures: usize },

    /// Neither or both CLI modes were supplied.
    InvalidArguments,

    /// I/O error with path context (directory enumeration).
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for DescLintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(e) => write!(f, "Catalog error: {e}"),
            Self::Parse(e) => write!(f, "Metadata error: {e}"),
            Self::Format(e) => write!(f, "README error: {e}"),
            Self::Mismatch(e) => write!(f, "{e}"),
            Self::ChecksFailed { failures } => {
                write!(
                    f,
                    "{failures} sample(s) failed the description consistency check"
                )
            }
            Self::InvalidArguments => {
                write!(f, "Invalid arguments: pass exactly one of --all or --single")
            }
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for DescLintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Load(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Format(e) => Some(e),
            Self::Mismatch(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Catalog load errors
// ---------------------------------------------------------------------------

/// Errors related to catalog loading and entry lookup.
#[derive(Debug)]
pub enum LoadError {
    /// I/O error reading the catalog file.
    Io { path: PathBuf, source: io::Error },

    /// The property list could not be parsed.
    Plist {
        path: PathBuf,
        source: plist::Error,
    },

    /// The catalog parsed but contains no categories.
    Empty { path: PathBuf },

    /// No catalog category maps to the sample's parent folder name.
    CategoryNotFound { category: String },

    /// The category exists but has no entry matching the sample folder.
    EntryNotFound { category: String, sample: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read catalog '{}': {source}", path.display())
            }
            Self::Plist { path, source } => {
                write!(f, "cannot parse catalog '{}': {source}", path.display())
            }
            Self::Empty { path } => {
                write!(f, "catalog '{}' contains no categories", path.display())
            }
            Self::CategoryNotFound { category } => {
                write!(f, "no catalog category maps to folder '{category}'")
            }
            Self::EntryNotFound { category, sample } => {
                write!(f, "catalog category '{category}' has no entry '{sample}'")
            }
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Plist { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<LoadError> for DescLintError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

// ---------------------------------------------------------------------------
// Metadata parse errors
// ---------------------------------------------------------------------------

/// Errors related to `README.metadata.json` parsing.
#[derive(Debug)]
pub enum ParseError {
    /// I/O error reading the metadata file.
    Io { path: PathBuf, source: io::Error },

    /// The file is not valid JSON.
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The required field is absent or not a string.
    MissingField {
        path: PathBuf,
        field: &'static str,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::Json { path, source } => {
                write!(f, "invalid JSON in '{}': {source}", path.display())
            }
            Self::MissingField { path, field } => {
                write!(
                    f,
                    "'{}' is missing required string field '{field}'",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<ParseError> for DescLintError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

// ---------------------------------------------------------------------------
// README format errors
// ---------------------------------------------------------------------------

/// Errors related to the README document's structure.
#[derive(Debug)]
pub enum FormatError {
    /// I/O error reading the README file.
    Io { path: PathBuf, source: io::Error },

    /// The lead block (before the first level-2 heading) has fewer than
    /// the required title, description, and image lines.
    MissingLeadBlock { path: PathBuf, lines_found: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::MissingLeadBlock { path, lines_found } => {
                write!(
                    f,
                    "'{}' should contain title, description and image before the \
                     first level-2 heading; found {lines_found} line(s)",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for FormatError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<FormatError> for DescLintError {
    fn from(e: FormatError) -> Self {
        Self::Format(e)
    }
}

// ---------------------------------------------------------------------------
// Mismatch errors
// ---------------------------------------------------------------------------

/// Description disagreement for a single sample. Individual mismatch
/// lines are printed before this error is raised; the error itself
/// carries the aggregate count (1 or 2).
#[derive(Debug)]
pub enum MismatchError {
    Descriptions {
        category: String,
        sample: String,
        count: usize,
    },
}

impl fmt::Display for MismatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Descriptions {
                category,
                sample,
                count,
            } => write!(
                f,
                "{count} error(s) occurred during checking /{category} - {sample}"
            ),
        }
    }
}

impl std::error::Error for MismatchError {}

impl From<MismatchError> for DescLintError {
    fn from(e: MismatchError) -> Self {
        Self::Mismatch(e)
    }
}

/// Convenience type alias for desclint results.
pub type Result<T> = std::result::Result<T, DescLintError>;
