// desclint - core/sample.rs
//
// Per-folder sample loading: the metadata JSON description and the
// README lead-section description. A `Sample` is immutable after
// construction and lives for one comparison pass.

use crate::util::constants;
use crate::util::error::{DescLintError, FormatError, ParseError};
use regex::Regex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Which sample-side file a description came from. Keeps the two
/// comparisons and their mismatch reports on one uniform path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionSource {
    /// The second non-empty line of the README lead block.
    Readme,
    /// The `description` field of README.metadata.json.
    Metadata,
}

impl fmt::Display for DescriptionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Readme => f.write_str("README description"),
            Self::Metadata => f.write_str("json.description"),
        }
    }
}

/// Everything needed to compare one sample folder against the catalog.
#[derive(Debug, Clone)]
pub struct Sample {
    pub folder_path: PathBuf,
    /// The folder's own name; matches the catalog entry display name.
    pub folder_name: String,
    /// The parent folder name; treated as the sample's category.
    pub folder_category: String,
    pub readme_description: String,
    pub metadata_description: String,
}

impl Sample {
    /// Load both descriptions from a sample folder.
    pub fn load(folder_path: &Path) -> Result<Self, DescLintError> {
        let folder_name = path_component_name(folder_path);
        let folder_category = folder_path
            .parent()
            .map(path_component_name)
            .unwrap_or_default();

        let metadata_description =
            metadata_description(&folder_path.join(constants::METADATA_FILE_NAME))?;
        let readme_description =
            readme_description(&folder_path.join(constants::README_FILE_NAME))?;

        tracing::debug!(
            sample = folder_name.as_str(),
            category = folder_category.as_str(),
            "Sample loaded"
        );

        Ok(Self {
            folder_path: folder_path.to_path_buf(),
            folder_name,
            folder_category,
            readme_description,
            metadata_description,
        })
    }

    /// Both sample-side descriptions, tagged with their source.
    pub fn descriptions(&self) -> [(DescriptionSource, &str); 2] {
        [
            (DescriptionSource::Readme, self.readme_description.as_str()),
            (
                DescriptionSource::Metadata,
                self.metadata_description.as_str(),
            ),
        ]
    }
}

/// Last path component as a String; empty when the component is absent
/// or not valid UTF-8 (such a name can never match a catalog category,
/// so the lookup fails with the category name in the message).
fn path_component_name(path: &Path) -> String {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string()
}

/// Compiled level-2 heading pattern, built once on first use.
fn level2_heading() -> &'static Regex {
    static LEVEL2_HEADING: OnceLock<Regex> = OnceLock::new();
    LEVEL2_HEADING.get_or_init(|| {
        Regex::new(constants::LEVEL2_HEADING_PATTERN).expect("heading pattern is valid")
    })
}

/// Extract the description line from a README file.
///
/// The document is split at the first level-2 heading; the text before
/// it must contain at least three non-empty lines (title, description,
/// image reference). The second non-empty line, trimmed, is returned.
fn readme_description(path: &Path) -> Result<String, FormatError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let lead = match level2_heading().find(&contents) {
        Some(m) => &contents[..m.start()],
        None => contents.as_str(),
    };

    let lines: Vec<&str> = lead.lines().filter(|l| !l.is_empty()).collect();
    if lines.len() < constants::MIN_LEAD_BLOCK_LINES {
        return Err(FormatError::MissingLeadBlock {
            path: path.to_path_buf(),
            lines_found: lines.len(),
        });
    }

    Ok(lines[1].trim().to_string())
}

/// Extract the `description` string field from a metadata JSON file.
fn metadata_description(path: &Path) -> Result<String, ParseError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: serde_json::Value =
        serde_json::from_str(&contents).map_err(|source| ParseError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    value
        .get(constants::METADATA_DESCRIPTION_FIELD)
        .and_then(serde_json::Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| ParseError::MissingField {
            path: path.to_path_buf(),
            field: constants::METADATA_DESCRIPTION_FIELD,
        })
}

// =============================================================================
// Tests
// =============================================================================
