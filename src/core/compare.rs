// desclint - core/compare.rs
//
// Three-way description comparison for one sample.
//
// A sample-side description matches the catalog description when the
// two are equal, or when the catalog text equals the first sentence of
// the sample text. The relaxed rule tolerates catalog entries that
// abbreviate a multi-sentence description to its opening sentence.

use crate::core::catalog::Catalog;
use crate::core::sample::{DescriptionSource, Sample};
use crate::core::text;
use crate::util::constants;
use crate::util::error::{DescLintError, MismatchError, Result};
use std::fmt;
use std::path::Path;

/// One recorded disagreement between the catalog and a sample file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    pub source: DescriptionSource,
    pub expected: String,
    pub actual: String,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "catalog \"{}\" does not match {} \"{}\"",
            self.expected, self.source, self.actual
        )
    }
}

/// Compare the catalog description against both sample-side
/// descriptions. Returns 0, 1, or 2 mismatches.
pub fn compare_descriptions(catalog_description: &str, sample: &Sample) -> Vec<Mismatch> {
    let mut mismatches = Vec::new();

    for (source, actual) in sample.descriptions() {
        if catalog_description != actual
            && catalog_description != text::first_sentence(actual)
        {
            mismatches.push(Mismatch {
                source,
                expected: catalog_description.to_string(),
                actual: actual.to_string(),
            });
        }
    }

    mismatches
}

/// Check one sample folder against the catalog.
///
/// Samples in the exclusion set are never checked; no files are read
/// for them. Each mismatch is printed as a numbered console line before
/// the sample is failed with a `MismatchError`.
pub fn check_sample(catalog: &Catalog, folder_path: &Path) -> Result<()> {
    let folder_name = folder_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    if constants::EXCLUDED_SAMPLES.contains(&folder_name) {
        tracing::debug!(sample = folder_name, "Sample excluded, skipping");
        return Ok(());
    }

    let sample = Sample::load(folder_path)?;
    let entry = catalog.find_entry(&sample.folder_category, &sample.folder_name)?;

    let mismatches = compare_descriptions(&entry.description_text, &sample);
    for (i, mismatch) in mismatches.iter().enumerate() {
        println!("  {}. {mismatch}.", i + 1);
    }

    if mismatches.is_empty() {
        tracing::debug!(sample = sample.folder_name.as_str(), "Descriptions consistent");
        Ok(())
    } else {
        Err(DescLintError::Mismatch(MismatchError::Descriptions {
            category: sample.folder_category,
            sample: sample.folder_name,
            count: mismatches.len(),
        }))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::{CatalogEntry, CategoryNode};
    use std::fs;
    use std::path::PathBuf;

    fn make_sample(readme_description: &str, metadata_description: &str) -> Sample {
        Sample {
            folder_path: PathBuf::from("/tree/Maps/Display a map"),
            folder_name: "Display a map".to_string(),
            folder_category: "Maps".to_string(),
            readme_description: readme_description.to_string(),
            metadata_description: metadata_description.to_string(),
        }
    }

    #[test]
    fn test_identical_triple_has_no_mismatches() {
        let sample = make_sample("Display a map.", "Display a map.");
        assert!(compare_descriptions("Display a map.", &sample).is_empty());
    }

    #[test]
    fn test_first_sentence_of_longer_description_matches() {
        let sample = make_sample(
            "Display a map. It shows basemap and extent.",
            "Display a map.",
        );
        assert!(compare_descriptions("Display a map.", &sample).is_empty());
    }

    #[test]
    fn test_divergent_metadata_is_exactly_one_mismatch() {
        let sample = make_sample("Display a map.", "Show a scene instead.");
        let mismatches = compare_descriptions("Display a map.", &sample);
        assert_eq!(mismatches.len(), 1);
        assert_eq!(mismatches[0].source, DescriptionSource::Metadata);
        assert_eq!(mismatches[0].expected, "Display a map.");
        assert_eq!(mismatches[0].actual, "Show a scene instead.");
    }

    #[test]
    fn test_both_sources_divergent_is_two_mismatches() {
        let sample = make_sample("One thing.", "Another thing.");
        let mismatches = compare_descriptions("A third thing.", &sample);
        assert_eq!(mismatches.len(), 2);
        assert_eq!(mismatches[0].source, DescriptionSource::Readme);
        assert_eq!(mismatches[1].source, DescriptionSource::Metadata);
    }

    #[test]
    fn test_special_characters_are_ignored_in_relaxed_match() {
        // The sample text carries characters from the stripped class;
        // its first-sentence form drops them and matches the catalog.
        let sample = make_sample("Show a #map: demo. More text.", "Show a map demo.");
        let mismatches = compare_descriptions("Show a map demo.", &sample);
        assert!(mismatches.is_empty(), "got {mismatches:?}");
    }

    fn test_catalog() -> Catalog {
        Catalog {
            categories: vec![CategoryNode {
                display_name: "Maps".to_string(),
                children: vec![CatalogEntry {
                    display_name: "Display a map".to_string(),
                    description_text: "Display a map.".to_string(),
                }],
            }],
        }
    }

    #[test]
    fn test_check_sample_passes_for_consistent_sample() {
        let dir = tempfile::tempdir().unwrap();
        let sample_dir = dir.path().join("Maps").join("Display a map");
        fs::create_dir_all(&sample_dir).unwrap();
        fs::write(
            sample_dir.join("README.md"),
            "# Display a map\n\nDisplay a map. It shows basemap and extent.\n\n![img](i.png)\n",
        )
        .unwrap();
        fs::write(
            sample_dir.join("README.metadata.json"),
            r#"{ "description": "Display a map." }"#,
        )
        .unwrap();

        assert!(check_sample(&test_catalog(), &sample_dir).is_ok());
    }

    #[test]
    fn test_check_sample_fails_with_mismatch_count() {
        let dir = tempfile::tempdir().unwrap();
        let sample_dir = dir.path().join("Maps").join("Display a map");
        fs::create_dir_all(&sample_dir).unwrap();
        fs::write(
            sample_dir.join("README.md"),
            "# Display a map\n\nSomething else entirely.\n\n![img](i.png)\n",
        )
        .unwrap();
        fs::write(
            sample_dir.join("README.metadata.json"),
            r#"{ "description": "Display a map." }"#,
        )
        .unwrap();

        let result = check_sample(&test_catalog(), &sample_dir);
        assert!(matches!(
            result,
            Err(DescLintError::Mismatch(MismatchError::Descriptions {
                count: 1,
                ..
            }))
        ));
    }

    #[test]
    fn test_excluded_sample_is_never_checked() {
        // The folder has no README or metadata at all; exclusion must
        // short-circuit before any file is read.
        let dir = tempfile::tempdir().unwrap();
        let sample_dir = dir.path().join("Maps").join("Map loaded");
        fs::create_dir_all(&sample_dir).unwrap();
        fs::write(sample_dir.join("garbage.txt"), "not a sample").unwrap();

        assert!(check_sample(&test_catalog(), &sample_dir).is_ok());
    }

    #[test]
    fn test_unknown_category_is_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let sample_dir = dir.path().join("Nonsense").join("Display a map");
        fs::create_dir_all(&sample_dir).unwrap();
        fs::write(
            sample_dir.join("README.md"),
            "# Display a map\n\nDisplay a map.\n\n![img](i.png)\n",
        )
        .unwrap();
        fs::write(
            sample_dir.join("README.metadata.json"),
            r#"{ "description": "Display a map." }"#,
        )
        .unwrap();

        let result = check_sample(&test_catalog(), &sample_dir);
        assert!(matches!(result, Err(DescLintError::Load(_))));
    }
}
