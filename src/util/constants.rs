// desclint - util/constants.rs
//
// Single source of truth for the fixed sets, file names, and patterns
// the checker relies on. All of these are deliberately immutable
// module-level constants, never runtime-mutable state.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "desclint";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Input file locations
// =============================================================================

/// Catalog property list, relative to the sample-collection root.
pub const CATALOG_RELATIVE_PATH: &str = "Content Display Logic/ContentPList.plist";

/// Per-sample metadata file name.
pub const METADATA_FILE_NAME: &str = "README.metadata.json";

/// Per-sample document file name.
pub const README_FILE_NAME: &str = "README.md";

/// Required JSON field holding the metadata description.
pub const METADATA_DESCRIPTION_FIELD: &str = "description";

// =============================================================================
// Fixed category and exclusion sets
// =============================================================================

/// Canonical category folder names. A directory in the sample tree is a
/// category directory only if its name appears here.
pub const CATEGORIES: &[&str] = &[
    "Maps",
    "Layers",
    "Features",
    "Display information",
    "Search",
    "Edit data",
    "Geometry",
    "Route and directions",
    "Analysis",
    "Cloud and portal",
    "Scenes",
    "Utility network",
    "Augmented reality",
];

/// Sample folder names skipped entirely (known false positives).
pub const EXCLUDED_SAMPLES: &[&str] = &[
    "Map loaded",
    "Animate 3D graphic",
    "Densify and generalize",
    "Add graphics with renderer",
];

/// Mapping from catalog category display names to the canonical folder
/// names in `CATEGORIES`.
pub const CATALOG_CATEGORY_MAPPING: &[(&str, &str)] = &[
    ("Maps", "Maps"),
    ("Layers", "Layers"),
    ("Features", "Features"),
    ("Display Information", "Display information"),
    ("Search", "Search"),
    ("Edit Data", "Edit data"),
    ("Geometry", "Geometry"),
    ("Route & Directions", "Route and directions"),
    ("Analysis", "Analysis"),
    ("Cloud & Portal", "Cloud and portal"),
    ("Scenes", "Scenes"),
    ("Utility Network", "Utility network"),
    ("Augmented Reality", "Augmented reality"),
];

// =============================================================================
// Text patterns and structural limits
// =============================================================================

/// Character class stripped from descriptions before relaxed comparison.
/// This exact set defines pass/fail behaviour; do not widen or narrow it.
pub const SPECIAL_CHAR_PATTERN: &str = r"[@_!#$%^&*<>?|/\\}{~:]";

/// A level-2 markdown heading: exactly two leading `#` followed by
/// whitespace. Three or more `#` put a non-whitespace character where
/// `\s` must match, so deeper headings never split the document.
pub const LEVEL2_HEADING_PATTERN: &str = r"(?m)^##\s";

/// Minimum non-empty lines in a README lead block: title, description,
/// and image reference.
pub const MIN_LEAD_BLOCK_LINES: usize = 3;

/// File names treated as ignorable filesystem artifacts when deciding
/// whether a sample folder is effectively empty.
pub const IGNORABLE_ARTIFACT_PREFIX: &str = ".DS_Store";

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
