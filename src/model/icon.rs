//! The fixed icon table and tree-node icon lookup.

use crate::glyph::Glyph;
use crate::model::Rgb;

/// One entry of the icon table: a name and its fill color.
///
/// The name doubles as the output file stem, so names are unique.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    /// Identifier and file stem
    pub name: &'static str,
    /// Fill color, drawn fully opaque
    pub color: Rgb,
}

impl IconSpec {
    /// Create a new table entry.
    pub const fn new(name: &'static str, color: Rgb) -> Self {
        Self { name, color }
    }

    /// Shape drawn for this entry.
    pub fn glyph(&self) -> Glyph {
        Glyph::classify(self.name)
    }

    /// Output file name, e.g. `folder.png`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, crate::constants::ICON_EXTENSION)
    }
}

const DEFAULT_ICON: IconSpec = IconSpec::new("default", Rgb::new(100, 100, 100));

/// Every icon the generator writes.
pub const ICON_TABLE: &[IconSpec] = &[
    IconSpec::new("system", Rgb::new(80, 80, 200)),
    IconSpec::new("folder", Rgb::new(255, 180, 0)),
    IconSpec::new("generic", Rgb::new(200, 200, 0)),
    IconSpec::new("water", Rgb::new(0, 120, 200)),
    IconSpec::new("telecom", Rgb::new(200, 0, 200)),
    IconSpec::new("pipeline", Rgb::new(200, 100, 0)),
    IconSpec::new("gas", Rgb::new(200, 0, 0)),
    IconSpec::new("pipe", Rgb::new(0, 200, 0)),
    IconSpec::new("point", Rgb::new(0, 200, 200)),
    IconSpec::new("area", Rgb::new(120, 120, 120)),
    IconSpec::new("feature", Rgb::new(150, 150, 150)),
    DEFAULT_ICON,
];

/// Category labels shown at depth 1 of the feature tree.
const CATEGORY_ICONS: &[(&str, &str)] = &[
    ("泛型", "generic"),
    ("水体", "water"),
    ("电讯", "telecom"),
    ("管线", "pipeline"),
    ("气体", "gas"),
];

/// Feature drawing types shown below the categories.
const FEATURE_ICONS: &[(&str, &str)] = &[("Pipe", "pipe"), ("Point", "point"), ("Area", "area")];

/// Look up a table entry by name.
pub fn find_icon(name: &str) -> Option<&'static IconSpec> {
    ICON_TABLE.iter().find(|spec| spec.name == name)
}

/// Table entry for `name`, or the `default` icon when there is none.
pub fn icon_or_default(name: &str) -> &'static IconSpec {
    find_icon(name).unwrap_or(&DEFAULT_ICON)
}

/// Icon for a feature-tree node at `depth` (0 = visible root) with display
/// text `label`.
///
/// The root uses `system`. Categories match their label against the known
/// category names and fall back to `folder`. Deeper nodes match their drawing
/// type and fall back to `feature`. Labels are compared exactly.
pub fn icon_for_node(depth: usize, label: &str) -> &'static IconSpec {
    let name = match depth {
        0 => "system",
        1 => lookup_label(CATEGORY_ICONS, label, "folder"),
        _ => lookup_label(FEATURE_ICONS, label, "feature"),
    };
    icon_or_default(name)
}

fn lookup_label(
    known: &[(&str, &'static str)],
    label: &str,
    fallback: &'static str,
) -> &'static str {
    known
        .iter()
        .find(|(text, _)| *text == label)
        .map_or(fallback, |(_, icon)| *icon)
}
