//! Grid presentation tokens.

/// Presentation tokens passed into the grid at construction.
///
/// There is no ambient theme singleton: every grid owns a copy of its
/// tokens, so two grids on one screen can format independently.
#[derive(Debug, Clone, PartialEq)]
pub struct GridTheme {
    /// Asset reference shown when a photo cell carries no URL.
    pub photo_placeholder: String,
    /// Indentation per nesting level of an expanded sub-row, in the
    /// host's display units.
    pub indent_unit: u16,
    /// Separator inserted between thousands groups of a price.
    pub thousands_separator: char,
    /// Suffix appended to formatted prices.
    pub currency: String,
}

impl Default for GridTheme {
    fn default() -> Self {
        Self {
            photo_placeholder: "assets/photo-placeholder.svg".to_string(),
            indent_unit: 16,
            thousands_separator: ' ',
            currency: "$".to_string(),
        }
    }
}
