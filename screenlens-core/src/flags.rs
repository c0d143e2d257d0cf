/// Persisted boolean preferences the worker reads at startup.
///
/// The string names are part of the on-disk contract; renaming a variant
/// must not rename its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FlagKey {
    /// Show the captured region thumbnail next to recognized text.
    ShowPreviewImage,
    /// Segment text as horizontal lines rather than vertical columns.
    HorizontalText,
}

impl FlagKey {
    pub const ALL: [FlagKey; 2] = [FlagKey::ShowPreviewImage, FlagKey::HorizontalText];

    pub fn name(&self) -> &'static str {
        match self {
            FlagKey::ShowPreviewImage => "show_preview_image",
            FlagKey::HorizontalText => "horizontal_text",
        }
    }

    /// Value reported for a key the store has never seen.
    pub fn default_value(&self) -> bool {
        match self {
            FlagKey::ShowPreviewImage => true,
            FlagKey::HorizontalText => true,
        }
    }
}
