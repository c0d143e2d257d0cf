use crate::flags::FlagKey;

/// Which persisted flag an invocation asks to flip, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleKind {
    None,
    PreviewVisibility,
    PageLayout,
}

impl ToggleKind {
    pub fn flag(&self) -> Option<FlagKey> {
        match self {
            ToggleKind::None => None,
            ToggleKind::PreviewVisibility => Some(FlagKey::ShowPreviewImage),
            ToggleKind::PageLayout => Some(FlagKey::HorizontalText),
        }
    }
}

/// Parameters one controller session is started with.
///
/// `passthrough_text` short-circuits everything else: no toggle, no grant,
/// no worker. A toggle may ride on an otherwise plain launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub passthrough_text: Option<String>,
    pub toggle: ToggleKind,
}

impl InvocationRequest {
    pub fn plain_launch() -> Self {
        Self {
            passthrough_text: None,
            toggle: ToggleKind::None,
        }
    }

    pub fn toggle_preview_visibility() -> Self {
        Self {
            passthrough_text: None,
            toggle: ToggleKind::PreviewVisibility,
        }
    }

    pub fn toggle_page_layout() -> Self {
        Self {
            passthrough_text: None,
            toggle: ToggleKind::PageLayout,
        }
    }

    pub fn passthrough(text: impl Into<String>) -> Self {
        Self {
            passthrough_text: Some(text.into()),
            toggle: ToggleKind::None,
        }
    }
}
