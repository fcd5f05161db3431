//! Declarative display fragments produced by cell rendering.
//!
//! Fragments are plain data. The host UI walks the tree and maps each
//! variant onto its own widgets; nothing here draws. Rendering never
//! fails: absent data becomes [`Fragment::Empty`], which hosts show as
//! the em-dash affordance.

/// Text emphasis level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    #[default]
    Regular,
    Bold,
    /// Visually de-emphasized secondary text.
    Muted,
}

/// Icons rendered inside synthetic cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    /// Non-interactive drag affordance; drag behavior attaches at the
    /// row level, not here.
    DragHandle,
    Edit,
    Delete,
}

/// One renderable piece of cell content.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    /// Absent value; hosts render the em-dash affordance.
    Empty,
    /// A run of text.
    Text { content: String, emphasis: Emphasis },
    /// Thumbnail image at the host's fixed thumbnail box.
    Photo { url: String },
    /// Fixed-size indicator dot. An unfilled dot keeps the same bounding
    /// box as a filled one so row heights do not jump.
    Dot { filled: bool },
    /// Anchor with an optional descriptive line underneath.
    Anchor {
        label: String,
        href: String,
        description: Option<String>,
    },
    /// Status badge keyed by its text.
    Badge { status: String },
    /// Primary line over a de-emphasized secondary line.
    Stacked {
        primary: Box<Fragment>,
        secondary: Box<Fragment>,
    },
    /// One fragment per line.
    Lines(Vec<Fragment>),
    /// An icon affordance.
    Icon(Icon),
}

impl Fragment {
    /// Regular text.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            emphasis: Emphasis::Regular,
        }
    }

    /// Bold text.
    pub fn bold(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            emphasis: Emphasis::Bold,
        }
    }

    /// De-emphasized text.
    pub fn muted(content: impl Into<String>) -> Self {
        Self::Text {
            content: content.into(),
            emphasis: Emphasis::Muted,
        }
    }

    /// Anchor without a description line.
    pub fn anchor(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Anchor {
            label: label.into(),
            href: href.into(),
            description: None,
        }
    }

    /// Check for the empty affordance.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}
