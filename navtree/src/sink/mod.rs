//! Host UI abstraction.
//!
//! The renderer never touches a concrete toolkit. It appends elements,
//! toggles their visibility and asks for their height through [`UiSink`].

mod element;

pub use element::{Element, ElementTree, Line};

use crate::glyph::Glyph;

/// Handle to an element owned by the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(usize);

impl ElementId {
    /// Wraps a host-specific element index.
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// The host-specific element index.
    pub fn raw(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "el-{}", self.0)
    }
}

/// What kind of element the renderer is asking the host to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Generic host container (the element the tree is mounted into).
    Container,
    /// Ordered list of rows.
    List,
    /// One entry: its item line plus an optional nested list.
    Row,
    /// The visible line of a row: guides, connector and label.
    Item,
    /// Clickable control wrapping a branch connector.
    Toggle,
    /// A connector or indent guide.
    Glyph(Glyph),
    /// Row text. `href` is `None` for entries without a page.
    Label { text: String, href: Option<String> },
}

/// Capabilities the renderer needs from a host UI.
pub trait UiSink {
    /// Creates an element of `kind` as the last child of `parent`.
    fn append_child(&mut self, parent: ElementId, kind: ElementKind) -> ElementId;

    /// Shows or hides an element and its descendants.
    fn set_visible(&mut self, element: ElementId, visible: bool);

    /// Rows the element occupies when shown, ignoring its own clip.
    fn measure_height(&self, element: ElementId) -> u16;

    /// Limits the element to its first `height` rows; `None` removes the limit.
    fn set_clip_height(&mut self, element: ElementId, height: Option<u16>);

    /// Replaces the glyph drawn by a [`ElementKind::Glyph`] element.
    fn set_glyph(&mut self, element: ElementId, glyph: Glyph);

    /// Applies or removes the selected-row style and identifier.
    fn set_selected(&mut self, element: ElementId, selected: bool);

    /// Height of the visible viewport, excluding any header or footer.
    fn viewport_height(&self) -> u16;

    /// Moves the viewport top to the row of `element` plus `offset`.
    /// A negative offset leaves that many rows above the element.
    fn scroll_to(&mut self, element: ElementId, offset: i32);
}
