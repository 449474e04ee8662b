//! In-memory element tree implementing [`UiSink`].
//!
//! Renders to plain text lines, one per visible item, which makes it usable
//! both as a terminal host and as an inspectable fixture in tests.

use super::{ElementId, ElementKind, UiSink};
use crate::glyph::Glyph;

#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,
    pub visible: bool,
    /// Maximum rows shown while a reveal is in flight.
    pub clip_height: Option<u16>,
    /// Set on the selected item. Carries the `selected` identifier.
    pub selected: bool,
}

impl Element {
    fn new(kind: ElementKind, parent: Option<ElementId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
            visible: true,
            clip_height: None,
            selected: false,
        }
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Guides, connector and label.
    pub text: String,
    /// The item element this line was rendered from.
    pub item: ElementId,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct ElementTree {
    elements: Vec<Element>,
    viewport_height: u16,
    scroll_offset: u16,
}

impl ElementTree {
    /// Creates a tree holding a single root container.
    pub fn new(viewport_height: u16) -> Self {
        Self {
            elements: vec![Element::new(ElementKind::Container, None)],
            viewport_height,
            scroll_offset: 0,
        }
    }

    /// The root container.
    pub fn root(&self) -> ElementId {
        ElementId(0)
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn scroll_offset(&self) -> u16 {
        self.scroll_offset
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
    }

    /// All rendered rows, top to bottom, ignoring the viewport.
    pub fn lines(&self) -> Vec<Line> {
        let mut out = Vec::new();
        self.render(self.root(), &mut out, false);
        out
    }

    /// Rendered rows inside the viewport.
    pub fn visible_lines(&self) -> Vec<Line> {
        self.lines()
            .into_iter()
            .skip(self.scroll_offset as usize)
            .take(self.viewport_height as usize)
            .collect()
    }

    /// Text of every rendered row.
    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.text).collect()
    }

    /// First label element with the given text.
    pub fn find_label(&self, text: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| matches!(&e.kind, ElementKind::Label { text: t, .. } if t == text))
            .map(ElementId)
    }

    /// The element currently marked selected.
    pub fn selected(&self) -> Option<ElementId> {
        self.elements.iter().position(|e| e.selected).map(ElementId)
    }

    /// Glyph drawn by a glyph element.
    pub fn glyph(&self, id: ElementId) -> Option<Glyph> {
        match self.get(id)?.kind {
            ElementKind::Glyph(glyph) => Some(glyph),
            _ => None,
        }
    }

    /// Row index of `id` within [`lines`](Self::lines), if rendered.
    ///
    /// For containers this is the row of their first rendered item.
    pub fn row_of(&self, id: ElementId) -> Option<usize> {
        self.lines()
            .iter()
            .position(|line| line.item == id || self.is_ancestor(id, line.item))
    }

    fn is_ancestor(&self, ancestor: ElementId, mut id: ElementId) -> bool {
        while let Some(parent) = self.get(id).and_then(|e| e.parent) {
            if parent == ancestor {
                return true;
            }
            id = parent;
        }
        false
    }

    /// Renders `id` into `out`. `measuring` skips the element's own
    /// visibility and clip so the full height can be taken mid-reveal.
    fn render(&self, id: ElementId, out: &mut Vec<Line>, measuring: bool) {
        let Some(element) = self.get(id) else { return };
        if !measuring && !element.visible {
            return;
        }

        if let ElementKind::Item = element.kind {
            out.push(Line {
                text: self.item_text(id),
                item: id,
                selected: element.selected,
            });
            return;
        }

        let start = out.len();
        for &child in &element.children {
            self.render(child, out, false);
        }
        if !measuring && let Some(clip) = element.clip_height {
            out.truncate(start + clip as usize);
        }
    }

    fn item_text(&self, id: ElementId) -> String {
        let mut guides = String::new();
        let mut label = String::new();
        self.collect_text(id, &mut guides, &mut label);
        if label.is_empty() {
            guides
        } else {
            format!("{guides} {label}")
        }
    }

    fn collect_text(&self, id: ElementId, guides: &mut String, label: &mut String) {
        let Some(element) = self.get(id) else { return };
        match &element.kind {
            ElementKind::Glyph(glyph) => guides.push_str(glyph.symbol()),
            ElementKind::Label { text, .. } => label.push_str(text),
            _ => {
                for &child in &element.children {
                    self.collect_text(child, guides, label);
                }
            }
        }
    }

    fn max_scroll(&self) -> usize {
        self.lines()
            .len()
            .saturating_sub(self.viewport_height as usize)
    }
}

impl UiSink for ElementTree {
    fn append_child(&mut self, parent: ElementId, kind: ElementKind) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(Element::new(kind, Some(parent)));
        if let Some(parent) = self.elements.get_mut(parent.0) {
            parent.children.push(id);
        }
        id
    }

    fn set_visible(&mut self, element: ElementId, visible: bool) {
        if let Some(element) = self.elements.get_mut(element.0) {
            element.visible = visible;
        }
    }

    fn measure_height(&self, element: ElementId) -> u16 {
        let mut out = Vec::new();
        self.render(element, &mut out, true);
        u16::try_from(out.len()).unwrap_or(u16::MAX)
    }

    fn set_clip_height(&mut self, element: ElementId, height: Option<u16>) {
        if let Some(element) = self.elements.get_mut(element.0) {
            element.clip_height = height;
        }
    }

    fn set_glyph(&mut self, element: ElementId, glyph: Glyph) {
        if let Some(element) = self.elements.get_mut(element.0)
            && let ElementKind::Glyph(current) = &mut element.kind
        {
            *current = glyph;
        }
    }

    fn set_selected(&mut self, element: ElementId, selected: bool) {
        if let Some(element) = self.elements.get_mut(element.0) {
            element.selected = selected;
        }
    }

    fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    fn scroll_to(&mut self, element: ElementId, offset: i32) {
        let Some(row) = self.row_of(element) else {
            return;
        };
        let target = (row as i64 + offset as i64).clamp(0, self.max_scroll() as i64);
        self.scroll_offset = u16::try_from(target).unwrap_or(u16::MAX);
    }
}
