//! Connector and indent glyphs drawn to the left of each row.

/// One tree-drawing glyph.
///
/// A row is drawn as zero or more indent guides (one per ancestor below the
/// top level) followed by the row's own connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Leaf with siblings below.
    Node,
    /// Leaf that is the last sibling.
    LastNode,
    /// Collapsed branch with siblings below.
    Plus,
    /// Collapsed branch that is the last sibling.
    PlusLast,
    /// Expanded branch with siblings below.
    Minus,
    /// Expanded branch that is the last sibling.
    MinusLast,
    /// Guide under an ancestor that has siblings below.
    VerticalLine,
    /// Guide under an ancestor that was the last sibling.
    Blank,
}

impl Glyph {
    /// Connector for a row's own position.
    pub fn connector(has_children: bool, is_last: bool, expanded: bool) -> Self {
        match (has_children, expanded, is_last) {
            (false, _, false) => Glyph::Node,
            (false, _, true) => Glyph::LastNode,
            (true, false, false) => Glyph::Plus,
            (true, false, true) => Glyph::PlusLast,
            (true, true, false) => Glyph::Minus,
            (true, true, true) => Glyph::MinusLast,
        }
    }

    /// Guide drawn under an ancestor.
    pub fn indent(ancestor_is_last: bool) -> Self {
        if ancestor_is_last {
            Glyph::Blank
        } else {
            Glyph::VerticalLine
        }
    }

    /// Image shipped by the documentation generator for this glyph.
    pub fn image_name(self) -> &'static str {
        match self {
            Glyph::Node => "ftv2node.png",
            Glyph::LastNode => "ftv2lastnode.png",
            Glyph::Plus => "ftv2pnode.png",
            Glyph::PlusLast => "ftv2plastnode.png",
            Glyph::Minus => "ftv2mnode.png",
            Glyph::MinusLast => "ftv2mlastnode.png",
            Glyph::VerticalLine => "ftv2vertline.png",
            Glyph::Blank => "ftv2blank.png",
        }
    }

    /// Image path relative to the current page.
    pub fn image_path(self, relpath: &str) -> String {
        format!("{relpath}{}", self.image_name())
    }

    /// Two-column text rendering for terminal hosts.
    pub fn symbol(self) -> &'static str {
        match self {
            Glyph::Node => "├─",
            Glyph::LastNode => "└─",
            Glyph::Plus => "├+",
            Glyph::PlusLast => "└+",
            Glyph::Minus => "├-",
            Glyph::MinusLast => "└-",
            Glyph::VerticalLine => "│ ",
            Glyph::Blank => "  ",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connector_table() {
        assert_eq!(Glyph::connector(false, false, false), Glyph::Node);
        assert_eq!(Glyph::connector(false, true, true), Glyph::LastNode);
        assert_eq!(Glyph::connector(true, false, false), Glyph::Plus);
        assert_eq!(Glyph::connector(true, true, false), Glyph::PlusLast);
        assert_eq!(Glyph::connector(true, false, true), Glyph::Minus);
        assert_eq!(Glyph::connector(true, true, true), Glyph::MinusLast);
    }

    #[test]
    fn test_image_path_uses_relpath() {
        assert_eq!(Glyph::Blank.image_path("../"), "../ftv2blank.png");
        assert_eq!(Glyph::Plus.image_path(""), "ftv2pnode.png");
    }

    #[test]
    fn test_symbols_are_two_columns() {
        for glyph in [
            Glyph::Node,
            Glyph::LastNode,
            Glyph::Plus,
            Glyph::PlusLast,
            Glyph::Minus,
            Glyph::MinusLast,
            Glyph::VerticalLine,
            Glyph::Blank,
        ] {
            assert_eq!(glyph.symbol().chars().count(), 2, "{glyph:?}");
        }
    }
}
