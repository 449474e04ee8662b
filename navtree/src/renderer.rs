//! Lazy tree renderer.
//!
//! Nodes live in an append-only arena indexed by [`NodeId`]. A node's
//! children are created the first time it is expanded and are kept for the
//! rest of the session; collapsing only hides them.
//!
//! # Example
//!
//! ```
//! use navtree::{ElementTree, NavData, RendererConfig, TreeNodeSpec, TreeRenderer};
//!
//! let data = NavData::new(vec![
//!     TreeNodeSpec::leaf("A", "a.html"),
//!     TreeNodeSpec::branch("B", None, vec![TreeNodeSpec::leaf("C", "c.html")]),
//! ]);
//! let mut sink = ElementTree::new(20);
//! let host = sink.root();
//! let mut tree = TreeRenderer::build_root(&mut sink, data, host, RendererConfig::default());
//!
//! let selected = tree.initialize(&mut sink, "c.html");
//! assert_eq!(tree.node(selected.unwrap()).unwrap().label(), "C");
//! ```

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::config::RendererConfig;
use crate::glyph::Glyph;
use crate::locate::locate_path_with_fallback;
use crate::sink::{ElementId, ElementKind, UiSink};
use crate::spec::{NavData, TreeNodeSpec};
use crate::transition::{RevealDirection, Transition, TransitionConfig};

/// Index of a node in the renderer's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The invisible node wrapping the top-level table.
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// A materialized entry.
#[derive(Debug, Clone)]
pub struct TreeNode {
    label: String,
    link: Option<String>,
    children_spec: Option<Arc<[TreeNodeSpec]>>,
    depth: u16,
    is_last: bool,
    expanded: bool,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    children_materialized: bool,
    glyph: Option<Glyph>,
    elements: NodeElements,
}

/// Host elements backing one node.
#[derive(Debug, Clone, Default)]
struct NodeElements {
    row: Option<ElementId>,
    item: Option<ElementId>,
    connector: Option<ElementId>,
    toggle: Option<ElementId>,
    label: Option<ElementId>,
    /// Created on first use; hidden until the node is expanded.
    list: Option<ElementId>,
}

impl TreeNode {
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn link(&self) -> Option<&str> {
        self.link.as_deref()
    }

    /// Distance from the root; top-level entries are at depth 1.
    pub fn depth(&self) -> u16 {
        self.depth
    }

    /// Whether this is the final sibling.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Materialized children, in table order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn children_materialized(&self) -> bool {
        self.children_materialized
    }

    pub fn has_children(&self) -> bool {
        self.children_spec.as_ref().is_some_and(|c| !c.is_empty())
    }

    /// Current connector glyph. `None` for the root.
    pub fn glyph(&self) -> Option<Glyph> {
        self.glyph
    }

    /// The item line element (carries the selected style).
    pub fn item_element(&self) -> Option<ElementId> {
        self.elements.item
    }

    /// The connector glyph element.
    pub fn connector_element(&self) -> Option<ElementId> {
        self.elements.connector
    }

    /// The clickable toggle control; only branches have one.
    pub fn toggle_element(&self) -> Option<ElementId> {
        self.elements.toggle
    }

    pub fn label_element(&self) -> Option<ElementId> {
        self.elements.label
    }

    /// The children list, if it has been created.
    pub fn list_element(&self) -> Option<ElementId> {
        self.elements.list
    }
}

/// Tree state for one navigation panel.
#[derive(Debug)]
pub struct TreeRenderer {
    config: RendererConfig,
    data: NavData,
    host: ElementId,
    nodes: Vec<TreeNode>,
    selected: Option<NodeId>,
    /// Toggle controls and link-less branch labels, mapped to their node.
    activators: HashMap<ElementId, NodeId>,
}

impl TreeRenderer {
    /// Mounts an empty tree for `data` into `host`.
    ///
    /// Only the root's list is created; no rows are built until
    /// [`initialize`](Self::initialize) or an expansion asks for them.
    pub fn build_root<S: UiSink + ?Sized>(
        sink: &mut S,
        data: NavData,
        host: ElementId,
        config: RendererConfig,
    ) -> Self {
        let list = sink.append_child(host, ElementKind::List);
        let root = TreeNode {
            label: String::new(),
            link: None,
            children_spec: (!data.is_empty()).then(|| data.shared()),
            depth: 0,
            is_last: false,
            expanded: false,
            parent: None,
            children: Vec::new(),
            children_materialized: false,
            glyph: None,
            elements: NodeElements {
                list: Some(list),
                ..Default::default()
            },
        };

        Self {
            config,
            data,
            host,
            nodes: vec![root],
            selected: None,
            activators: HashMap::new(),
        }
    }

    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    pub fn data(&self) -> &NavData {
        &self.data
    }

    /// The element the tree is mounted into.
    pub fn host(&self) -> ElementId {
        self.host
    }

    pub fn node(&self, id: NodeId) -> Option<&TreeNode> {
        self.nodes.get(id.0)
    }

    pub fn root(&self) -> &TreeNode {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Number of materialized nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The `index`-th materialized child of `parent`.
    pub fn child(&self, parent: NodeId, index: usize) -> Option<NodeId> {
        self.node(parent)?.children.get(index).copied()
    }

    /// Follows child indices down from the root through materialized nodes.
    pub fn node_at(&self, path: &[usize]) -> Option<NodeId> {
        path.iter()
            .try_fold(NodeId::ROOT, |node, &index| self.child(node, index))
    }

    /// First materialized node with the given label, in creation order.
    pub fn find_label(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .skip(1)
            .position(|n| n.label == label)
            .map(|i| NodeId(i + 1))
    }

    /// Expanded nodes, in creation order.
    pub fn expanded_nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter(|(_, n)| n.expanded)
            .map(|(i, _)| NodeId(i))
    }

    /// The node marked selected by the last [`initialize`](Self::initialize).
    pub fn selected(&self) -> Option<NodeId> {
        self.selected
    }

    /// Node activated by clicking `element`, if any.
    pub fn activator(&self, element: ElementId) -> Option<NodeId> {
        self.activators.get(&element).copied()
    }

    /// Image paths for the glyphs of a row, indent guides first, prefixed
    /// with the configured `relpath`. Empty for the root.
    pub fn row_images(&self, id: NodeId) -> Vec<String> {
        let Some(node) = self.node(id) else {
            return Vec::new();
        };
        let (Some(parent), Some(glyph)) = (node.parent, node.glyph) else {
            return Vec::new();
        };
        self.indent_guides(parent)
            .into_iter()
            .chain(std::iter::once(glyph))
            .map(|g| g.image_path(&self.config.relpath))
            .collect()
    }

    // -------------------------------------------------------------------------
    // Materialization
    // -------------------------------------------------------------------------

    /// Builds the child nodes and rows of `id` once.
    ///
    /// Later calls return immediately. Leaves have nothing to build.
    pub fn materialize_children<S: UiSink + ?Sized>(&mut self, sink: &mut S, id: NodeId) {
        let Some(node) = self.nodes.get(id.0) else {
            return;
        };
        if node.children_materialized {
            return;
        }
        let Some(specs) = node.children_spec.clone() else {
            return;
        };

        let list = self.children_list(sink, id);
        let last = specs.len().saturating_sub(1);
        for (index, spec) in specs.iter().enumerate() {
            let child = self.new_node(sink, id, list, spec, index == last);
            self.nodes[id.0].children.push(child);
        }
        self.nodes[id.0].children_materialized = true;
        log::debug!("Materialized {} children of {}", specs.len(), id);
    }

    /// The list holding `id`'s rows, created hidden on first use.
    fn children_list<S: UiSink + ?Sized>(&mut self, sink: &mut S, id: NodeId) -> ElementId {
        let elements = &self.nodes[id.0].elements;
        if let Some(list) = elements.list {
            return list;
        }
        let parent = elements.row.unwrap_or(self.host);
        let list = sink.append_child(parent, ElementKind::List);
        sink.set_visible(list, false);
        self.nodes[id.0].elements.list = Some(list);
        list
    }

    fn new_node<S: UiSink + ?Sized>(
        &mut self,
        sink: &mut S,
        parent: NodeId,
        list: ElementId,
        spec: &TreeNodeSpec,
        is_last: bool,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        let depth = self.nodes[parent.0].depth + 1;

        let row = sink.append_child(list, ElementKind::Row);
        let item = sink.append_child(row, ElementKind::Item);

        for guide in self.indent_guides(parent) {
            sink.append_child(item, ElementKind::Glyph(guide));
        }

        let has_children = spec.has_children();
        let glyph = Glyph::connector(has_children, is_last, false);
        let (toggle, connector) = if has_children {
            let toggle = sink.append_child(item, ElementKind::Toggle);
            let connector = sink.append_child(toggle, ElementKind::Glyph(glyph));
            (Some(toggle), connector)
        } else {
            (None, sink.append_child(item, ElementKind::Glyph(glyph)))
        };

        let href = spec
            .link
            .as_ref()
            .map(|link| format!("{}{}", self.config.relpath, link));
        let nolink = href.is_none();
        let label = sink.append_child(
            item,
            ElementKind::Label {
                text: spec.label.clone(),
                href,
            },
        );

        if let Some(toggle) = toggle {
            self.activators.insert(toggle, id);
            if nolink {
                self.activators.insert(label, id);
            }
        }

        self.nodes.push(TreeNode {
            label: spec.label.clone(),
            link: spec.link.clone(),
            children_spec: spec.children.clone(),
            depth,
            is_last,
            expanded: false,
            parent: Some(parent),
            children: Vec::new(),
            children_materialized: false,
            glyph: Some(glyph),
            elements: NodeElements {
                row: Some(row),
                item: Some(item),
                connector: Some(connector),
                toggle,
                label: Some(label),
                list: None,
            },
        });
        id
    }

    /// Guides for a new child of `parent`, outermost ancestor first.
    ///
    /// Every ancestor below the root contributes one guide: a vertical line
    /// while it still has siblings below, blank otherwise.
    fn indent_guides(&self, parent: NodeId) -> Vec<Glyph> {
        let mut guides = Vec::new();
        let mut current = Some(parent);
        while let Some(id) = current
            && id != NodeId::ROOT
        {
            let node = &self.nodes[id.0];
            guides.push(Glyph::indent(node.is_last));
            current = node.parent;
        }
        guides.reverse();
        guides
    }

    // -------------------------------------------------------------------------
    // Expand/Collapse
    // -------------------------------------------------------------------------

    /// Flips a branch between collapsed and expanded.
    ///
    /// The state change happens now; the returned transition carries the
    /// reveal. With `immediate` the list is shown or hidden on the spot and
    /// the transition is already settled. Leaves and the root are no-ops.
    pub fn toggle_expand<S: UiSink + ?Sized>(
        &mut self,
        sink: &mut S,
        id: NodeId,
        immediate: bool,
    ) -> Transition {
        match self.node(id) {
            Some(node) if node.expanded => self.collapse(sink, id, immediate),
            Some(_) => self.expand(sink, id, immediate),
            None => Transition::settled(),
        }
    }

    /// Expands a collapsed branch; does nothing if already expanded.
    pub fn expand<S: UiSink + ?Sized>(
        &mut self,
        sink: &mut S,
        id: NodeId,
        immediate: bool,
    ) -> Transition {
        if !self.is_toggleable(id) || self.nodes[id.0].expanded {
            return Transition::settled();
        }

        self.materialize_children(sink, id);
        let list = self.children_list(sink, id);
        self.set_expanded(sink, id, true);
        log::debug!("Expanded {} ({})", id, self.nodes[id.0].label);

        self.reveal(sink, list, RevealDirection::Show, immediate)
    }

    /// Collapses an expanded branch; does nothing if already collapsed.
    pub fn collapse<S: UiSink + ?Sized>(
        &mut self,
        sink: &mut S,
        id: NodeId,
        immediate: bool,
    ) -> Transition {
        if !self.is_toggleable(id) || !self.nodes[id.0].expanded {
            return Transition::settled();
        }

        let list = self.children_list(sink, id);
        self.set_expanded(sink, id, false);
        log::debug!("Collapsed {} ({})", id, self.nodes[id.0].label);

        self.reveal(sink, list, RevealDirection::Hide, immediate)
    }

    fn is_toggleable(&self, id: NodeId) -> bool {
        id != NodeId::ROOT && self.node(id).is_some_and(TreeNode::has_children)
    }

    fn set_expanded<S: UiSink + ?Sized>(&mut self, sink: &mut S, id: NodeId, expanded: bool) {
        let node = &mut self.nodes[id.0];
        node.expanded = expanded;
        let glyph = Glyph::connector(true, node.is_last, expanded);
        node.glyph = Some(glyph);
        if let Some(connector) = node.elements.connector {
            sink.set_glyph(connector, glyph);
        }
    }

    fn reveal<S: UiSink + ?Sized>(
        &self,
        sink: &mut S,
        list: ElementId,
        direction: RevealDirection,
        immediate: bool,
    ) -> Transition {
        let config = if immediate {
            TransitionConfig::instant()
        } else {
            self.config.effective_reveal()
        };
        Transition::begin(sink, list, direction, config, self.config.frame_interval)
    }

    /// Toggles with animation and waits for the reveal to finish.
    ///
    /// After an expansion the selected row is scrolled back to the middle
    /// of the viewport.
    pub async fn toggle<S: UiSink + ?Sized>(&mut self, sink: &mut S, id: NodeId) {
        let transition = self.toggle_expand(sink, id, false);
        transition.run(sink).await;
        if self.node(id).is_some_and(TreeNode::is_expanded) {
            self.center_selected(sink);
        }
    }

    /// Handles a click on a toggle control or a link-less branch label.
    ///
    /// Returns the toggled node, or `None` if `element` is not activatable.
    pub async fn activate<S: UiSink + ?Sized>(
        &mut self,
        sink: &mut S,
        element: ElementId,
    ) -> Option<NodeId> {
        let id = self.activator(element)?;
        self.toggle(sink, id).await;
        Some(id)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Shows the top-level rows, opens the breadcrumb path to `target_url`
    /// and marks its row selected.
    ///
    /// Falls back to the configured fallback page when `target_url` is not
    /// linked. When neither is found the tree is left collapsed with
    /// nothing selected.
    pub fn initialize<S: UiSink + ?Sized>(
        &mut self,
        sink: &mut S,
        target_url: &str,
    ) -> Option<NodeId> {
        self.materialize_children(sink, NodeId::ROOT);
        self.clear_selection(sink);

        let path = locate_path_with_fallback(
            target_url,
            &self.config.fallback_page,
            self.data.entries(),
        )
        .filter(|path| !path.is_empty());
        let Some(path) = path else {
            log::debug!("No navigation entry for {target_url:?}; nothing selected");
            return None;
        };

        let mut current = NodeId::ROOT;
        for index in path {
            current = self.child(current, index)?;
            self.expand(sink, current, true).finish(sink);
        }

        if let Some(item) = self.nodes[current.0].elements.item {
            sink.set_selected(item, true);
        }
        self.selected = Some(current);
        log::debug!(
            "Selected {} ({}) for {:?}",
            current,
            self.nodes[current.0].label,
            target_url
        );
        Some(current)
    }

    /// [`initialize`](Self::initialize), then centers the selected row once
    /// `loaded` resolves.
    ///
    /// `loaded` is only awaited when a row was selected.
    pub async fn initialize_and_center<S, F>(
        &mut self,
        sink: &mut S,
        target_url: &str,
        loaded: F,
    ) -> Option<NodeId>
    where
        S: UiSink + ?Sized,
        F: Future<Output = ()>,
    {
        let selected = self.initialize(sink, target_url)?;
        loaded.await;
        self.center_selected(sink);
        Some(selected)
    }

    /// Scrolls the selected row to the vertical middle of the viewport.
    pub fn center_selected<S: UiSink + ?Sized>(&self, sink: &mut S) {
        let Some(item) = self
            .selected
            .and_then(|id| self.node(id))
            .and_then(TreeNode::item_element)
        else {
            return;
        };
        let offset = -i32::from(sink.viewport_height() / 2);
        sink.scroll_to(item, offset);
    }

    fn clear_selection<S: UiSink + ?Sized>(&mut self, sink: &mut S) {
        if let Some(item) = self
            .selected
            .take()
            .and_then(|id| self.node(id))
            .and_then(TreeNode::item_element)
        {
            sink.set_selected(item, false);
        }
    }
}
