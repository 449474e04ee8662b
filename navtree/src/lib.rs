//! Lazy, expandable navigation tree driven by a static nested-array table.
//!
//! The renderer is toolkit-agnostic: it talks to the host UI through
//! [`UiSink`]. [`ElementTree`] is an in-memory sink suitable for terminals
//! and tests.

pub mod config;
pub mod error;
pub mod glyph;
pub mod locate;
pub mod renderer;
pub mod sink;
pub mod spec;
pub mod transition;

pub use config::RendererConfig;
pub use error::NavTreeError;
pub use glyph::Glyph;
pub use locate::{INDEX_PAGE, find_path, locate_path};
pub use renderer::{NodeId, TreeNode, TreeRenderer};
pub use sink::{ElementId, ElementKind, ElementTree, UiSink};
pub use spec::{NavData, TreeNodeSpec};
pub use transition::{Easing, RevealDirection, Transition, TransitionConfig};
