//! Terminal output for the rendered window.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};
use navtree::{ElementId, ElementKind, ElementTree};

const FALLBACK_HEIGHT: u16 = 24;

/// Rows available in the attached terminal.
pub fn terminal_height() -> u16 {
    crossterm::terminal::size()
        .map(|(_, rows)| rows)
        .unwrap_or(FALLBACK_HEIGHT)
}

/// Prints the viewport, highlighting the selected row.
pub fn print(sink: &ElementTree, links: bool) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    for line in sink.visible_lines() {
        let mut text = line.text;
        if links && let Some(href) = href_of(sink, line.item) {
            text = format!("{text}  ({href})");
        }
        if line.selected {
            queue!(stdout, PrintStyledContent(text.reverse().bold()), Print("\n"))?;
        } else {
            queue!(stdout, Print(text), Print("\n"))?;
        }
    }
    stdout.flush()
}

fn href_of(sink: &ElementTree, item: ElementId) -> Option<String> {
    sink.get(item)?
        .children
        .iter()
        .find_map(|&child| match &sink.get(child)?.kind {
            ElementKind::Label { href, .. } => href.clone(),
            _ => None,
        })
}
