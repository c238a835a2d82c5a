//! Rendering a whole Collection for output

use crate::formatting::formatter::{format_with_layout, Layout};
use crate::formatting::*;
use crate::language::Collection;

/// We do the formatting in two passes. First we convert from the document
/// model into a Vec of "fragments" (Syntax tag, String pairs). Then second
/// we apply the specified renderer to each pair to result in an embellished
/// String.
pub fn render(renderer: &impl Render, collection: &Collection, layout: Layout) -> String {
    // Pass 1: Format document to tagged fragments
    let fragments = format_with_layout(collection, layout);

    // Pass 2: Render tagged fragments to final output
    render_to_string(renderer, fragments)
}

/// Pass 2: apply markup to fragments via style() and combine.
fn render_to_string(renderer: &impl Render, fragments: Vec<(Syntax, String)>) -> String {
    let mut output = String::new();

    for (syntax, content) in fragments {
        let rendered = renderer.style(syntax, &content);
        output.push_str(&rendered);
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }

    output
}
