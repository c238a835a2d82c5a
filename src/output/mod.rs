//! Output generation for the sgf CLI application

use serde::Serialize;
use std::path::Path;
use tinytemplate::TinyTemplate;
use tracing::debug;

use sgf::language::{Collection, GameTree};

static TEMPLATE: &str = r#"{filename}: {trees} game tree(s), {nodes} node(s), {variations} variation(s)
{{ for tree in details }}  tree {tree.number}: {tree.nodes} node(s), {tree.variations} variation(s), main line of {tree.main} node(s)
{{ endfor }}"#;

#[derive(Serialize)]
struct Context {
    filename: String,
    trees: usize,
    nodes: usize,
    variations: usize,
    details: Vec<TreeContext>,
}

#[derive(Serialize)]
struct TreeContext {
    number: usize,
    nodes: usize,
    variations: usize,
    main: usize,
}

/// Length of the line of play reached by always taking the first variation.
fn main_line(tree: &GameTree) -> usize {
    let mut length = 0;
    let mut current = Some(tree);

    while let Some(tree) = current {
        length += tree
            .sequence()
            .len();
        current = tree.variation(0);
    }

    length
}

pub fn summary(filename: &Path, collection: &Collection) -> Result<String, tinytemplate::error::Error> {
    let details: Vec<TreeContext> = collection
        .iter()
        .enumerate()
        .map(|(i, tree)| TreeContext {
            number: i + 1,
            nodes: tree.node_count(),
            variations: tree.variation_count(),
            main: main_line(tree),
        })
        .collect();

    let context = Context {
        filename: filename
            .to_string_lossy()
            .to_string(),
        trees: collection.len(),
        nodes: details
            .iter()
            .map(|tree| tree.nodes)
            .sum(),
        variations: details
            .iter()
            .map(|tree| tree.variations)
            .sum(),
        details,
    };

    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&tinytemplate::format_unescaped);
    tt.add_template("summary", TEMPLATE)?;

    let rendered = tt.render("summary", &context)?;
    debug!("Rendered summary of {} bytes", rendered.len());

    Ok(rendered)
}
