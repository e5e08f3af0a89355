//! Serialisation of a [`Node`] tree into markup text.

use crate::error::{Error, Result};
use crate::node::Node;

/// Generator options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Emit `<name/>` instead of `<name></name>` for empty elements.
    pub fold: bool,
    /// Prepend an `<?xml ...?>` declaration before the root.
    pub declaration: Option<Declaration>,
}

impl Default for Options {
    fn default() -> Self {
        Self::new()
    }
}

impl Options {
    /// Default options: folding on, no declaration.
    #[must_use]
    pub fn new() -> Self {
        Self { fold: true, declaration: None }
    }

    /// Disables folding of empty elements.
    #[must_use]
    pub fn without_fold(mut self) -> Self {
        self.fold = false;
        self
    }

    /// Enables the declaration with the given attributes.
    #[must_use]
    pub fn with_declaration(mut self, declaration: Declaration) -> Self {
        self.declaration = Some(declaration);
        self
    }
}

/// Attributes of the `<?xml ...?>` declaration.
///
/// The emitted attribute order is fixed: `version`, `encoding`, then
/// `standalone` when present. Encoding defaults to `UTF-8`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declaration {
    /// Value for the `encoding` attribute; `UTF-8` when absent.
    pub encoding: Option<String>,
    /// Value for the `standalone` attribute; omitted when absent.
    pub standalone: Option<String>,
}

/// Serialises a tree into markup text.
///
/// The root must be an object; each of its keys becomes one top-level
/// element. Text content is emitted verbatim, without escaping — that
/// matches the gateway protocol, where any needed substitution is the
/// caller's job.
///
/// # Errors
///
/// [`Error::RootNotObject`] when the root is a leaf or a list.
pub fn generate(tree: &Node, options: &Options) -> Result<String> {
    let Node::Object(root) = tree else {
        return Err(Error::RootNotObject);
    };

    let mut out = String::new();

    if let Some(declaration) = &options.declaration {
        write_declaration(&mut out, declaration);
    }

    for (name, value) in root.iter() {
        element(&mut out, name, value, options.fold);
    }

    Ok(out)
}

fn write_declaration(out: &mut String, declaration: &Declaration) {
    out.push_str("<?xml version=\"1.0\" encoding=\"");
    out.push_str(declaration.encoding.as_deref().unwrap_or("UTF-8"));
    out.push('"');
    if let Some(standalone) = &declaration.standalone {
        out.push_str(" standalone=\"");
        out.push_str(standalone);
        out.push('"');
    }
    out.push_str("?>");
}

fn element(out: &mut String, name: &str, node: &Node, fold: bool) {
    if fold && node.is_empty() {
        out.push('<');
        out.push_str(name);
        out.push_str("/>");
        return;
    }

    // A list is emitted as repeated siblings, each reusing the parent key
    // as its tag name. The parser's sibling merge is the exact inverse.
    if let Node::List(items) = node {
        for item in items {
            element(out, name, item, fold);
        }
        return;
    }

    out.push('<');
    out.push_str(name);
    out.push('>');

    match node {
        Node::Object(children) => {
            for (child_name, child) in children.iter() {
                element(out, child_name, child, fold);
            }
        }
        Node::Leaf(text) => out.push_str(text),
        Node::List(_) => unreachable!("lists are handled above"),
    }

    out.push_str("</");
    out.push_str(name);
    out.push('>');
}
