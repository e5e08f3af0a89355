//! CLI tool for converting between JSON and gateway markup.
//!
//! # Usage
//!
//! ```bash
//! # Turn a JSON request tree into wire markup
//! converter --input request.json --input-format json --output-format markup
//!
//! # Inspect a captured gateway response as JSON
//! cat response.xml | converter --input-format markup --output-format json
//!
//! # Reproduce the exact wire form, declaration included
//! converter -i request.json --input-format json --output-format markup --declaration
//! ```

use std::fs;
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use markup::{Declaration, Node, Object, Options};
use tracing::debug;

/// Convert between JSON documents and gateway markup.
///
/// Reads a document from input (file or stdin) and writes it to output
/// (file or stdout) in the requested format. Converting a format to
/// itself normalises the document through the tree representation.
#[derive(Parser, Debug)]
#[command(name = "converter")]
#[command(version, about)]
struct Args {
    /// Input file path. If not specified, reads from stdin.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input format.
    #[arg(long, value_enum)]
    input_format: FormatArg,

    /// Output format.
    #[arg(long, value_enum)]
    output_format: FormatArg,

    /// Output file path. If not specified, writes to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Keep empty elements as `<name></name>` instead of `<name/>`.
    #[arg(long)]
    no_fold: bool,

    /// Prepend the `<?xml ...?>` declaration to generated markup.
    #[arg(long)]
    declaration: bool,
}

/// Supported document formats for CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// JSON, object at the root.
    Json,
    /// Gateway markup.
    Markup,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display()))?,
        None => {
            let mut buf = String::new();
            stdin().lock().read_to_string(&mut buf).context("Failed to read stdin")?;
            buf
        }
    };
    debug!(bytes = text.len(), format = ?args.input_format, "read input");

    let tree = match args.input_format {
        FormatArg::Json => {
            let value: serde_json::Value =
                serde_json::from_str(&text).context("Input is not valid JSON")?;
            json_to_tree(&value)?
        }
        FormatArg::Markup => markup::parse(&text).context("Input is not valid markup")?,
    };

    let rendered = match args.output_format {
        FormatArg::Json => {
            serde_json::to_string_pretty(&tree_to_json(&tree)).context("Failed to render JSON")?
        }
        FormatArg::Markup => {
            let mut options = Options::new();
            if args.no_fold {
                options = options.without_fold();
            }
            if args.declaration {
                options = options.with_declaration(Declaration::default());
            }
            markup::generate(&tree, &options).context("Failed to generate markup")?
        }
    };

    match &args.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            writeln!(file, "{rendered}")?;
        }
        None => writeln!(stdout().lock(), "{rendered}")?,
    }
    debug!(bytes = rendered.len(), format = ?args.output_format, "wrote output");

    // Report to stderr so it doesn't interfere with stdout output.
    let count = match &tree {
        Node::Object(root) => root.len(),
        _ => 1,
    };
    eprintln!("Converted {count} top-level element(s)");

    Ok(())
}

/// Maps a JSON value onto the markup tree.
///
/// Objects and arrays carry over directly, numbers and booleans become
/// their text form, and `null` becomes the empty leaf. The JSON root
/// must be an object, same as any markup document.
fn json_to_tree(value: &serde_json::Value) -> Result<Node> {
    use serde_json::Value;

    Ok(match value {
        Value::Null => Node::Leaf(String::new()),
        Value::Bool(b) => Node::Leaf(b.to_string()),
        Value::Number(n) => Node::Leaf(n.to_string()),
        Value::String(s) => Node::Leaf(s.clone()),
        Value::Array(items) => {
            let items: Result<Vec<Node>> = items.iter().map(json_to_tree).collect();
            Node::List(items?)
        }
        Value::Object(map) => {
            let mut object = Object::new();
            for (key, value) in map {
                object.insert(key.as_str(), json_to_tree(value)?);
            }
            Node::Object(object)
        }
    })
}

/// Maps a markup tree back onto JSON, preserving key order.
fn tree_to_json(node: &Node) -> serde_json::Value {
    use serde_json::Value;

    match node {
        Node::Leaf(s) => Value::String(s.clone()),
        Node::List(items) => Value::Array(items.iter().map(tree_to_json).collect()),
        Node::Object(object) => {
            let mut map = serde_json::Map::new();
            for (key, value) in object.iter() {
                map.insert(key.to_string(), tree_to_json(value));
            }
            Value::Object(map)
        }
    }
}
