//! Codec for the nested-tag markup dialect spoken by the Qantani
//! payment gateway.
//!
//! The wire format looks like XML but is not XML: attributes carry no
//! meaning, empty elements fold to `<name/>`, and repeated same-name
//! siblings stand for lists. This crate converts between that text form
//! and an in-memory [`Node`] tree, in both directions:
//!
//! - [`generate`] walks a tree and emits markup text
//! - [`parse`] reads markup text back into an equivalent tree
//!
//! # Quick start
//!
//! ```
//! use markup::{Node, Object, Options, generate, parse};
//!
//! let mut root = Object::new();
//! root.insert("Name", Node::from("IDEAL.GETBANKS"));
//! root.insert("Version", Node::from(1));
//!
//! let mut tree = Object::new();
//! tree.insert("Action", Node::Object(root));
//!
//! let text = generate(&Node::Object(tree), &Options::default()).unwrap();
//! assert_eq!(text, "<Action><Name>IDEAL.GETBANKS</Name><Version>1</Version></Action>");
//!
//! let back = parse(&text).unwrap();
//! assert_eq!(generate(&back, &Options::default()).unwrap(), text);
//! ```
//!
//! Both halves are pure functions over their input: no I/O, no state
//! shared across calls.

mod error;
mod generate;
mod node;
mod parse;

pub use error::{Error, Result};
pub use generate::{Declaration, Options, generate};
pub use node::{Node, Object};
pub use parse::parse;
