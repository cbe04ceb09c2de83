#![warn(missing_docs)]
//! # Graph input and result output
//!
//! Reads graphs from the line-oriented edge list format, and writes the results of the all-pairs
//! computation back out.
//!
//! ```
//! use pathbox_graph::JohnsonConfig;
//! use pathbox_io::{read_graph, report, TextReport};
//!
//! let graph = read_graph::<i64>("2 1\n1 2 -4\n".as_bytes()).unwrap();
//! let mut out = TextReport::new(Vec::new());
//! report(&graph.all_pairs(&JohnsonConfig::new()), &mut out).unwrap();
//!
//! assert_eq!("0\t-4\ninf\t0\n", String::from_utf8(out.into_inner()).unwrap());
//! ```
pub mod parse;
pub mod report;

pub use parse::{load_graph, read_graph, ParseError};
pub use report::{report, Report, TextReport};
