//! Serialisable chart payloads for the dashboard pages
//!
//! No rendering happens here: each builder turns catalog aggregates into
//! plain data structures (node/link arrays, recursive trees, column series)
//! that a charting front-end or the CLI's JSON output consumes as-is.

pub mod sankey;
pub mod timeline;
pub mod tree;

pub use sankey::{four_level, three_level, SankeyDiagram, SankeyLink, SankeyNode};
pub use timeline::{stacked, waterfall, StackedSeries, WaterfallSeries};
pub use tree::{explorer_tree, TreeNode};
