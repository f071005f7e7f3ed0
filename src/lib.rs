//! A simple ID3 decision tree algorithm
//! for categorical training data.
//!
//! Every attribute takes finitely many discrete values,
//! so a branch node has one child per value
//! observed for its splitting feature.
//! A branch stops growing when its partition becomes pure
//! or no candidate feature remains.
//!
//! # Example
//! ```no_run
//! use minitrees::{Id3, SampleReader};
//!
//! let sample = SampleReader::default()
//!     .file("/path/to/table.json")
//!     .read()
//!     .unwrap();
//!
//! let tree = Id3::new().fit(&sample);
//! println!("{tree}");
//! ```

pub mod sample;
pub mod split_by;
pub mod node;
pub mod id3;
pub mod dtree;

pub use sample::{
    Record,
    Sample,
    SampleReader,
};

pub use split_by::{
    SplitBy,
    entropy,
    conditional_entropy,
};

pub use node::{
    Edge,
    Label,
    Node,
};

pub use id3::Id3;
pub use dtree::DecisionTree;
