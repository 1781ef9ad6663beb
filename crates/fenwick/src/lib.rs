pub mod policy;

mod tree;

pub use policy::{FoldGroup, I64Sum, U64Xor};
pub use tree::FenwickTree;
