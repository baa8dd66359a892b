pub mod tagset;
pub mod tree;
pub mod triple;
