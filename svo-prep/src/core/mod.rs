pub mod debug_tree;
pub mod index;
