pub mod clause;
pub mod object;
pub mod predicate;
pub mod subject;
