//! Struct `Table` represents the training examples.

pub mod table;
pub mod reader;


pub use reader::TableReader;
pub use table::Table;
