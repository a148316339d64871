pub mod demo;
pub mod hash;
pub mod sym_table;
pub mod tree;

pub use hash::HashSymbolTable;
pub use sym_table::{Position, Symbol, SymbolTable};
pub use tree::TreeSymbolTable;
