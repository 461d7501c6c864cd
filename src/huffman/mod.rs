pub mod builder;
pub mod code_table;
pub mod frequency;
pub mod symbol_weight;
pub mod tree;
