pub mod grid;
pub mod lattice;
