pub mod disjoint_sets;
pub mod generator;

pub use crate::disjoint_sets::DisjointSets;
pub use crate::generator::{edge_universe, generate, Edge, Maze};
