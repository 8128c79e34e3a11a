pub mod mutation;

pub use mutation::{speculate, speculate_removal};
