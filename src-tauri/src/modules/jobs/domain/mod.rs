pub mod entities;
pub mod reorder;
pub mod repository;
