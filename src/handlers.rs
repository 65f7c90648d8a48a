pub mod health;
pub mod projections;
