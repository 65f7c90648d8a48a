pub mod converters;
pub mod projections;
