pub mod id;
pub mod normalize;
pub mod statistics;
