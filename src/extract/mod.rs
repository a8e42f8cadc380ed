pub mod body;
pub mod face;
pub mod sampler;
pub mod undertone;
