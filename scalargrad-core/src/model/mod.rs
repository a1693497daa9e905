//! Compositions of layers.

pub mod mlp;

pub use mlp::Mlp;
