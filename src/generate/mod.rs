//! Demonstration samples.
//!
//! Produces Uniform[0,1) sequences from a ChaCha20 stream, either from
//! a fixed seed (reproducible) or from OS entropy.

mod sampler;

pub use sampler::SampleGenerator;
