pub mod cli;
pub mod driver;
pub mod hash;
pub mod kmer;
pub mod sample;
pub mod sequence;

pub use driver::{minimize, Algorithm, MinimizeArgs};
pub use hash::Hasher;
pub use kmer::KMer;
pub use sample::Sampler;
pub use sequence::PackedSequence;
