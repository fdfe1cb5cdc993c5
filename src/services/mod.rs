// Service exports
pub mod directory;

pub use directory::{CandidateDirectory, DirectoryError};
