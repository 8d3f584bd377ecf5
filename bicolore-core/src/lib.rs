pub mod error;
pub mod features;
pub mod models;
pub mod simulation;

pub use error::BicoloreError;
