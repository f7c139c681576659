//! # keepbest-store
//!
//! Durable record of the best score achieved per problem, and the gate that
//! decides whether a new candidate replaces the saved output.

pub mod outcome;
pub mod store;

pub use outcome::SaveOutcome;
pub use store::{ScoreStore, StoreError};
