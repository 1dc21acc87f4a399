//! Participant identifier hashing

pub mod hasher;

pub use hasher::{derive_ids, participant_id};
