//! Exposes the resources a command buffer records against.
//!
//! The command buffer never owns any of these. It only resolves their native handles at the moment a command is
//! recorded, and borrows them for as long as they stay bound.

pub mod buffer;
pub mod pass;
pub mod texture;
