//! # Domain Models
//!
//! Pure types shared by the slices and the infrastructure clients (`serde` only).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.

pub mod config;
pub mod constants;
pub mod content;
pub mod registry;
