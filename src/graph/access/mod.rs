//! Internal graph accessors and low-level building blocks.
//!
//! This module is intentionally `pub(crate)` so the traversal and search
//! algorithms can share scratch state without exposing it as public API.

pub(crate) mod visited;
