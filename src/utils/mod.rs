//! Shared helpers for feed rendering.

pub mod date;
pub mod mime;
pub mod xml;
