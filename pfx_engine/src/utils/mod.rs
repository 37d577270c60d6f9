//! Shared utilities for the filter-expression engine

pub mod span;

pub use span::Span;
