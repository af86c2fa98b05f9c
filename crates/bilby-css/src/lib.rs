//! CSS selector construction for the Bilby toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selector builder** ([§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class, and pseudo-element fragments
//!   - Grammar-order validation (`element#id.class[attr]:pseudo-class::pseudo-element`)
//!   - Uniqueness enforcement for type, ID, and pseudo-element fragments
//!
//! - **Complex selector composition** ([§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex))
//!   - Combinator-joined selector trees (descendant, child, sibling)
//!   - Uniform rendering over compound and complex nodes
//!
//! - **Builder facade**
//!   - One entry point per fragment kind plus `combine`
//!
//! # Not Implemented
//!
//! - Selector parsing (string → structured data)
//! - Selector matching against a document tree
//! - Specificity calculation

/// Builder facade entry points.
pub mod builder;
/// Error types raised during selector construction.
pub mod error;
/// Selector data model and rendering per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{ComplexSelector, CompoundSelector, Render, SelectorKind, SelectorNode};
