//! Error types for selector construction.
//!
//! Both errors are raised synchronously from the `with_*` builder methods
//! and are unrecoverable for the current chain: the failed call consumed
//! the builder, so the caller starts a fresh one. Rendering and
//! combination never fail.

use thiserror::Error;

use crate::selector::SelectorKind;

/// Errors that can occur while building a compound selector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorError {
    /// A type, ID, or pseudo-element fragment was added a second time.
    ///
    /// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
    /// permit each of these at most once per compound selector.
    #[error("{kind} should not occur more than one time inside the selector")]
    DuplicateFragment {
        /// The kind that was added twice.
        kind: SelectorKind,
    },

    /// A fragment was added below the set's high-water mark.
    ///
    /// Fragments must arrive in grammar order: element, id, class,
    /// attribute, pseudo-class, pseudo-element.
    #[error(
        "selector parts should be arranged in the following order: \
         element, id, class, attribute, pseudo-class, pseudo-element \
         ({attempted} cannot follow {high_water})"
    )]
    OrderViolation {
        /// The kind of the rejected fragment.
        attempted: SelectorKind,
        /// The greatest kind already present in the set.
        high_water: SelectorKind,
    },
}
