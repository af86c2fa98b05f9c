//! Builder facade: one entry point per fragment kind plus `combine`.
//!
//! Each fragment entry point returns a fresh [`CompoundSelector`] seeded
//! with that one fragment; `combine` joins two finished nodes with a
//! combinator token. The facade holds no state — every call is independent
//! and side-effect-free apart from allocating the returned node.
//!
//! ```
//! use bilby_css::{Render, builder};
//!
//! let selector = builder::combine(builder::element("ul"), ">", builder::element("li"));
//! assert_eq!(selector.render(), "ul > li");
//! ```

use crate::selector::{ComplexSelector, CompoundSelector, SelectorKind, SelectorNode};

/// Start a compound selector with a type selector, e.g. `div`.
#[must_use]
pub fn element(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(SelectorKind::Element, name.into())
}

/// Start a compound selector with an ID selector, rendered as `#name`.
#[must_use]
pub fn id(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(SelectorKind::Id, name.into())
}

/// Start a compound selector with a class selector, rendered as `.name`.
#[must_use]
pub fn class(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(SelectorKind::Class, name.into())
}

/// Start a compound selector with an attribute condition, rendered as
/// `[spec]`.
#[must_use]
pub fn attr(spec: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(SelectorKind::Attribute, spec.into())
}

/// Start a compound selector with a pseudo-class, rendered as `:name`.
#[must_use]
pub fn pseudo_class(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(SelectorKind::PseudoClass, name.into())
}

/// Start a compound selector with a pseudo-element, rendered as `::name`.
#[must_use]
pub fn pseudo_element(name: impl Into<String>) -> CompoundSelector {
    CompoundSelector::seeded(SelectorKind::PseudoElement, name.into())
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two selector nodes with a combinator token, producing the
/// three-child chain `[left, combinator, right]`. Both compound and
/// complex selectors are accepted on either side, so chains nest:
///
/// ```
/// use bilby_css::{Render, builder};
///
/// let selector = builder::combine(
///     builder::element("table").with_id("data")?,
///     "~",
///     builder::combine(builder::element("tr"), " ", builder::element("td")),
/// );
/// assert_eq!(selector.render(), "table#data ~ tr   td");
/// # Ok::<(), bilby_css::SelectorError>(())
/// ```
///
/// The token is not validated — any string is accepted for forward
/// compatibility, though only `' '`, `'+'`, `'~'`, `'>'` mean anything
/// in CSS.
#[must_use]
pub fn combine(
    left: impl Into<SelectorNode>,
    combinator: impl Into<String>,
    right: impl Into<SelectorNode>,
) -> ComplexSelector {
    ComplexSelector::from_parts(left.into(), combinator.into(), right.into())
}
