//! CSS selector construction and rendering
//!
//! This module implements selector building per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/): compound
//! selectors are accumulated fragment by fragment under the grammar's
//! ordering and uniqueness rules, and complex selectors join compound
//! selectors with combinators.

use strum_macros::Display;

use crate::error::SelectorError;

/// The kind of a selector fragment, in CSS grammar order.
///
/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// The declaration order is the canonical order fragments appear in a
/// compound selector (`element#id.class[attr]:pseudo-class::pseudo-element`),
/// so the derived `Ord` doubles as the validation sort key: a fragment may
/// only be added if no fragment of a strictly greater kind is already
/// present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display)]
pub enum SelectorKind {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    /// "A type selector is the name of a document language element type."
    ///
    /// Examples: `div`, `p`, `table`
    #[strum(serialize = "element")]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    /// "An ID selector is a hash (#, U+0023) immediately followed by the
    /// ID value, which is an identifier."
    ///
    /// Examples: `#main`, `#data`
    #[strum(serialize = "id")]
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    /// "The class selector is given as a full stop (. U+002E) immediately
    /// followed by an identifier."
    ///
    /// Examples: `.container`, `.draggable`
    #[strum(serialize = "class")]
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    /// An attribute condition, carried verbatim between square brackets.
    ///
    /// Examples: `[href]`, `[href$=".png"]`
    #[strum(serialize = "attribute")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    /// A pseudo-class name, prefixed with a single colon when rendered.
    ///
    /// Examples: `:focus`, `:nth-of-type(even)`
    #[strum(serialize = "pseudo-class")]
    PseudoClass,

    /// [§ 11 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    /// A pseudo-element name, prefixed with a double colon when rendered.
    ///
    /// Examples: `::before`, `::first-line`
    #[strum(serialize = "pseudo-element")]
    PseudoElement,
}

/// Rendering to canonical CSS selector text.
///
/// Both selector node kinds implement this, which is what lets
/// [`ComplexSelector`] treat its children polymorphically.
pub trait Render {
    /// Produce the canonical string form of this node.
    ///
    /// Rendering is pure: it performs no mutation and repeated calls
    /// return identical strings.
    #[must_use]
    fn render(&self) -> String;
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator, and represents a set of simultaneous
/// conditions on a single element."
///
/// A fluent accumulator for one compound selector. Fragments must be added
/// in grammar order; type, ID, and pseudo-element fragments may appear at
/// most once. Violations are construction errors, never silently corrected,
/// and leave no partial mutation behind — although since each `with_*` call
/// consumes the builder, a failed chain is discarded wholesale.
///
/// Values are created through the [`crate::builder`] facade:
///
/// ```
/// use bilby_css::{Render, builder};
///
/// let selector = builder::id("main").with_class("container")?.with_class("editable")?;
/// assert_eq!(selector.render(), "#main.container.editable");
/// # Ok::<(), bilby_css::SelectorError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundSelector {
    /// [§ 5.1] The type selector, at most one.
    element: Option<String>,
    /// [§ 6.7] The ID selector, at most one.
    id: Option<String>,
    /// [§ 6.6] Class selectors, in insertion order, duplicates allowed.
    classes: Vec<String>,
    /// [§ 6.4] Attribute conditions, in insertion order.
    attributes: Vec<String>,
    /// [§ 4] Pseudo-classes, in insertion order.
    pseudo_classes: Vec<String>,
    /// [§ 11] The pseudo-element, at most one.
    pseudo_element: Option<String>,
    /// High-water mark: the greatest kind added so far. Ordering is
    /// validated with a single comparison against this, never by
    /// re-scanning the fields above.
    high_water: Option<SelectorKind>,
}

impl CompoundSelector {
    /// Construct a compound selector holding a single fragment.
    ///
    /// Seeding an empty set cannot violate ordering or uniqueness, so this
    /// is infallible. Only the builder facade creates selectors.
    pub(crate) fn seeded(kind: SelectorKind, value: String) -> Self {
        let mut selector = Self {
            element: None,
            id: None,
            classes: Vec::new(),
            attributes: Vec::new(),
            pseudo_classes: Vec::new(),
            pseudo_element: None,
            high_water: None,
        };
        match kind {
            SelectorKind::Element => selector.element = Some(value),
            SelectorKind::Id => selector.id = Some(value),
            SelectorKind::Class => selector.classes.push(value),
            SelectorKind::Attribute => selector.attributes.push(value),
            SelectorKind::PseudoClass => selector.pseudo_classes.push(value),
            SelectorKind::PseudoElement => selector.pseudo_element = Some(value),
        }
        selector.high_water = Some(kind);
        selector
    }

    /// Reject a fragment whose kind falls below the high-water mark.
    ///
    /// "Selector parts should be arranged in the following order: element,
    /// id, class, attribute, pseudo-class, pseudo-element." Equal-kind
    /// additions are legal here; singleton kinds catch repeats through
    /// their duplicate check instead.
    fn check_order(&self, attempted: SelectorKind) -> Result<(), SelectorError> {
        match self.high_water {
            Some(high_water) if attempted < high_water => Err(SelectorError::OrderViolation {
                attempted,
                high_water,
            }),
            _ => Ok(()),
        }
    }

    /// Reject a second value for a singleton slot.
    fn check_vacant(occupied: bool, kind: SelectorKind) -> Result<(), SelectorError> {
        if occupied {
            Err(SelectorError::DuplicateFragment { kind })
        } else {
            Ok(())
        }
    }

    /// Add a type selector. [§ 5.1](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if a type selector is already
    /// present; [`SelectorError::OrderViolation`] if any fragment of a
    /// greater kind has been added.
    pub fn with_element(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        Self::check_vacant(self.element.is_some(), SelectorKind::Element)?;
        self.check_order(SelectorKind::Element)?;
        self.element = Some(value.into());
        self.high_water = Some(SelectorKind::Element);
        Ok(self)
    }

    /// Add an ID selector. [§ 6.7](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if an ID is already present;
    /// [`SelectorError::OrderViolation`] if any fragment of a greater kind
    /// has been added.
    pub fn with_id(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        Self::check_vacant(self.id.is_some(), SelectorKind::Id)?;
        self.check_order(SelectorKind::Id)?;
        self.id = Some(value.into());
        self.high_water = Some(SelectorKind::Id);
        Ok(self)
    }

    /// Append a class selector. [§ 6.6](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Classes are unbounded and may repeat; insertion order is preserved
    /// in the rendered output.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if any fragment of a greater kind
    /// has been added.
    pub fn with_class(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(SelectorKind::Class)?;
        self.classes.push(value.into());
        self.high_water = Some(SelectorKind::Class);
        Ok(self)
    }

    /// Append an attribute condition. [§ 6.4](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// The condition is opaque to the builder and rendered verbatim between
    /// square brackets, e.g. `href$=".png"` → `[href$=".png"]`.
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if any fragment of a greater kind
    /// has been added.
    pub fn with_attribute(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(SelectorKind::Attribute)?;
        self.attributes.push(value.into());
        self.high_water = Some(SelectorKind::Attribute);
        Ok(self)
    }

    /// Append a pseudo-class. [§ 4](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// # Errors
    ///
    /// [`SelectorError::OrderViolation`] if any fragment of a greater kind
    /// has been added.
    pub fn with_pseudo_class(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        self.check_order(SelectorKind::PseudoClass)?;
        self.pseudo_classes.push(value.into());
        self.high_water = Some(SelectorKind::PseudoClass);
        Ok(self)
    }

    /// Add a pseudo-element. [§ 11](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// # Errors
    ///
    /// [`SelectorError::DuplicateFragment`] if a pseudo-element is already
    /// present. No kind ranks above pseudo-element, so ordering cannot be
    /// violated; the check is still made for uniformity.
    pub fn with_pseudo_element(mut self, value: impl Into<String>) -> Result<Self, SelectorError> {
        Self::check_vacant(self.pseudo_element.is_some(), SelectorKind::PseudoElement)?;
        self.check_order(SelectorKind::PseudoElement)?;
        self.pseudo_element = Some(value.into());
        self.high_water = Some(SelectorKind::PseudoElement);
        Ok(self)
    }
}

impl Render for CompoundSelector {
    /// [§ 4.2](https://www.w3.org/TR/selectors-4/#compound)
    ///
    /// Concatenate every present fragment in grammar order, each formatted
    /// per its kind. No separators are inserted — in a compound selector,
    /// adjacency itself is the separator.
    fn render(&self) -> String {
        let mut out = String::new();
        if let Some(element) = &self.element {
            out.push_str(element);
        }
        if let Some(id) = &self.id {
            out.push('#');
            out.push_str(id);
        }
        for class in &self.classes {
            out.push('.');
            out.push_str(class);
        }
        for attribute in &self.attributes {
            out.push('[');
            out.push_str(attribute);
            out.push(']');
        }
        for pseudo_class in &self.pseudo_classes {
            out.push(':');
            out.push_str(pseudo_class);
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            out.push_str("::");
            out.push_str(pseudo_element);
        }
        out
    }
}

/// A child of a [`ComplexSelector`].
///
/// Exactly the three things that can appear in a combinator chain: a
/// compound selector, a nested complex selector, or a bare combinator
/// token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorNode {
    /// A compound selector, rendered verbatim.
    Compound(CompoundSelector),
    /// A nested complex selector, rendered verbatim. Any spacing it needs
    /// comes from its own combinator tokens.
    Complex(ComplexSelector),
    /// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
    /// A combinator token, rendered with a single space on each side.
    ///
    /// Tokens are opaque strings for forward compatibility; only `' '`,
    /// `'+'`, `'~'`, and `'>'` are meaningful per CSS. The descendant
    /// combinator `' '` therefore renders as three spaces (its padding
    /// plus the literal space), which is the canonical output here.
    Combinator(String),
}

impl From<CompoundSelector> for SelectorNode {
    fn from(selector: CompoundSelector) -> Self {
        Self::Compound(selector)
    }
}

impl From<ComplexSelector> for SelectorNode {
    fn from(selector: ComplexSelector) -> Self {
        Self::Complex(selector)
    }
}

impl Render for SelectorNode {
    fn render(&self) -> String {
        match self {
            Self::Compound(compound) => compound.render(),
            Self::Complex(complex) => complex.render(),
            Self::Combinator(token) => format!(" {token} "),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors
/// separated by combinators."
///
/// An ordered sequence of selector nodes interleaved with combinator
/// tokens, built through [`crate::builder::combine`]. Children are moved
/// in by value, so a node can never end up inside its own subtree and the
/// chain is acyclic by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplexSelector {
    /// Children in left-to-right order. Trees built through the facade
    /// alternate node, combinator, node (exactly three children).
    nodes: Vec<SelectorNode>,
}

impl ComplexSelector {
    /// Construct the three-child chain `[left, combinator, right]`.
    pub(crate) fn from_parts(left: SelectorNode, combinator: String, right: SelectorNode) -> Self {
        Self {
            nodes: vec![left, SelectorNode::Combinator(combinator), right],
        }
    }
}

impl Render for ComplexSelector {
    /// Visit children left to right and concatenate their renderings,
    /// yielding `left + " " + token + " " + right` for a facade-built
    /// chain.
    fn render(&self) -> String {
        self.nodes.iter().map(Render::render).collect()
    }
}
