//! Integration tests for compound and complex selector building.

use bilby_css::{CompoundSelector, Render, SelectorError, SelectorKind, builder};

/// Every fragment kind, in grammar order.
const ALL_KINDS: [SelectorKind; 6] = [
    SelectorKind::Element,
    SelectorKind::Id,
    SelectorKind::Class,
    SelectorKind::Attribute,
    SelectorKind::PseudoClass,
    SelectorKind::PseudoElement,
];

fn seed(kind: SelectorKind) -> CompoundSelector {
    match kind {
        SelectorKind::Element => builder::element("div"),
        SelectorKind::Id => builder::id("main"),
        SelectorKind::Class => builder::class("container"),
        SelectorKind::Attribute => builder::attr("href"),
        SelectorKind::PseudoClass => builder::pseudo_class("focus"),
        SelectorKind::PseudoElement => builder::pseudo_element("before"),
    }
}

fn add(selector: CompoundSelector, kind: SelectorKind) -> Result<CompoundSelector, SelectorError> {
    match kind {
        SelectorKind::Element => selector.with_element("span"),
        SelectorKind::Id => selector.with_id("other"),
        SelectorKind::Class => selector.with_class("extra"),
        SelectorKind::Attribute => selector.with_attribute("type=text"),
        SelectorKind::PseudoClass => selector.with_pseudo_class("hover"),
        SelectorKind::PseudoElement => selector.with_pseudo_element("after"),
    }
}

// Grammar Order Tests
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_all_kinds_in_grammar_order_never_fail() {
    let selector = builder::element("a")
        .with_id("top")
        .and_then(|s| s.with_class("nav"))
        .and_then(|s| s.with_attribute("href"))
        .and_then(|s| s.with_pseudo_class("visited"))
        .and_then(|s| s.with_pseudo_element("first-line"))
        .expect("grammar-order additions must succeed");
    assert_eq!(selector.render(), "a#top.nav[href]:visited::first-line");
}

#[test]
fn test_every_out_of_order_pair_fails() {
    // For each ordered pair (earlier, later), seeding with the later kind
    // and then adding the earlier one must report an order violation
    // carrying both kinds.
    for (i, &earlier) in ALL_KINDS.iter().enumerate() {
        for &later in &ALL_KINDS[i + 1..] {
            let result = add(seed(later), earlier);
            assert_eq!(
                result.unwrap_err(),
                SelectorError::OrderViolation {
                    attempted: earlier,
                    high_water: later,
                },
                "{earlier} after {later} should violate grammar order"
            );
        }
    }
}

#[test]
fn test_equal_kind_additions_are_legal_for_multi_valued_kinds() {
    for kind in [
        SelectorKind::Class,
        SelectorKind::Attribute,
        SelectorKind::PseudoClass,
    ] {
        assert!(add(seed(kind), kind).is_ok(), "{kind} should repeat freely");
    }
}

#[test]
fn test_id_after_class_violates_order() {
    // class('x') then id('y'): id ranks below the class high-water mark.
    let result = builder::class("x").with_id("y");
    assert_eq!(
        result.unwrap_err(),
        SelectorError::OrderViolation {
            attempted: SelectorKind::Id,
            high_water: SelectorKind::Class,
        }
    );
}

// Uniqueness Tests

#[test]
fn test_singleton_kinds_reject_a_second_value() {
    for kind in [
        SelectorKind::Element,
        SelectorKind::Id,
        SelectorKind::PseudoElement,
    ] {
        assert_eq!(
            add(seed(kind), kind).unwrap_err(),
            SelectorError::DuplicateFragment { kind }
        );
    }
}

#[test]
fn test_element_twice_fails_regardless_of_other_fragments() {
    // The duplicate is reported even when an order violation also holds
    // (element ranks below the class high-water mark here).
    let selector = builder::element("a")
        .with_class("nav")
        .expect("class after element is in order");
    assert_eq!(
        selector.with_element("b").unwrap_err(),
        SelectorError::DuplicateFragment {
            kind: SelectorKind::Element,
        }
    );
}

#[test]
fn test_pseudo_element_twice_fails_after_full_chain() {
    let selector = builder::element("p")
        .with_pseudo_element("before")
        .expect("first pseudo-element is legal");
    assert_eq!(
        selector.with_pseudo_element("after").unwrap_err(),
        SelectorError::DuplicateFragment {
            kind: SelectorKind::PseudoElement,
        }
    );
}

// Rendering Tests
// [§ 4.2](https://www.w3.org/TR/selectors-4/#compound) — adjacency is the
// separator; each fragment carries its own prefix.

#[test]
fn test_render_id_and_repeated_classes() {
    let selector = builder::id("main")
        .with_class("container")
        .and_then(|s| s.with_class("editable"))
        .expect("classes after id are in order");
    assert_eq!(selector.render(), "#main.container.editable");
}

#[test]
fn test_render_attribute_and_pseudo_class() {
    let selector = builder::element("a")
        .with_attribute("href$=\".png\"")
        .and_then(|s| s.with_pseudo_class("focus"))
        .expect("attribute and pseudo-class after element are in order");
    assert_eq!(selector.render(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_render_repeats_preserve_insertion_order() {
    let selector = builder::class("first")
        .with_class("second")
        .and_then(|s| s.with_class("first"))
        .and_then(|s| s.with_attribute("a"))
        .and_then(|s| s.with_attribute("b"))
        .and_then(|s| s.with_pseudo_class("hover"))
        .and_then(|s| s.with_pseudo_class("focus"))
        .expect("multi-valued kinds repeat freely");
    assert_eq!(selector.render(), ".first.second.first[a][b]:hover:focus");
}

#[test]
fn test_render_single_fragment_per_facade_entry_point() {
    assert_eq!(builder::element("div").render(), "div");
    assert_eq!(builder::id("main").render(), "#main");
    assert_eq!(builder::class("box").render(), ".box");
    assert_eq!(builder::attr("checked").render(), "[checked]");
    assert_eq!(builder::pseudo_class("hover").render(), ":hover");
    assert_eq!(builder::pseudo_element("after").render(), "::after");
}

#[test]
fn test_render_is_idempotent_and_side_effect_free() {
    let selector = builder::element("td")
        .with_class("cell")
        .expect("class after element is in order");
    assert_eq!(selector.render(), "td.cell");
    assert_eq!(selector.render(), "td.cell");

    // The building rules are unchanged after rendering: a legal addition
    // still succeeds and an illegal one still fails.
    let selector = selector
        .with_pseudo_class("hover")
        .expect("pseudo-class after class is in order");
    assert_eq!(selector.render(), "td.cell:hover");
    assert!(matches!(
        selector.with_id("late"),
        Err(SelectorError::OrderViolation { .. })
    ));
}

// Combinator Tests
// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)

#[test]
fn test_combine_child_combinator() {
    let selector = builder::combine(builder::element("ul"), ">", builder::element("li"));
    assert_eq!(selector.render(), "ul > li");
}

#[test]
fn test_combine_accepts_complex_nodes_on_the_left() {
    let inner = builder::combine(builder::element("div"), ">", builder::element("p"));
    let selector = builder::combine(inner, "+", builder::element("span"));
    assert_eq!(selector.render(), "div > p + span");
}

#[test]
fn test_combine_nested_tree_renders_combinator_chain() {
    // The descendant combinator ' ' contributes its surrounding padding
    // plus its own literal space, so the interior gap is three spaces wide.
    let selector = builder::combine(
        builder::element("div")
            .with_id("main")
            .and_then(|s| s.with_class("container"))
            .and_then(|s| s.with_class("draggable"))
            .expect("fragments are in grammar order"),
        "+",
        builder::combine(
            builder::element("table")
                .with_id("data")
                .expect("id after element is in order"),
            "~",
            builder::combine(
                builder::element("tr")
                    .with_pseudo_class("nth-of-type(even)")
                    .expect("pseudo-class after element is in order"),
                " ",
                builder::element("td")
                    .with_pseudo_class("nth-of-type(even)")
                    .expect("pseudo-class after element is in order"),
            ),
        ),
    );
    assert_eq!(
        selector.render(),
        "div#main.container.draggable + table#data ~ tr:nth-of-type(even)   td:nth-of-type(even)"
    );
}

#[test]
fn test_combine_leaves_unknown_tokens_opaque() {
    // Tokens are not validated; anything renders space-padded.
    let selector = builder::combine(builder::element("a"), "||", builder::element("b"));
    assert_eq!(selector.render(), "a || b");
}

#[test]
fn test_complex_render_is_idempotent() {
    let selector = builder::combine(builder::element("tr"), " ", builder::element("td"));
    assert_eq!(selector.render(), "tr   td");
    assert_eq!(selector.render(), "tr   td");
}

// Error Display Tests

#[test]
fn test_error_messages_name_the_kinds() {
    let duplicate = SelectorError::DuplicateFragment {
        kind: SelectorKind::PseudoElement,
    };
    assert_eq!(
        duplicate.to_string(),
        "pseudo-element should not occur more than one time inside the selector"
    );

    let order = SelectorError::OrderViolation {
        attempted: SelectorKind::Element,
        high_water: SelectorKind::PseudoClass,
    };
    assert!(order.to_string().contains("element cannot follow pseudo-class"));
}
