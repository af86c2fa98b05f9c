//! Bilby CLI
//!
//! Builds a CSS compound selector from command-line flags and prints its
//! canonical form. Fragments are applied in grammar order, so the builder's
//! ordering rules always pass; uniqueness is enforced by the flag arity.
//!
//! ```text
//! bilby --element div --id main --class container --class draggable
//! div#main.container.draggable
//! ```

use anyhow::Result;
use bilby_css::{CompoundSelector, Render, SelectorError, SelectorKind, builder};
use clap::Parser;
use owo_colors::OwoColorize;

#[derive(Parser)]
#[command(name = "bilby", version, about = "Build a CSS compound selector")]
struct Args {
    /// Type selector, e.g. `div`
    #[arg(long)]
    element: Option<String>,

    /// ID selector value, without the leading `#`
    #[arg(long)]
    id: Option<String>,

    /// Class selector value, repeatable
    #[arg(long = "class")]
    classes: Vec<String>,

    /// Attribute condition, repeatable, e.g. `href$=".png"`
    #[arg(long = "attr")]
    attributes: Vec<String>,

    /// Pseudo-class name, repeatable, e.g. `hover`
    #[arg(long = "pseudo-class")]
    pseudo_classes: Vec<String>,

    /// Pseudo-element name, e.g. `first-line`
    #[arg(long = "pseudo-element")]
    pseudo_element: Option<String>,
}

impl Args {
    /// Flatten the flags into (kind, value) pairs in grammar order.
    fn fragments(&self) -> Vec<(SelectorKind, &str)> {
        let mut fragments = Vec::new();
        if let Some(element) = &self.element {
            fragments.push((SelectorKind::Element, element.as_str()));
        }
        if let Some(id) = &self.id {
            fragments.push((SelectorKind::Id, id.as_str()));
        }
        for class in &self.classes {
            fragments.push((SelectorKind::Class, class.as_str()));
        }
        for attribute in &self.attributes {
            fragments.push((SelectorKind::Attribute, attribute.as_str()));
        }
        for pseudo_class in &self.pseudo_classes {
            fragments.push((SelectorKind::PseudoClass, pseudo_class.as_str()));
        }
        if let Some(pseudo_element) = &self.pseudo_element {
            fragments.push((SelectorKind::PseudoElement, pseudo_element.as_str()));
        }
        fragments
    }
}

/// Seed the selector on the first fragment, chain on the rest.
fn apply(
    selector: Option<CompoundSelector>,
    kind: SelectorKind,
    value: &str,
) -> Result<CompoundSelector, SelectorError> {
    let Some(selector) = selector else {
        return Ok(match kind {
            SelectorKind::Element => builder::element(value),
            SelectorKind::Id => builder::id(value),
            SelectorKind::Class => builder::class(value),
            SelectorKind::Attribute => builder::attr(value),
            SelectorKind::PseudoClass => builder::pseudo_class(value),
            SelectorKind::PseudoElement => builder::pseudo_element(value),
        });
    };
    match kind {
        SelectorKind::Element => selector.with_element(value),
        SelectorKind::Id => selector.with_id(value),
        SelectorKind::Class => selector.with_class(value),
        SelectorKind::Attribute => selector.with_attribute(value),
        SelectorKind::PseudoClass => selector.with_pseudo_class(value),
        SelectorKind::PseudoElement => selector.with_pseudo_element(value),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let fragments = args.fragments();
    if fragments.is_empty() {
        eprintln!(
            "{}",
            "error: at least one selector fragment is required".red()
        );
        std::process::exit(1);
    }

    let mut selector = None;
    for (kind, value) in fragments {
        selector = Some(apply(selector, kind, value)?);
    }

    if let Some(selector) = selector {
        println!("{}", selector.render());
    }

    Ok(())
}
