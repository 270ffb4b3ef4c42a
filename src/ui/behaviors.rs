use super::document::{Document, ElementId};
use crate::services::slug::generate_slug;

pub const CATEGORY_FILTER_ID: &str = "categoryFilter";
pub const TOPIC_CARD_CLASS: &str = "topic-card";

/// Source/destination field pairs for slug autofill. Both pairs target the
/// same destination id; only one source field exists on any given page.
const SLUG_PAIRS: [(&str, &str); 2] = [("title", "slug"), ("name", "slug")];

/// What happened in response to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickOutcome {
    pub default_prevented: bool,
    pub scrolled: Option<ElementId>,
}

impl ClickOutcome {
    fn default_navigation() -> Self {
        Self {
            default_prevented: false,
            scrolled: None,
        }
    }
}

struct SlugBinding {
    source: ElementId,
    destination: ElementId,
}

/// The page's wired-up behaviors. [`Page::init`] attaches each behavior
/// independently; a behavior whose required elements are missing is simply
/// not attached.
pub struct Page {
    category_filter: Option<ElementId>,
    scroll_anchors: Vec<ElementId>,
    slug_bindings: Vec<SlugBinding>,
}

impl Page {
    pub fn init(doc: &Document) -> Self {
        let category_filter = doc.element_by_id(CATEGORY_FILTER_ID);

        let scroll_anchors = doc.fragment_anchors();

        let mut slug_bindings = Vec::new();
        for (source_id, dest_id) in SLUG_PAIRS {
            if let (Some(source), Some(destination)) =
                (doc.element_by_id(source_id), doc.element_by_id(dest_id))
            {
                slug_bindings.push(SlugBinding {
                    source,
                    destination,
                });
            }
        }

        Self {
            category_filter,
            scroll_anchors,
            slug_bindings,
        }
    }

    /// Change event on the category selector re-applies the filter.
    pub fn change(&self, doc: &mut Document, target: ElementId) {
        if self.category_filter == Some(target) {
            filter_topics(doc);
        }
    }

    /// Click dispatch. Registered anchors suppress default navigation and
    /// request a smooth scroll iff their fragment resolves; everything else
    /// falls through to default navigation.
    pub fn click(&self, doc: &mut Document, target: ElementId) -> ClickOutcome {
        if !self.scroll_anchors.contains(&target) {
            return ClickOutcome::default_navigation();
        }

        let scrolled = doc
            .href_of(target)
            .map(str::to_owned)
            .and_then(|href| doc.query_fragment(&href));
        if let Some(id) = scrolled {
            doc.scroll_into_view(id);
        }

        ClickOutcome {
            default_prevented: true,
            scrolled,
        }
    }

    /// Blur dispatch. Fills the destination field with the generated slug of
    /// the source value, but never overwrites an existing value.
    pub fn blur(&self, doc: &mut Document, target: ElementId) {
        for binding in self.slug_bindings.iter().filter(|b| b.source == target) {
            if doc.value_of(binding.destination).is_empty() {
                let slug = generate_slug(doc.value_of(binding.source));
                doc.set_value(binding.destination, &slug);
            }
        }
    }
}

/// Show every topic card whose `data-category` matches the selector's
/// current value; an empty value shows all cards.
pub fn filter_topics(doc: &mut Document) {
    let Some(filter) = doc.element_by_id(CATEGORY_FILTER_ID) else {
        return;
    };
    let selected = doc.value_of(filter).to_string();

    for card in doc.elements_with_class(TOPIC_CARD_CLASS) {
        let shown = selected.is_empty() || doc.category_of(card) == Some(selected.as_str());
        doc.set_hidden(card, !shown);
    }
}
