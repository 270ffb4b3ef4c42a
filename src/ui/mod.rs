//! In-memory model of the rendered page's interactive behaviors: category
//! filtering of topic cards, smooth scrolling to in-page anchors, and slug
//! autofill on blur. The same behaviors ship to browsers as
//! `templates/js/main.js`; this module is the testable reference for them.

mod behaviors;
mod document;

pub use behaviors::{filter_topics, ClickOutcome, Page, CATEGORY_FILTER_ID, TOPIC_CARD_CLASS};
pub use document::{Document, Element, ElementId};
