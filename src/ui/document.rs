/// Handle to an element within a [`Document`].
pub type ElementId = usize;

/// A minimal stand-in for a rendered page element: just the attributes the
/// page behaviors read and write.
#[derive(Debug, Clone, Default)]
pub struct Element {
    dom_id: Option<String>,
    classes: Vec<String>,
    category: Option<String>,
    href: Option<String>,
    value: String,
    hidden: bool,
    scroll_requests: u32,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.dom_id = Some(id.to_string());
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// The element's `data-category` attribute.
    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn href(mut self, href: &str) -> Self {
        self.href = Some(href.to_string());
        self
    }

    pub fn value(mut self, value: &str) -> Self {
        self.value = value.to_string();
        self
    }
}

/// An injectable fake of the rendered page. Elements are addressed by the
/// index they were inserted at.
#[derive(Debug, Default)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, element: Element) -> ElementId {
        self.elements.push(element);
        self.elements.len() - 1
    }

    pub fn element_by_id(&self, dom_id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.dom_id.as_deref() == Some(dom_id))
    }

    /// Resolve a `#fragment` selector. An empty or malformed fragment is a
    /// lookup failure, reported as `None` rather than an error.
    pub fn query_fragment(&self, selector: &str) -> Option<ElementId> {
        let fragment = selector.strip_prefix('#')?;
        if fragment.is_empty() || fragment.contains(char::is_whitespace) {
            return None;
        }
        self.element_by_id(fragment)
    }

    /// Anchor elements whose `href` references an in-page fragment.
    pub fn fragment_anchors(&self) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.href.as_deref().is_some_and(|h| h.starts_with('#')))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.classes.iter().any(|c| c == class))
            .map(|(i, _)| i)
            .collect()
    }

    pub fn category_of(&self, id: ElementId) -> Option<&str> {
        self.elements[id].category.as_deref()
    }

    pub fn href_of(&self, id: ElementId) -> Option<&str> {
        self.elements[id].href.as_deref()
    }

    pub fn value_of(&self, id: ElementId) -> &str {
        &self.elements[id].value
    }

    pub fn set_value(&mut self, id: ElementId, value: &str) {
        self.elements[id].value = value.to_string();
    }

    pub fn is_hidden(&self, id: ElementId) -> bool {
        self.elements[id].hidden
    }

    pub fn set_hidden(&mut self, id: ElementId, hidden: bool) {
        self.elements[id].hidden = hidden;
    }

    /// Record a smooth-scroll request; the host owns the animation itself.
    pub fn scroll_into_view(&mut self, id: ElementId) {
        self.elements[id].scroll_requests += 1;
    }

    pub fn scroll_requests(&self, id: ElementId) -> u32 {
        self.elements[id].scroll_requests
    }
}
