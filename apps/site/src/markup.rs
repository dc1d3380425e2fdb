//! Typed HTML fragments.
//!
//! Everything the site inserts into the page is built as a [`Fragment`] and
//! serialized once with [`Fragment::to_html`]. Text and attribute values are
//! always escaped on the way out.

use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Self::Element(element) => element.write_html(out),
            Self::Text(text) => out.push_str(&escape(text)),
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Self::Text(text) => out.push_str(text),
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    pub attributes: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds one or more whitespace separated classes.
    #[must_use]
    pub fn class(mut self, classes: &str) -> Self {
        self.classes
            .extend(classes.split_whitespace().map(ToString::to_string));
        self
    }

    #[must_use]
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    #[must_use]
    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn text(self, value: impl Into<String>) -> Self {
        self.child(Node::text(value))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }

    fn is_void(&self) -> bool {
        matches!(self.tag, "br" | "hr" | "img" | "input")
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        for (name, value) in &self.attributes {
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out.push('>');
        if self.is_void() {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }

    fn visit<'a>(&'a self, found: &mut Vec<&'a Self>, predicate: &dyn Fn(&Self) -> bool) {
        if predicate(self) {
            found.push(self);
        }
        for child in &self.children {
            if let Node::Element(element) = child {
                element.visit(found, predicate);
            }
        }
    }
}

/// An ordered list of sibling nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(pub Vec<Node>);

impl Fragment {
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, node: impl Into<Node>) {
        self.0.push(node.into());
    }

    pub fn nodes(&self) -> &[Node] {
        &self.0
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.0 {
            node.write_html(&mut out);
        }
        out
    }

    /// Every element (depth first, document order) carrying `class`.
    pub fn find_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for node in &self.0 {
            if let Node::Element(element) = node {
                element.visit(&mut found, &|e| e.has_class(class));
            }
        }
        found
    }

    pub fn count_class(&self, class: &str) -> usize {
        self.find_class(class).len()
    }

    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.0 {
            node.collect_text(&mut out);
        }
        out
    }
}

impl From<Element> for Fragment {
    fn from(element: Element) -> Self {
        Self(vec![Node::Element(element)])
    }
}

pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Font Awesome icon, e.g. `icon("fas fa-star me-2")`.
pub fn icon(classes: &str) -> Element {
    Element::new("i").class(classes)
}

#[cfg(test)]
mod tests {
    use super::{escape, icon, Element, Fragment};

    #[test]
    fn serializes_nested_elements_with_classes_and_attributes() {
        let fragment = Fragment::from(
            Element::new("div")
                .class("modal-section")
                .attr("data-id", "x")
                .child(Element::new("h4").child(icon("fas fa-star me-2")).text("Key Features"))
                .child(Element::new("br")),
        );

        assert_eq!(
            fragment.to_html(),
            "<div class=\"modal-section\" data-id=\"x\"><h4><i class=\"fas fa-star me-2\"></i>Key Features</h4><br></div>"
        );
    }

    #[test]
    fn text_and_attributes_are_escaped() {
        let fragment = Fragment::from(
            Element::new("p")
                .attr("title", "a \"quoted\" value")
                .text("<script>alert('x') & more</script>"),
        );

        let html = fragment.to_html();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;) &amp; more&lt;/script&gt;"));
        assert!(html.contains("title=\"a &quot;quoted&quot; value\""));
    }

    #[test]
    fn escape_leaves_unicode_alone() {
        assert_eq!(escape("₹2,00,000 ↓ ✓"), "₹2,00,000 ↓ ✓");
    }

    #[test]
    fn find_class_walks_depth_first() {
        let fragment = Fragment::from(
            Element::new("div")
                .class("flow")
                .child(Element::new("div").class("step").text("a"))
                .child(Element::new("div").class("arrow"))
                .child(Element::new("div").class("step").text("b")),
        );

        let steps = fragment.find_class("step");
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].text_content(), "a");
        assert_eq!(steps[1].text_content(), "b");
        assert_eq!(fragment.count_class("arrow"), 1);
        assert_eq!(fragment.text_content(), "ab");
    }
}
