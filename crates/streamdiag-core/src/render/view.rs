//! A minimal element tree and the page that hosts mount points.

use std::collections::BTreeMap;

/// A node in the view tree: an element or a run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An element with a tag, CSS classes, ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub classes: Vec<String>,
    /// Attributes in insertion order; names are unique.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Adds a CSS class. An empty name is ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() {
            self.classes.push(class);
        }
        self
    }

    /// Sets an attribute, replacing any previous value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Appends a text child.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    /// Appends an element child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends every element in `children`.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children
            .extend(children.into_iter().map(Node::Element));
        self
    }

    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Element children only, skipping text.
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// All descendants (not including `self`) carrying `class`, in document
    /// order.
    pub fn find_by_class(&self, class: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_by_class(class, &mut found);
        found
    }

    fn collect_by_class<'a>(&'a self, class: &str, found: &mut Vec<&'a Element>) {
        for child in self.element_children() {
            if child.has_class(class) {
                found.push(child);
            }
            child.collect_by_class(class, found);
        }
    }

    /// The first descendant (or `self`) whose `id` attribute equals `id`.
    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|n| match n {
            Node::Element(e) => e.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }
}

/// The host surface: a set of empty containers the renderer can mount into.
///
/// Stands in for the hosting page markup.  The host creates the containers;
/// whatever the renderer writes inside one is owned by the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    mounts: BTreeMap<String, Element>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Page::add_mount`].
    pub fn with_mount(mut self, id: impl Into<String>) -> Self {
        self.add_mount(id);
        self
    }

    /// Creates an empty `<div id="...">` container.  An existing container
    /// with the same id is replaced by an empty one.
    pub fn add_mount(&mut self, id: impl Into<String>) {
        let id = id.into();
        let container = Element::new("div").attr("id", id.clone());
        self.mounts.insert(id, container);
    }

    pub fn mount(&self, id: &str) -> Option<&Element> {
        self.mounts.get(id)
    }

    pub fn mount_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.mounts.get_mut(id)
    }

    /// Removes everything inside the container.  Returns `false` when there
    /// is no such container.
    pub fn clear(&mut self, id: &str) -> bool {
        match self.mounts.get_mut(id) {
            Some(container) => {
                container.children.clear();
                true
            }
            None => false,
        }
    }
}
