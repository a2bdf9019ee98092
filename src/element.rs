use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

/// Everything needed to write one vertex line: `ID [label="..." color="..."]`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexDescription {
    pub id: String,
    pub label: Option<String>,
    pub color: Option<String>,
}

impl VertexDescription {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            color: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Attributes in output order. Empty values are treated as unset.
    pub fn attributes(&self) -> Vec<(&'static str, &str)> {
        [("label", &self.label), ("color", &self.color)]
            .into_iter()
            .filter_map(|(name, value)| match value.as_deref() {
                Some(v) if !v.is_empty() => Some((name, v)),
                _ => None,
            })
            .collect()
    }
}

impl fmt::Display for VertexDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.id)?;
        let attrs = self.attributes();
        if attrs.is_empty() {
            return Ok(());
        }
        f.write_str("[")?;
        for (i, (name, value)) in attrs.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{name}=\"{value}\"")?;
        }
        f.write_str("]")
    }
}

/// Shared handle to a vertex.
///
/// A graph keeps a clone of the handle when the vertex is added, so changes
/// made through any handle show up in the vertex line on the next render.
/// Edges take a [`snapshot`](Vertex::snapshot) instead and never change after
/// being added.
///
/// Handles are `Send + Sync`, so a graph can be moved across threads or
/// shared behind a caller's mutex.
#[derive(Debug, Clone)]
pub struct Vertex(Arc<Mutex<VertexDescription>>);

impl Vertex {
    pub fn new(id: impl Into<String>) -> Self {
        VertexDescription::new(id).into()
    }

    pub fn with_label(self, label: impl Into<String>) -> Self {
        self.set_label(label);
        self
    }

    pub fn with_color(self, color: impl Into<String>) -> Self {
        self.set_color(color);
        self
    }

    pub fn id(&self) -> String {
        self.0.lock().id.clone()
    }

    pub fn label(&self) -> Option<String> {
        self.0.lock().label.clone()
    }

    pub fn color(&self) -> Option<String> {
        self.0.lock().color.clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.0.lock().label = Some(label.into());
    }

    pub fn set_color(&self, color: impl Into<String>) {
        self.0.lock().color = Some(color.into());
    }

    /// Owned copy of the current id, label and color.
    pub fn snapshot(&self) -> VertexDescription {
        self.0.lock().clone()
    }
}

impl From<VertexDescription> for Vertex {
    fn from(desc: VertexDescription) -> Self {
        Self(Arc::new(Mutex::new(desc)))
    }
}

/// Handles compare by their current contents.
impl PartialEq for Vertex {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.snapshot() == other.snapshot()
    }
}

impl Eq for Vertex {}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0.lock(), f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeDescription {
    pub from: VertexDescription,
    pub to: VertexDescription,
    pub directed: bool,
}

impl EdgeDescription {
    pub fn connector(&self) -> &'static str {
        if self.directed { "->" } else { "--" }
    }
}

impl fmt::Display for EdgeDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from.id, self.connector(), self.to.id)
    }
}

/// One line of the document body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Vertex(Vertex),
    Edge(EdgeDescription),
    /// Pre-formatted text written as-is (comments, blank lines).
    Literal(String),
}

impl Element {
    pub fn comment(text: &str) -> Self {
        Element::Literal(format!("/* {text} */"))
    }

    pub fn blank() -> Self {
        Element::Literal(String::new())
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Element::Vertex(v) => fmt::Display::fmt(v, f),
            Element::Edge(e) => fmt::Display::fmt(e, f),
            Element::Literal(line) => f.write_str(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vertex_without_attributes_keeps_trailing_space() {
        let v = VertexDescription::new("v");
        assert_eq!(v.to_string(), "v ");
    }

    #[test]
    fn vertex_label_only() {
        let v = VertexDescription::new("v").with_label("vertex");
        assert_eq!(v.to_string(), "v [label=\"vertex\"]");
    }

    #[test]
    fn vertex_color_only() {
        let v = VertexDescription::new("v").with_color("red");
        assert_eq!(v.to_string(), "v [color=\"red\"]");
    }

    #[test]
    fn vertex_label_and_color() {
        let v = VertexDescription::new("C0")
            .with_label("EhD")
            .with_color("blue2");
        assert_eq!(v.to_string(), "C0 [label=\"EhD\" color=\"blue2\"]");
    }

    #[test]
    fn empty_attribute_values_are_treated_as_unset() {
        let v = VertexDescription::new("v").with_label("").with_color("red");
        assert_eq!(v.to_string(), "v [color=\"red\"]");
        let v = VertexDescription::new("v").with_label("").with_color("");
        assert_eq!(v.to_string(), "v ");
    }

    #[test]
    fn values_are_not_escaped() {
        let v = VertexDescription::new("a b").with_label("say \"hi\"");
        assert_eq!(v.to_string(), "a b [label=\"say \"hi\"\"]");
    }

    #[test]
    fn edge_directed_and_undirected() {
        let from = VertexDescription::new("a").with_label("ignored");
        let to = VertexDescription::new("b");
        let directed = EdgeDescription {
            from: from.clone(),
            to: to.clone(),
            directed: true,
        };
        let undirected = EdgeDescription {
            from,
            to,
            directed: false,
        };
        assert_eq!(directed.to_string(), "a -> b");
        assert_eq!(undirected.to_string(), "a -- b");
    }

    #[test]
    fn comment_literal() {
        assert_eq!(Element::comment("hello").to_string(), "/* hello */");
    }

    #[test]
    fn comment_text_is_not_escaped() {
        assert_eq!(Element::comment("a */ b").to_string(), "/* a */ b */");
    }

    #[test]
    fn blank_literal_is_empty() {
        assert_eq!(Element::blank().to_string(), "");
    }

    #[test]
    fn vertex_handle_shares_changes() {
        let v = Vertex::new("v");
        let other = v.clone();
        other.set_color("red");
        assert_eq!(v.color(), Some("red".to_string()));
        assert_eq!(v.to_string(), "v [color=\"red\"]");
    }

    #[test]
    fn snapshot_is_detached() {
        let v = Vertex::new("v").with_label("before");
        let snap = v.snapshot();
        v.set_label("after");
        assert_eq!(snap.label.as_deref(), Some("before"));
        assert_eq!(v.label().as_deref(), Some("after"));
    }

    #[test]
    fn vertex_handle_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vertex>();
        assert_send_sync::<Element>();
    }

    #[test]
    fn vertex_handles_compare_by_contents() {
        let v = Vertex::new("v").with_label("x");
        assert_eq!(v, v.clone());
        assert_eq!(v, Vertex::new("v").with_label("x"));
        assert_ne!(v, Vertex::new("v"));
    }
}
