use std::fmt;
use std::io::{self, Write};

use crate::element::{EdgeDescription, Element, Vertex};

/// An append-only graph description, rendered on demand as a dot document.
///
/// The output sink is supplied at render time, so the same graph can be
/// written to several sinks and rendered any number of times.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    name: String,
    body: Vec<Element>,
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            body: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &[Element] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Adds `/* text */`. The text is written verbatim, including any `*/`.
    pub fn add_comment(&mut self, text: &str) {
        self.body.push(Element::comment(text));
    }

    pub fn add_new_line(&mut self) {
        self.body.push(Element::blank());
    }

    /// Adds the vertex by handle: later changes to it appear in its line.
    pub fn add_vertex(&mut self, vertex: &Vertex) {
        self.body.push(Element::Vertex(vertex.clone()));
    }

    /// Adds an edge between copies of the two vertices as they are now.
    pub fn add_edge(&mut self, from: &Vertex, to: &Vertex, directed: bool) {
        self.body.push(Element::Edge(EdgeDescription {
            from: from.snapshot(),
            to: to.snapshot(),
            directed,
        }));
    }

    /// Writes the complete document, stopping at the first failed write.
    pub fn write_dot<W: Write + ?Sized>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{self}")
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "digraph {} {{\n\n", self.name)?;
        for element in &self.body {
            writeln!(f, "{element}")?;
        }
        f.write_str("\n }")
    }
}
