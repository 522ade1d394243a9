//! Flowchart rendering for the workflow slide
//!
//! Diagram rendering is a collaborator behind [`DiagramRenderer`]: it takes a
//! definition string and returns something displayable, or an error the caller
//! is expected to log and swallow. The built-in [`TextFlowchartRenderer`]
//! understands the small `flowchart TD` subset the report uses:
//!
//! ```text
//! A([Start]):::start --> B[/Input/]
//! E -- Yes --> F[Assign Seat]
//! ```
//!
//! `%%` comments and `classDef`/`class`/`style` lines are skipped.

use rustc_hash::FxHashMap;

use crate::error::{Result, ShowError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeShape {
    Rect,
    Stadium,
    Parallelogram,
    Decision,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowNode {
    pub id: String,
    pub label: String,
    pub shape: NodeShape,
    pub class: Option<String>,
}

impl FlowNode {
    /// One-line text rendering with shape-specific brackets
    pub fn display(&self) -> String {
        match self.shape {
            NodeShape::Rect => format!("[ {} ]", self.label),
            NodeShape::Stadium => format!("( {} )", self.label),
            NodeShape::Parallelogram => format!("/ {} /", self.label),
            NodeShape::Decision => format!("< {} >", self.label),
            NodeShape::Circle => format!("(( {} ))", self.label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    pub from: usize,
    pub to: usize,
    pub label: Option<String>,
}

/// Parsed flowchart, nodes in order of first appearance
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedDiagram {
    pub direction: String,
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl RenderedDiagram {
    pub fn outgoing(&self, node: usize) -> impl Iterator<Item = &FlowEdge> {
        self.edges.iter().filter(move |e| e.from == node)
    }

    /// Text lines for the first `revealed` nodes and the edges between them.
    pub fn lines(&self, revealed: usize) -> Vec<String> {
        let mut out = Vec::new();
        for (idx, node) in self.nodes.iter().enumerate().take(revealed) {
            out.push(node.display());
            for edge in self.outgoing(idx).filter(|e| e.to < revealed) {
                let target = &self.nodes[edge.to].label;
                match &edge.label {
                    Some(label) => out.push(format!("    --{}--> {}", label, target)),
                    None => out.push(format!("    --> {}", target)),
                }
            }
        }
        out
    }
}

pub trait DiagramRenderer {
    fn render(&self, definition: &str) -> Result<RenderedDiagram>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TextFlowchartRenderer;

impl DiagramRenderer for TextFlowchartRenderer {
    fn render(&self, definition: &str) -> Result<RenderedDiagram> {
        let mut parser = FlowParser::default();
        let mut saw_header = false;

        for (idx, raw) in definition.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with("%%") {
                continue;
            }
            if !saw_header {
                let mut words = line.split_whitespace();
                match words.next() {
                    Some("flowchart") | Some("graph") => {
                        parser.diagram.direction = words.next().unwrap_or("TD").to_string();
                        saw_header = true;
                        continue;
                    }
                    _ => {
                        return Err(ShowError::diagram(
                            line_no,
                            "expected `flowchart` or `graph` header",
                        ))
                    }
                }
            }
            if line.starts_with("classDef ") || line.starts_with("class ") || line.starts_with("style ")
            {
                continue;
            }
            parser.statement(line, line_no)?;
        }

        if !saw_header {
            return Err(ShowError::diagram(0, "empty diagram definition"));
        }
        Ok(parser.diagram)
    }
}

#[derive(Default)]
struct FlowParser {
    diagram: RenderedDiagram,
    index: FxHashMap<String, usize>,
}

impl FlowParser {
    /// Parse `node (arrow node)*`
    fn statement(&mut self, line: &str, line_no: usize) -> Result<()> {
        let (mut prev, mut rest) = self.node_ref(line, line_no)?;
        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                return Ok(());
            }
            let (label, after) = arrow(rest)
                .ok_or_else(|| ShowError::diagram(line_no, format!("expected arrow near `{rest}`")))?;
            let (next, after) = self.node_ref(after.trim_start(), line_no)?;
            self.diagram.edges.push(FlowEdge {
                from: prev,
                to: next,
                label,
            });
            prev = next;
            rest = after;
        }
    }

    /// Parse `id`, an optional shape with label, and an optional `:::class`.
    fn node_ref<'a>(&mut self, s: &'a str, line_no: usize) -> Result<(usize, &'a str)> {
        let id_len = s
            .find(|c: char| !(c.is_alphanumeric() || c == '_'))
            .unwrap_or(s.len());
        if id_len == 0 {
            return Err(ShowError::diagram(line_no, format!("expected node id near `{s}`")));
        }
        let id = &s[..id_len];
        let mut rest = &s[id_len..];

        let mut shape_label = None;
        for (open, close, shape) in SHAPES {
            if let Some(body) = rest.strip_prefix(open) {
                let end = body.find(close).ok_or_else(|| {
                    ShowError::diagram(line_no, format!("unclosed `{open}` on node `{id}`"))
                })?;
                shape_label = Some((shape, body[..end].trim().to_string()));
                rest = &body[end + close.len()..];
                break;
            }
        }

        let mut class = None;
        if let Some(after) = rest.strip_prefix(":::") {
            let len = after
                .find(|c: char| !(c.is_alphanumeric() || c == '_' || c == '-'))
                .unwrap_or(after.len());
            class = Some(after[..len].to_string());
            rest = &after[len..];
        }

        Ok((self.intern(id, shape_label, class), rest))
    }

    fn intern(
        &mut self,
        id: &str,
        shape_label: Option<(NodeShape, String)>,
        class: Option<String>,
    ) -> usize {
        if let Some(&idx) = self.index.get(id) {
            let node = &mut self.diagram.nodes[idx];
            if let Some((shape, label)) = shape_label {
                node.shape = shape;
                node.label = label;
            }
            if class.is_some() {
                node.class = class;
            }
            return idx;
        }

        let (shape, label) = shape_label.unwrap_or((NodeShape::Rect, id.to_string()));
        let idx = self.diagram.nodes.len();
        self.diagram.nodes.push(FlowNode {
            id: id.to_string(),
            label,
            shape,
            class,
        });
        self.index.insert(id.to_string(), idx);
        idx
    }
}

/// Shape delimiters, longest openers first so `([` wins over `[`
const SHAPES: [(&str, &str, NodeShape); 5] = [
    ("((", "))", NodeShape::Circle),
    ("([", "])", NodeShape::Stadium),
    ("[/", "/]", NodeShape::Parallelogram),
    ("[", "]", NodeShape::Rect),
    ("{", "}", NodeShape::Decision),
];

/// Parse `-->` or `-- label -->`, returning the label and the remainder.
fn arrow(s: &str) -> Option<(Option<String>, &str)> {
    if let Some(rest) = s.strip_prefix("-->") {
        return Some((None, rest));
    }
    let body = s.strip_prefix("--")?;
    let end = body.find("-->")?;
    let label = body[..end].trim();
    Some((
        (!label.is_empty()).then(|| label.to_string()),
        &body[end + 3..],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FLOWCHART_DEFINITION;

    #[test]
    fn test_bundled_flowchart_nodes_in_order() {
        let diagram = TextFlowchartRenderer.render(FLOWCHART_DEFINITION).unwrap();
        let labels: Vec<&str> = diagram.nodes.iter().map(|n| n.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Start",
                "Input Student ID",
                "Loop i: 0 to ROWS",
                "Loop j: 0 to COLS",
                "Is Slot Empty?",
                "Assign Seat",
                "Return True",
                "Class Full",
                "End",
            ]
        );
        assert_eq!(diagram.direction, "TD");
        assert_eq!(diagram.nodes[0].shape, NodeShape::Stadium);
        assert_eq!(diagram.nodes[1].shape, NodeShape::Parallelogram);
        assert_eq!(diagram.nodes[4].shape, NodeShape::Decision);
        assert_eq!(diagram.nodes[0].class.as_deref(), Some("start"));
    }

    #[test]
    fn test_labelled_edges() {
        let diagram = TextFlowchartRenderer
            .render("flowchart TD\n  E{Empty?} -- Yes --> F[Assign]\n  E -- No --> E")
            .unwrap();
        assert_eq!(diagram.edges.len(), 2);
        assert_eq!(diagram.edges[0].label.as_deref(), Some("Yes"));
        assert_eq!(diagram.edges[1].from, 0);
        assert_eq!(diagram.edges[1].to, 0);
    }

    #[test]
    fn test_chained_edges() {
        let diagram = TextFlowchartRenderer
            .render("graph LR\nA --> B --> C")
            .unwrap();
        assert_eq!(diagram.nodes.len(), 3);
        assert_eq!(diagram.edges.len(), 2);
        assert_eq!(diagram.nodes[2].label, "C");
    }

    #[test]
    fn test_missing_header_is_error() {
        let err = TextFlowchartRenderer.render("A --> B").unwrap_err();
        assert!(matches!(err, ShowError::Diagram { line: 1, .. }));
    }

    #[test]
    fn test_unclosed_shape_is_error() {
        let err = TextFlowchartRenderer
            .render("flowchart TD\nA[Start --> B")
            .unwrap_err();
        assert!(matches!(err, ShowError::Diagram { line: 2, .. }));
    }

    #[test]
    fn test_partial_reveal() {
        let diagram = TextFlowchartRenderer.render(FLOWCHART_DEFINITION).unwrap();
        let lines = diagram.lines(2);
        assert_eq!(lines[0], "( Start )");
        assert_eq!(lines[1], "    --> Input Student ID");
        assert_eq!(lines[2], "/ Input Student ID /");
    }
}
