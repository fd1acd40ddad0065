//! Canonical textual rendering of result values.

use std::collections::BTreeMap;

use crate::error::{Result, ShellError};
use crate::graph::{Edge, Node, Path};
use crate::prettyprint::escape::escape;
use crate::value::Value;

/// Renders a value into its canonical, copy-paste-safe textual form.
///
/// Scalars use their literal forms: `NULL`, `true`/`false`, plain decimal
/// integers, `f64` display for floats. Strings pass through verbatim,
/// carrying whatever quoting the producing engine supplied; this routine
/// never adds or strips quotes. Structural values recurse. The only failure
/// mode is a path whose segments do not chain, which indicates a defect in
/// the producing engine.
pub fn render(value: &Value) -> Result<String> {
    Ok(match value {
        Value::Null => "NULL".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::String(s) => s.clone(),
        Value::List(items) => render_list(items)?,
        Value::Map(entries) => render_map(entries)?,
        Value::Node(node) => render_node(node)?,
        Value::Edge(edge) => render_edge(edge)?,
        Value::Path(path) => render_path(path)?,
    })
}

fn render_list(items: &[Value]) -> Result<String> {
    let rendered: Vec<String> = items.iter().map(render).collect::<Result<_>>()?;
    Ok(format!("[{}]", rendered.join(", ")))
}

/// Empty maps render as the empty string, not `{}`, so empty property
/// blocks vanish from node and relationship output.
fn render_map(entries: &BTreeMap<String, Value>) -> Result<String> {
    if entries.is_empty() {
        return Ok(String::new());
    }
    let rendered: Vec<String> = entries
        .iter()
        .map(|(key, value)| Ok(format!("{}: {}", escape(key), render(value)?)))
        .collect::<Result<_>>()?;
    Ok(format!("{{{}}}", rendered.join(", ")))
}

fn render_node(node: &Node) -> Result<String> {
    let labels: String = node
        .labels
        .iter()
        .map(|label| format!(":{}", escape(label)))
        .collect();
    let properties = render_map(&node.properties)?;
    Ok(format!("({})", join_non_blank(&[labels, properties])))
}

fn render_edge(edge: &Edge) -> Result<String> {
    let type_part = format!(":{}", escape(&edge.type_name));
    let properties = render_map(&edge.properties)?;
    Ok(format!("[{}]", join_non_blank(&[type_part, properties])))
}

/// Reconstructs the left-to-right traversal.
///
/// Each arrow reflects the direction the path actually took the
/// relationship, which need not match the relationship's canonical
/// direction. The canonical `start_id` is therefore compared against the
/// node visited last, not against the segment's nominal endpoints.
fn render_path(path: &Path) -> Result<String> {
    check_connected(path)?;
    let mut out = render_node(&path.start)?;
    let mut last_visited = &path.start;
    for segment in &path.segments {
        let rel = &segment.relationship;
        if rel.start_id == last_visited.id {
            out.push('-');
            out.push_str(&render_edge(rel)?);
            out.push_str("->");
            out.push_str(&render_node(&segment.end)?);
            last_visited = &segment.start;
        } else {
            out.push_str("<-");
            out.push_str(&render_edge(rel)?);
            out.push('-');
            out.push_str(&render_node(&segment.end)?);
            last_visited = &segment.end;
        }
    }
    Ok(out)
}

fn check_connected(path: &Path) -> Result<()> {
    if let Some(first) = path.segments.first() {
        if first.start.id != path.start.id {
            return Err(ShellError::DisconnectedPath { index: 0 });
        }
    }
    for (index, pair) in path.segments.windows(2).enumerate() {
        let shared = pair[0].end.id == pair[1].start.id || pair[0].end.id == pair[1].end.id;
        if !shared {
            return Err(ShellError::DisconnectedPath { index: index + 1 });
        }
    }
    Ok(())
}

fn join_non_blank(parts: &[String]) -> String {
    parts
        .iter()
        .filter(|part| !part.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ")
}
