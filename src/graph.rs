//! Graph entities as returned in query results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// Node identity assigned by the query engine.
pub type NodeId = u64;
/// Relationship identity assigned by the query engine.
pub type EdgeId = u64;

/// A graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Opaque identity.
    pub id: NodeId,
    /// Labels in the order the engine returned them; duplicates preserved.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Property map.
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl Node {
    /// Creates a node with no labels or properties.
    pub fn new(id: NodeId) -> Self {
        Self {
            id,
            labels: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Appends a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Sets a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// A relationship between two nodes.
///
/// `start_id` and `end_id` record the relationship's canonical direction,
/// fixed when it was created; a path may traverse it either way.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Opaque identity.
    pub id: EdgeId,
    /// Canonical start node.
    pub start_id: NodeId,
    /// Canonical end node.
    pub end_id: NodeId,
    /// Relationship type.
    pub type_name: String,
    /// Property map.
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl Edge {
    /// Creates a relationship with no properties.
    pub fn new(id: EdgeId, start_id: NodeId, end_id: NodeId, type_name: impl Into<String>) -> Self {
        Self {
            id,
            start_id,
            end_id,
            type_name: type_name.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Sets a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }
}

/// One traversal step of a [`Path`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Node the step departs from.
    pub start: Node,
    /// Node the step arrives at.
    pub end: Node,
    /// Relationship traversed, in whichever direction the path took it.
    pub relationship: Edge,
}

/// An ordered walk through the graph.
///
/// Invariant: the first segment departs from `start`, and consecutive
/// segments share a node (`segments[i].end` equals either endpoint of
/// `segments[i + 1]`); traversal direction may reverse relative to each
/// relationship's canonical direction at any step. A zero-segment path
/// wraps a single node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    /// Overall start node.
    pub start: Node,
    /// Traversal steps in order.
    #[serde(default)]
    pub segments: Vec<PathSegment>,
}

impl Path {
    /// Creates a zero-segment path wrapping `start`.
    pub fn new(start: Node) -> Self {
        Self {
            start,
            segments: Vec::new(),
        }
    }

    /// Appends a traversal step.
    pub fn with_segment(mut self, start: Node, end: Node, relationship: Edge) -> Self {
        self.segments.push(PathSegment {
            start,
            end,
            relationship,
        });
        self
    }
}
