// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The hierarchical corpus: modules → chapters → sections, plus nested content.
//!
//! Nested content is a tagged variant fixed at ingestion time. Every value is
//! either a `Leaf` of text or a `Group` of labelled children, in authored
//! order. Nothing downstream inspects runtime shape; it pattern-matches.
//!
//! JSON ingestion rules (see [`ContentValue::try_from`]):
//!
//! | JSON            | ContentValue                          |
//! |-----------------|---------------------------------------|
//! | string          | `Leaf`                                |
//! | object          | `Group`, keys as labels, key order kept |
//! | array           | `Group`, 1-based positions as labels  |
//! | number/bool/null| skipped inside a group, error at top  |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::types::{NodeLevel, SourceKind};

/// One labelled child of a content group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentEntry {
    pub label: String,
    pub value: ContentValue,
}

impl ContentEntry {
    pub fn leaf(label: impl Into<String>, text: impl Into<String>) -> Self {
        ContentEntry {
            label: label.into(),
            value: ContentValue::Leaf(text.into()),
        }
    }

    pub fn group(label: impl Into<String>, children: Vec<ContentEntry>) -> Self {
        ContentEntry {
            label: label.into(),
            value: ContentValue::Group(children),
        }
    }
}

/// Either indexable text or a structural grouping of more content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub enum ContentValue {
    Leaf(String),
    Group(Vec<ContentEntry>),
}

impl ContentValue {
    /// Visit every leaf depth-first, in authored order, with the labels leading to it.
    pub fn for_each_leaf<'a, F>(&'a self, path: &mut Vec<&'a str>, visit: &mut F)
    where
        F: FnMut(&[&'a str], &'a str),
    {
        match self {
            ContentValue::Leaf(text) => visit(path, text),
            ContentValue::Group(children) => {
                for child in children {
                    path.push(&child.label);
                    child.value.for_each_leaf(path, visit);
                    path.pop();
                }
            }
        }
    }

    /// Flatten into top-level entries. A bare leaf becomes a single `text` entry.
    pub fn into_entries(self) -> Vec<ContentEntry> {
        match self {
            ContentValue::Group(children) => children,
            ContentValue::Leaf(text) => vec![ContentEntry::leaf("text", text)],
        }
    }
}

fn group_from_object(object: Map<String, Value>) -> Vec<ContentEntry> {
    object
        .into_iter()
        .filter_map(|(label, value)| {
            ContentValue::from_nested(value).map(|value| ContentEntry { label, value })
        })
        .collect()
}

fn group_from_array(items: Vec<Value>) -> Vec<ContentEntry> {
    items
        .into_iter()
        .enumerate()
        .filter_map(|(position, value)| {
            ContentValue::from_nested(value).map(|value| ContentEntry {
                label: (position + 1).to_string(),
                value,
            })
        })
        .collect()
}

impl ContentValue {
    fn from_nested(value: Value) -> Option<ContentValue> {
        match value {
            Value::String(text) => Some(ContentValue::Leaf(text)),
            Value::Object(object) => Some(ContentValue::Group(group_from_object(object))),
            Value::Array(items) => Some(ContentValue::Group(group_from_array(items))),
            Value::Null | Value::Bool(_) | Value::Number(_) => None,
        }
    }
}

impl TryFrom<Value> for ContentValue {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null | Value::Bool(_) | Value::Number(_) => {
                Err(format!("content must be text, an object, or an array, got {value}"))
            }
            other => ContentValue::from_nested(other)
                .ok_or_else(|| "content must be text, an object, or an array".to_string()),
        }
    }
}

impl From<ContentValue> for Value {
    fn from(value: ContentValue) -> Self {
        match value {
            ContentValue::Leaf(text) => Value::String(text),
            ContentValue::Group(children) => Value::Object(
                children
                    .into_iter()
                    .map(|entry| (entry.label, Value::from(entry.value)))
                    .collect(),
            ),
        }
    }
}

/// Deserialize a `fields`/`content` property into ordered entries.
pub(crate) fn entries_from_json<'de, D>(deserializer: D) -> Result<Vec<ContentEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<ContentValue>::deserialize(deserializer)?;
    Ok(value.map(ContentValue::into_entries).unwrap_or_default())
}

pub(crate) fn entries_to_json<S>(entries: &[ContentEntry], serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    ContentValue::Group(entries.to_vec()).serialize(serializer)
}

/// A case study nested under a topic node. Only its titles are indexed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRef {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub hebrew_title: Option<String>,
}

/// Input shape of a topic tree node, as the corpus loader supplies it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicNode {
    /// Path segment for this node. Falls back to the node's position among its siblings.
    #[serde(default)]
    pub key: Option<String>,
    pub title: String,
    #[serde(default)]
    pub hebrew_title: Option<String>,
    #[serde(
        default,
        deserialize_with = "entries_from_json",
        serialize_with = "entries_to_json"
    )]
    pub fields: Vec<ContentEntry>,
    #[serde(default)]
    pub cases: Vec<CaseRef>,
    #[serde(default)]
    pub children: Vec<TopicNode>,
}

impl TopicNode {
    pub fn new(title: impl Into<String>) -> Self {
        TopicNode {
            key: None,
            title: title.into(),
            hebrew_title: None,
            fields: Vec::new(),
            cases: Vec::new(),
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_hebrew_title(mut self, title: impl Into<String>) -> Self {
        self.hebrew_title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_field(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.fields.push(ContentEntry::leaf(label, text));
        self
    }

    #[must_use]
    pub fn with_entry(mut self, entry: ContentEntry) -> Self {
        self.fields.push(entry);
        self
    }

    #[must_use]
    pub fn with_case(mut self, title: impl Into<String>) -> Self {
        self.cases.push(CaseRef {
            id: None,
            title: title.into(),
            hebrew_title: None,
        });
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: TopicNode) -> Self {
        self.children.push(child);
        self
    }
}

/// The whole hierarchical corpus snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corpus {
    #[serde(default)]
    pub modules: Vec<TopicNode>,
}

impl Corpus {
    pub fn new(modules: Vec<TopicNode>) -> Self {
        Corpus { modules }
    }

    /// Flatten the tree, pre-order, assigning dotted ids by position.
    ///
    /// Every node appears exactly once. Order is stable across calls, which the
    /// index builder relies on for deterministic postings.
    pub fn nodes(&self) -> Vec<ContentNode<'_>> {
        let mut out = Vec::new();
        for (position, module) in self.modules.iter().enumerate() {
            flatten(module, position, None, 0, &mut out);
        }
        out
    }
}

fn flatten<'a>(
    node: &'a TopicNode,
    position: usize,
    parent_id: Option<&str>,
    depth: usize,
    out: &mut Vec<ContentNode<'a>>,
) {
    let segment = match node.key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => position.to_string(),
    };
    let id = match parent_id {
        Some(parent) => format!("{parent}.{segment}"),
        None => segment,
    };

    out.push(ContentNode {
        id: id.clone(),
        level: NodeLevel::from_depth(depth),
        node,
    });

    for (child_position, child) in node.children.iter().enumerate() {
        flatten(child, child_position, Some(&id), depth + 1, out);
    }
}

/// A topic node with its position-derived id, as seen by the index builder.
#[derive(Debug, Clone)]
pub struct ContentNode<'a> {
    pub id: String,
    pub level: NodeLevel,
    pub node: &'a TopicNode,
}

impl<'a> ContentNode<'a> {
    /// Every indexable text of this node, tagged with its source kind, in index order:
    /// title, Hebrew title, content leaves (depth-first), then case titles.
    pub fn indexable_fields(&self) -> Vec<(SourceKind, &'a str)> {
        let node = self.node;
        let title_kind = self.level.title_kind();

        let mut fields = vec![(title_kind, node.title.as_str())];
        if let Some(hebrew) = node.hebrew_title.as_deref() {
            fields.push((title_kind, hebrew));
        }

        let mut path = Vec::new();
        for entry in &node.fields {
            path.push(entry.label.as_str());
            entry.value.for_each_leaf(&mut path, &mut |_, text| {
                fields.push((SourceKind::Content, text));
            });
            path.pop();
        }

        for case in &node.cases {
            fields.push((SourceKind::CaseTitle, case.title.as_str()));
            if let Some(hebrew) = case.hebrew_title.as_deref() {
                fields.push((SourceKind::CaseTitle, hebrew));
            }
        }
        fields
    }

    /// Visible body text: all content leaves joined, markup stripped. Feeds snippets.
    pub fn body_text(&self) -> String {
        let mut parts = Vec::new();
        let mut path = Vec::new();
        for entry in &self.node.fields {
            path.push(entry.label.as_str());
            entry.value.for_each_leaf(&mut path, &mut |_, text| {
                let visible = crate::normalize::visible_text(text);
                if !visible.is_empty() {
                    parts.push(visible);
                }
            });
            path.pop();
        }
        parts.join(" ")
    }
}
