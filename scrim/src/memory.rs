//! In-memory mount host.
//!
//! A reference [`MountHost`] backed by plain node records, with inspection
//! helpers for asserting what the lifecycle controller did. Used by the
//! tests and the runnable example; real hosts adapt their own visual tree.

use std::collections::HashMap;

use crate::error::OverlayError;
use crate::mount::{InstanceHandle, MountHost};

/// A node in the in-memory visual tree.
#[derive(Debug, Clone)]
pub struct NodeRecord {
    pub label: String,
    pub parent: Option<u64>,
    pub styles: HashMap<String, String>,
    pub attached: bool,
}

/// In-memory visual tree.
#[derive(Debug, Default)]
pub struct MemoryHost {
    next_id: u64,
    nodes: HashMap<u64, NodeRecord>,
    detach_log: Vec<u64>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the node exists and is still attached.
    pub fn is_attached(&self, node: u64) -> bool {
        self.nodes.get(&node).is_some_and(|record| record.attached)
    }

    /// A style property previously written onto the node.
    pub fn style(&self, node: u64, property: &str) -> Option<&str> {
        self.nodes
            .get(&node)
            .and_then(|record| record.styles.get(property))
            .map(String::as_str)
    }

    /// How many times `detach` was called with this exact node.
    pub fn detach_count(&self, node: u64) -> usize {
        self.detach_log.iter().filter(|id| **id == node).count()
    }

    /// Count of currently attached nodes.
    pub fn attached_count(&self) -> usize {
        self.nodes.values().filter(|record| record.attached).count()
    }

    /// Find an attached node by label.
    pub fn find(&self, label: &str) -> Option<u64> {
        self.nodes
            .iter()
            .find(|(_, record)| record.attached && record.label == label)
            .map(|(id, _)| *id)
    }

    fn insert(&mut self, label: &str, parent: Option<u64>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.nodes.insert(
            id,
            NodeRecord {
                label: label.to_string(),
                parent,
                styles: HashMap::new(),
                attached: true,
            },
        );
        id
    }

    fn detach_subtree(&mut self, node: u64) {
        let children: Vec<u64> = self
            .nodes
            .iter()
            .filter(|(_, record)| record.parent == Some(node))
            .map(|(id, _)| *id)
            .collect();
        for child in children {
            self.detach_subtree(child);
        }
        if let Some(record) = self.nodes.get_mut(&node) {
            record.attached = false;
        }
    }
}

impl MountHost for MemoryHost {
    type Node = String;
    type NodeId = u64;

    fn attach(&mut self, content: String) -> Result<InstanceHandle<u64>, OverlayError> {
        let root = self.insert("overlay", None);
        let backdrop = self.insert("backdrop", Some(root));
        let dialog = self.insert("dialog", Some(root));
        self.insert(&content, Some(dialog));
        Ok(InstanceHandle {
            root,
            dialog,
            backdrop,
        })
    }

    fn detach(&mut self, node: u64) {
        self.detach_subtree(node);
        self.detach_log.push(node);
    }

    fn set_style(&mut self, node: u64, property: &str, value: &str) {
        if let Some(record) = self.nodes.get_mut(&node) {
            record.styles.insert(property.to_string(), value.to_string());
        }
    }
}
