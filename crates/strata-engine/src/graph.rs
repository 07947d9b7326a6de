//! Dependency graph with topological ordering.
//!
//! Nodes are document identities; an edge records that one document
//! depends on another (a substitution destination depends on its source).
//! Ordering uses Kahn-style peeling of dependency-free nodes; whatever
//! survives the peeling is the residual set, which is non-empty exactly
//! when the graph has a cycle.

use std::collections::{BTreeMap, BTreeSet};

use crate::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
	deps: BTreeMap<DocumentId, BTreeSet<DocumentId>>,
}

impl DependencyGraph {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a node with no dependencies (idempotent).
	pub fn add_node(&mut self, node: DocumentId) {
		self.deps.entry(node).or_default();
	}

	/// Record that `node` depends on `depends_on`. Both become nodes.
	pub fn add_dependency(&mut self, node: DocumentId, depends_on: DocumentId) {
		self.deps.entry(depends_on.clone()).or_default();
		self.deps.entry(node).or_default().insert(depends_on);
	}

	pub fn len(&self) -> usize {
		self.deps.len()
	}

	pub fn is_empty(&self) -> bool {
		self.deps.is_empty()
	}

	/// Topologically order the nodes, dependencies first.
	///
	/// Returns the processable order and the residual set of nodes whose
	/// dependencies could never be satisfied. A non-empty residual means
	/// the graph contains at least one cycle; the residual holds every
	/// node caught in or behind one.
	pub fn topological_order(&self) -> (Vec<DocumentId>, Vec<DocumentId>) {
		let mut remaining = self.deps.clone();
		let mut order = Vec::with_capacity(remaining.len());

		loop {
			let ready: Vec<DocumentId> = remaining
				.iter()
				.filter(|(_, deps)| deps.is_empty())
				.map(|(node, _)| node.clone())
				.collect();
			if ready.is_empty() {
				break;
			}
			for node in &ready {
				remaining.remove(node);
			}
			for deps in remaining.values_mut() {
				for node in &ready {
					deps.remove(node);
				}
			}
			order.extend(ready);
		}

		let residual: Vec<DocumentId> = remaining.into_keys().collect();
		(order, residual)
	}
}


// vim: ts=4
