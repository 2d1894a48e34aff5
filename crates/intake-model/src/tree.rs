//! The live section tree: an arena of nodes with ordered links
//!
//! [`SectionTree`] is the editing representation of a template's
//! section forest. Nodes live in a flat table keyed by id, so the
//! uniqueness invariant is a table-key property and lookups are O(1)
//! instead of a recursive walk. Links (`parent`, `children`, `roots`)
//! are private and only rewired by tree methods, which keeps cycle
//! freedom and containment consistency in one place.
//!
//! Every mutator is synchronous and all-or-nothing: a non-applied
//! [`EditStatus`] means the tree was not touched.

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::TreeError;
use crate::field::Field;
use crate::section::{Section, SectionId, SectionKind};
use crate::status::EditStatus;

/// The sibling list a node sits in
///
/// The root list is a synthetic parent, so two top-level sections are
/// siblings in exactly the same sense as two categories under one
/// parent. This unifies the "same parent" comparison the gesture layer
/// relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParentSlot {
    /// The top-level list of the forest
    Root,
    /// The child list of a specific section
    Node(SectionId),
}

/// One node of the live tree
///
/// The payload (name, description, disabled, fields) is public; the
/// structural links are private so only [`SectionTree`] can rewire
/// them.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionNode {
    /// Display name
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Whether the section is greyed out in the editor
    pub disabled: bool,
    /// Ordered input slots owned by this node
    pub fields: Vec<Field>,
    parent: Option<SectionId>,
    children: Vec<SectionId>,
}

impl SectionNode {
    /// Ordered child ids of this node
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[SectionId] {
        &self.children
    }

    /// The immediate parent, `None` for root-level nodes
    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<&SectionId> {
        self.parent.as_ref()
    }
}

/// Splice with the shift-on-removal rule: remove at `from`, re-insert
/// at `to` interpreted against the post-removal list, clamped to its
/// length. `splice(list, i, i)` is an identity.
fn splice<T>(list: &mut Vec<T>, from: usize, to: usize) {
    let item = list.remove(from);
    let to = to.min(list.len());
    list.insert(to, item);
}

/// An arena-backed forest of sections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SectionTree {
    nodes: IndexMap<SectionId, SectionNode>,
    roots: Vec<SectionId>,
}

impl SectionTree {
    /// Create an empty tree
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a nested forest, rejecting duplicate ids
    pub fn from_sections(sections: Vec<Section>) -> Result<Self, TreeError> {
        let mut tree = Self::new();
        for section in sections {
            if let Err(id) = tree.check_collisions(&section) {
                return Err(TreeError::DuplicateId { id });
            }
            let id = section.id.clone();
            tree.insert_nodes(section, None);
            tree.roots.push(id);
        }
        Ok(tree)
    }

    /// Rebuild the nested wire form, preserving order and content
    #[must_use]
    pub fn to_sections(&self) -> Vec<Section> {
        self.roots
            .iter()
            .filter_map(|id| self.build_section(id))
            .collect()
    }

    /// Number of nodes across the whole forest
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the forest has no nodes
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Ordered top-level section ids
    #[inline]
    #[must_use]
    pub fn roots(&self) -> &[SectionId] {
        &self.roots
    }

    /// All node ids, in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &SectionId> {
        self.nodes.keys()
    }

    /// Whether a node with this id exists anywhere in the forest
    #[inline]
    #[must_use]
    pub fn contains(&self, id: &SectionId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Look up a node by id
    #[inline]
    #[must_use]
    pub fn get(&self, id: &SectionId) -> Option<&SectionNode> {
        self.nodes.get(id)
    }

    /// Look up a node together with the sibling list it sits in
    #[must_use]
    pub fn get_with_parent(&self, id: &SectionId) -> Option<(&SectionNode, ParentSlot)> {
        let node = self.nodes.get(id)?;
        let slot = match &node.parent {
            Some(parent) => ParentSlot::Node(parent.clone()),
            None => ParentSlot::Root,
        };
        Some((node, slot))
    }

    /// The ordered sibling list addressed by a slot
    #[must_use]
    pub fn siblings(&self, slot: &ParentSlot) -> Option<&[SectionId]> {
        match slot {
            ParentSlot::Root => Some(&self.roots),
            ParentSlot::Node(id) => self.nodes.get(id).map(|n| n.children.as_slice()),
        }
    }

    /// Rewrite the payload of every node matching `predicate`
    ///
    /// Structural links are untouched; identity and sibling order of
    /// all nodes are preserved. Returns the number of nodes rewritten.
    pub fn rewrite_where<P, F>(&mut self, predicate: P, mut transform: F) -> usize
    where
        P: Fn(&SectionId, &SectionNode) -> bool,
        F: FnMut(&mut SectionNode),
    {
        let matched: Vec<SectionId> = self
            .nodes
            .iter()
            .filter(|(id, node)| predicate(id, node))
            .map(|(id, _)| id.clone())
            .collect();
        for id in &matched {
            if let Some(node) = self.nodes.get_mut(id) {
                transform(node);
            }
        }
        matched.len()
    }

    /// Append a new section to a parent's child list
    ///
    /// Misses the whole attach on a duplicate id anywhere in the
    /// incoming subtree.
    pub fn add_child(&mut self, parent: &SectionId, section: Section) -> EditStatus {
        self.insert_subtree(ParentSlot::Node(parent.clone()), section)
    }

    /// Append a section to the top-level list
    pub fn add_root(&mut self, section: Section) -> EditStatus {
        self.insert_subtree(ParentSlot::Root, section)
    }

    /// Append a detached subtree to a parent's child list
    ///
    /// The subtree must not share any id with the tree; a collision
    /// rejects the whole attach with [`EditStatus::DuplicateId`].
    pub fn attach_as_child(&mut self, parent: &SectionId, subtree: Section) -> EditStatus {
        self.insert_subtree(ParentSlot::Node(parent.clone()), subtree)
    }

    /// Append a detached subtree to the top-level list
    pub fn attach_as_root(&mut self, subtree: Section) -> EditStatus {
        self.insert_subtree(ParentSlot::Root, subtree)
    }

    /// Set the name of a node
    pub fn rename(&mut self, id: &SectionId, name: impl Into<String>) -> EditStatus {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.name = name.into();
                EditStatus::Applied
            }
            None => EditStatus::TargetMissing,
        }
    }

    /// Toggle the disabled flag of a node
    pub fn set_disabled(&mut self, id: &SectionId, disabled: bool) -> EditStatus {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.disabled = disabled;
                EditStatus::Applied
            }
            None => EditStatus::TargetMissing,
        }
    }

    /// Detach a subtree and return it in nested form
    ///
    /// Afterwards no id from the subtree remains anywhere in the tree.
    /// Returns `None` when the id is absent.
    pub fn remove(&mut self, id: &SectionId) -> Option<Section> {
        if !self.nodes.contains_key(id) {
            return None;
        }
        self.unlink(id);
        self.extract(id)
    }

    /// Remove a subtree permanently
    pub fn delete(&mut self, id: &SectionId) -> EditStatus {
        match self.remove(id) {
            Some(removed) => {
                debug!(id = %removed.id, "section deleted");
                EditStatus::Applied
            }
            None => EditStatus::TargetMissing,
        }
    }

    /// Move a node (with its subtree) under a new parent slot
    ///
    /// The node keeps its fields and children and is appended to the
    /// end of the destination list. Moving a node under itself or one
    /// of its descendants is rejected atomically with
    /// [`EditStatus::WouldCycle`]. `move_under(id, ParentSlot::Root)`
    /// is the promote-to-root operation.
    pub fn move_under(&mut self, id: &SectionId, new_parent: ParentSlot) -> EditStatus {
        if !self.nodes.contains_key(id) {
            return EditStatus::TargetMissing;
        }
        if let ParentSlot::Node(parent) = &new_parent {
            if !self.nodes.contains_key(parent) {
                return EditStatus::TargetMissing;
            }
            if parent == id || self.is_descendant(parent, id) {
                return EditStatus::WouldCycle;
            }
        }
        self.unlink(id);
        match new_parent {
            ParentSlot::Root => {
                if let Some(node) = self.nodes.get_mut(id) {
                    node.parent = None;
                }
                self.roots.push(id.clone());
            }
            ParentSlot::Node(parent) => {
                if let Some(node) = self.nodes.get_mut(id) {
                    node.parent = Some(parent.clone());
                }
                if let Some(node) = self.nodes.get_mut(&parent) {
                    node.children.push(id.clone());
                }
            }
        }
        EditStatus::Applied
    }

    /// Reorder within a sibling list using the shift-on-removal rule
    ///
    /// `to` is interpreted against the post-removal list and clamped to
    /// its length; `reorder_siblings(slot, i, i)` is an identity.
    pub fn reorder_siblings(&mut self, slot: &ParentSlot, from: usize, to: usize) -> EditStatus {
        let list = match slot {
            ParentSlot::Root => &mut self.roots,
            ParentSlot::Node(id) => match self.nodes.get_mut(id) {
                Some(node) => &mut node.children,
                None => return EditStatus::TargetMissing,
            },
        };
        if from >= list.len() {
            return EditStatus::IndexOutOfRange;
        }
        splice(list, from, to);
        EditStatus::Applied
    }

    /// Append a field to a section's field list
    pub fn add_field(&mut self, id: &SectionId, field: Field) -> EditStatus {
        match self.nodes.get_mut(id) {
            Some(node) => {
                node.fields.push(field);
                EditStatus::Applied
            }
            None => EditStatus::TargetMissing,
        }
    }

    /// Replace the field at an index
    pub fn update_field_at(&mut self, id: &SectionId, index: usize, field: Field) -> EditStatus {
        match self.nodes.get_mut(id) {
            Some(node) => match node.fields.get_mut(index) {
                Some(slot) => {
                    *slot = field;
                    EditStatus::Applied
                }
                None => EditStatus::IndexOutOfRange,
            },
            None => EditStatus::TargetMissing,
        }
    }

    /// Remove and return the field at an index
    ///
    /// `None` when the section is absent or the index out of range.
    pub fn remove_field_at(&mut self, id: &SectionId, index: usize) -> Option<Field> {
        let node = self.nodes.get_mut(id)?;
        if index >= node.fields.len() {
            return None;
        }
        Some(node.fields.remove(index))
    }

    /// Reorder within one section's field list (shift-on-removal rule)
    pub fn move_field_within(&mut self, id: &SectionId, from: usize, to: usize) -> EditStatus {
        match self.nodes.get_mut(id) {
            Some(node) => {
                if from >= node.fields.len() {
                    return EditStatus::IndexOutOfRange;
                }
                splice(&mut node.fields, from, to);
                EditStatus::Applied
            }
            None => EditStatus::TargetMissing,
        }
    }

    /// Cut a field from one section and paste it into another
    ///
    /// `target_index: None` appends at the end of the target list, the
    /// default when the drop target is a section body rather than a
    /// specific slot. When source and target are the same section this
    /// degenerates to [`SectionTree::move_field_within`].
    pub fn move_field_across(
        &mut self,
        source: &SectionId,
        field_index: usize,
        target: &SectionId,
        target_index: Option<usize>,
    ) -> EditStatus {
        if source == target {
            return self.move_field_within(source, field_index, target_index.unwrap_or(usize::MAX));
        }
        if !self.nodes.contains_key(target) {
            return EditStatus::TargetMissing;
        }
        let field = match self.remove_field_at(source, field_index) {
            Some(field) => field,
            None => {
                if self.nodes.contains_key(source) {
                    return EditStatus::IndexOutOfRange;
                }
                return EditStatus::TargetMissing;
            }
        };
        if let Some(node) = self.nodes.get_mut(target) {
            let at = target_index.unwrap_or(node.fields.len()).min(node.fields.len());
            node.fields.insert(at, field);
        }
        EditStatus::Applied
    }

    /// Check the tree invariant directly on the arena
    ///
    /// Verifies that every child id resolves, parent links match
    /// containment, and every node is reachable from the roots exactly
    /// once.
    pub fn verify_integrity(&self) -> Result<(), TreeError> {
        let mut visited: HashSet<&SectionId> = HashSet::new();
        let mut stack: Vec<&SectionId> = Vec::new();

        for root in &self.roots {
            let node = self
                .nodes
                .get(root)
                .ok_or_else(|| TreeError::Unreachable { id: root.clone() })?;
            if node.parent.is_some() {
                return Err(TreeError::ParentMismatch { id: root.clone() });
            }
            if !visited.insert(root) {
                return Err(TreeError::Cycle { id: root.clone() });
            }
            stack.push(root);
        }

        while let Some(id) = stack.pop() {
            let node = match self.nodes.get(id) {
                Some(node) => node,
                None => continue,
            };
            for child in &node.children {
                let child_node =
                    self.nodes
                        .get(child)
                        .ok_or_else(|| TreeError::DanglingChild {
                            parent: id.clone(),
                            child: child.clone(),
                        })?;
                if child_node.parent.as_ref() != Some(id) {
                    return Err(TreeError::ParentMismatch { id: child.clone() });
                }
                if !visited.insert(child) {
                    return Err(TreeError::Cycle { id: child.clone() });
                }
                stack.push(child);
            }
        }

        if visited.len() != self.nodes.len() {
            for id in self.nodes.keys() {
                if !visited.contains(id) {
                    return Err(TreeError::Unreachable { id: id.clone() });
                }
            }
        }
        Ok(())
    }

    /// Whether `candidate` sits somewhere below `ancestor`
    fn is_descendant(&self, candidate: &SectionId, ancestor: &SectionId) -> bool {
        let mut current = self.nodes.get(candidate).and_then(|n| n.parent.as_ref());
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(id).and_then(|n| n.parent.as_ref());
        }
        false
    }

    /// Return the first id in `section` that collides with the table,
    /// or appears twice within the subtree itself.
    fn check_collisions(&self, section: &Section) -> Result<(), SectionId> {
        fn walk<'a>(
            tree: &SectionTree,
            section: &'a Section,
            seen: &mut HashSet<&'a SectionId>,
        ) -> Result<(), SectionId> {
            if tree.nodes.contains_key(&section.id) || !seen.insert(&section.id) {
                return Err(section.id.clone());
            }
            for child in &section.children {
                walk(tree, child, seen)?;
            }
            Ok(())
        }
        let mut seen = HashSet::new();
        walk(self, section, &mut seen)
    }

    fn insert_subtree(&mut self, slot: ParentSlot, section: Section) -> EditStatus {
        if let ParentSlot::Node(parent) = &slot {
            if !self.nodes.contains_key(parent) {
                return EditStatus::TargetMissing;
            }
        }
        if self.check_collisions(&section).is_err() {
            return EditStatus::DuplicateId;
        }
        let id = section.id.clone();
        match slot {
            ParentSlot::Root => {
                self.insert_nodes(section, None);
                self.roots.push(id);
            }
            ParentSlot::Node(parent) => {
                self.insert_nodes(section, Some(parent.clone()));
                if let Some(node) = self.nodes.get_mut(&parent) {
                    node.children.push(id);
                }
            }
        }
        EditStatus::Applied
    }

    fn insert_nodes(&mut self, section: Section, parent: Option<SectionId>) {
        let Section {
            id,
            name,
            description,
            kind: _,
            disabled,
            fields,
            children,
        } = section;
        let child_ids: Vec<SectionId> = children.iter().map(|c| c.id.clone()).collect();
        self.nodes.insert(
            id.clone(),
            SectionNode {
                name,
                description,
                disabled,
                fields,
                parent,
                children: child_ids,
            },
        );
        for child in children {
            self.insert_nodes(child, Some(id.clone()));
        }
    }

    /// Take the node out of its containing sibling list
    fn unlink(&mut self, id: &SectionId) {
        let parent = self.nodes.get(id).and_then(|n| n.parent.clone());
        match parent {
            Some(parent) => {
                if let Some(node) = self.nodes.get_mut(&parent) {
                    node.children.retain(|c| c != id);
                }
            }
            None => self.roots.retain(|c| c != id),
        }
    }

    /// Pull a node and its descendants out of the table, rebuilding the
    /// nested form
    fn extract(&mut self, id: &SectionId) -> Option<Section> {
        let node = self.nodes.shift_remove(id)?;
        let children = node
            .children
            .iter()
            .filter_map(|child| self.extract(child))
            .collect();
        Some(Section {
            id: id.clone(),
            name: node.name,
            description: node.description,
            kind: SectionKind::Section,
            disabled: node.disabled,
            fields: node.fields,
            children,
        })
    }

    fn build_section(&self, id: &SectionId) -> Option<Section> {
        let node = self.nodes.get(id)?;
        Some(Section {
            id: id.clone(),
            name: node.name.clone(),
            description: node.description.clone(),
            kind: SectionKind::Section,
            disabled: node.disabled,
            fields: node.fields.clone(),
            children: node
                .children
                .iter()
                .filter_map(|child| self.build_section(child))
                .collect(),
        })
    }
}
