//! Intake Template Data Model
//!
//! The in-memory hierarchical document model for intake form
//! templates: sections, nested categories, typed fields, and the
//! structural mutators that edit them.
//!
//! # Core Concepts
//!
//! - [`Section`]: a node of the template forest in nested wire form
//! - [`Field`]: a typed input slot attached to a section
//! - [`SectionTree`]: the live editing tree, a flat arena keyed by id
//! - [`ParentSlot`]: the sibling list a node sits in, with the root
//!   list as a synthetic parent
//! - [`EditStatus`]: explicit per-mutation outcome; misses never panic
//!   and never change the tree
//! - [`Template`]: the persisted unit owning one section forest
//!
//! # Example
//!
//! ```rust
//! use intake_model::{Section, SectionTree, ParentSlot, EditStatus};
//!
//! let a = Section::new("History", "");
//! let a_id = a.id.clone();
//! let mut tree = SectionTree::from_sections(vec![a]).unwrap();
//!
//! let cat = Section::new("Allergies", "");
//! let cat_id = cat.id.clone();
//! assert_eq!(tree.add_child(&a_id, cat), EditStatus::Applied);
//! assert_eq!(tree.get_with_parent(&cat_id).unwrap().1, ParentSlot::Node(a_id));
//! ```

mod error;
mod field;
mod section;
mod status;
mod template;
mod tree;

pub use error::{TreeError, ValidationError};
pub use field::{Field, FieldDraft, FieldType};
pub use section::{Section, SectionDraft, SectionId, SectionKind};
pub use status::EditStatus;
pub use template::{Template, TemplateDraft, TemplateId};
pub use tree::{ParentSlot, SectionNode, SectionTree};
