//! Property tests: arbitrary mutation sequences never break the tree
//! invariant (unique ids, consistent links, full reachability).

use intake_model::{FieldDraft, FieldType, ParentSlot, Section, SectionId, SectionTree};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    AddRoot(u8),
    AddChild { parent: u8, tag: u8 },
    Rename { target: u8 },
    Delete { target: u8 },
    MoveUnder { target: u8, parent: u8 },
    Promote { target: u8 },
    Reorder { parent: u8, from: u8, to: u8 },
    AddField { target: u8, tag: u8 },
    RemoveField { target: u8, index: u8 },
    MoveFieldAcross { source: u8, index: u8, target: u8, slot: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<u8>().prop_map(Op::AddRoot),
        (any::<u8>(), any::<u8>()).prop_map(|(parent, tag)| Op::AddChild { parent, tag }),
        any::<u8>().prop_map(|target| Op::Rename { target }),
        any::<u8>().prop_map(|target| Op::Delete { target }),
        (any::<u8>(), any::<u8>()).prop_map(|(target, parent)| Op::MoveUnder { target, parent }),
        any::<u8>().prop_map(|target| Op::Promote { target }),
        (any::<u8>(), any::<u8>(), any::<u8>())
            .prop_map(|(parent, from, to)| Op::Reorder { parent, from, to }),
        (any::<u8>(), any::<u8>()).prop_map(|(target, tag)| Op::AddField { target, tag }),
        (any::<u8>(), any::<u8>()).prop_map(|(target, index)| Op::RemoveField { target, index }),
        (any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>()).prop_map(
            |(source, index, target, slot)| Op::MoveFieldAcross {
                source,
                index,
                target,
                slot,
            }
        ),
    ]
}

fn nth_id(tree: &SectionTree, k: u8) -> Option<SectionId> {
    let len = tree.len();
    if len == 0 {
        None
    } else {
        tree.ids().nth(k as usize % len).cloned()
    }
}

fn apply(tree: &mut SectionTree, op: &Op) {
    match op {
        Op::AddRoot(tag) => {
            let _ = tree.add_root(Section::new(format!("root-{tag}"), ""));
        }
        Op::AddChild { parent, tag } => {
            if let Some(parent) = nth_id(tree, *parent) {
                let _ = tree.add_child(&parent, Section::new(format!("cat-{tag}"), ""));
            }
        }
        Op::Rename { target } => {
            if let Some(target) = nth_id(tree, *target) {
                let _ = tree.rename(&target, "renamed");
            }
        }
        Op::Delete { target } => {
            if let Some(target) = nth_id(tree, *target) {
                let _ = tree.delete(&target);
            }
        }
        Op::MoveUnder { target, parent } => {
            if let (Some(target), Some(parent)) = (nth_id(tree, *target), nth_id(tree, *parent)) {
                let _ = tree.move_under(&target, ParentSlot::Node(parent));
            }
        }
        Op::Promote { target } => {
            if let Some(target) = nth_id(tree, *target) {
                let _ = tree.move_under(&target, ParentSlot::Root);
            }
        }
        Op::Reorder { parent, from, to } => {
            let slot = if parent % 2 == 0 {
                ParentSlot::Root
            } else {
                match nth_id(tree, *parent) {
                    Some(id) => ParentSlot::Node(id),
                    None => ParentSlot::Root,
                }
            };
            let _ = tree.reorder_siblings(&slot, *from as usize, *to as usize);
        }
        Op::AddField { target, tag } => {
            if let Some(target) = nth_id(tree, *target) {
                let field = FieldDraft::new(format!("field-{tag}"), FieldType::Text)
                    .into_field()
                    .unwrap();
                let _ = tree.add_field(&target, field);
            }
        }
        Op::RemoveField { target, index } => {
            if let Some(target) = nth_id(tree, *target) {
                let _ = tree.remove_field_at(&target, *index as usize);
            }
        }
        Op::MoveFieldAcross {
            source,
            index,
            target,
            slot,
        } => {
            if let (Some(source), Some(target)) = (nth_id(tree, *source), nth_id(tree, *target)) {
                let slot = if slot % 2 == 0 {
                    None
                } else {
                    Some(*slot as usize)
                };
                let _ = tree.move_field_across(&source, *index as usize, &target, slot);
            }
        }
    }
}

proptest! {
    #[test]
    fn mutation_sequences_preserve_integrity(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut tree = SectionTree::new();
        for op in &ops {
            apply(&mut tree, op);
            tree.verify_integrity().unwrap();
        }
        // The nested form always reloads cleanly: uniqueness held
        let sections = tree.to_sections();
        let reloaded = SectionTree::from_sections(sections).unwrap();
        prop_assert_eq!(reloaded.len(), tree.len());
    }

    #[test]
    fn field_totals_are_conserved_by_moves(
        moves in prop::collection::vec((any::<u8>(), any::<u8>(), any::<u8>(), any::<u8>()), 0..30)
    ) {
        let mut tree = SectionTree::new();
        for name in ["A", "B", "C"] {
            let _ = tree.add_root(Section::new(name, ""));
        }
        let ids: Vec<SectionId> = tree.ids().cloned().collect();
        for i in 0..6 {
            let field = FieldDraft::new(format!("f{i}"), FieldType::Text).into_field().unwrap();
            let _ = tree.add_field(&ids[i % 3], field);
        }

        for (source, index, target, slot) in &moves {
            let source = ids[*source as usize % 3].clone();
            let target = ids[*target as usize % 3].clone();
            let slot = if slot % 2 == 0 { None } else { Some(*slot as usize) };
            let _ = tree.move_field_across(&source, *index as usize, &target, slot);
        }

        let total: usize = ids.iter().map(|id| tree.get(id).unwrap().fields.len()).sum();
        prop_assert_eq!(total, 6);
    }
}
