//! Property tests over random operation sequences.

mod common;

use common::TestEnv;
use proptest::prelude::*;
use std::collections::HashSet;
use taskflow::TaskPatch;

/// One user action against the store. Indices pick among tasks created so far.
#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Update(usize, String),
    Delete(usize),
    Toggle(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[a-z ]{0,12}".prop_map(Op::Create),
        1 => (any::<usize>(), "[a-z ]{0,12}").prop_map(|(i, t)| Op::Update(i, t)),
        1 => any::<usize>().prop_map(Op::Delete),
        2 => any::<usize>().prop_map(Op::Toggle),
    ]
}

/// Apply ops, returning every id ever handed out.
fn apply(env: &mut TestEnv, ops: &[Op]) -> Vec<String> {
    let mut created = Vec::new();
    for op in ops {
        match op {
            Op::Create(title) => {
                if let Ok(task) = env.store.create(title, "") {
                    created.push(task.id);
                }
            }
            Op::Update(i, title) if !created.is_empty() => {
                let id = &created[i % created.len()];
                let _ = env.store.update(id, &TaskPatch::new().title(title.clone()));
            }
            Op::Delete(i) if !created.is_empty() => {
                let id = created[i % created.len()].clone();
                env.store.delete(&id);
            }
            Op::Toggle(i) if !created.is_empty() => {
                let id = created[i % created.len()].clone();
                let _ = env.store.toggle_complete(&id);
            }
            _ => {}
        }
    }
    created
}

proptest! {
    #[test]
    fn ids_are_pairwise_distinct(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let mut env = TestEnv::new();
        let created = apply(&mut env, &ops);
        let unique: HashSet<&String> = created.iter().collect();
        prop_assert_eq!(unique.len(), created.len());
    }

    #[test]
    fn lists_partition_the_store(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let mut env = TestEnv::new();
        apply(&mut env, &ops);
        env.assert_partition();
    }

    #[test]
    fn stats_are_consistent(ops in proptest::collection::vec(op_strategy(), 0..60)) {
        let mut env = TestEnv::new();
        apply(&mut env, &ops);

        let stats = env.store.stats();
        prop_assert_eq!(stats.total, stats.active + stats.completed);
        prop_assert_eq!(stats.total, env.store.list_all().len());
        prop_assert!(stats.completion_rate <= 100);
        if stats.total == 0 {
            prop_assert_eq!(stats.completion_rate, 0);
        }
    }

    #[test]
    fn trend_sums_to_completed(
        ops in proptest::collection::vec(op_strategy(), 0..60),
        days in 1usize..30,
    ) {
        let mut env = TestEnv::new();
        apply(&mut env, &ops);

        let trend = env.store.completion_trend(days);
        prop_assert_eq!(trend.len(), days);
        prop_assert_eq!(trend.iter().map(|&c| c as usize).sum::<usize>(), env.store.stats().completed);
    }

    #[test]
    fn toggle_is_an_involution(ops in proptest::collection::vec(op_strategy(), 1..40), pick in any::<usize>()) {
        let mut env = TestEnv::new();
        apply(&mut env, &ops);

        let all = env.store.list_all();
        prop_assume!(!all.is_empty());
        let before = &all[pick % all.len()];

        env.store.toggle_complete(&before.id).unwrap();
        let after = env.store.toggle_complete(&before.id).unwrap();

        prop_assert_eq!(after.completed, before.completed);
        prop_assert_eq!(&after.id, &before.id);
        prop_assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn update_never_changes_identity(title in "[a-z]{1,10}", description in "[a-z ]{0,10}") {
        let mut env = TestEnv::new();
        let task = env.create_task("Original");

        let updated = env
            .store
            .update(&task.id, &TaskPatch::new().title(title).description(description))
            .unwrap();

        prop_assert_eq!(updated.id, task.id);
        prop_assert_eq!(updated.created_at, task.created_at);
    }
}
