//! Invariant Tests
//!
//! Model-based property tests: arbitrary operation sequences applied to a
//! `ConcurrentArray` and to a plain `Vec` must agree after every step.

use crate::with_mode;
use proptest::prelude::*;
use syncslice::{ConcurrentArray, RangeMode};

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Set(usize, i32),
    Remove(usize),
    Update(usize, i32),
    Replace(Vec<i32>),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    // Indices range past any reachable len so misses are exercised too
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        2 => (0..24usize, any::<i32>()).prop_map(|(i, v)| Op::Set(i, v)),
        2 => (0..24usize).prop_map(Op::Remove),
        2 => (0..24usize, any::<i32>()).prop_map(|(i, d)| Op::Update(i, d)),
        1 => prop::collection::vec(any::<i32>(), 0..12).prop_map(Op::Replace),
    ]
}

/// Apply `op` to both the array and the model, checking the reported outcome
fn apply(
    array: &ConcurrentArray<i32>,
    model: &mut Vec<i32>,
    op: &Op,
) -> Result<(), TestCaseError> {
    match op {
        Op::Push(v) => {
            array.push(*v);
            model.push(*v);
        }
        Op::Set(i, v) => {
            let hit = *i < model.len();
            prop_assert_eq!(array.set(*i, *v), hit);
            if hit {
                model[*i] = *v;
            }
        }
        Op::Remove(i) => {
            let expected = if *i < model.len() {
                Some(model.remove(*i))
            } else {
                None
            };
            prop_assert_eq!(array.remove(*i), expected);
        }
        Op::Update(i, d) => {
            let hit = *i < model.len();
            prop_assert_eq!(array.update_at(*i, |v| *v = v.wrapping_add(*d)), hit);
            if hit {
                model[*i] = model[*i].wrapping_add(*d);
            }
        }
        Op::Replace(seq) => {
            array.replace_all(seq);
            *model = seq.clone();
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn ops_match_vec_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let array = ConcurrentArray::new();
        let mut model = Vec::new();

        for op in &ops {
            apply(&array, &mut model, op)?;

            prop_assert_eq!(array.len(), model.len());
            prop_assert_eq!(array.snapshot(), model.clone());
            prop_assert_eq!(array.get(model.len()), None);
        }
    }

    #[test]
    fn get_matches_every_index(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let array = ConcurrentArray::from(values.clone());
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!(array.get(i), Some(*v));
            prop_assert_eq!(array.get_unchecked(i), *v);
        }
        prop_assert_eq!(array.get(values.len()), None);
    }

    #[test]
    fn remove_preserves_order(
        values in prop::collection::vec(any::<i32>(), 1..32),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(values.len());
        let array = ConcurrentArray::from(values.clone());

        prop_assert_eq!(array.remove(index), Some(values[index]));

        let mut expected = values.clone();
        expected.remove(index);
        prop_assert_eq!(array.snapshot(), expected);
    }

    #[test]
    fn range_stops_where_told(
        values in prop::collection::vec(any::<i32>(), 0..32),
        stop in 0usize..40,
    ) {
        for mode in [RangeMode::Snapshot, RangeMode::Locked] {
            let array = with_mode(mode, &values);
            let mut seen = Vec::new();
            array.range(|i, v| {
                seen.push((i, *v));
                i < stop
            });
            let expected: Vec<(usize, i32)> = values
                .iter()
                .copied()
                .enumerate()
                .take(stop + 1)
                .collect();
            prop_assert_eq!(seen, expected);
        }
    }
}
