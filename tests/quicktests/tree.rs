use trinary::{Tree, TreeError};

use std::collections::HashSet;

use crate::{Model, Op};

/// Applies a set of operations to a tree and a model.
/// Deletes pick one of the model's live nodes and delete the word leading to it,
/// returning every word that was deleted along the way.
fn do_ops(ops: &[Op<i8>], tree: &mut Tree<i8>, model: &mut Model<i8>) -> Vec<Vec<i8>> {
    let mut deleted = Vec::new();
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(*x);
                model.insert(*x);
            }
            Op::Delete(pick) => {
                let live = model.live();
                if live.is_empty() {
                    continue;
                }
                let index = live[pick % live.len()];
                let word = model.word(index);

                assert_eq!(tree.delete(&word), Ok(true));
                model.detach(index);
                deleted.push(word);
            }
        }
    }

    deleted
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut model = Model::default();

        let deleted = do_ops(&ops, &mut tree, &mut model);

        let live: HashSet<Vec<i8>> = model.live().into_iter().map(|at| model.word(at)).collect();
        tree.len() == live.len()
            && live.iter().all(|word| tree.search(word) == Ok(true))
            && deleted
                .iter()
                .filter(|word| !live.contains(*word))
                .all(|word| tree.search(word) == Ok(false))
    }
}

quickcheck::quickcheck! {
    fn every_insert_is_reachable(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        let mut model = Model::default();
        for x in &xs {
            tree.insert(*x);
            model.insert(*x);
        }

        tree.len() == xs.len()
            && (0..xs.len()).all(|at| {
                let word = model.word(at);
                word.last() == Some(&xs[at]) && tree.search(&word) == Ok(true)
            })
    }
}

quickcheck::quickcheck! {
    fn delete_is_idempotent(xs: Vec<i8>, pick: usize) -> bool {
        let mut tree = Tree::new();
        let mut model = Model::default();
        for x in &xs {
            tree.insert(*x);
            model.insert(*x);
        }
        if xs.is_empty() {
            return tree.delete(&[]) == Ok(false);
        }

        let word = model.word(pick % xs.len());
        tree.delete(&word) == Ok(true)
            && tree.search(&word) == Ok(false)
            && tree.delete(&word) == Ok(false)
    }
}

quickcheck::quickcheck! {
    fn deleting_a_word_removes_its_subtree(xs: Vec<i8>, pick: usize) -> bool {
        let mut tree = Tree::new();
        let mut model = Model::default();
        for x in &xs {
            tree.insert(*x);
            model.insert(*x);
        }
        if xs.is_empty() {
            return true;
        }

        let index = pick % xs.len();
        let word = model.word(index);
        let before = model.live().len();
        model.detach(index);
        let removed = before - model.live().len();

        tree.delete(&word) == Ok(true) && tree.len() == xs.len() - removed
    }
}

quickcheck::quickcheck! {
    fn empty_word_is_rejected_once_populated(xs: Vec<i8>) -> bool {
        let mut tree = Tree::new();
        for x in &xs {
            tree.insert(*x);
        }
        let expected = if xs.is_empty() {
            Ok(false)
        } else {
            Err(TreeError::EmptyWord)
        };

        tree.search(&[]) == expected && tree.delete(&[]) == expected && tree.len() == xs.len()
    }
}
