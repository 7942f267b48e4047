use std::collections::BTreeSet;
use std::ops::Bound;

use proptest::prelude::*;
use proptest_derive::Arbitrary;

use crate::visitor::WellFormedChecker;
use crate::TreeSet;

/// Reference implementation: an ordered set of raw keys. With the
/// terminator being the minimum `u8`, the trie's order over terminated
/// keys matches the plain order over raw keys.
#[derive(Default)]
struct Model {
    set: BTreeSet<Vec<u8>>,
}

impl Model {
    fn insert(&mut self, key: &[u8]) -> bool {
        self.set.insert(key.to_vec())
    }

    fn remove(&mut self, key: &[u8]) -> bool {
        self.set.remove(key)
    }

    fn contains(&self, key: &[u8]) -> bool {
        self.set.contains(key)
    }

    fn successor(&self, key: &[u8]) -> Option<&[u8]> {
        self.set
            .range::<[u8], _>((Bound::Excluded(key), Bound::Unbounded))
            .next()
            .map(Vec::as_slice)
    }

    fn predecessor(&self, key: &[u8]) -> Option<&[u8]> {
        self.set
            .range::<[u8], _>((Bound::Unbounded, Bound::Excluded(key)))
            .next_back()
            .map(Vec::as_slice)
    }

    fn prefixed(&self, prefix: &[u8]) -> Vec<&[u8]> {
        self.set
            .iter()
            .filter(|key| key.starts_with(prefix))
            .map(Vec::as_slice)
            .collect()
    }

    fn len(&self) -> usize {
        self.set.len()
    }
}

/// Wrapper for key generation with a trie-valid strategy: non-empty, no
/// zero bytes, biased toward shared prefixes.
#[derive(Debug, Clone)]
struct Key(Vec<u8>);

impl Arbitrary for Key {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            // A tiny alphabet forces deep shared prefixes and collisions
            // between the generated queries and the stored keys.
            prop::collection::vec(1u8..=4, 1..6).prop_map(Key),
            // Arbitrary non-zero content
            prop::collection::vec(1u8..=255, 1..12).prop_map(Key),
            // Word-shaped keys
            "[a-d]{1,8}".prop_map(|s| Key(s.into_bytes())),
        ]
        .boxed()
    }
}

/// Actions to test against both implementations.
#[derive(Arbitrary, Debug, Clone)]
enum Action {
    Insert(Key),
    Remove(Key),
    Contains(Key),
    Successor(Key),
    Predecessor(Key),
    Prefixed(Key),
}

/// Test harness that executes actions on both the trie and the model.
#[derive(Default)]
struct Test {
    tree: TreeSet<u8>,
    model: Model,
}

impl Test {
    fn execute(&mut self, action: Action) {
        match action {
            Action::Insert(key) => {
                let tree_result = self.tree.insert(&key.0).expect("generated keys are valid");
                let model_result = self.model.insert(&key.0);
                assert_eq!(tree_result, model_result, "insert mismatch for {:?}", key.0);
            }
            Action::Remove(key) => {
                let tree_result = self.tree.remove(&key.0).expect("generated keys are valid");
                let model_result = self.model.remove(&key.0);
                assert_eq!(tree_result, model_result, "remove mismatch for {:?}", key.0);
            }
            Action::Contains(key) => {
                let tree_result = self
                    .tree
                    .contains(&key.0)
                    .expect("generated keys are valid");
                let model_result = self.model.contains(&key.0);
                assert_eq!(
                    tree_result, model_result,
                    "contains mismatch for {:?}",
                    key.0
                );
            }
            Action::Successor(key) => {
                let tree_result = self
                    .tree
                    .successor(&key.0)
                    .expect("generated keys are valid");
                let model_result = self.model.successor(&key.0);
                assert_eq!(
                    tree_result, model_result,
                    "successor mismatch for {:?}",
                    key.0
                );
            }
            Action::Predecessor(key) => {
                let tree_result = self
                    .tree
                    .predecessor(&key.0)
                    .expect("generated keys are valid");
                let model_result = self.model.predecessor(&key.0);
                assert_eq!(
                    tree_result, model_result,
                    "predecessor mismatch for {:?}",
                    key.0
                );
            }
            Action::Prefixed(key) => {
                let tree_result: Vec<&[u8]> = self
                    .tree
                    .prefix(&key.0)
                    .expect("generated keys are valid")
                    .collect();
                let model_result = self.model.prefixed(&key.0);
                assert_eq!(
                    tree_result, model_result,
                    "prefix mismatch for {:?}",
                    key.0
                );
            }
        }

        assert_eq!(self.tree.len(), self.model.len(), "length mismatch");
        WellFormedChecker::check(&self.tree).expect("the tree stays well-formed");
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        failure_persistence: None,
        ..ProptestConfig::default()
    })]

    #[test]
    fn matches_an_ordered_set_model(actions in prop::collection::vec(any::<Action>(), 1..64)) {
        let mut test = Test::default();
        for action in actions {
            test.execute(action);
        }
    }

    #[test]
    fn iterates_in_model_order(keys in prop::collection::vec(any::<Key>(), 1..48)) {
        let mut tree = TreeSet::<u8>::new();
        let mut model = BTreeSet::new();
        for key in &keys {
            tree.insert(&key.0).expect("generated keys are valid");
            model.insert(key.0.clone());
        }

        let tree_keys: Vec<&[u8]> = tree.iter().collect();
        let model_keys: Vec<&[u8]> = model.iter().map(Vec::as_slice).collect();
        prop_assert_eq!(tree_keys, model_keys);
    }

    #[test]
    fn clones_are_equal_and_independent(
        keys in prop::collection::vec(any::<Key>(), 1..32),
        victim in any::<prop::sample::Index>(),
    ) {
        let mut original = TreeSet::<u8>::new();
        for key in &keys {
            original.insert(&key.0).expect("generated keys are valid");
        }
        let snapshot: Vec<Vec<u8>> = original.iter().map(<[u8]>::to_vec).collect();

        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        let removed = &keys[victim.index(keys.len())].0;
        copy.remove(removed).expect("generated keys are valid");
        copy.insert("zzz-fresh").expect("a fixed valid key");

        let after: Vec<Vec<u8>> = original.iter().map(<[u8]>::to_vec).collect();
        prop_assert_eq!(snapshot, after);
        WellFormedChecker::check(&original).expect("the original stays well-formed");
        WellFormedChecker::check(&copy).expect("the copy stays well-formed");
    }
}
