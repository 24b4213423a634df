use proptest::prelude::*;
use crate::evaluator::{Evaluator, Strictness, MAX_DEPTH_CEILING};


pub(crate) fn strictness_strategy() -> impl Strategy<Value = Strictness> {
    prop_oneof![
        Just(Strictness::Lenient),
        Just(Strictness::Strict),
    ]
}

pub(crate) fn evaluator_strategy() -> impl Strategy<Value = Evaluator> {
    (strictness_strategy(), 1usize..=MAX_DEPTH_CEILING)
        .prop_map(|(strictness, max_depth)| {
            Evaluator::builder().strictness(strictness).max_depth(max_depth).build().unwrap()
        })
}
