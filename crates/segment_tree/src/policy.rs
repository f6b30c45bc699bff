//! Algebras for the segment trees in this crate.
//!
//! [`Monoid`] drives the point-update [`SegTree`](crate::SegTree);
//! [`RangeAlgebra`] drives the lazy [`LazySegTree`](crate::LazySegTree).

/// An associative `combine` with a two-sided `identity`.
pub trait Monoid {
    type Value: Clone;

    fn identity() -> Self::Value;
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value;
}

#[derive(Clone, Copy, Debug)]
pub enum Sum {}

impl Monoid for Sum {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        left + right
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Min {}

impl Monoid for Min {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        *left.min(right)
    }
}

#[derive(Clone, Copy, Debug)]
pub enum Max {}

impl Monoid for Max {
    type Value = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        i64::MIN
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        *left.max(right)
    }
}

/// Aggregate + lazy action algebra for [`LazySegTree`](crate::LazySegTree).
///
/// Implementations must uphold (not checked at runtime):
///
/// - `combine` is associative and `query_oob()` is its two-sided identity.
/// - `apply(apply(v, old, len), new, len) == apply(v, merge(old, new), len)`.
/// - `apply(v, lazy_init(), len) == v`.
///
/// Breaking any of these silently yields wrong aggregates.
pub trait RangeAlgebra {
    type Value: Clone;
    type Action: Clone + PartialEq;

    /// Initial leaf value for trees built from a size.
    fn tree_init() -> Self::Value;

    /// The no-op action.
    fn lazy_init() -> Self::Action;

    /// Contribution of a subtree lying entirely outside the queried range.
    fn query_oob() -> Self::Value;

    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value;

    /// Apply `act` to an aggregate covering `len` elements.
    fn apply(value: &Self::Value, act: &Self::Action, len: usize) -> Self::Value;

    /// Compose actions: `existing` first, then `incoming`.
    fn merge(existing: &Self::Action, incoming: &Self::Action) -> Self::Action;

    #[inline(always)]
    fn is_lazy_init(act: &Self::Action) -> bool {
        *act == Self::lazy_init()
    }
}

/// Range add, range sum.
#[derive(Clone, Copy, Debug)]
pub enum SumAdd {}

impl RangeAlgebra for SumAdd {
    type Value = i64;
    type Action = i64;

    #[inline(always)]
    fn tree_init() -> Self::Value {
        0
    }

    #[inline(always)]
    fn lazy_init() -> Self::Action {
        0
    }

    #[inline(always)]
    fn query_oob() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        left + right
    }

    #[inline(always)]
    fn apply(value: &Self::Value, act: &Self::Action, len: usize) -> Self::Value {
        value + act * len as i64
    }

    #[inline(always)]
    fn merge(existing: &Self::Action, incoming: &Self::Action) -> Self::Action {
        existing + incoming
    }
}

/// Range add, range min.
#[derive(Clone, Copy, Debug)]
pub enum MinAdd {}

impl RangeAlgebra for MinAdd {
    type Value = i64;
    type Action = i64;

    #[inline(always)]
    fn tree_init() -> Self::Value {
        0
    }

    #[inline(always)]
    fn lazy_init() -> Self::Action {
        0
    }

    #[inline(always)]
    fn query_oob() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        *left.min(right)
    }

    #[inline(always)]
    fn apply(value: &Self::Value, act: &Self::Action, _len: usize) -> Self::Value {
        value + act
    }

    #[inline(always)]
    fn merge(existing: &Self::Action, incoming: &Self::Action) -> Self::Action {
        existing + incoming
    }
}

/// Range assign, range sum. `None` leaves values untouched.
#[derive(Clone, Copy, Debug)]
pub enum SumSet {}

impl RangeAlgebra for SumSet {
    type Value = i64;
    type Action = Option<i64>;

    #[inline(always)]
    fn tree_init() -> Self::Value {
        0
    }

    #[inline(always)]
    fn lazy_init() -> Self::Action {
        None
    }

    #[inline(always)]
    fn query_oob() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        left + right
    }

    #[inline(always)]
    fn apply(value: &Self::Value, act: &Self::Action, len: usize) -> Self::Value {
        match act {
            Some(set) => set * len as i64,
            None => *value,
        }
    }

    #[inline(always)]
    fn merge(existing: &Self::Action, incoming: &Self::Action) -> Self::Action {
        incoming.or(*existing)
    }
}

/// Range assign, range min. `None` leaves values untouched.
#[derive(Clone, Copy, Debug)]
pub enum MinSet {}

impl RangeAlgebra for MinSet {
    type Value = i64;
    type Action = Option<i64>;

    #[inline(always)]
    fn tree_init() -> Self::Value {
        0
    }

    #[inline(always)]
    fn lazy_init() -> Self::Action {
        None
    }

    #[inline(always)]
    fn query_oob() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        *left.min(right)
    }

    #[inline(always)]
    fn apply(value: &Self::Value, act: &Self::Action, _len: usize) -> Self::Value {
        act.unwrap_or(*value)
    }

    #[inline(always)]
    fn merge(existing: &Self::Action, incoming: &Self::Action) -> Self::Action {
        incoming.or(*existing)
    }
}

/// "Assign, then add" action shared by [`SumAddSet`] and [`MinAddSet`].
///
/// With `set = Some(s)` every covered element becomes `s + add`; with
/// `set = None` every covered element is increased by `add`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AddSet {
    pub add: i64,
    pub set: Option<i64>,
}

impl AddSet {
    pub const IDENTITY: Self = Self { add: 0, set: None };

    pub const fn add(add: i64) -> Self {
        Self { add, set: None }
    }

    pub const fn set(set: i64) -> Self {
        Self {
            add: 0,
            set: Some(set),
        }
    }

    /// A later assignment discards everything pending; a later add stacks on
    /// top of a pending assignment.
    #[inline(always)]
    fn then(&self, incoming: &Self) -> Self {
        if incoming.set.is_some() {
            *incoming
        } else {
            Self {
                add: self.add + incoming.add,
                set: self.set,
            }
        }
    }
}

/// Range assign-and/or-add, range sum.
#[derive(Clone, Copy, Debug)]
pub enum SumAddSet {}

impl RangeAlgebra for SumAddSet {
    type Value = i64;
    type Action = AddSet;

    #[inline(always)]
    fn tree_init() -> Self::Value {
        0
    }

    #[inline(always)]
    fn lazy_init() -> Self::Action {
        AddSet::IDENTITY
    }

    #[inline(always)]
    fn query_oob() -> Self::Value {
        0
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        left + right
    }

    #[inline(always)]
    fn apply(value: &Self::Value, act: &Self::Action, len: usize) -> Self::Value {
        let len = len as i64;
        match act.set {
            Some(set) => (set + act.add) * len,
            None => value + act.add * len,
        }
    }

    #[inline(always)]
    fn merge(existing: &Self::Action, incoming: &Self::Action) -> Self::Action {
        existing.then(incoming)
    }
}

/// Range assign-and/or-add, range min.
#[derive(Clone, Copy, Debug)]
pub enum MinAddSet {}

impl RangeAlgebra for MinAddSet {
    type Value = i64;
    type Action = AddSet;

    #[inline(always)]
    fn tree_init() -> Self::Value {
        0
    }

    #[inline(always)]
    fn lazy_init() -> Self::Action {
        AddSet::IDENTITY
    }

    #[inline(always)]
    fn query_oob() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn combine(left: &Self::Value, right: &Self::Value) -> Self::Value {
        *left.min(right)
    }

    #[inline(always)]
    fn apply(value: &Self::Value, act: &Self::Action, _len: usize) -> Self::Value {
        match act.set {
            Some(set) => set + act.add,
            None => value + act.add,
        }
    }

    #[inline(always)]
    fn merge(existing: &Self::Action, incoming: &Self::Action) -> Self::Action {
        existing.then(incoming)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VALUES: std::ops::RangeInclusive<i64> = -1_000_000..=1_000_000;

    fn add_action() -> impl Strategy<Value = i64> {
        -1_000_000..=1_000_000_i64
    }

    fn set_action() -> impl Strategy<Value = Option<i64>> {
        proptest::option::of(VALUES)
    }

    fn add_set_action() -> impl Strategy<Value = AddSet> {
        (add_action(), set_action()).prop_map(|(add, set)| AddSet { add, set })
    }

    fn composes<P: RangeAlgebra>(v: &P::Value, old: &P::Action, new: &P::Action, len: usize) -> bool
    where
        P::Value: PartialEq,
    {
        let stepwise = P::apply(&P::apply(v, old, len), new, len);
        let merged = P::apply(v, &P::merge(old, new), len);
        stepwise == merged
    }

    fn identity_is_noop<P: RangeAlgebra>(v: &P::Value, len: usize) -> bool
    where
        P::Value: PartialEq,
    {
        P::apply(v, &P::lazy_init(), len) == *v && P::is_lazy_init(&P::lazy_init())
    }

    fn oob_is_neutral<P: RangeAlgebra>(v: &P::Value) -> bool
    where
        P::Value: PartialEq,
    {
        P::combine(v, &P::query_oob()) == *v && P::combine(&P::query_oob(), v) == *v
    }

    proptest! {
        #[test]
        fn sum_add_laws(v in VALUES, old in add_action(), new in add_action(), len in 1_usize..1000) {
            prop_assert!(composes::<SumAdd>(&v, &old, &new, len));
            prop_assert!(identity_is_noop::<SumAdd>(&v, len));
            prop_assert!(oob_is_neutral::<SumAdd>(&v));
        }

        #[test]
        fn min_add_laws(v in VALUES, old in add_action(), new in add_action(), len in 1_usize..1000) {
            prop_assert!(composes::<MinAdd>(&v, &old, &new, len));
            prop_assert!(identity_is_noop::<MinAdd>(&v, len));
            prop_assert!(oob_is_neutral::<MinAdd>(&v));
        }

        #[test]
        fn sum_set_laws(v in VALUES, old in set_action(), new in set_action(), len in 1_usize..1000) {
            prop_assert!(composes::<SumSet>(&v, &old, &new, len));
            prop_assert!(identity_is_noop::<SumSet>(&v, len));
            prop_assert!(oob_is_neutral::<SumSet>(&v));
        }

        #[test]
        fn min_set_laws(v in VALUES, old in set_action(), new in set_action(), len in 1_usize..1000) {
            prop_assert!(composes::<MinSet>(&v, &old, &new, len));
            prop_assert!(identity_is_noop::<MinSet>(&v, len));
            prop_assert!(oob_is_neutral::<MinSet>(&v));
        }

        #[test]
        fn sum_add_set_laws(v in VALUES, old in add_set_action(), new in add_set_action(), len in 1_usize..1000) {
            prop_assert!(composes::<SumAddSet>(&v, &old, &new, len));
            prop_assert!(identity_is_noop::<SumAddSet>(&v, len));
            prop_assert!(oob_is_neutral::<SumAddSet>(&v));
        }

        #[test]
        fn min_add_set_laws(v in VALUES, old in add_set_action(), new in add_set_action(), len in 1_usize..1000) {
            prop_assert!(composes::<MinAddSet>(&v, &old, &new, len));
            prop_assert!(identity_is_noop::<MinAddSet>(&v, len));
            prop_assert!(oob_is_neutral::<MinAddSet>(&v));
        }

        #[test]
        fn monoids_are_associative(a in VALUES, b in VALUES, c in VALUES) {
            prop_assert_eq!(Sum::combine(&Sum::combine(&a, &b), &c), Sum::combine(&a, &Sum::combine(&b, &c)));
            prop_assert_eq!(Min::combine(&Min::combine(&a, &b), &c), Min::combine(&a, &Min::combine(&b, &c)));
            prop_assert_eq!(Max::combine(&Max::combine(&a, &b), &c), Max::combine(&a, &Max::combine(&b, &c)));
            prop_assert_eq!(Min::combine(&a, &Min::identity()), a);
            prop_assert_eq!(Max::combine(&Max::identity(), &a), a);
        }
    }

    #[test]
    fn later_set_discards_pending_add() {
        let merged = SumAddSet::merge(&AddSet::add(5), &AddSet::set(3));
        assert_eq!(merged, AddSet::set(3));
    }

    #[test]
    fn later_add_stacks_on_pending_set() {
        let merged = SumAddSet::merge(&AddSet::set(3), &AddSet::add(4));
        assert_eq!(merged, AddSet { add: 4, set: Some(3) });
        assert_eq!(SumAddSet::apply(&100, &merged, 2), 14);
        assert_eq!(MinAddSet::apply(&100, &merged, 2), 7);
    }
}
