//! Range algebras: the merge/identity/integrate bundle a tree computes over.
//!
//! An algebra is selected once, as a type parameter of the tree, and fixed
//! for the tree's lifetime. Lazily accumulated deltas are only meaningful
//! under the algebra that produced them, so a tree cannot be driven by two
//! algebras at once.

/// A monoid over `Value` with a lazy range action `Delta`.
///
/// Requirements:
/// - `merge` is associative; the tree always merges children left to right,
///   so commutativity is not required.
/// - `merge(identity(), x) = merge(x, identity()) = x`.
/// - `integrate(agg, d, len)` equals the aggregate of a span of `len`
///   elements after applying `d` uniformly to each of them.
/// - `compose(new, old)` is a single delta equivalent to applying `old`
///   first and `new` after it.
pub trait RangeAlgebra {
    type Value: Clone;
    type Delta: Clone;

    fn identity() -> Self::Value;

    fn merge(a: &Self::Value, b: &Self::Value) -> Self::Value;

    /// Compose `new` after `old`.
    fn compose(new: &Self::Delta, old: &Self::Delta) -> Self::Delta;

    /// Fold a uniform `delta` over a span of `span_len` elements into a
    /// previously computed aggregate.
    fn integrate(agg: &Self::Value, delta: &Self::Delta, span_len: usize) -> Self::Value;
}

/// Range add / range sum. Arithmetic wraps.
#[derive(Clone, Copy, Debug)]
pub enum AddSum {}

impl RangeAlgebra for AddSum {
    type Value = i64;
    type Delta = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        0
    }

    #[inline(always)]
    fn merge(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a.wrapping_add(*b)
    }

    #[inline(always)]
    fn compose(new: &Self::Delta, old: &Self::Delta) -> Self::Delta {
        new.wrapping_add(*old)
    }

    #[inline(always)]
    fn integrate(agg: &Self::Value, delta: &Self::Delta, span_len: usize) -> Self::Value {
        agg.wrapping_add(delta.wrapping_mul(span_len as i64))
    }
}

/// Range add / range min. Saturating, so `i64::MAX` stays neutral under
/// the action and padding leaves keep losing every comparison.
#[derive(Clone, Copy, Debug)]
pub enum AddMin {}

impl RangeAlgebra for AddMin {
    type Value = i64;
    type Delta = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        i64::MAX
    }

    #[inline(always)]
    fn merge(a: &Self::Value, b: &Self::Value) -> Self::Value {
        (*a).min(*b)
    }

    #[inline(always)]
    fn compose(new: &Self::Delta, old: &Self::Delta) -> Self::Delta {
        new.saturating_add(*old)
    }

    #[inline(always)]
    fn integrate(agg: &Self::Value, delta: &Self::Delta, _span_len: usize) -> Self::Value {
        agg.saturating_add(*delta)
    }
}

/// Range add / range max. Saturating, mirror of [`AddMin`].
#[derive(Clone, Copy, Debug)]
pub enum AddMax {}

impl RangeAlgebra for AddMax {
    type Value = i64;
    type Delta = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        i64::MIN
    }

    #[inline(always)]
    fn merge(a: &Self::Value, b: &Self::Value) -> Self::Value {
        (*a).max(*b)
    }

    #[inline(always)]
    fn compose(new: &Self::Delta, old: &Self::Delta) -> Self::Delta {
        new.saturating_add(*old)
    }

    #[inline(always)]
    fn integrate(agg: &Self::Value, delta: &Self::Delta, _span_len: usize) -> Self::Value {
        agg.saturating_add(*delta)
    }
}

/// Range OR / range OR-fold.
#[derive(Clone, Copy, Debug)]
pub enum BitOr {}

impl RangeAlgebra for BitOr {
    type Value = i64;
    type Delta = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        0
    }

    #[inline(always)]
    fn merge(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a | b
    }

    #[inline(always)]
    fn compose(new: &Self::Delta, old: &Self::Delta) -> Self::Delta {
        new | old
    }

    #[inline(always)]
    fn integrate(agg: &Self::Value, delta: &Self::Delta, _span_len: usize) -> Self::Value {
        agg | delta
    }
}

/// Range AND / range AND-fold.
#[derive(Clone, Copy, Debug)]
pub enum BitAnd {}

impl RangeAlgebra for BitAnd {
    type Value = i64;
    type Delta = i64;

    #[inline(always)]
    fn identity() -> Self::Value {
        !0
    }

    #[inline(always)]
    fn merge(a: &Self::Value, b: &Self::Value) -> Self::Value {
        a & b
    }

    #[inline(always)]
    fn compose(new: &Self::Delta, old: &Self::Delta) -> Self::Delta {
        new & old
    }

    #[inline(always)]
    fn integrate(agg: &Self::Value, delta: &Self::Delta, _span_len: usize) -> Self::Value {
        agg & delta
    }
}
