//! Capability traits for generic element types.
//!
//! Operations that only make sense for some instantiations are gated on
//! these bounds, so an unsupported element type is rejected at compile time
//! instead of producing a placeholder value at run time.
//!
//! Both traits are blanket-implemented; you never implement them by hand.

use num_traits::{Num, Zero};

/// Value type accepted by the knapsack solver.
///
/// The recurrence needs:
/// - an additive identity for the empty knapsack (`Zero`, which brings `+`),
/// - a comparison to pick the better of "take" and "skip" (`PartialOrd`),
/// - `Clone` to copy table cells.
///
/// With the `parallel` feature, values additionally cross thread boundaries
/// while a DP row is filled and must be `Send + Sync` (see [`ThreadSafety`]).
pub trait KnapsackValue: Clone + PartialOrd + Zero + ThreadSafety {}

impl<T> KnapsackValue for T where T: Clone + PartialOrd + Zero + ThreadSafety {}

/// `Send + Sync` under the `parallel` feature, no requirement otherwise.
#[cfg(feature = "parallel")]
pub trait ThreadSafety: Send + Sync {}

#[cfg(feature = "parallel")]
impl<T: Send + Sync> ThreadSafety for T {}

/// `Send + Sync` under the `parallel` feature, no requirement otherwise.
#[cfg(not(feature = "parallel"))]
pub trait ThreadSafety {}

#[cfg(not(feature = "parallel"))]
impl<T> ThreadSafety for T {}

/// Numeric element type: supports the full set of arithmetic operators.
///
/// Used by [`Grid2D::dot_product`](crate::grid::Grid2D::dot_product).
pub trait Scalar: Num + Copy {}

impl<T> Scalar for T where T: Num + Copy {}

#[cfg(test)]
mod tests {
    use super::*;

    fn accepts_value<T: KnapsackValue>(_: T) {}
    fn accepts_scalar<T: Scalar>(_: T) {}

    #[test]
    fn primitive_types_qualify() {
        accepts_value(1i32);
        accepts_value(1u64);
        accepts_value(0.5f64);
        accepts_scalar(3u8);
        accepts_scalar(-2i64);
        accepts_scalar(1.5f32);
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn sequential_values_need_not_be_thread_safe() {
        use std::rc::Rc;

        #[derive(Clone, PartialEq, PartialOrd)]
        struct Shared(Rc<()>, i64);
        impl std::ops::Add for Shared {
            type Output = Self;
            fn add(self, other: Self) -> Self {
                Shared(self.0, self.1 + other.1)
            }
        }
        impl Zero for Shared {
            fn zero() -> Self {
                Shared(Rc::new(()), 0)
            }
            fn is_zero(&self) -> bool {
                self.1 == 0
            }
        }
        accepts_value(Shared::zero());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_values_are_thread_safe() {
        fn send_sync<T: Send + Sync>() {}
        fn implied<T: KnapsackValue>() {
            send_sync::<T>();
        }
        implied::<f64>();
    }
}
