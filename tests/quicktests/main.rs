#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod ordered;

/// Values to write through a cursor after building a tree: the in-order position to overwrite
/// (taken modulo the tree's length) and the new value.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Overwrite<T> {
    position: usize,
    value: T,
}

impl<T> Arbitrary for Overwrite<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        Self {
            position: usize::arbitrary(g),
            value: T::arbitrary(g),
        }
    }
}
