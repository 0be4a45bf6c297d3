/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

pub mod cursor;
pub mod error;
pub mod iter;
pub mod seq;
pub mod view;

pub use cursor::{CycleCursor, CycleCursorMut};
pub use iter::CycleIter;
pub use seq::{
    BidirectionalSequence, MutableSequence, RandomAccessSequence, Sequence, Truncated,
};
pub use view::{CycleEnd, CycledView};

///
/// Postfix construction sugar, an adaptor chain such as
/// `(&values).truncated(3).cycled()` reads in application order.
///
pub trait SequenceExt: Sequence + Sized {
    fn cycled(self) -> CycledView<Self> {
        CycledView::new(self)
    }

    fn truncated(self, len: usize) -> Truncated<Self> {
        Truncated::new(self, len)
    }
}

impl<S: Sequence> SequenceExt for S {}
