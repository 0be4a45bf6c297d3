/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use std::ops::Index;

use num_integer::Integer;

use crate::cycle::cursor::{CycleCursor, CycleCursorMut};
use crate::cycle::error::ContractError;
use crate::cycle::iter::CycleIter;
use crate::cycle::seq::{MutableSequence, RandomAccessSequence, Sequence};

///
/// Lazily cycles its underlying sequence without copying it.
///
/// Owns the sequence when built from a value and borrows it when built from a
/// reference, the borrow is lifetime checked so the view cannot outlive a
/// borrowed underlying. The view holds no state beyond the sequence handle,
/// creating cursors never mutates it.
///
#[derive(Clone, Debug)]
pub struct CycledView<S> {
    sequence: S,
}

///
/// Sentinel that compares unequal to every cursor, a cycled view has no
/// finite end to reach.
///
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CycleEnd;

impl<S: Sequence> CycledView<S> {
    ///
    /// An empty underlying sequence is accepted here, the non-empty
    /// precondition is checked when a cursor or iterator is created.
    ///
    pub fn new(sequence: S) -> Self {
        Self { sequence }
    }

    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    pub(crate) fn sequence_mut(&mut self) -> &mut S {
        &mut self.sequence
    }

    pub fn into_inner(self) -> S {
        self.sequence
    }

    pub fn cursor(&self) -> CycleCursor<'_, S> {
        assert!(
            !self.sequence.is_empty(),
            "Cannot cycle over an empty sequence"
        );
        CycleCursor::new(self)
    }

    pub fn try_cursor(&self) -> Result<CycleCursor<'_, S>, anyhow::Error> {
        if self.sequence.is_empty() {
            Err(ContractError::EmptySequenceError(
                "Cannot cycle over an empty sequence".into(),
            )
            .into())
        } else {
            Ok(CycleCursor::new(self))
        }
    }

    pub fn iter(&self) -> CycleIter<'_, S> {
        assert!(
            !self.sequence.is_empty(),
            "Cannot cycle over an empty sequence"
        );
        CycleIter::new(self)
    }

    pub fn try_iter(&self) -> Result<CycleIter<'_, S>, anyhow::Error> {
        if self.sequence.is_empty() {
            Err(ContractError::EmptySequenceError(
                "Cannot cycle over an empty sequence".into(),
            )
            .into())
        } else {
            Ok(CycleIter::new(self))
        }
    }

    pub fn end(&self) -> CycleEnd {
        CycleEnd
    }
}

impl<S: MutableSequence> CycledView<S> {
    pub fn cursor_mut(&mut self) -> CycleCursorMut<'_, S> {
        assert!(
            !self.sequence.is_empty(),
            "Cannot cycle over an empty sequence"
        );
        CycleCursorMut::new(self)
    }

    pub fn try_cursor_mut(&mut self) -> Result<CycleCursorMut<'_, S>, anyhow::Error> {
        if self.sequence.is_empty() {
            Err(ContractError::EmptySequenceError(
                "Cannot cycle over an empty sequence".into(),
            )
            .into())
        } else {
            Ok(CycleCursorMut::new(self))
        }
    }
}

impl<S: RandomAccessSequence> Index<usize> for CycledView<S> {
    type Output = S::Item;

    fn index(&self, index: usize) -> &S::Item {
        assert!(
            !self.sequence.is_empty(),
            "Cannot index into a cycled view over an empty sequence"
        );
        let wrapped = index.mod_floor(&self.sequence.len());
        self.sequence.at(&self.sequence.position(wrapped))
    }
}

impl<'a, S: Sequence> IntoIterator for &'a CycledView<S> {
    type Item = &'a S::Item;
    type IntoIter = CycleIter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
