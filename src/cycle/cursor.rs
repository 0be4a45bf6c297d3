/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use std::cmp::Ordering;
use std::fmt;

use num_integer::Integer;

use crate::cycle::seq::{BidirectionalSequence, MutableSequence, RandomAccessSequence, Sequence};
use crate::cycle::view::{CycleEnd, CycledView};

///
/// Moves position one element forward, landing back on `begin` the moment the
/// underlying `end` is reached. A cyclic position never rests at `end`.
///
pub fn wrap_advance<S>(sequence: &S, position: &mut S::Position)
where
    S: Sequence + ?Sized,
{
    sequence.advance(position);
    if *position == sequence.end() {
        *position = sequence.begin();
    }
}

pub fn wrap_retreat<S>(sequence: &S, position: &mut S::Position)
where
    S: BidirectionalSequence + ?Sized,
{
    if *position == sequence.begin() {
        let mut last = sequence.end();
        sequence.retreat(&mut last);
        *position = last;
    } else {
        sequence.retreat(position);
    }
}

///
/// Repositions by `count` elements in either direction with a single floored
/// modulo reduction, folding any number of laps into constant time.
///
pub fn wrap_offset<S>(sequence: &S, position: &mut S::Position, count: isize)
where
    S: RandomAccessSequence + ?Sized,
{
    let len = sequence.len() as isize;
    let index = sequence.offset_of(position) as isize;
    *position = sequence.position((index + count).mod_floor(&len) as usize);
}

///
/// Count of steps between two positions measured the shorter way around the
/// ring. Symmetric in its arguments, not a signed linear difference.
///
pub fn wrap_distance<S>(sequence: &S, from: &S::Position, to: &S::Position) -> usize
where
    S: RandomAccessSequence + ?Sized,
{
    let len = sequence.len();
    let forward = (sequence.offset_of(to) as isize - sequence.offset_of(from) as isize)
        .mod_floor(&(len as isize)) as usize;
    forward.min(len - forward)
}

pub struct CycleCursor<'a, S: Sequence> {
    view: &'a CycledView<S>,
    position: S::Position,
}

impl<'a, S: Sequence> CycleCursor<'a, S> {
    pub(crate) fn new(view: &'a CycledView<S>) -> Self {
        Self {
            position: view.sequence().begin(),
            view,
        }
    }

    pub fn get(&self) -> &'a S::Item {
        self.view.sequence().at(&self.position)
    }

    pub fn position(&self) -> &S::Position {
        &self.position
    }

    pub fn advance(&mut self) {
        wrap_advance(self.view.sequence(), &mut self.position);
    }
}

impl<'a, S: BidirectionalSequence> CycleCursor<'a, S> {
    pub fn retreat(&mut self) {
        wrap_retreat(self.view.sequence(), &mut self.position);
    }
}

impl<'a, S: RandomAccessSequence> CycleCursor<'a, S> {
    pub fn offset(&mut self, count: isize) {
        wrap_offset(self.view.sequence(), &mut self.position, count);
    }

    pub fn offset_by(&self, count: isize) -> Self {
        let mut cursor = self.clone();
        cursor.offset(count);
        cursor
    }

    pub fn distance_to(&self, other: &Self) -> usize {
        wrap_distance(self.view.sequence(), &self.position, &other.position)
    }
}

impl<'a, S: Sequence> Clone for CycleCursor<'a, S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            position: self.position.clone(),
        }
    }
}

// Position equality, blind to how many laps each cursor has travelled.
impl<'a, S: Sequence> PartialEq for CycleCursor<'a, S> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<'a, S: Sequence> Eq for CycleCursor<'a, S> {}

impl<'a, S: Sequence> PartialEq<CycleEnd> for CycleCursor<'a, S> {
    fn eq(&self, _: &CycleEnd) -> bool {
        false
    }
}

// Raw underlying position order, oblivious to wrap.
impl<'a, S: RandomAccessSequence> PartialOrd for CycleCursor<'a, S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        let sequence = self.view.sequence();
        Some(
            sequence
                .offset_of(&self.position)
                .cmp(&sequence.offset_of(&other.position)),
        )
    }
}

impl<'a, S: Sequence> fmt::Debug for CycleCursor<'a, S>
where
    S::Position: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CycleCursor")
            .field("position", &self.position)
            .finish()
    }
}

pub struct CycleCursorMut<'a, S: Sequence> {
    view: &'a mut CycledView<S>,
    position: S::Position,
}

impl<'a, S: Sequence> CycleCursorMut<'a, S> {
    pub(crate) fn new(view: &'a mut CycledView<S>) -> Self {
        Self {
            position: view.sequence().begin(),
            view,
        }
    }

    pub fn get(&self) -> &S::Item {
        self.view.sequence().at(&self.position)
    }

    pub fn position(&self) -> &S::Position {
        &self.position
    }

    pub fn advance(&mut self) {
        wrap_advance(self.view.sequence(), &mut self.position);
    }
}

impl<'a, S: MutableSequence> CycleCursorMut<'a, S> {
    pub fn get_mut(&mut self) -> &mut S::Item {
        self.view.sequence_mut().at_mut(&self.position)
    }
}

impl<'a, S: BidirectionalSequence> CycleCursorMut<'a, S> {
    pub fn retreat(&mut self) {
        wrap_retreat(self.view.sequence(), &mut self.position);
    }
}

impl<'a, S: RandomAccessSequence> CycleCursorMut<'a, S> {
    pub fn offset(&mut self, count: isize) {
        wrap_offset(self.view.sequence(), &mut self.position, count);
    }
}
