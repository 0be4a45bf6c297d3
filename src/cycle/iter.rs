/*
 * Copyright (c) 2022 Kamil Konior. All rights reserved.
*/

use std::iter::FusedIterator;

use crate::cycle::cursor::wrap_advance;
use crate::cycle::seq::Sequence;
use crate::cycle::view::CycledView;

///
/// Endless iterator over a cycled view, bridges the view into the std
/// iterator ecosystem so take, map and friends compose behind it.
///
pub struct CycleIter<'a, S: Sequence> {
    view: &'a CycledView<S>,
    position: S::Position,
}

impl<'a, S: Sequence> CycleIter<'a, S> {
    pub(crate) fn new(view: &'a CycledView<S>) -> Self {
        Self {
            position: view.sequence().begin(),
            view,
        }
    }
}

impl<'a, S: Sequence> Iterator for CycleIter<'a, S> {
    type Item = &'a S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.view.sequence().at(&self.position);
        wrap_advance(self.view.sequence(), &mut self.position);
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<'a, S: Sequence> FusedIterator for CycleIter<'a, S> {}

impl<'a, S: Sequence> Clone for CycleIter<'a, S> {
    fn clone(&self) -> Self {
        Self {
            view: self.view,
            position: self.position.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::cycle::SequenceExt;

    #[test]
    fn should_take_leading_elements_in_cyclic_order() {
        //given
        let view = vec![1, 2, 3].cycled();

        //when
        let collected: Vec<i32> = view.iter().take(8).copied().collect();

        //then
        assert_eq!(vec![1, 2, 3, 1, 2, 3, 1, 2], collected);
    }

    #[test]
    fn should_match_underlying_order_on_first_lap() {
        //given
        let values = vec![4, 5, 6];
        let view = (&values).cycled();

        //then
        for (cycled, plain) in view.iter().zip(values.iter()) {
            assert_eq!(plain, cycled);
        }
    }

    #[test]
    fn should_compose_truncation_on_both_sides_of_the_cycle() {
        //given
        let values = vec![1, 2, 3, 4];

        //when
        let view = (&values).truncated(3).cycled();
        let collected: Vec<i32> = view.iter().take(8).copied().collect();

        //then
        assert_eq!(vec![1, 2, 3, 1, 2, 3, 1, 2], collected);
    }

    #[test]
    fn should_compose_with_map_and_filter_behind_the_cycle() {
        //given
        let view = vec![1, 2, 3].cycled();

        //when
        let doubled: Vec<i32> = view.iter().map(|value| value * 2).take(4).collect();
        let odd: Vec<i32> = view.iter().filter(|value| **value % 2 == 1).take(3).copied().collect();

        //then
        assert_eq!(vec![2, 4, 6, 2], doubled);
        assert_eq!(vec![1, 3, 1], odd);
    }

    #[test]
    fn should_iterate_by_reference_in_for_loops() {
        //given
        let view = vec![1, 2, 3].cycled();

        //when
        let mut collected = Vec::new();
        for value in &view {
            if collected.len() == 5 {
                break;
            }
            collected.push(*value);
        }

        //then
        assert_eq!(vec![1, 2, 3, 1, 2], collected);
    }

    #[test]
    fn should_restart_from_begin_for_every_fresh_iterator() {
        //given
        let view = vec![1, 2, 3].cycled();

        //when
        let mut first = view.iter();
        first.next();
        first.next();
        let mut second = view.iter();

        //then
        assert_eq!(Some(&1), second.next());
        assert_eq!(Some(&3), first.next());
    }

    #[test]
    fn should_report_unbounded_size_hint() {
        //given
        let view = vec![1, 2, 3].cycled();

        //then
        assert_eq!((usize::MAX, None), view.iter().size_hint());
    }
}
