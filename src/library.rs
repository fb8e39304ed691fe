use std::{iter::FusedIterator, mem};

use num::Num;

#[derive(Debug, Clone, Copy)]
enum State<T, const N: usize> {
    Begin,
    Buffered([T; N]),
    Done,
}

impl<T, const N: usize> State<T, N> {
    fn take(&mut self) -> Self {
        mem::replace(self, State::Done)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Windows<I: Iterator, const N: usize> {
    iter: I,
    state: State<I::Item, N>,
}

impl<I: Iterator, const N: usize> Iterator for Windows<I, N>
where
    I::Item: Clone,
{
    type Item = [I::Item; N];

    fn next(&mut self) -> Option<Self::Item> {
        let buffer = match self.state.take() {
            State::Begin => brownstone::try_build_iter(&mut self.iter)?,
            State::Buffered(buffer) => buffer,
            State::Done => return None,
        };

        if let Some(next) = self.iter.next() {
            self.state = State::Buffered(brownstone::build_iter(
                buffer[1..].iter().cloned().chain(Some(next)),
            ))
        }

        Some(buffer)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.state {
            State::Begin => {
                let (min, max) = self.iter.size_hint();
                (
                    min.saturating_sub(N - 1),
                    max.map(|max| max.saturating_sub(N - 1)),
                )
            }
            State::Buffered(_) => {
                let (min, max) = self.iter.size_hint();
                (
                    min.saturating_add(1),
                    max.and_then(|max| max.checked_add(1)),
                )
            }
            State::Done => (0, Some(0)),
        }
    }
}

impl<I: Iterator, const N: usize> FusedIterator for Windows<I, N> where I::Item: Clone {}

pub trait IterExt: Iterator + Sized {
    fn streaming_windows<const N: usize>(self) -> Windows<Self, N>
    where
        Self::Item: Clone,
    {
        Windows {
            iter: self,
            state: State::Begin,
        }
    }
}

impl<I: Iterator> IterExt for I {}

#[derive(Debug, Clone)]
pub struct SlidingSums<'a, T, S> {
    items: &'a [T],
    width: usize,

    // Index of the next item to enter the window. Zero until the first sum
    // has been produced; afterwards `sum` covers `items[cursor - width..cursor]`.
    cursor: usize,
    sum: S,
}

impl<T, S> Iterator for SlidingSums<'_, T, S>
where
    T: Copy + Into<S>,
    S: Num + Copy,
{
    type Item = S;

    fn next(&mut self) -> Option<S> {
        if self.cursor == 0 {
            if self.width == 0 {
                return None;
            }

            let head = self.items.get(..self.width)?;
            self.sum = head.iter().fold(S::zero(), |sum, &item| sum + item.into());
            self.cursor = self.width;
            return Some(self.sum);
        }

        let entering: S = (*self.items.get(self.cursor)?).into();
        let leaving: S = self.items[self.cursor - self.width].into();
        self.sum = self.sum - leaving + entering;
        self.cursor += 1;

        Some(self.sum)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<T, S> FusedIterator for SlidingSums<'_, T, S>
where
    T: Copy + Into<S>,
    S: Num + Copy,
{
}

impl<T, S> ExactSizeIterator for SlidingSums<'_, T, S>
where
    T: Copy + Into<S>,
    S: Num + Copy,
{
    fn len(&self) -> usize {
        match (self.cursor, self.width) {
            (_, 0) => 0,
            (0, width) => self.items.len().saturating_sub(width - 1),
            (cursor, _) => self.items.len() - cursor,
        }
    }
}

pub trait SliceExt<T> {
    fn sliding_sums<S: Num + Copy>(&self, width: usize) -> SlidingSums<'_, T, S>
    where
        T: Into<S>;
}

impl<T: Copy> SliceExt<T> for [T] {
    fn sliding_sums<S: Num + Copy>(&self, width: usize) -> SlidingSums<'_, T, S>
    where
        T: Into<S>,
    {
        SlidingSums {
            items: self,
            width,
            cursor: 0,
            sum: S::zero(),
        }
    }
}



pub trait StrExt {
    fn parse_radix<N: Num>(&self, radix: u32) -> Result<N, N::FromStrRadixErr>;
}

impl StrExt for str {
    fn parse_radix<N: Num>(&self, radix: u32) -> Result<N, N::FromStrRadixErr> {
        N::from_str_radix(self, radix)
    }
}
