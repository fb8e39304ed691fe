use std::{
    io::{self, BufRead},
    num::ParseIntError,
};

use itertools::Itertools;
use thiserror::Error;

use crate::library::{IterExt, SliceExt, StrExt};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read measurements")]
    Io(#[from] io::Error),

    #[error("line {line}: {content:?} is not a base-10 integer")]
    Parse {
        line: usize,
        content: String,
        #[source]
        source: ParseIntError,
    },
}

pub fn load(reader: impl BufRead) -> Result<Vec<i32>, LoadError> {
    reader
        .lines()
        .enumerate()
        .map(|(index, line)| {
            let line = line?;
            line.parse_radix::<i32>(10)
                .map_err(|source| LoadError::Parse {
                    line: index + 1,
                    content: line,
                    source,
                })
        })
        .try_collect()
}

pub fn count_increases<I>(values: I) -> usize
where
    I: IntoIterator,
    I::Item: PartialOrd + Clone,
{
    values
        .into_iter()
        .streaming_windows()
        .filter(|[prev, curr]| prev < curr)
        .count()
}

pub fn part1(measurements: &[i32]) -> usize {
    count_increases(measurements.iter().copied())
}

// Window sums are widened to i64.
pub fn part2(measurements: &[i32], width: usize) -> usize {
    count_increases(measurements.sliding_sums::<i64>(width))
}
