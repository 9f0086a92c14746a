use std::collections::{BTreeSet, HashMap};

use anyhow::Result;
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharRecord {
    pub character: char,
    pub count: i32,
    pub positions: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct IndexedString {
    records: Vec<CharRecord>,
    by_char: HashMap<char, usize>,
}

impl IndexedString {
    pub fn records(&self) -> &[CharRecord] {
        &self.records
    }

    pub fn record_for(&self, character: char) -> Option<&CharRecord> {
        self.by_char
            .get(&character)
            .and_then(|&slot| self.records.get(slot))
    }
}

pub fn index_chars(chars: impl IntoIterator<Item = char>) -> IndexedString {
    let mut indexed = IndexedString::default();

    for (i, c) in chars.into_iter().enumerate() {
        match indexed.by_char.get(&c) {
            Some(&slot) => {
                if let Some(record) = indexed.records.get_mut(slot) {
                    record.count += 1;
                    record.positions.push(i);
                }
            }
            None => {
                indexed.by_char.insert(c, indexed.records.len());
                indexed.records.push(CharRecord {
                    character: c,
                    count: 1,
                    positions: vec![i],
                });
            }
        }
    }

    indexed
}

pub fn compare(a: &IndexedString, b: &IndexedString) -> (i32, i32) {
    let mut position_overlap = 0;
    let mut total_overlap = 0;

    for ra in a.records() {
        if let Some(rb) = b.record_for(ra.character) {
            total_overlap += ra.count.min(rb.count);
            position_overlap += shared_positions(&ra.positions, &rb.positions);
        }
    }

    (position_overlap, total_overlap)
}

fn shared_positions(a: &[usize], b: &[usize]) -> i32 {
    let a = a.iter().collect::<BTreeSet<_>>();
    let b = b.iter().collect::<BTreeSet<_>>();

    a.intersection(&b).count() as i32
}

pub fn format_overlap(position_overlap: i32, total_overlap: i32) -> String {
    format!("{position_overlap}-{}", total_overlap - position_overlap)
}

#[derive(Error, Debug)]
#[error("expected two input lines")]
pub struct MissingLineError;

pub fn overlap_summary(input: impl Iterator<Item = impl Into<String>>) -> Result<String> {
    let (str1, str2) = input
        .map(|line| {
            let line: String = line.into();
            line
        })
        .next_tuple()
        .ok_or(MissingLineError)?;

    let (position_overlap, total_overlap) =
        compare(&index_chars(str2.chars()), &index_chars(str1.chars()));

    Ok(format_overlap(position_overlap, total_overlap))
}
