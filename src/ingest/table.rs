//! Loosely-typed tabular rows as delivered by the upstream stat source

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use crate::cli::types::PlayerId;

/// A single value in a stat row.
///
/// Floats may be NaN here; NaN never leaves this module as a stored value.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    pub fn is_nan(&self) -> bool {
        matches!(self, Cell::Float(f) if f.is_nan())
    }

    /// Numeric value, if this cell holds a real number
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Int(i) => Some(*i as f64),
            Cell::Float(f) if !f.is_nan() => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Bool(b) => Value::Bool(*b),
            Cell::Int(i) => Value::Number((*i).into()),
            // Non-finite floats have no JSON representation
            Cell::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            Cell::Text(s) => Value::String(s.clone()),
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Cell::Int(value)
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Float(value)
    }
}

impl From<bool> for Cell {
    fn from(value: bool) -> Self {
        Cell::Bool(value)
    }
}

/// One record of the upstream dataset: column name to value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatRow {
    cells: BTreeMap<String, Cell>,
}

/// A whole upstream dataset
pub type StatTable = Vec<StatRow>;

impl StatRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &str, value: impl Into<Cell>) -> Self {
        self.insert(column, value.into());
        self
    }

    pub fn insert(&mut self, column: &str, value: Cell) {
        self.cells.insert(column.to_string(), value);
    }

    pub fn get(&self, column: &str) -> Option<&Cell> {
        self.cells.get(column)
    }

    pub fn remove(&mut self, column: &str) -> Option<Cell> {
        self.cells.remove(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Cell)> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Replace every NaN with an explicit null; returns how many were replaced
    pub fn replace_nan_with_null(&mut self) -> usize {
        let mut replaced = 0;
        for cell in self.cells.values_mut() {
            if cell.is_nan() {
                *cell = Cell::Null;
                replaced += 1;
            }
        }
        replaced
    }

    /// `player_id` as text; null, empty and zero count as missing.
    ///
    /// Numeric ids, including integral floats, are rendered without a fraction.
    pub fn player_key(&self) -> Option<PlayerId> {
        match self.get("player_id")? {
            Cell::Text(s) if !s.is_empty() => Some(PlayerId::new(s.as_str())),
            Cell::Int(i) if *i != 0 => Some(PlayerId::new(i.to_string())),
            Cell::Float(f) if integral(*f) && *f != 0.0 => Some(PlayerId::new((*f as i64).to_string())),
            _ => None,
        }
    }

    /// A positive integer key column; integral floats and numeric text are accepted
    pub fn number_key(&self, column: &str) -> Option<u16> {
        let value = match self.get(column)? {
            Cell::Int(i) => *i,
            Cell::Float(f) if integral(*f) => *f as i64,
            Cell::Text(s) => s.trim().parse().ok()?,
            _ => return None,
        };
        u16::try_from(value).ok().filter(|v| *v != 0)
    }

    pub fn to_document(&self) -> Map<String, Value> {
        self.cells
            .iter()
            .map(|(column, cell)| (column.clone(), cell.to_json()))
            .collect()
    }
}

fn integral(f: f64) -> bool {
    f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64
}

impl FromIterator<(String, Cell)> for StatRow {
    fn from_iter<I: IntoIterator<Item = (String, Cell)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}
