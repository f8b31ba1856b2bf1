use serde::{Deserialize, Serialize};

/// A single header/value pair of a [`Row`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub header: String,
    pub value: String,
}

/// One record of the input dataset, keyed by column header.
///
/// Cells keep the column order of the source file. Header lookups are exact;
/// heuristic matching lives in the column resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    cells: Vec<Cell>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
        }
    }

    /// Builds a row from `(header, value)` pairs in column order.
    pub fn from_pairs<I, H, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (H, V)>,
        H: Into<String>,
        V: Into<String>,
    {
        let mut row = Self::new();
        for (header, value) in pairs {
            row.insert(header, value);
        }
        row
    }

    /// Sets the value for `header`.
    ///
    /// A header that is already present keeps its position and takes the new
    /// value, so a row never holds two cells with the same header.
    pub fn insert(&mut self, header: impl Into<String>, value: impl Into<String>) {
        let header = header.into();
        let value = value.into();
        match self.cells.iter_mut().find(|cell| cell.header == header) {
            Some(cell) => cell.value = value,
            None => self.cells.push(Cell { header, value }),
        }
    }

    /// Returns the raw value stored under `header`.
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|cell| cell.header == header)
            .map(|cell| cell.value.as_str())
    }

    /// Header names in column order.
    pub fn headers(&self) -> impl Iterator<Item = &str> + Clone {
        self.cells.iter().map(|cell| cell.header.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}
