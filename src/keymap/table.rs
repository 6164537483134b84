use heapless::String;

use super::{Error, KeyDefinition};

/// Switch rows in the matrix.
pub const ROWS: usize = 7;
/// Switch columns in the matrix.
pub const COLS: usize = 5;
/// Cells per layer.
pub const KEY_COUNT: usize = ROWS * COLS;

/// One full layer of key definitions, stored row-major.
///
/// Tables are built once as statics in read-only data and never
/// mutated; concurrent readers (scan loop, diagnostics) need no
/// synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTable {
    keys: [KeyDefinition; KEY_COUNT],
}

impl KeyTable {
    pub const fn new(keys: [KeyDefinition; KEY_COUNT]) -> Self {
        KeyTable { keys }
    }

    /// Matrix shape as `(rows, cols)`.
    ///
    /// Scan drivers validate their own coordinates against this before
    /// calling [`get`](Self::get).
    pub const fn dimensions() -> (usize, usize) {
        (ROWS, COLS)
    }

    /// Key definition at `(row, col)`, or [`Error::OutOfRange`] when
    /// the coordinate lies outside the matrix.
    pub const fn get(&self, row: u8, col: u8) -> Result<KeyDefinition, Error> {
        if row as usize >= ROWS || col as usize >= COLS {
            return Err(Error::OutOfRange { row, col });
        }
        Ok(self.keys[row as usize * COLS + col as usize])
    }

    /// All cells in row-major order, i.e. item `i` is the cell at
    /// `(i / COLS, i % COLS)`.
    pub fn entries(&self) -> impl Iterator<Item = KeyDefinition> + '_ {
        self.keys.iter().copied()
    }

    /// The legend grid, one matrix row per line. Diagnostics only.
    pub fn labels(&self) -> String<{ KEY_COUNT + ROWS }> {
        let mut out = String::new();
        for row in self.keys.chunks(COLS) {
            for key in row {
                out.push(key.label).ok();
            }
            out.push('\n').ok();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::Layer;
    use crate::layout::LAYOUT;

    #[test]
    fn every_valid_coordinate_resolves() {
        for layer in [Layer::Flat, Layer::Symbol] {
            let table = LAYOUT.table(layer);
            for row in 0..ROWS as u8 {
                for col in 0..COLS as u8 {
                    assert!(table.get(row, col).is_ok(), "({row}, {col}) failed");
                }
            }
        }
    }

    #[test]
    fn out_of_range_is_surfaced_with_the_offending_coordinate() {
        let table = LAYOUT.flat();
        assert!(table.get(ROWS as u8 - 1, COLS as u8 - 1).is_ok());
        assert_eq!(table.get(7, 0), Err(Error::OutOfRange { row: 7, col: 0 }));
        assert_eq!(table.get(0, 5), Err(Error::OutOfRange { row: 0, col: 5 }));
        assert_eq!(
            table.get(u8::MAX, u8::MAX),
            Err(Error::OutOfRange {
                row: u8::MAX,
                col: u8::MAX
            })
        );
    }

    #[test]
    fn entries_are_row_major() {
        for layer in [Layer::Flat, Layer::Symbol] {
            let table = LAYOUT.table(layer);
            let entries: Vec<_> = table.entries().collect();
            assert_eq!(entries.len(), KEY_COUNT);
            for (i, entry) in entries.iter().enumerate() {
                let row = (i / COLS) as u8;
                let col = (i % COLS) as u8;
                assert_eq!(table.get(row, col), Ok(*entry));
            }
        }
    }

    #[test]
    fn entries_restart_from_the_beginning() {
        let table = LAYOUT.symbol();
        let first: Vec<_> = table.entries().collect();
        let second: Vec<_> = table.entries().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn lookup_is_idempotent() {
        let table = LAYOUT.flat();
        let once = table.get(3, 2);
        for _ in 0..10 {
            assert_eq!(table.get(3, 2), once);
        }
    }

    #[test]
    fn dimensions_are_fixed() {
        assert_eq!(KeyTable::dimensions(), (7, 5));
    }

    #[test]
    fn labels_render_one_matrix_row_per_line() {
        for layer in [Layer::Flat, Layer::Symbol] {
            let labels = LAYOUT.table(layer).labels();
            assert_eq!(labels.lines().count(), ROWS);
            assert!(labels.lines().all(|line| line.chars().count() == COLS));
        }
    }
}
