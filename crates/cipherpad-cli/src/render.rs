//! Text rendering of the mapping editor.

use std::fmt::Write;

use cipherpad_client::WorkbenchSnapshot;

/// Placeholder shown for unset entries.
const UNSET: char = '_';

/// Gap between editor columns.
const COLUMN_GAP: &str = "   ";

/// Render the snapshot's mapping columns side by side, one `letter value`
/// pair per cell, with a heading line for the mode.
///
/// ```text
/// a q   j _   s m
/// b x   k k   t b
/// ```
pub fn editor_table(snapshot: &WorkbenchSnapshot) -> String {
    let height = snapshot.columns.iter().map(Vec::len).max().unwrap_or(0);
    let mut table = String::new();

    for row in 0..height {
        let cells: Vec<String> = snapshot
            .columns
            .iter()
            .map(|column| {
                column.get(row).map_or_else(
                    || " ".repeat(3),
                    |entry| format!("{} {}", entry.letter, entry.value.unwrap_or(UNSET)),
                )
            })
            .collect();

        let _ = writeln!(table, "{}", cells.join(COLUMN_GAP).trim_end());
    }

    let _ = writeln!(table, "[{}]", snapshot.labels.heading);
    table
}
