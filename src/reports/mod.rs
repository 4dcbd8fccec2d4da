use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table};
use k4mirror::distance::LetterDistance;
use k4mirror::grid::{Grid, GridPair};
use k4mirror::search::{MatchKind, MatchResult};

pub fn grid_table(grid: &Grid) -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in grid.cells() {
        let cells: Vec<Cell> = row
            .iter()
            .map(|token| {
                let cell = Cell::new(token.to_string()).set_alignment(CellAlignment::Center);
                if token.is_merged() {
                    cell.fg(Color::Yellow).add_attribute(Attribute::Bold)
                } else {
                    cell
                }
            })
            .collect();
        table.add_row(cells);
    }
    table
}

pub fn print_matrix(name: &str, grid: &Grid) {
    println!("{} Matrix:", name);
    println!("{}", grid_table(grid));
}

pub fn print_pair(pair: &GridPair) {
    print_matrix("Source", &pair.source);
    print_matrix("Target", &pair.target);
}

pub fn print_match(result: &MatchResult) {
    match result.kind {
        MatchKind::Exact => println!("\nExact Match Found (attempt {}):", result.attempt),
        MatchKind::Partial => println!(
            "\nPartial Match Found (attempt {}, {} mismatches, variant {}):",
            result.attempt, result.mismatches, result.variant
        ),
    }
    print_pair(&result.pair);
}

/// Five distances per line, like the hand-written worksheets.
pub fn print_distances(distances: &[LetterDistance]) {
    for chunk in distances.chunks(5) {
        let line: Vec<String> = chunk.iter().map(|d| d.to_string()).collect();
        println!("{}", line.join(" "));
    }
}
