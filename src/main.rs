//! sheet-concat: merge spreadsheet and CSV files row-wise
//!
//! Reads several `.xlsx`/`.xls`/`.xlsb`/`.csv` files that share a header layout and
//! writes their rows, in order, to a single `.xlsx` or `.csv` file.

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
