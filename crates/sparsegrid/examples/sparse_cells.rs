//! Example demonstrating writes, chained assignment and traversal.
//!
//! This example shows how to:
//! - Write cells from command line assignments
//! - Release cells by writing the Default value (`0`)
//! - Traverse occupied cells, optionally restricted to one row
//!
//! # Usage
//!
//! ```sh
//! cargo run --example sparse_cells -- --set 2,1=10 --set 1,5=20 --set 1,2=30
//! ```
//!
//! Writing `0` releases a cell:
//!
//! ```sh
//! cargo run --example sparse_cells -- --set 1,1=5 --set 1,1=0
//! ```
//!
//! Show only one row:
//!
//! ```sh
//! cargo run --example sparse_cells -- --set 1,5=20 --set 2,1=10 --row 1
//! ```
//!
//! Storage activity is logged at `trace` level:
//!
//! ```sh
//! RUST_LOG=sparsegrid=trace cargo run --example sparse_cells -- --set 1,1=5
//! ```

use std::{num::ParseIntError, str::FromStr};

use clap::Parser;
use sparsegrid::{Coord, ParseCoordError, SparseMatrix};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Cell assignment in the form `x,y=value`. Repeatable; applied in order.
    #[arg(short = 's', long = "set", value_name = "X,Y=VALUE", allow_hyphen_values = true)]
    assignments: Vec<Assignment>,

    /// Only list occupied cells of this row.
    #[arg(long, value_name = "X", allow_negative_numbers = true)]
    row: Option<i64>,

    /// Run the `((m[100][100] = 314) = 0) = 217` chained assignment first.
    #[arg(long)]
    chain_demo: bool,
}

#[derive(Debug, Clone, Copy)]
struct Assignment {
    coord: Coord,
    value: i64,
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
enum ParseAssignmentError {
    #[display("missing '=' in assignment")]
    MissingEquals,
    #[display("invalid coordinate: {_0}")]
    Coord(ParseCoordError),
    #[display("invalid value: {_0}")]
    Value(ParseIntError),
}

impl FromStr for Assignment {
    type Err = ParseAssignmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (coord, value) = s
            .split_once('=')
            .ok_or(ParseAssignmentError::MissingEquals)?;
        let coord = coord.parse().map_err(ParseAssignmentError::Coord)?;
        let value = value.trim().parse().map_err(ParseAssignmentError::Value)?;
        Ok(Self { coord, value })
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut matrix = SparseMatrix::<i64>::new();

    if args.chain_demo {
        matrix.row_mut(100).cell(100).set(314).set(0).set(217);
    }

    for Assignment { coord, value } in &args.assignments {
        let previous = matrix.set(coord.x, coord.y, *value);
        log::debug!("{coord} <- {value} (was {})", previous.unwrap_or(0));
    }

    log::info!(
        "{} assignments applied, {} cells occupied",
        args.assignments.len(),
        matrix.len()
    );

    match args.row {
        Some(x) => {
            for (x, y, value) in matrix.row(x) {
                println!("({x}, {y}) = {value}");
            }
        }
        None => {
            for (x, y, value) in &matrix {
                println!("({x}, {y}) = {value}");
            }
        }
    }
    println!("occupied: {}", matrix.len());
}
