//! Headerless CSV matrix I/O.
//!
//! One CSV row per matrix row, one field per column.  Values are written in
//! Rust's shortest round-trip `f64` form, so reading back is lossless.  The
//! same format is used for externally computed OT baselines.

use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};

use ot_core::Matrix;
use ot_core::matrix::from_rows;

use crate::{IoError, IoResult};

pub fn write_matrix_csv(path: &Path, m: &Matrix) -> IoResult<()> {
    let file = std::fs::File::create(path)?;
    write_matrix_writer(file, m)
}

pub fn write_matrix_writer<W: Write>(writer: W, m: &Matrix) -> IoResult<()> {
    let mut out = WriterBuilder::new().has_headers(false).from_writer(writer);
    for row in m.rows() {
        out.write_record(row.iter().map(f64::to_string))?;
    }
    out.flush()?;
    Ok(())
}

pub fn read_matrix_csv(path: &Path) -> IoResult<Matrix> {
    let file = std::fs::File::open(path)?;
    read_matrix_reader(file)
}

/// Parse a matrix.  Rows of differing length fail with
/// [`CoreError::RaggedRows`][ot_core::CoreError::RaggedRows].
pub fn read_matrix_reader<R: Read>(reader: R) -> IoResult<Matrix> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (i, record) in rdr.records().enumerate() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                field.trim().parse::<f64>().map_err(|_| {
                    IoError::Parse(format!("row {i}: invalid number {field:?}"))
                })
            })
            .collect::<IoResult<Vec<f64>>>()?;
        rows.push(row);
    }

    Ok(from_rows(&rows)?)
}
