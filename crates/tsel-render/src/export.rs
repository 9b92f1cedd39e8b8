//! Machine-readable output of the selected columns.
//!
//! - CSV through the `csv` writer, header first.
//! - JSON as an array of objects whose keys follow the column order.

use std::io;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use tsel_table::{Column, Row};

use crate::error::Result;

/// Writes the header and rows as CSV.
pub fn write_csv<W: io::Write>(out: W, columns: &[&Column], rows: &[&Row]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(columns.iter().map(|c| c.name.as_str()))?;
    for row in rows {
        writer.write_record(columns.iter().map(|c| row.cell(c.index)))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the rows as a pretty-printed JSON array of objects.
pub fn write_json<W: io::Write>(mut out: W, columns: &[&Column], rows: &[&Row]) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, &Records { columns, rows })?;
    out.write_all(b"\n")?;
    Ok(())
}

struct Records<'a> {
    columns: &'a [&'a Column],
    rows: &'a [&'a Row],
}

impl Serialize for Records<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.rows.len()))?;
        for row in self.rows {
            seq.serialize_element(&Record {
                columns: self.columns,
                row,
            })?;
        }
        seq.end()
    }
}

struct Record<'a> {
    columns: &'a [&'a Column],
    row: &'a Row,
}

impl Serialize for Record<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for column in self.columns {
            map.serialize_entry(&column.name, self.row.cell(column.index))?;
        }
        map.end()
    }
}
