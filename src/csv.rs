// src/csv.rs
use std::io::{Read, Write};

use ::csv::{ReaderBuilder, WriterBuilder};

use crate::store::{DataSet, Value};

/* ---------------- Parsing ---------------- */

/// Read a headed CSV table. Cells are typed with `Value::infer`; short rows
/// are padded with nulls, blank lines skipped.
pub fn read_dataset<R: Read>(rdr: R) -> crate::Result<DataSet> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(rdr);

    let headers = rdr.headers()?.iter().map(|h| h.to_string()).collect();
    let mut ds = DataSet::new(headers);

    for record in rdr.records() {
        let record = record?;
        ds.push_row(record.iter().map(Value::infer).collect());
    }
    Ok(ds)
}

/* ---------------- Writing ---------------- */

/// Header row, then one line per row in column order. Null cells are empty.
pub fn write_dataset<W: Write>(w: W, ds: &DataSet) -> crate::Result<()> {
    let mut wtr = WriterBuilder::new().flexible(true).from_writer(w);
    wtr.write_record(&ds.headers)?;
    for row in &ds.rows {
        wtr.write_record(row.iter().map(Value::to_cell))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_string(ds: &DataSet) -> crate::Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    write_dataset(&mut buf, ds)?;

    Ok(match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_pads_short_rows_and_types_cells() {
        let text = "Registration Number,Trading Name,Phone\n1,Pharma A\n2,\"Pharma, B\",0861234567\n";
        let ds = read_dataset(text.as_bytes()).unwrap();
        assert_eq!(ds.headers, vec!["Registration Number", "Trading Name", "Phone"]);
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.rows[0][0], Value::Int(1));
        assert!(ds.rows[0][2].is_null());
        assert_eq!(ds.rows[1][1], Value::from("Pharma, B"));
    }

    #[test]
    fn write_quotes_and_blanks_nulls() {
        let ds = DataSet::from_rows(
            &["A", "B"],
            vec![vec![Value::from("x,y"), Value::Null], vec![Value::Int(3), Value::from("say \"hi\"")]],
        );
        let out = to_string(&ds).unwrap();
        assert_eq!(out, "A,B\n\"x,y\",\n3,\"say \"\"hi\"\"\"\n");
    }
}
