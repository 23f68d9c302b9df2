// src/store.rs
//! In-memory table shared by every stage of a run.
//!
//! Rows are positional (`rows[i][j]` belongs to `headers[j]`), the same
//! headers + rows shape the CSV layer reads and writes.
use std::fmt;

/// A single loaded cell.
#[derive(Clone, Debug, Default)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

/// Tokens read as missing, as pandas does by default.
const NA_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

impl Value {
    /// Infer a value from raw text the way a CSV cell is read.
    pub fn infer(raw: &str) -> Self {
        if NA_TOKENS.contains(&raw) {
            return Value::Null;
        }
        if let Ok(i) = raw.parse::<i64>() {
            return Value::Int(i);
        }
        match raw.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::Float(f),
            _ => Value::Text(raw.to_string()),
        }
    }

    /// Whole floats become ints; NaN becomes null.
    pub fn from_f64(f: f64) -> Self {
        if f.is_nan() {
            Value::Null
        } else if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
            Value::Int(f as i64)
        } else {
            Value::Float(f)
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Null renders as the empty string.
    pub fn to_cell(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        use Value::*;
        match (self, other) {
            (Null, Null) => true,
            (Int(a), Int(b)) => a == b,
            (Float(a), Float(b)) => a == b,
            (Int(a), Float(b)) | (Float(b), Int(a)) => *a as f64 == *b,
            (Text(a), Text(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Text(s.to_string()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Text(s) }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::Int(i) }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl DataSet {
    pub fn new(headers: Vec<String>) -> Self {
        Self { headers, rows: Vec::new() }
    }

    /// Build from string literals; handy for callers that already hold values.
    pub fn from_rows(headers: &[&str], rows: Vec<Vec<Value>>) -> Self {
        let mut ds = Self::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            ds.push_row(row);
        }
        ds
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// First column with this name.
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Append a row, padding or truncating it to the header width.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.headers.len(), Value::Null);
        self.rows.push(row);
    }

    /// Append a column filled with nulls. Returns its index; an existing
    /// column of the same name is reused untouched.
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(ix) = self.column(name) {
            return ix;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(Value::Null);
        }
        self.headers.len() - 1
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row)?.get(col)
    }

    pub fn set(&mut self, row: usize, col: usize, value: Value) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = value;
        }
    }

    /// Value of the named column in `row`, or `None` if the column is absent.
    pub fn value(&self, row: usize, name: &str) -> Option<&Value> {
        self.get(row, self.column(name)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_cell_types() {
        assert_eq!(Value::infer(""), Value::Null);
        assert_eq!(Value::infer("NaN"), Value::Null);
        assert!(matches!(Value::infer("1234"), Value::Int(1234)));
        assert!(matches!(Value::infer("1.5"), Value::Float(_)));
        assert!(matches!(Value::infer("inf"), Value::Text(_)));
        assert!(matches!(Value::infer("Pharma A"), Value::Text(_)));
    }

    #[test]
    fn null_equality_is_explicit() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Null, Value::from(""));
        assert_ne!(Value::Null, Value::Int(0));
        assert_eq!(Value::Int(5), Value::Float(5.0));
        assert_ne!(Value::Int(5), Value::from("5"));
    }

    #[test]
    fn ensure_column_pads_existing_rows() {
        let mut ds = DataSet::from_rows(&["A"], vec![vec![Value::Int(1)], vec![Value::Int(2)]]);
        let ix = ds.ensure_column("B");
        assert_eq!(ix, 1);
        assert!(ds.rows.iter().all(|r| r.len() == 2 && r[1].is_null()));
        assert_eq!(ds.ensure_column("A"), 0);
    }
}
