use std::path::Path;

use thiserror::Error;

use super::model::{ArffTable, AttrKind, Attribute, Cell};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failures while reading or parsing an ARFF file. All of them are fatal to
/// the run; there is no recovery path.
#[derive(Debug, Error)]
pub enum ArffError {
    #[error("reading ARFF file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed header directive: {text}")]
    MalformedHeader { line: usize, text: String },

    #[error("line {line}: unsupported attribute type '{ty}' for '{name}'")]
    UnsupportedType {
        line: usize,
        name: String,
        ty: String,
    },

    #[error("no @data section found")]
    MissingData,

    #[error("no @attribute declarations before @data")]
    NoAttributes,

    #[error("reading data row: {0}")]
    Csv(#[from] csv::Error),

    #[error("data row {row}: expected {expected} fields, got {got}")]
    ColumnCount {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("data row {row}, column '{column}': '{value}' is not a number")]
    BadNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("data row {row}, column '{column}': '{value}' is not a declared nominal value")]
    BadNominal {
        row: usize,
        column: String,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load an ARFF file into an [`ArffTable`].
///
/// Supported header directives (case-insensitive): `@relation`, `@attribute`,
/// `@data`. Attribute types: `numeric` / `real` (→ `f64`), `integer`
/// (→ `i64`) and nominal `{a,b,...}`. `%` starts a comment, names and nominal
/// values may be single- or double-quoted, and a missing numeric value (`?`)
/// parses as NaN.
pub fn load_arff(path: &Path) -> Result<ArffTable, ArffError> {
    let text = std::fs::read_to_string(path)?;
    parse(&text)
}

// ---------------------------------------------------------------------------
// Header section
// ---------------------------------------------------------------------------

fn parse(text: &str) -> Result<ArffTable, ArffError> {
    let mut relation = String::new();
    let mut attributes: Vec<Attribute> = Vec::new();
    let mut data_start = None;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        let lower = trimmed.to_ascii_lowercase();
        if lower.starts_with("@relation") {
            relation = unquote(trimmed["@relation".len()..].trim()).to_string();
        } else if lower.starts_with("@attribute") {
            attributes.push(parse_attribute(
                trimmed["@attribute".len()..].trim(),
                line_no,
            )?);
        } else if lower.starts_with("@data") {
            // Everything after this line is the data section.
            data_start = Some(idx + 1);
            break;
        } else {
            return Err(ArffError::MalformedHeader {
                line: line_no,
                text: trimmed.to_string(),
            });
        }
    }

    let data_start = data_start.ok_or(ArffError::MissingData)?;
    if attributes.is_empty() {
        return Err(ArffError::NoAttributes);
    }

    let body = text
        .lines()
        .skip(data_start)
        .collect::<Vec<_>>()
        .join("\n");
    let rows = parse_data(&body, &attributes)?;

    log::debug!(
        "parsed relation '{relation}': {} attributes, {} rows",
        attributes.len(),
        rows.len()
    );

    Ok(ArffTable {
        relation,
        attributes,
        rows,
    })
}

/// Parse the remainder of an `@attribute` line: a (possibly quoted) name
/// followed by a type.
fn parse_attribute(rest: &str, line: usize) -> Result<Attribute, ArffError> {
    let (name, ty) = split_name_type(rest).ok_or_else(|| ArffError::MalformedHeader {
        line,
        text: format!("@attribute {rest}"),
    })?;

    let kind = if ty.starts_with('{') && ty.ends_with('}') {
        let values = ty[1..ty.len() - 1]
            .split(',')
            .map(|v| unquote(v.trim()).to_string())
            .collect();
        AttrKind::Nominal(values)
    } else {
        match ty.to_ascii_lowercase().as_str() {
            "numeric" | "real" => AttrKind::Numeric,
            "integer" => AttrKind::Int,
            _ => {
                return Err(ArffError::UnsupportedType {
                    line,
                    name,
                    ty: ty.to_string(),
                })
            }
        }
    };

    Ok(Attribute { name, kind })
}

/// Split an attribute declaration into name and type, honouring quoted names
/// (`'my attr' numeric`).
fn split_name_type(rest: &str) -> Option<(String, &str)> {
    let rest = rest.trim();
    let mut chars = rest.chars();
    match chars.next()? {
        quote @ ('\'' | '"') => {
            let body = &rest[1..];
            let end = body.find(quote)?;
            Some((body[..end].to_string(), body[end + 1..].trim()))
        }
        _ => {
            let end = rest.find(char::is_whitespace)?;
            Some((rest[..end].to_string(), rest[end..].trim()))
        }
    }
}

/// Strip one layer of matching single or double quotes.
fn unquote(s: &str) -> &str {
    let s = s.trim();
    if s.len() >= 2
        && ((s.starts_with('\'') && s.ends_with('\'')) || (s.starts_with('"') && s.ends_with('"')))
    {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

// ---------------------------------------------------------------------------
// Data section
// ---------------------------------------------------------------------------

/// The section after `@data` is plain CSV; `%` comment lines and blank lines
/// are allowed between records.
fn parse_data(body: &str, attributes: &[Attribute]) -> Result<Vec<Vec<Cell>>, ArffError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'%'))
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        if record.len() != attributes.len() {
            return Err(ArffError::ColumnCount {
                row: row_no,
                expected: attributes.len(),
                got: record.len(),
            });
        }

        let mut cells = Vec::with_capacity(attributes.len());
        for (attr, field) in attributes.iter().zip(record.iter()) {
            cells.push(parse_cell(field, attr, row_no)?);
        }
        rows.push(cells);
    }

    Ok(rows)
}

/// Parse one field according to its declared attribute kind.
fn parse_cell(field: &str, attr: &Attribute, row: usize) -> Result<Cell, ArffError> {
    match &attr.kind {
        AttrKind::Numeric => {
            if field == "?" {
                // `?` is the ARFF missing marker
                return Ok(Cell::Numeric(f64::NAN));
            }
            field
                .parse::<f64>()
                .map(Cell::Numeric)
                .map_err(|_| ArffError::BadNumber {
                    row,
                    column: attr.name.clone(),
                    value: field.to_string(),
                })
        }
        AttrKind::Int => field
            .parse::<i64>()
            .map(Cell::Int)
            .map_err(|_| ArffError::BadNumber {
                row,
                column: attr.name.clone(),
                value: field.to_string(),
            }),
        AttrKind::Nominal(values) => {
            let value = unquote(field);
            if value != "?" && !values.iter().any(|v| v == value) {
                return Err(ArffError::BadNominal {
                    row,
                    column: attr.name.clone(),
                    value: value.to_string(),
                });
            }
            Ok(Cell::Nominal(value.to_string()))
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
