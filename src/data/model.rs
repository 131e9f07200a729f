use std::fmt;

// ---------------------------------------------------------------------------
// Cell – a single dynamically-typed value in the table
// ---------------------------------------------------------------------------

/// One cell of the parsed table, mirroring the ARFF column types in play:
/// `numeric`/`real` attributes parse to `Numeric`, `integer` attributes to
/// `Int`, nominal attributes to `Nominal`. Label mapping rewrites nominal
/// cells to `Int`.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Numeric(f64),
    Int(i64),
    Nominal(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Numeric(v) => write!(f, "{v}"),
            Cell::Int(i) => write!(f, "{i}"),
            Cell::Nominal(s) => write!(f, "{s}"),
        }
    }
}

impl Cell {
    /// Interpret the cell as `f64` where possible.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Numeric(v) => Some(*v),
            Cell::Int(i) => Some(*i as f64),
            Cell::Nominal(_) => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Attribute – one declared column
// ---------------------------------------------------------------------------

/// Column type as declared in the ARFF header.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrKind {
    /// `numeric` or `real` – parsed as `f64`.
    Numeric,
    /// `integer` – parsed as `i64`. Also the kind of a mapped label column.
    Int,
    /// Enumerated values, e.g. `{no,yes}`.
    Nominal(Vec<String>),
}

/// One `@attribute` declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub kind: AttrKind,
}

// ---------------------------------------------------------------------------
// ArffTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed dataset: declared attributes plus row-major cells.
/// Invariant: every row holds exactly one cell per attribute, in declaration
/// order (`rows[i][j]` belongs to `attributes[j]`).
#[derive(Debug, Clone)]
pub struct ArffTable {
    /// Relation name from the `@relation` line.
    pub relation: String,
    /// Ordered column declarations.
    pub attributes: Vec<Attribute>,
    /// Row-major data.
    pub rows: Vec<Vec<Cell>>,
}

impl ArffTable {
    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
