//! Column declarations.

use std::fmt;
use std::sync::Arc;

use crate::cell::CellValue;
use crate::fragment::Fragment;
use crate::row::Row;

/// Column identity, unique within one grid instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnId(String);

impl ColumnId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Header content for a user column.
#[derive(Debug, Clone, PartialEq)]
pub enum Header {
    /// Literal label text.
    Label(String),
    /// Caller-supplied header fragment.
    Custom(Fragment),
}

impl Header {
    pub(crate) fn fragment(&self) -> Fragment {
        match self {
            Header::Label(label) => Fragment::text(label),
            Header::Custom(fragment) => fragment.clone(),
        }
    }
}

/// Extracts a cell value from a row.
#[derive(Clone)]
pub enum Accessor {
    /// Look the value up by field name. An unresolvable field yields
    /// [`CellValue::Null`], never an error.
    Field(String),
    /// Compute the value from the whole row.
    With(Arc<dyn Fn(&Row) -> CellValue + Send + Sync>),
}

impl Accessor {
    /// Resolve this accessor against one row.
    pub fn resolve(&self, row: &Row) -> CellValue {
        match self {
            Accessor::Field(name) => row.field(name).cloned().unwrap_or(CellValue::Null),
            Accessor::With(extract) => extract(row),
        }
    }
}

impl fmt::Debug for Accessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accessor::Field(name) => f.debug_tuple("Field").field(name).finish(),
            Accessor::With(_) => f.write_str("With(<fn>)"),
        }
    }
}

/// A user-declared column.
///
/// Columns are sortable by default; disable explicitly with
/// [`Column::not_sortable`].
///
/// # Example
///
/// ```
/// use datagrid::cell::CellValue;
/// use datagrid::column::Column;
///
/// let columns = vec![
///     Column::new("id", "ID"),
///     Column::new("name", "Name"),
///     Column::new("owner", "Owner")
///         .with(|row| row.field("owner").cloned().unwrap_or(CellValue::Null))
///         .not_sortable(),
/// ];
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    id: ColumnId,
    header: Header,
    accessor: Accessor,
    sortable: bool,
}

impl Column {
    /// Create a column reading the row field that shares its id.
    pub fn new(id: impl Into<String>, header: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            accessor: Accessor::Field(id.clone()),
            id: ColumnId::new(id),
            header: Header::Label(header.into()),
            sortable: true,
        }
    }

    /// Read a differently named row field.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.accessor = Accessor::Field(name.into());
        self
    }

    /// Compute the cell value from the whole row.
    pub fn with(mut self, extract: impl Fn(&Row) -> CellValue + Send + Sync + 'static) -> Self {
        self.accessor = Accessor::With(Arc::new(extract));
        self
    }

    /// Replace the header label with a caller-supplied fragment.
    pub fn header_fragment(mut self, fragment: Fragment) -> Self {
        self.header = Header::Custom(fragment);
        self
    }

    /// Exclude this column from sorting.
    pub fn not_sortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub fn id(&self) -> &ColumnId {
        &self.id
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn accessor(&self) -> &Accessor {
        &self.accessor
    }

    pub fn sortable(&self) -> bool {
        self.sortable
    }
}
