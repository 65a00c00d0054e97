//! Bindable values and the host types that map to SQL column types.
//!
//! Every value that reaches a statement travels as a [`SqlValue`] in the
//! binding list, never as text spliced into the SQL.

/// A scalar bound to a `?` placeholder.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// NULL value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Float value.
    Float(f64),
    /// Text value.
    Text(String),
    /// Binary blob value.
    Blob(Vec<u8>),
}

/// Conversion of host values into [`SqlValue`].
pub trait ToSqlValue {
    /// Converts the value to a `SqlValue`.
    fn to_sql_value(self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(self) -> SqlValue {
        self
    }
}

macro_rules! impl_to_sql_value {
    ($variant:ident: $($ty:ty),+) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(self) -> SqlValue {
                    SqlValue::$variant(self.into())
                }
            }
        )+
    };
}

impl_to_sql_value!(Bool: bool);
impl_to_sql_value!(Int: i64, i32, i16, i8, u32, u16, u8);
impl_to_sql_value!(Float: f64, f32);
impl_to_sql_value!(Text: String, &str);
impl_to_sql_value!(Blob: Vec<u8>, &[u8]);

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(self) -> SqlValue {
        self.map_or(SqlValue::Null, ToSqlValue::to_sql_value)
    }
}

/// A host type that can be declared as a column type.
///
/// The associated keyword is what a column declaration emits after the
/// column name, e.g. `age INTEGER`.
pub trait Value: ToSqlValue {
    /// The SQL type keyword for this host type.
    const DATATYPE: &'static str;
}

impl Value for i64 {
    const DATATYPE: &'static str = "INTEGER";
}

// SQLite stores booleans as 0/1 integers.
impl Value for bool {
    const DATATYPE: &'static str = "INTEGER";
}

impl Value for f64 {
    const DATATYPE: &'static str = "REAL";
}

impl Value for String {
    const DATATYPE: &'static str = "TEXT";
}

impl Value for Vec<u8> {
    const DATATYPE: &'static str = "BLOB";
}
