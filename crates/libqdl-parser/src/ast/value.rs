use indexmap::IndexMap;

/// A QDL input value: the literal/constant representation used both for
/// default values and for directive/field arguments.
///
/// Exactly one variant is populated per instance. [`Invalid`](Self::Invalid)
/// is the degraded placeholder produced when a value could not be
/// classified from the lookahead; the classification error is recorded
/// on the parse, and callers treat the value like any other variant
/// rather than special-casing it.
#[derive(Clone, Debug, PartialEq)]
pub enum Value<'src> {
    /// `$name`
    Variable(&'src str),
    /// An integer literal, parsed base-10.
    Int(i64),
    /// A float literal.
    Float(f64),
    /// A string or block string literal, delimiters stripped. Escape
    /// sequences are kept as written.
    String(&'src str),
    /// `true` or `false`.
    Boolean(bool),
    /// `null`
    Null,
    /// Any other bare name in value position.
    Enum(&'src str),
    /// `[ ... ]`, values in source order.
    List(Vec<Value<'src>>),
    /// `{ name: value ... }`; duplicate field names resolve last-wins.
    Object(IndexMap<&'src str, Value<'src>>),
    /// Placeholder for a value that could not be parsed.
    Invalid,
}

impl<'src> Value<'src> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, Value::Invalid)
    }
}
