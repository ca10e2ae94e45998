/// A reference to a type: a named type, a list of a type, or a non-null
/// wrapper around a type.
///
/// `NonNull` wraps exactly one layer and the grammar never nests it
/// directly inside another `NonNull`. The wrap target is determined by
/// where the `!` appears relative to the brackets: `[T]!` is
/// non-null-of-list, `[T!]` is list-of-non-null.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TypeReference<'src> {
    /// A plain named type, e.g. `Int`.
    ///
    /// The name is empty when the parser could not classify a type from
    /// the lookahead (the error is recorded separately).
    Named(&'src str),

    /// `[T]`
    List(Box<TypeReference<'src>>),

    /// `T!`
    NonNull(Box<TypeReference<'src>>),
}

impl<'src> TypeReference<'src> {
    /// The innermost named type this reference bottoms out at.
    pub fn named_type(&self) -> &'src str {
        match self {
            TypeReference::Named(name) => name,
            TypeReference::List(inner) | TypeReference::NonNull(inner) => inner.named_type(),
        }
    }

    /// Whether the outermost layer is a non-null wrapper.
    pub fn is_non_null(&self) -> bool {
        matches!(self, TypeReference::NonNull(_))
    }
}
