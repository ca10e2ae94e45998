use crate::ast::DirectiveAnnotation;

/// `enum Name @dir { VALUE ... }`
///
/// The values block is optional; `enum Name` alone declares an enum with
/// no values.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumTypeDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub values: Vec<EnumValueDefinition<'src>>,
}

/// One value inside an enum definition.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumValueDefinition<'src> {
    pub description: Option<&'src str>,

    /// The value's name. Cleared to the empty string when the source
    /// name was rejected (`true`, `false`, or not a name at all); the
    /// rejection is recorded as a parse error.
    pub name: &'src str,

    pub directives: Vec<DirectiveAnnotation<'src>>,
}
