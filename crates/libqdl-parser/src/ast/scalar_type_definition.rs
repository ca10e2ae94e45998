use crate::ast::DirectiveAnnotation;

/// `scalar Name @dir ...` — declares a leaf type with no structure of
/// its own.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarTypeDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}
