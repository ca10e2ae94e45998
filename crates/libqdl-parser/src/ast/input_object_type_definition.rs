use crate::ast::DirectiveAnnotation;
use crate::ast::InputValueDefinition;

/// `input Name @dir { field: Type = default ... }`
///
/// The fields block is optional.
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectTypeDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<InputValueDefinition<'src>>,
}
