use crate::ast::DirectiveAnnotation;
use crate::ast::InputValueDefinition;
use crate::ast::TypeReference;

/// One field inside an object or interface definition:
/// `name(arg: Type ...): Type @dir`.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub arguments: Vec<InputValueDefinition<'src>>,
    pub ty: TypeReference<'src>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}
