use crate::ast::DirectiveAnnotation;
use crate::ast::FieldDefinition;

/// `interface Name @dir { field: Type ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceTypeDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}
