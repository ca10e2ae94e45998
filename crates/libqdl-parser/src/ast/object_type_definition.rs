use crate::ast::DirectiveAnnotation;
use crate::ast::FieldDefinition;

/// `type Name implements I & J @dir { field: Type ... }`
///
/// The fields block is optional; a definition without one has an empty
/// field list.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectTypeDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub implements_interfaces: Vec<&'src str>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub fields: Vec<FieldDefinition<'src>>,
}
