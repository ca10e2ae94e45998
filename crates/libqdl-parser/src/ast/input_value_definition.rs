use crate::ast::DirectiveAnnotation;
use crate::ast::TypeReference;
use crate::ast::Value;

/// A named, typed input slot: an argument definition on a field or
/// directive, or a field of an input object type.
///
/// `name: Type = default @dir`
#[derive(Clone, Debug, PartialEq)]
pub struct InputValueDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub ty: TypeReference<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}
