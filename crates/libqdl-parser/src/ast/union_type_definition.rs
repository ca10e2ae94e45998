use crate::ast::DirectiveAnnotation;

/// `union Name @dir = | A | B`
///
/// The leading `|` is optional, as is the whole member list.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionTypeDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub member_types: Vec<&'src str>,
}
