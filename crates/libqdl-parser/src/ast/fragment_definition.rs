use crate::ast::DirectiveAnnotation;
use crate::ast::Selection;

/// `fragment Name on Type @dir { ... }`
///
/// Spreads reference fragments by name, so a fragment that (directly or
/// transitively) spreads itself still parses; detecting the semantic
/// cycle is a downstream concern.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentDefinition<'src> {
    pub name: &'src str,
    pub type_condition: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Vec<Selection<'src>>,
}
