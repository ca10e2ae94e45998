use crate::ast::Value;
use indexmap::IndexMap;

/// A directive applied to some construct: `@name(arg: value, ...)`.
///
/// Distinct from [`DirectiveDefinition`](crate::ast::DirectiveDefinition),
/// which *declares* a directive and the locations it may appear at.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveAnnotation<'src> {
    pub name: &'src str,

    /// Arguments in source order; duplicate names resolve last-wins.
    pub arguments: IndexMap<&'src str, Value<'src>>,
}
