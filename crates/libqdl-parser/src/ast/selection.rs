use crate::ast::DirectiveAnnotation;
use crate::ast::Value;
use indexmap::IndexMap;

/// One entry in a selection set: a field, a fragment spread, or an
/// inline fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection<'src> {
    Field(Field<'src>),
    FragmentSpread(FragmentSpread<'src>),
    InlineFragment(InlineFragment<'src>),
}

/// `alias: name(arg: value) @dir { ... }`
#[derive(Clone, Debug, PartialEq)]
pub struct Field<'src> {
    pub alias: Option<&'src str>,
    pub name: &'src str,

    /// Arguments in source order; duplicate names resolve last-wins.
    pub arguments: IndexMap<&'src str, Value<'src>>,

    pub directives: Vec<DirectiveAnnotation<'src>>,

    /// Nested selections; empty for leaf/scalar fields.
    pub selection_set: Vec<Selection<'src>>,
}

/// `...FragmentName @dir`
///
/// The fragment is referenced by name (a lookup key into the document's
/// fragment namespace), never by pointer.
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread<'src> {
    pub fragment_name: &'src str,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}

/// `... on Type @dir { ... }`
///
/// The type condition is optional; the selection set is not.
#[derive(Clone, Debug, PartialEq)]
pub struct InlineFragment<'src> {
    pub type_condition: Option<&'src str>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Vec<Selection<'src>>,
}
