use crate::ast::DirectiveDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::OperationDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::TypeDefinition;
use indexmap::IndexMap;

/// Root syntax-tree node for any QDL document.
///
/// Type-system definitions and executable definitions live in
/// independent namespaces and may mix freely in a single document; which
/// kinds are permitted for a given use (e.g. execution rejecting type
/// definitions) is a downstream concern.
///
/// Name uniqueness within each namespace is enforced last-wins by the
/// parser, which also records a
/// [`DuplicateDefinition`](crate::QdlParseErrorKind::DuplicateDefinition)
/// error for the shadowed binding. Map iteration follows insertion
/// order, though nothing in the grammar depends on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document<'src> {
    /// At most one `schema { ... }` definition.
    pub schema: Option<SchemaDefinition<'src>>,

    /// Scalar, object, interface, union, enum, and input object
    /// definitions, by type name. One shared namespace.
    pub type_definitions: IndexMap<&'src str, TypeDefinition<'src>>,

    /// Directive declarations, by directive name. Their own namespace,
    /// separate from type names.
    pub directive_definitions: IndexMap<&'src str, DirectiveDefinition<'src>>,

    /// Named operations, by operation name.
    pub operations: IndexMap<&'src str, OperationDefinition<'src>>,

    /// The at-most-one anonymous operation, distinguished from the named
    /// ones by its absence of a name.
    pub anonymous_operation: Option<OperationDefinition<'src>>,

    /// Fragment definitions, by fragment name.
    pub fragments: IndexMap<&'src str, FragmentDefinition<'src>>,
}

impl<'src> Document<'src> {
    /// Returns `true` if the document contains no definitions at all.
    pub fn is_empty(&self) -> bool {
        self.schema.is_none()
            && self.type_definitions.is_empty()
            && self.directive_definitions.is_empty()
            && self.operations.is_empty()
            && self.anonymous_operation.is_none()
            && self.fragments.is_empty()
    }
}
