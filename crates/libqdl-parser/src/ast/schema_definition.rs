use crate::ast::DirectiveAnnotation;
use crate::ast::OperationKind;

/// `schema @dir { query: Query mutation: Mutation ... }`
///
/// Binds each operation kind to the named object type that roots it.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDefinition<'src> {
    pub directives: Vec<DirectiveAnnotation<'src>>,

    /// Root operation type bindings in source order. A repeated kind is
    /// kept as written; [`root_type()`](Self::root_type) resolves the
    /// repetition last-wins.
    pub root_operation_types: Vec<RootOperationTypeDefinition<'src>>,
}

impl<'src> SchemaDefinition<'src> {
    /// The named type bound to `kind`, if any (last binding wins).
    pub fn root_type(&self, kind: OperationKind) -> Option<&'src str> {
        self.root_operation_types
            .iter()
            .rev()
            .find(|def| def.operation_kind == kind)
            .map(|def| def.named_type)
    }
}

/// One `query: TypeName` style binding inside a schema definition.
#[derive(Clone, Debug, PartialEq)]
pub struct RootOperationTypeDefinition<'src> {
    pub operation_kind: OperationKind,
    pub named_type: &'src str,
}
