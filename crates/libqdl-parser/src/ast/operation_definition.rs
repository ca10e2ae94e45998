use crate::ast::DirectiveAnnotation;
use crate::ast::Selection;
use crate::ast::TypeReference;
use crate::ast::Value;

/// Which of the three operation kinds an operation is.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// The keyword that introduces this operation kind.
    pub fn as_str(self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }

    /// Looks an operation kind up by its keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "query" => Some(OperationKind::Query),
            "mutation" => Some(OperationKind::Mutation),
            "subscription" => Some(OperationKind::Subscription),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An executable operation:
/// `query Name($var: Type = default) @dir { ... }`.
///
/// A `{ ... }` shorthand document produces an anonymous query: `kind` is
/// [`OperationKind::Query`] and `name` is `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition<'src> {
    pub kind: OperationKind,
    pub name: Option<&'src str>,
    pub variable_definitions: Vec<VariableDefinition<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
    pub selection_set: Vec<Selection<'src>>,
}

/// One `$name: Type = default @dir` entry in an operation's variable
/// list.
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDefinition<'src> {
    /// The variable's name, without the `$`.
    pub name: &'src str,
    pub ty: TypeReference<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<DirectiveAnnotation<'src>>,
}
