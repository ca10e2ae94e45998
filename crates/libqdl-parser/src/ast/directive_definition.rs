use crate::ast::InputValueDefinition;

/// `directive @Name(arg: Type ...) on LOCATION | LOCATION ...`
///
/// Declares a directive and restricts which grammar positions it may
/// legally be applied at. Checking that *applications* respect the
/// declared locations is a downstream (semantic) concern.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectiveDefinition<'src> {
    pub description: Option<&'src str>,
    pub name: &'src str,
    pub arguments: Vec<InputValueDefinition<'src>>,

    /// The declared locations. Unknown location names are dropped from
    /// this list (with a recorded error) rather than kept in an invalid
    /// state, so a declaration with only bogus locations has an empty
    /// list.
    pub locations: Vec<DirectiveLocation>,
}

/// A grammar position a directive may be declared for.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DirectiveLocation {
    // Executable locations
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,

    // Type-system locations
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    /// The location's name as it appears in source.
    pub fn as_str(self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Looks a location up by its source name. `None` means the name is
    /// in neither the executable nor the type-system location set.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "QUERY" => Some(DirectiveLocation::Query),
            "MUTATION" => Some(DirectiveLocation::Mutation),
            "SUBSCRIPTION" => Some(DirectiveLocation::Subscription),
            "FIELD" => Some(DirectiveLocation::Field),
            "FRAGMENT_DEFINITION" => Some(DirectiveLocation::FragmentDefinition),
            "FRAGMENT_SPREAD" => Some(DirectiveLocation::FragmentSpread),
            "INLINE_FRAGMENT" => Some(DirectiveLocation::InlineFragment),
            "VARIABLE_DEFINITION" => Some(DirectiveLocation::VariableDefinition),
            "SCHEMA" => Some(DirectiveLocation::Schema),
            "SCALAR" => Some(DirectiveLocation::Scalar),
            "OBJECT" => Some(DirectiveLocation::Object),
            "FIELD_DEFINITION" => Some(DirectiveLocation::FieldDefinition),
            "ARGUMENT_DEFINITION" => Some(DirectiveLocation::ArgumentDefinition),
            "INTERFACE" => Some(DirectiveLocation::Interface),
            "UNION" => Some(DirectiveLocation::Union),
            "ENUM" => Some(DirectiveLocation::Enum),
            "ENUM_VALUE" => Some(DirectiveLocation::EnumValue),
            "INPUT_OBJECT" => Some(DirectiveLocation::InputObject),
            "INPUT_FIELD_DEFINITION" => Some(DirectiveLocation::InputFieldDefinition),
            _ => None,
        }
    }

    /// Whether this location applies to executable documents.
    pub fn is_executable_location(self) -> bool {
        matches!(
            self,
            DirectiveLocation::Query
                | DirectiveLocation::Mutation
                | DirectiveLocation::Subscription
                | DirectiveLocation::Field
                | DirectiveLocation::FragmentDefinition
                | DirectiveLocation::FragmentSpread
                | DirectiveLocation::InlineFragment
                | DirectiveLocation::VariableDefinition
        )
    }

    /// Whether this location applies to type-system definitions.
    pub fn is_type_system_location(self) -> bool {
        !self.is_executable_location()
    }
}

impl std::fmt::Display for DirectiveLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
