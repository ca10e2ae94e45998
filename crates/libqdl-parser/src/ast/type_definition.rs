use crate::ast::EnumTypeDefinition;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::UnionTypeDefinition;

/// A named type-system definition.
///
/// All six kinds share one namespace in the
/// [`Document`](crate::ast::Document).
#[derive(Clone, Debug, PartialEq)]
pub enum TypeDefinition<'src> {
    Scalar(ScalarTypeDefinition<'src>),
    Object(ObjectTypeDefinition<'src>),
    Interface(InterfaceTypeDefinition<'src>),
    Union(UnionTypeDefinition<'src>),
    Enum(EnumTypeDefinition<'src>),
    InputObject(InputObjectTypeDefinition<'src>),
}

impl<'src> TypeDefinition<'src> {
    /// The defined type's name.
    pub fn name(&self) -> &'src str {
        match self {
            TypeDefinition::Scalar(def) => def.name,
            TypeDefinition::Object(def) => def.name,
            TypeDefinition::Interface(def) => def.name,
            TypeDefinition::Union(def) => def.name,
            TypeDefinition::Enum(def) => def.name,
            TypeDefinition::InputObject(def) => def.name,
        }
    }

    /// The definition's description, if one was given.
    pub fn description(&self) -> Option<&'src str> {
        match self {
            TypeDefinition::Scalar(def) => def.description,
            TypeDefinition::Object(def) => def.description,
            TypeDefinition::Interface(def) => def.description,
            TypeDefinition::Union(def) => def.description,
            TypeDefinition::Enum(def) => def.description,
            TypeDefinition::InputObject(def) => def.description,
        }
    }
}
