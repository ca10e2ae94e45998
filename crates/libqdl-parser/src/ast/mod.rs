//! Syntax tree nodes produced by [`QdlParser`](crate::QdlParser).
//!
//! Every node is constructed once, fully, during a single parser
//! invocation and never mutated afterward. Ownership is strictly
//! top-down: the [`Document`] owns every definition, and every
//! definition owns its nested directive lists, argument maps, and
//! selection sets. There are no back-references and no cycles; fragment
//! spreads reference fragments by name (a lookup key), never by pointer.
//!
//! Names and string contents borrow zero-copy from the source buffer via
//! the `'src` lifetime.

mod directive_annotation;
mod directive_definition;
mod document;
mod enum_type_definition;
mod field_definition;
mod fragment_definition;
mod input_object_type_definition;
mod input_value_definition;
mod interface_type_definition;
mod object_type_definition;
mod operation_definition;
mod scalar_type_definition;
mod schema_definition;
mod selection;
mod type_definition;
mod type_reference;
mod union_type_definition;
mod value;

pub use directive_annotation::DirectiveAnnotation;
pub use directive_definition::DirectiveDefinition;
pub use directive_definition::DirectiveLocation;
pub use document::Document;
pub use enum_type_definition::EnumTypeDefinition;
pub use enum_type_definition::EnumValueDefinition;
pub use field_definition::FieldDefinition;
pub use fragment_definition::FragmentDefinition;
pub use input_object_type_definition::InputObjectTypeDefinition;
pub use input_value_definition::InputValueDefinition;
pub use interface_type_definition::InterfaceTypeDefinition;
pub use object_type_definition::ObjectTypeDefinition;
pub use operation_definition::OperationDefinition;
pub use operation_definition::OperationKind;
pub use operation_definition::VariableDefinition;
pub use scalar_type_definition::ScalarTypeDefinition;
pub use schema_definition::RootOperationTypeDefinition;
pub use schema_definition::SchemaDefinition;
pub use selection::Field;
pub use selection::FragmentSpread;
pub use selection::InlineFragment;
pub use selection::Selection;
pub use type_definition::TypeDefinition;
pub use union_type_definition::UnionTypeDefinition;
pub use type_reference::TypeReference;
pub use value::Value;
