//! Tests for type-system definitions: scalars, objects, interfaces,
//! unions, enums, input objects, schema blocks, directive declarations,
//! namespace uniqueness, and error recovery between definitions.

use crate::ast::DirectiveLocation;
use crate::ast::OperationKind;
use crate::ast::TypeDefinition;
use crate::ast::TypeReference;
use crate::ast::Value;
use crate::tests::utils::parse;
use crate::tests::utils::parse_ok;
use crate::QdlParseErrorKind;

// =============================================================================
// Scalars
// =============================================================================

#[test]
fn parse_scalar() {
    let doc = parse_ok("scalar DateTime");
    let TypeDefinition::Scalar(scalar) = &doc.type_definitions["DateTime"] else {
        panic!("expected a scalar definition");
    };
    assert_eq!(scalar.name, "DateTime");
    assert_eq!(scalar.description, None);
    assert!(scalar.directives.is_empty());
}

#[test]
fn parse_scalar_with_description_and_directives() {
    let doc = parse_ok(r#""scalar desc" scalar Sc @tag @limit(max: 10)"#);
    let TypeDefinition::Scalar(scalar) = &doc.type_definitions["Sc"] else {
        panic!("expected a scalar definition");
    };
    assert_eq!(scalar.description, Some("scalar desc"));
    assert_eq!(scalar.directives.len(), 2);
    assert_eq!(scalar.directives[0].name, "tag");
    assert_eq!(scalar.directives[1].arguments["max"], Value::Int(10));
}

#[test]
fn parse_scalar_with_block_string_description() {
    let doc = parse_ok(r#""""multi
line""" scalar Sc"#);
    assert_eq!(
        doc.type_definitions["Sc"].description(),
        Some("multi\nline"),
    );
}

// =============================================================================
// Objects and interfaces
// =============================================================================

/// `type T { f: [Int!]! }` produces exactly one object type with one
/// field whose type is NonNull(List(NonNull(Named("Int")))).
#[test]
fn parse_object_field_type_wrapping() {
    let doc = parse_ok("type T { f: [Int!]! }");
    assert_eq!(doc.type_definitions.len(), 1);
    let TypeDefinition::Object(object) = &doc.type_definitions["T"] else {
        panic!("expected an object definition");
    };
    assert_eq!(object.fields.len(), 1);
    assert_eq!(object.fields[0].name, "f");

    let expected = TypeReference::NonNull(Box::new(TypeReference::List(Box::new(
        TypeReference::NonNull(Box::new(TypeReference::Named("Int"))),
    ))));
    assert_eq!(object.fields[0].ty, expected);
}

#[test]
fn parse_object_with_implements() {
    let doc = parse_ok("type A implements Node & Timestamped { id: ID }");
    let TypeDefinition::Object(object) = &doc.type_definitions["A"] else {
        panic!("expected an object definition");
    };
    assert_eq!(object.implements_interfaces, vec!["Node", "Timestamped"]);
}

#[test]
fn parse_object_without_body() {
    let doc = parse_ok("type Marker");
    let TypeDefinition::Object(object) = &doc.type_definitions["Marker"] else {
        panic!("expected an object definition");
    };
    assert!(object.fields.is_empty());
}

#[test]
fn parse_object_with_empty_body() {
    let doc = parse_ok("type Query {}");
    let TypeDefinition::Object(object) = &doc.type_definitions["Query"] else {
        panic!("expected an object definition");
    };
    assert!(object.fields.is_empty());
}

#[test]
fn parse_field_with_arguments() {
    let doc = parse_ok(
        r#"type Query {
            "look a user up"
            user(id: ID!, "pagination" first: Int = 25): User
        }"#,
    );
    let TypeDefinition::Object(object) = &doc.type_definitions["Query"] else {
        panic!("expected an object definition");
    };
    let field = &object.fields[0];
    assert_eq!(field.description, Some("look a user up"));
    assert_eq!(field.arguments.len(), 2);
    assert_eq!(field.arguments[0].name, "id");
    assert!(field.arguments[0].ty.is_non_null());
    assert_eq!(field.arguments[1].description, Some("pagination"));
    assert_eq!(field.arguments[1].default_value, Some(Value::Int(25)));
    assert_eq!(field.ty, TypeReference::Named("User"));
}

#[test]
fn parse_interface() {
    let doc = parse_ok("interface Node { id: ID! }");
    let TypeDefinition::Interface(interface) = &doc.type_definitions["Node"] else {
        panic!("expected an interface definition");
    };
    assert_eq!(interface.fields.len(), 1);
    assert_eq!(interface.fields[0].name, "id");
}

// =============================================================================
// Unions
// =============================================================================

#[test]
fn parse_union_with_leading_pipe() {
    let doc = parse_ok("union U = | T1");
    let TypeDefinition::Union(union) = &doc.type_definitions["U"] else {
        panic!("expected a union definition");
    };
    assert_eq!(union.member_types, vec!["T1"]);
}

#[test]
fn parse_union_with_members() {
    let doc = parse_ok("union U = T1 | T2 | T3");
    let TypeDefinition::Union(union) = &doc.type_definitions["U"] else {
        panic!("expected a union definition");
    };
    assert_eq!(union.member_types, vec!["T1", "T2", "T3"]);
}

#[test]
fn parse_union_without_members() {
    let doc = parse_ok("union Pending");
    let TypeDefinition::Union(union) = &doc.type_definitions["Pending"] else {
        panic!("expected a union definition");
    };
    assert!(union.member_types.is_empty());
}

// =============================================================================
// Enums
// =============================================================================

#[test]
fn parse_enum_without_body() {
    let doc = parse_ok("enum Empty");
    let TypeDefinition::Enum(enum_def) = &doc.type_definitions["Empty"] else {
        panic!("expected an enum definition");
    };
    assert!(enum_def.values.is_empty());
}

#[test]
fn parse_enum_with_values() {
    let doc = parse_ok(
        r#"enum Color {
            RED
            "green things" GREEN @deprecated
        }"#,
    );
    let TypeDefinition::Enum(enum_def) = &doc.type_definitions["Color"] else {
        panic!("expected an enum definition");
    };
    assert_eq!(enum_def.values.len(), 2);
    assert_eq!(enum_def.values[0].name, "RED");
    assert_eq!(enum_def.values[1].name, "GREEN");
    assert_eq!(enum_def.values[1].description, Some("green things"));
    assert_eq!(enum_def.values[1].directives.len(), 1);
}

/// `true` and `false` are rejected as enum value names; the name is
/// cleared rather than kept as the invalid literal.
#[test]
fn parse_enum_rejects_boolean_value_name() {
    let result = parse("enum E { true }");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &QdlParseErrorKind::InvalidEnumValueName {
            name: "true".to_string(),
        },
    );

    let TypeDefinition::Enum(enum_def) = &result.document.type_definitions["E"] else {
        panic!("expected an enum definition");
    };
    assert_eq!(enum_def.values.len(), 1);
    assert_eq!(enum_def.values[0].name, "");
}

// =============================================================================
// Input objects
// =============================================================================

#[test]
fn parse_input_object() {
    let doc = parse_ok(
        r#"input Filter {
            name: String
            limit: Int = 50
        }"#,
    );
    let TypeDefinition::InputObject(input) = &doc.type_definitions["Filter"] else {
        panic!("expected an input object definition");
    };
    assert_eq!(input.fields.len(), 2);
    assert_eq!(input.fields[1].default_value, Some(Value::Int(50)));
}

#[test]
fn parse_input_object_without_body() {
    let doc = parse_ok("input Nothing");
    let TypeDefinition::InputObject(input) = &doc.type_definitions["Nothing"] else {
        panic!("expected an input object definition");
    };
    assert!(input.fields.is_empty());
}

// =============================================================================
// Schema definitions
// =============================================================================

#[test]
fn parse_schema_definition() {
    let doc = parse_ok(
        r#"schema {
            query: Query
            mutation: Mutation
            subscription: Subscription
        }"#,
    );
    let schema = doc.schema.as_ref().expect("schema should be present");
    assert_eq!(schema.root_operation_types.len(), 3);
    assert_eq!(schema.root_type(OperationKind::Query), Some("Query"));
    assert_eq!(schema.root_type(OperationKind::Mutation), Some("Mutation"));
    assert_eq!(
        schema.root_type(OperationKind::Subscription),
        Some("Subscription"),
    );
}

#[test]
fn parse_schema_with_directives() {
    let doc = parse_ok("schema @internal { query: Q }");
    let schema = doc.schema.as_ref().expect("schema should be present");
    assert_eq!(schema.directives.len(), 1);
    assert_eq!(schema.directives[0].name, "internal");
}

/// Schema definitions carry no description; a leading string records an
/// error but the schema still parses.
#[test]
fn parse_schema_rejects_description() {
    let result = parse(r#""d" schema { query: Q }"#);
    assert_eq!(result.errors.len(), 1);
    assert!(result.document.schema.is_some());
}

#[test]
fn parse_schema_rejects_unknown_operation_type() {
    let result = parse("schema { observe: Q }");
    assert_eq!(result.errors.len(), 1);
    let schema = result.document.schema.as_ref().unwrap();
    assert!(schema.root_operation_types.is_empty());
}

// =============================================================================
// Directive definitions
// =============================================================================

#[test]
fn parse_directive_definition() {
    let doc = parse_ok("directive @D on SCALAR");
    let directive = &doc.directive_definitions["D"];
    assert_eq!(directive.locations, vec![DirectiveLocation::Scalar]);
}

#[test]
fn parse_directive_definition_with_arguments_and_locations() {
    let doc = parse_ok("directive @include(if: Boolean!) on FIELD | FRAGMENT_SPREAD");
    let directive = &doc.directive_definitions["include"];
    assert_eq!(directive.arguments.len(), 1);
    assert_eq!(directive.arguments[0].name, "if");
    assert_eq!(
        directive.locations,
        vec![
            DirectiveLocation::Field,
            DirectiveLocation::FragmentSpread,
        ],
    );
}

/// An unknown location is dropped from the list, with exactly one
/// recorded error.
#[test]
fn parse_directive_definition_rejects_unknown_location() {
    let result = parse("directive @D on BOGUS");
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &QdlParseErrorKind::InvalidDirectiveLocation {
            name: "BOGUS".to_string(),
        },
    );
    assert!(result.document.directive_definitions["D"].locations.is_empty());
}

#[test]
fn directive_location_sets_are_disjoint() {
    assert!(DirectiveLocation::Field.is_executable_location());
    assert!(!DirectiveLocation::Field.is_type_system_location());
    assert!(DirectiveLocation::InputFieldDefinition.is_type_system_location());
    assert_eq!(
        DirectiveLocation::from_name("VARIABLE_DEFINITION"),
        Some(DirectiveLocation::VariableDefinition),
    );
    assert_eq!(DirectiveLocation::from_name("variable_definition"), None);
}

// =============================================================================
// Namespace uniqueness and error recovery
// =============================================================================

/// Two same-named definitions resolve to exactly one entry (last-wins),
/// plus one recorded DuplicateDefinition error.
#[test]
fn duplicate_type_definitions_resolve_last_wins() {
    let result = parse(r#"scalar A @first scalar A @second"#);
    assert_eq!(result.document.type_definitions.len(), 1);
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &QdlParseErrorKind::DuplicateDefinition {
            name: "A".to_string(),
        },
    );

    let TypeDefinition::Scalar(scalar) = &result.document.type_definitions["A"] else {
        panic!("expected a scalar definition");
    };
    assert_eq!(scalar.directives[0].name, "second");
}

/// A malformed top-level token costs exactly one error; definitions on
/// both sides of it still parse.
#[test]
fn parse_recovers_between_definitions() {
    let result = parse("scalar A widget scalar B");
    assert!(result.document.type_definitions.contains_key("A"));
    assert!(result.document.type_definitions.contains_key("B"));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(
        result.errors[0].kind(),
        &QdlParseErrorKind::UnknownTopLevelDefinition {
            found: "widget".to_string(),
        },
    );
}

#[test]
fn parse_recovers_past_illegal_lexeme() {
    let result = parse("scalar A ~ scalar B");
    assert!(result.document.type_definitions.contains_key("A"));
    assert!(result.document.type_definitions.contains_key("B"));
    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind(), &QdlParseErrorKind::IllegalLexeme);
}

#[test]
fn parse_empty_document() {
    let doc = parse_ok("");
    assert!(doc.is_empty());
}

#[test]
fn parse_comment_only_document() {
    let doc = parse_ok("# just a comment\n");
    assert!(doc.is_empty());
}

/// A completely unparseable input still yields a document (empty here)
/// plus a non-empty error list.
#[test]
fn parse_garbage_still_returns_both_outputs() {
    let result = parse("%% ?? ..");
    assert!(result.document.is_empty());
    assert!(result.has_errors());
    assert!(result.valid_document().is_none());
}

#[test]
fn missing_field_type_degrades_and_recovers() {
    let result = parse("type T { f } scalar S");
    assert!(result.has_errors());
    assert!(result.document.type_definitions.contains_key("T"));
    assert!(result.document.type_definitions.contains_key("S"));
}
