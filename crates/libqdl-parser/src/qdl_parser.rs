//! Recursive descent parser for QDL documents.
//!
//! This module provides [`QdlParser`], which turns source text into a
//! [`Document`] plus an ordered list of [`QdlParseError`]s. The parser
//! is unified: type-system definitions and executable definitions may
//! mix freely in one document.
//!
//! # Architecture
//!
//! There is no explicit state machine; the parse state is the call stack
//! of production-rule methods plus the cursor position. Each grammar
//! nonterminal has a corresponding `parse_*` method that consumes tokens
//! from the [`QdlTokenCursor`] and returns a tree node.
//!
//! # Error Recovery
//!
//! No production rule aborts the parse. A malformed construct degrades
//! to a best-effort partial node, the defect is recorded via
//! [`record_error`](QdlParser::record_error), and parsing continues, so
//! one bad definition never hides the rest of the document. Recovery at
//! the top level is deliberately coarse: skip one token and retry
//! classification. Every loop over a delimited body consumes at least
//! one token per iteration and breaks on its closing token or end of
//! input, so the parse terminates in a number of steps bounded by the
//! token count.

use crate::ast::DirectiveAnnotation;
use crate::ast::DirectiveDefinition;
use crate::ast::DirectiveLocation;
use crate::ast::Document;
use crate::ast::EnumTypeDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::Field;
use crate::ast::FieldDefinition;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::InputObjectTypeDefinition;
use crate::ast::InputValueDefinition;
use crate::ast::InterfaceTypeDefinition;
use crate::ast::ObjectTypeDefinition;
use crate::ast::OperationDefinition;
use crate::ast::OperationKind;
use crate::ast::RootOperationTypeDefinition;
use crate::ast::ScalarTypeDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::Selection;
use crate::ast::TypeDefinition;
use crate::ast::TypeReference;
use crate::ast::UnionTypeDefinition;
use crate::ast::Value;
use crate::ast::VariableDefinition;
use crate::token::QdlTokenKind;
use crate::ParseResult;
use crate::QdlParseError;
use crate::QdlParseErrorKind;
use crate::QdlSourceSpan;
use crate::QdlTokenCursor;
use indexmap::IndexMap;

/// A leading description string together with its span, before it is
/// attached to (or rejected by) the definition that follows it.
type Description<'src> = Option<(&'src str, QdlSourceSpan)>;

/// A recursive descent parser for QDL documents.
///
/// # Usage
///
/// ```
/// use libqdl_parser::QdlParser;
///
/// let source = "type Query { hello: String }";
/// let result = QdlParser::new(source).parse();
///
/// assert!(result.is_ok());
/// let doc = result.valid_document().unwrap();
/// assert!(doc.type_definitions.contains_key("Query"));
/// ```
///
/// A parser instance carries mutable position state and is not meant to
/// be shared; concurrent parses of independent documents each use their
/// own instance.
pub struct QdlParser<'src> {
    /// The lookahead cursor over the pre-scanned token list.
    cursor: QdlTokenCursor<'src>,

    /// Accumulated parse errors, in source order.
    errors: Vec<QdlParseError>,

    /// Current nesting depth for recursive parsing.
    ///
    /// Shared counter, incremented on entry to `parse_value`,
    /// `parse_selection_set`, and `parse_type_reference`; decremented on
    /// exit. Prevents stack overflow from deeply nested constructs
    /// (e.g. `[[[...` values, `{ f { f { ...` selection sets).
    recursion_depth: usize,
}

impl<'src> QdlParser<'src> {
    /// Maximum nesting depth for recursive parsing.
    ///
    /// 64 levels is far beyond any realistic document while staying safe
    /// even in debug builds with large un-optimized stack frames.
    const MAX_RECURSION_DEPTH: usize = 64;

    /// Creates a parser for `source`, pre-scanning it into a token list.
    pub fn new(source: &'src str) -> Self {
        Self {
            cursor: QdlTokenCursor::new(source),
            errors: Vec::new(),
            recursion_depth: 0,
        }
    }

    /// Parses the whole document.
    ///
    /// Always returns both a document and the error list; see
    /// [`ParseResult`] for how the two relate.
    pub fn parse(mut self) -> ParseResult<'src> {
        let mut document = Document::default();

        loop {
            if self.cursor.is_at_end() {
                break;
            }

            let description = self.parse_description();
            let token = self.cursor.peek().clone();
            let definition_span = token.span;

            match &token.kind {
                QdlTokenKind::Name(keyword) => match *keyword {
                    "schema" => {
                        self.reject_description(description, "schema");
                        let schema = self.parse_schema_definition();
                        if document.schema.is_some() {
                            self.record_error(
                                "duplicate schema definition",
                                definition_span,
                                QdlParseErrorKind::DuplicateDefinition {
                                    name: "schema".to_string(),
                                },
                            );
                        }
                        document.schema = Some(schema);
                    }
                    "scalar" => {
                        let def = self.parse_scalar_type_definition(description_text(description));
                        self.insert_type_definition(
                            &mut document,
                            TypeDefinition::Scalar(def),
                            definition_span,
                        );
                    }
                    "type" => {
                        let def = self.parse_object_type_definition(description_text(description));
                        self.insert_type_definition(
                            &mut document,
                            TypeDefinition::Object(def),
                            definition_span,
                        );
                    }
                    "interface" => {
                        let def =
                            self.parse_interface_type_definition(description_text(description));
                        self.insert_type_definition(
                            &mut document,
                            TypeDefinition::Interface(def),
                            definition_span,
                        );
                    }
                    "union" => {
                        let def = self.parse_union_type_definition(description_text(description));
                        self.insert_type_definition(
                            &mut document,
                            TypeDefinition::Union(def),
                            definition_span,
                        );
                    }
                    "enum" => {
                        let def = self.parse_enum_type_definition(description_text(description));
                        self.insert_type_definition(
                            &mut document,
                            TypeDefinition::Enum(def),
                            definition_span,
                        );
                    }
                    "input" => {
                        let def =
                            self.parse_input_object_type_definition(description_text(description));
                        self.insert_type_definition(
                            &mut document,
                            TypeDefinition::InputObject(def),
                            definition_span,
                        );
                    }
                    "directive" => {
                        let def = self.parse_directive_definition(description_text(description));
                        self.insert_directive_definition(&mut document, def, definition_span);
                    }
                    "query" | "mutation" | "subscription" => {
                        self.reject_description(description, "operation");
                        // The keyword set is exactly the OperationKind set.
                        let kind = OperationKind::from_keyword(keyword)
                            .expect("dispatch arm only matches operation keywords");
                        let operation = self.parse_operation_definition(kind);
                        self.insert_operation(&mut document, operation, definition_span);
                    }
                    "fragment" => {
                        self.reject_description(description, "fragment");
                        let fragment = self.parse_fragment_definition();
                        self.insert_fragment(&mut document, fragment, definition_span);
                    }
                    _ => {
                        self.cursor.advance();
                        self.record_error(
                            format!("unknown top-level definition `{keyword}`"),
                            definition_span,
                            QdlParseErrorKind::UnknownTopLevelDefinition {
                                found: (*keyword).to_string(),
                            },
                        );
                    }
                },

                // A bare selection set is an anonymous query.
                QdlTokenKind::CurlyBraceOpen => {
                    self.reject_description(description, "operation");
                    let selection_set = self.parse_selection_set();
                    let operation = OperationDefinition {
                        kind: OperationKind::Query,
                        name: None,
                        variable_definitions: Vec::new(),
                        directives: Vec::new(),
                        selection_set,
                    };
                    self.insert_operation(&mut document, operation, definition_span);
                }

                QdlTokenKind::Error { message } => {
                    let message = message.clone();
                    self.cursor.advance();
                    self.record_error(message, definition_span, QdlParseErrorKind::IllegalLexeme);
                }

                _ => {
                    let found = token.kind.display_name().to_string();
                    self.cursor.advance();
                    self.record_error(
                        format!("unknown top-level definition `{found}`"),
                        definition_span,
                        QdlParseErrorKind::UnknownTopLevelDefinition { found },
                    );
                }
            }
        }

        ParseResult {
            document,
            errors: self.errors,
        }
    }

    // =========================================================================
    // Error recording and document assembly
    // =========================================================================

    fn record_error(
        &mut self,
        message: impl Into<String>,
        span: QdlSourceSpan,
        kind: QdlParseErrorKind,
    ) {
        self.errors.push(QdlParseError::new(message, span, kind));
    }

    fn record_eof_error(&mut self, expected: &str) {
        let span = self.cursor.peek().span;
        self.record_error(
            format!("expected `{expected}`, found end of input"),
            span,
            QdlParseErrorKind::MissingExpectedToken {
                expected: expected.to_string(),
                found: "end of input".to_string(),
            },
        );
    }

    /// Records an error for a description attached to a construct that
    /// carries none (schema, operation, and fragment definitions).
    fn reject_description(&mut self, description: Description<'src>, construct: &str) {
        if let Some((_, span)) = description {
            self.record_error(
                format!("unexpected description string on {construct} definition"),
                span,
                QdlParseErrorKind::UnexpectedToken {
                    found: "string".to_string(),
                },
            );
        }
    }

    /// Inserts a type definition into the document's shared type
    /// namespace, last-wins. A non-empty reused name records a
    /// `DuplicateDefinition` error; an empty name (from a failed name
    /// parse, already reported) is kept without the extra error.
    fn insert_type_definition(
        &mut self,
        document: &mut Document<'src>,
        definition: TypeDefinition<'src>,
        span: QdlSourceSpan,
    ) {
        let name = definition.name();
        if !name.is_empty() && document.type_definitions.contains_key(name) {
            self.record_error(
                format!("duplicate definition of type `{name}`"),
                span,
                QdlParseErrorKind::DuplicateDefinition {
                    name: name.to_string(),
                },
            );
        }
        document.type_definitions.insert(name, definition);
    }

    fn insert_directive_definition(
        &mut self,
        document: &mut Document<'src>,
        definition: DirectiveDefinition<'src>,
        span: QdlSourceSpan,
    ) {
        let name = definition.name;
        if !name.is_empty() && document.directive_definitions.contains_key(name) {
            self.record_error(
                format!("duplicate definition of directive `{name}`"),
                span,
                QdlParseErrorKind::DuplicateDefinition {
                    name: name.to_string(),
                },
            );
        }
        document.directive_definitions.insert(name, definition);
    }

    fn insert_operation(
        &mut self,
        document: &mut Document<'src>,
        operation: OperationDefinition<'src>,
        span: QdlSourceSpan,
    ) {
        match operation.name {
            Some(name) => {
                if !name.is_empty() && document.operations.contains_key(name) {
                    self.record_error(
                        format!("duplicate definition of operation `{name}`"),
                        span,
                        QdlParseErrorKind::DuplicateDefinition {
                            name: name.to_string(),
                        },
                    );
                }
                document.operations.insert(name, operation);
            }
            None => {
                if document.anonymous_operation.is_some() {
                    self.record_error(
                        "duplicate anonymous operation",
                        span,
                        QdlParseErrorKind::DuplicateDefinition {
                            name: String::new(),
                        },
                    );
                }
                document.anonymous_operation = Some(operation);
            }
        }
    }

    fn insert_fragment(
        &mut self,
        document: &mut Document<'src>,
        fragment: FragmentDefinition<'src>,
        span: QdlSourceSpan,
    ) {
        let name = fragment.name;
        if !name.is_empty() && document.fragments.contains_key(name) {
            self.record_error(
                format!("duplicate definition of fragment `{name}`"),
                span,
                QdlParseErrorKind::DuplicateDefinition {
                    name: name.to_string(),
                },
            );
        }
        document.fragments.insert(name, fragment);
    }

    // =========================================================================
    // Token expectation helpers
    // =========================================================================

    /// Consumes the next token if it matches `expected`. Returns whether
    /// it did. For optional sub-parts: absence is not an error.
    fn eat(&mut self, expected: QdlTokenKind<'src>) -> bool {
        if self.cursor.peek().kind == expected {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Requires the next token to be `expected`, consuming optimistically:
    /// on a mismatch the actually-present token is still consumed (so the
    /// parse keeps moving) and a `MissingExpectedToken` error is
    /// recorded. End of input and `}` are left unconsumed so the
    /// enclosing block's loop can recover.
    fn expect_token(&mut self, expected: QdlTokenKind<'src>) {
        let token = self.cursor.peek().clone();
        if token.kind == expected {
            self.cursor.advance();
            return;
        }

        let expected_name = expected.display_name();
        if token.is_eof() {
            self.record_eof_error(expected_name);
            return;
        }
        if matches!(token.kind, QdlTokenKind::CurlyBraceClose) {
            self.record_error(
                format!("expected `{expected_name}`, found `}}`"),
                token.span,
                QdlParseErrorKind::MissingExpectedToken {
                    expected: expected_name.to_string(),
                    found: "}".to_string(),
                },
            );
            return;
        }

        self.cursor.advance();
        match token.kind {
            QdlTokenKind::Error { message } => {
                self.record_error(message, token.span, QdlParseErrorKind::IllegalLexeme);
            }
            _ => {
                let found = token.kind.display_name().to_string();
                self.record_error(
                    format!("expected `{expected_name}`, found `{found}`"),
                    token.span,
                    QdlParseErrorKind::MissingExpectedToken {
                        expected: expected_name.to_string(),
                        found,
                    },
                );
            }
        }
    }

    /// Requires the next token to be the name `keyword`, with the same
    /// optimistic-consumption contract as [`expect_token`](Self::expect_token).
    fn expect_keyword(&mut self, keyword: &'static str) {
        let token = self.cursor.peek().clone();
        if let QdlTokenKind::Name(name) = &token.kind
            && *name == keyword
        {
            self.cursor.advance();
            return;
        }

        if token.is_eof() {
            self.record_eof_error(keyword);
            return;
        }

        self.cursor.advance();
        match token.kind {
            QdlTokenKind::Error { message } => {
                self.record_error(message, token.span, QdlParseErrorKind::IllegalLexeme);
            }
            _ => {
                let found = token.kind.display_name().to_string();
                self.record_error(
                    format!("expected `{keyword}`, found `{found}`"),
                    token.span,
                    QdlParseErrorKind::MissingExpectedToken {
                        expected: keyword.to_string(),
                        found,
                    },
                );
            }
        }
    }

    /// Requires a name token, returning its literal, or the empty string
    /// after recording an error. Mismatched tokens are consumed, except
    /// `}` and end of input, which are left for the enclosing block's
    /// loop to recover on.
    fn expect_name(&mut self) -> &'src str {
        let token = self.cursor.peek().clone();
        match &token.kind {
            QdlTokenKind::Name(name) => {
                let name = *name;
                self.cursor.advance();
                name
            }
            QdlTokenKind::Eof => {
                self.record_eof_error("name");
                ""
            }
            QdlTokenKind::CurlyBraceClose => {
                self.record_error(
                    "expected a name, found `}`",
                    token.span,
                    QdlParseErrorKind::MissingExpectedToken {
                        expected: "name".to_string(),
                        found: "}".to_string(),
                    },
                );
                ""
            }
            QdlTokenKind::Error { message } => {
                let message = message.clone();
                self.cursor.advance();
                self.record_error(message, token.span, QdlParseErrorKind::IllegalLexeme);
                ""
            }
            _ => {
                let found = token.kind.display_name().to_string();
                self.cursor.advance();
                self.record_error(
                    format!("expected a name, found `{found}`"),
                    token.span,
                    QdlParseErrorKind::MissingExpectedToken {
                        expected: "name".to_string(),
                        found,
                    },
                );
                ""
            }
        }
    }

    /// Consumes a leading description string if one is present.
    fn parse_description(&mut self) -> Description<'src> {
        let token = self.cursor.peek();
        let content = token.kind.string_content()?;
        let span = token.span;
        self.cursor.advance();
        Some((content, span))
    }

    // =========================================================================
    // Type-system definitions
    // =========================================================================

    /// Parses `schema @dir { query: Query ... }`.
    fn parse_schema_definition(&mut self) -> SchemaDefinition<'src> {
        self.expect_keyword("schema");
        let directives = self.parse_directive_annotations();
        let mut root_operation_types = Vec::new();

        let token = self.cursor.peek().clone();
        if !matches!(token.kind, QdlTokenKind::CurlyBraceOpen) {
            self.record_error(
                format!(
                    "expected a block defining root operation types, found `{}`",
                    token.kind.display_name(),
                ),
                token.span,
                QdlParseErrorKind::MissingExpectedToken {
                    expected: "{".to_string(),
                    found: token.kind.display_name().to_string(),
                },
            );
            return SchemaDefinition {
                directives,
                root_operation_types,
            };
        }
        self.cursor.advance();

        loop {
            match self.cursor.peek().kind {
                QdlTokenKind::CurlyBraceClose => {
                    self.cursor.advance();
                    break;
                }
                QdlTokenKind::Eof => {
                    self.record_eof_error("}");
                    break;
                }
                _ => {}
            }

            let operation_span = self.cursor.peek().span;
            let operation_name = self.expect_name();
            if operation_name.is_empty() {
                continue;
            }
            // An unknown operation kind is recorded but the binding is
            // still parsed through, so one bad name costs one error.
            let operation_kind = OperationKind::from_keyword(operation_name);
            if operation_kind.is_none() {
                self.record_error(
                    format!(
                        "expected operation type to be `query`, `mutation`, or \
                         `subscription`, found `{operation_name}`"
                    ),
                    operation_span,
                    QdlParseErrorKind::UnexpectedToken {
                        found: operation_name.to_string(),
                    },
                );
            }

            if !matches!(self.cursor.peek().kind, QdlTokenKind::Colon) {
                let token = self.cursor.peek().clone();
                self.record_error(
                    format!("expected `:`, found `{}`", token.kind.display_name()),
                    token.span,
                    QdlParseErrorKind::MissingExpectedToken {
                        expected: ":".to_string(),
                        found: token.kind.display_name().to_string(),
                    },
                );
                continue;
            }
            self.cursor.advance();

            let named_type = match &self.cursor.peek().kind {
                QdlTokenKind::Name(name) => {
                    let name = *name;
                    self.cursor.advance();
                    name
                }
                _ => {
                    let token = self.cursor.peek().clone();
                    self.record_error(
                        format!(
                            "expected a type name, found `{}`",
                            token.kind.display_name(),
                        ),
                        token.span,
                        QdlParseErrorKind::MissingExpectedToken {
                            expected: "name".to_string(),
                            found: token.kind.display_name().to_string(),
                        },
                    );
                    continue;
                }
            };

            if let Some(operation_kind) = operation_kind {
                root_operation_types.push(RootOperationTypeDefinition {
                    operation_kind,
                    named_type,
                });
            }
        }

        SchemaDefinition {
            directives,
            root_operation_types,
        }
    }

    /// Parses `scalar Name @dir`.
    fn parse_scalar_type_definition(
        &mut self,
        description: Option<&'src str>,
    ) -> ScalarTypeDefinition<'src> {
        self.expect_keyword("scalar");
        let name = self.expect_name();
        let directives = self.parse_directive_annotations();
        ScalarTypeDefinition {
            description,
            name,
            directives,
        }
    }

    /// Parses `type Name implements I & J @dir { fields }`.
    fn parse_object_type_definition(
        &mut self,
        description: Option<&'src str>,
    ) -> ObjectTypeDefinition<'src> {
        self.expect_keyword("type");
        let name = self.expect_name();
        let implements_interfaces = self.parse_implements_interfaces();
        let directives = self.parse_directive_annotations();
        let fields = if matches!(self.cursor.peek().kind, QdlTokenKind::CurlyBraceOpen) {
            self.parse_fields_definition()
        } else {
            Vec::new()
        };
        ObjectTypeDefinition {
            description,
            name,
            implements_interfaces,
            directives,
            fields,
        }
    }

    /// Parses `interface Name @dir { fields }`.
    fn parse_interface_type_definition(
        &mut self,
        description: Option<&'src str>,
    ) -> InterfaceTypeDefinition<'src> {
        self.expect_keyword("interface");
        let name = self.expect_name();
        let directives = self.parse_directive_annotations();
        let fields = if matches!(self.cursor.peek().kind, QdlTokenKind::CurlyBraceOpen) {
            self.parse_fields_definition()
        } else {
            Vec::new()
        };
        InterfaceTypeDefinition {
            description,
            name,
            directives,
            fields,
        }
    }

    /// Parses `union Name @dir = | A | B`.
    fn parse_union_type_definition(
        &mut self,
        description: Option<&'src str>,
    ) -> UnionTypeDefinition<'src> {
        self.expect_keyword("union");
        let name = self.expect_name();
        let directives = self.parse_directive_annotations();
        let mut member_types = Vec::new();

        if self.eat(QdlTokenKind::Equals) {
            // Leading `|` is allowed.
            self.eat(QdlTokenKind::Pipe);
            loop {
                match &self.cursor.peek().kind {
                    QdlTokenKind::Name(name) => {
                        member_types.push(*name);
                        self.cursor.advance();
                    }
                    _ => {
                        let token = self.cursor.peek().clone();
                        self.record_error(
                            format!(
                                "expected a union member type name, found `{}`",
                                token.kind.display_name(),
                            ),
                            token.span,
                            QdlParseErrorKind::MissingExpectedToken {
                                expected: "name".to_string(),
                                found: token.kind.display_name().to_string(),
                            },
                        );
                        break;
                    }
                }
                if !self.eat(QdlTokenKind::Pipe) {
                    break;
                }
            }
        }

        UnionTypeDefinition {
            description,
            name,
            directives,
            member_types,
        }
    }

    /// Parses `enum Name @dir { VALUE ... }`. The body is optional.
    fn parse_enum_type_definition(
        &mut self,
        description: Option<&'src str>,
    ) -> EnumTypeDefinition<'src> {
        self.expect_keyword("enum");
        let name = self.expect_name();
        let directives = self.parse_directive_annotations();
        let mut values = Vec::new();

        if self.eat(QdlTokenKind::CurlyBraceOpen) {
            loop {
                match self.cursor.peek().kind {
                    QdlTokenKind::CurlyBraceClose => {
                        self.cursor.advance();
                        break;
                    }
                    QdlTokenKind::Eof => {
                        self.record_eof_error("}");
                        break;
                    }
                    _ => values.push(self.parse_enum_value_definition()),
                }
            }
        }

        EnumTypeDefinition {
            description,
            name,
            directives,
            values,
        }
    }

    /// Parses one enum value definition.
    ///
    /// `true` and `false` are rejected as value names (they lex as
    /// boolean literals); the name is cleared rather than kept, and the
    /// rejection recorded.
    fn parse_enum_value_definition(&mut self) -> EnumValueDefinition<'src> {
        let description = self.parse_description().map(|(text, _)| text);

        let token = self.cursor.peek().clone();
        let name = match &token.kind {
            QdlTokenKind::Name(name) => {
                let name = *name;
                self.cursor.advance();
                name
            }
            QdlTokenKind::BooleanValue(value) => {
                self.cursor.advance();
                let literal = if *value { "true" } else { "false" };
                self.record_error(
                    format!("enum value name cannot be `{literal}`"),
                    token.span,
                    QdlParseErrorKind::InvalidEnumValueName {
                        name: literal.to_string(),
                    },
                );
                ""
            }
            QdlTokenKind::CurlyBraceClose => {
                // A dangling description; leave the `}` for the caller.
                self.record_error(
                    "expected an enum value name, found `}`",
                    token.span,
                    QdlParseErrorKind::InvalidEnumValueName {
                        name: String::new(),
                    },
                );
                ""
            }
            QdlTokenKind::Error { message } => {
                let message = message.clone();
                self.cursor.advance();
                self.record_error(message, token.span, QdlParseErrorKind::IllegalLexeme);
                ""
            }
            _ => {
                let found = token.kind.display_name().to_string();
                self.cursor.advance();
                self.record_error(
                    format!("expected an enum value name, found `{found}`"),
                    token.span,
                    QdlParseErrorKind::InvalidEnumValueName {
                        name: String::new(),
                    },
                );
                ""
            }
        };

        let directives = self.parse_directive_annotations();
        EnumValueDefinition {
            description,
            name,
            directives,
        }
    }

    /// Parses `input Name @dir { fields }`. The body is optional.
    fn parse_input_object_type_definition(
        &mut self,
        description: Option<&'src str>,
    ) -> InputObjectTypeDefinition<'src> {
        self.expect_keyword("input");
        let name = self.expect_name();
        let directives = self.parse_directive_annotations();
        let mut fields = Vec::new();

        if self.eat(QdlTokenKind::CurlyBraceOpen) {
            loop {
                match self.cursor.peek().kind {
                    QdlTokenKind::CurlyBraceClose => {
                        self.cursor.advance();
                        break;
                    }
                    QdlTokenKind::Eof => {
                        self.record_eof_error("}");
                        break;
                    }
                    _ => fields.push(self.parse_input_value_definition()),
                }
            }
        }

        InputObjectTypeDefinition {
            description,
            name,
            directives,
            fields,
        }
    }

    /// Parses `directive @Name(args) on LOCATION | LOCATION`.
    fn parse_directive_definition(
        &mut self,
        description: Option<&'src str>,
    ) -> DirectiveDefinition<'src> {
        self.expect_keyword("directive");
        self.expect_token(QdlTokenKind::At);
        let name = self.expect_name();
        let arguments = if matches!(self.cursor.peek().kind, QdlTokenKind::ParenOpen) {
            self.parse_arguments_definition()
        } else {
            Vec::new()
        };
        self.expect_keyword("on");
        let locations = self.parse_directive_locations();

        DirectiveDefinition {
            description,
            name,
            arguments,
            locations,
        }
    }

    /// Parses `LOCATION | LOCATION | ...` (leading `|` allowed).
    ///
    /// Each location name is checked for membership in the fixed
    /// executable and type-system location sets; a name in neither set
    /// is recorded as an error and dropped from the list.
    fn parse_directive_locations(&mut self) -> Vec<DirectiveLocation> {
        let mut locations = Vec::new();
        self.eat(QdlTokenKind::Pipe);
        loop {
            let span = self.cursor.peek().span;
            let name = self.expect_name();
            if name.is_empty() {
                break;
            }
            match DirectiveLocation::from_name(name) {
                Some(location) => locations.push(location),
                None => {
                    self.record_error(
                        format!("invalid directive location `{name}`"),
                        span,
                        QdlParseErrorKind::InvalidDirectiveLocation {
                            name: name.to_string(),
                        },
                    );
                }
            }
            if !self.eat(QdlTokenKind::Pipe) {
                break;
            }
        }
        locations
    }

    /// Parses an optional `implements I & J` clause (leading `&`
    /// allowed).
    fn parse_implements_interfaces(&mut self) -> Vec<&'src str> {
        let mut interfaces = Vec::new();
        let at_implements =
            matches!(&self.cursor.peek().kind, QdlTokenKind::Name(name) if *name == "implements");
        if !at_implements {
            return interfaces;
        }
        self.cursor.advance();
        self.eat(QdlTokenKind::Ampersand);

        loop {
            match &self.cursor.peek().kind {
                QdlTokenKind::Name(name) => {
                    interfaces.push(*name);
                    self.cursor.advance();
                }
                _ => {
                    let token = self.cursor.peek().clone();
                    self.record_error(
                        format!(
                            "expected an interface name, found `{}`",
                            token.kind.display_name(),
                        ),
                        token.span,
                        QdlParseErrorKind::MissingExpectedToken {
                            expected: "name".to_string(),
                            found: token.kind.display_name().to_string(),
                        },
                    );
                    break;
                }
            }
            if !self.eat(QdlTokenKind::Ampersand) {
                break;
            }
        }
        interfaces
    }

    /// Parses a `{ field: Type ... }` fields block. The caller has
    /// already checked for the opening `{`.
    fn parse_fields_definition(&mut self) -> Vec<FieldDefinition<'src>> {
        let mut fields = Vec::new();
        self.cursor.advance(); // `{`
        loop {
            match self.cursor.peek().kind {
                QdlTokenKind::CurlyBraceClose => {
                    self.cursor.advance();
                    break;
                }
                QdlTokenKind::Eof => {
                    self.record_eof_error("}");
                    break;
                }
                _ => fields.push(self.parse_field_definition()),
            }
        }
        fields
    }

    /// Parses one `name(args): Type @dir` field definition.
    fn parse_field_definition(&mut self) -> FieldDefinition<'src> {
        let description = self.parse_description().map(|(text, _)| text);
        let name = self.expect_name();
        let arguments = if matches!(self.cursor.peek().kind, QdlTokenKind::ParenOpen) {
            self.parse_arguments_definition()
        } else {
            Vec::new()
        };
        self.expect_token(QdlTokenKind::Colon);
        let ty = self.parse_type_reference();
        let directives = self.parse_directive_annotations();

        FieldDefinition {
            description,
            name,
            arguments,
            ty,
            directives,
        }
    }

    /// Parses a `( name: Type = default ... )` argument definition
    /// list. The caller has already checked for the opening `(`.
    fn parse_arguments_definition(&mut self) -> Vec<InputValueDefinition<'src>> {
        let mut arguments = Vec::new();
        self.cursor.advance(); // `(`
        loop {
            match self.cursor.peek().kind {
                QdlTokenKind::ParenClose => {
                    self.cursor.advance();
                    break;
                }
                // A `}` here means the surrounding block is closing with
                // this list still open; bail so the block can recover.
                QdlTokenKind::CurlyBraceClose => {
                    let span = self.cursor.peek().span;
                    self.record_error(
                        "expected `)`, found `}`",
                        span,
                        QdlParseErrorKind::MissingExpectedToken {
                            expected: ")".to_string(),
                            found: "}".to_string(),
                        },
                    );
                    break;
                }
                QdlTokenKind::Eof => {
                    self.record_eof_error(")");
                    break;
                }
                _ => arguments.push(self.parse_input_value_definition()),
            }
        }
        arguments
    }

    /// Parses one `name: Type = default @dir` input value definition.
    fn parse_input_value_definition(&mut self) -> InputValueDefinition<'src> {
        let description = self.parse_description().map(|(text, _)| text);
        let name = self.expect_name();
        self.expect_token(QdlTokenKind::Colon);
        let ty = self.parse_type_reference();
        let default_value = if self.eat(QdlTokenKind::Equals) {
            Some(self.parse_value())
        } else {
            None
        };
        let directives = self.parse_directive_annotations();

        InputValueDefinition {
            description,
            name,
            ty,
            default_value,
            directives,
        }
    }

    // =========================================================================
    // Type references
    // =========================================================================

    /// Parses a type reference: a name, `[T]`, and/or a trailing `!`.
    fn parse_type_reference(&mut self) -> TypeReference<'src> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let token = self.cursor.peek().clone();
            self.record_error(
                "type nesting is too deep",
                token.span,
                QdlParseErrorKind::UnexpectedToken {
                    found: token.kind.display_name().to_string(),
                },
            );
            return TypeReference::Named("");
        }
        self.recursion_depth += 1;
        let reference = self.parse_type_reference_impl();
        self.recursion_depth -= 1;
        reference
    }

    fn parse_type_reference_impl(&mut self) -> TypeReference<'src> {
        let token = self.cursor.peek().clone();
        let base = match &token.kind {
            QdlTokenKind::SquareBracketOpen => {
                self.cursor.advance();
                let inner = self.parse_type_reference();
                self.expect_token(QdlTokenKind::SquareBracketClose);
                TypeReference::List(Box::new(inner))
            }
            QdlTokenKind::Name(name) => {
                let name = *name;
                self.cursor.advance();
                TypeReference::Named(name)
            }
            _ => {
                // Degrade without consuming; whatever is here will be
                // re-classified by the enclosing rule.
                self.record_error(
                    format!("expected a type, found `{}`", token.kind.display_name()),
                    token.span,
                    QdlParseErrorKind::UnexpectedToken {
                        found: token.kind.display_name().to_string(),
                    },
                );
                return TypeReference::Named("");
            }
        };

        // The `!` wraps whatever was just built, and exactly one layer:
        // applied after the brackets, so `[T]!` is non-null-of-list and
        // `[T!]` is list-of-non-null.
        if self.eat(QdlTokenKind::Bang) {
            TypeReference::NonNull(Box::new(base))
        } else {
            base
        }
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value literal, dispatching purely on the lookahead kind.
    fn parse_value(&mut self) -> Value<'src> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let token = self.cursor.advance();
            self.record_error(
                "value nesting is too deep",
                token.span,
                QdlParseErrorKind::UnexpectedToken {
                    found: token.kind.display_name().to_string(),
                },
            );
            return Value::Invalid;
        }
        self.recursion_depth += 1;
        let value = self.parse_value_impl();
        self.recursion_depth -= 1;
        value
    }

    fn parse_value_impl(&mut self) -> Value<'src> {
        let token = self.cursor.peek().clone();
        match &token.kind {
            QdlTokenKind::Dollar => {
                self.cursor.advance();
                let name = self.expect_name();
                if name.is_empty() {
                    Value::Invalid
                } else {
                    Value::Variable(name)
                }
            }

            QdlTokenKind::IntValue(raw) => {
                self.cursor.advance();
                match raw.parse::<i64>() {
                    Ok(value) => Value::Int(value),
                    Err(_) => {
                        self.record_error(
                            format!("`{raw}` is not a valid integer"),
                            token.span,
                            QdlParseErrorKind::MalformedNumericLiteral {
                                literal: (*raw).to_string(),
                            },
                        );
                        Value::Invalid
                    }
                }
            }

            QdlTokenKind::FloatValue(raw) => {
                self.cursor.advance();
                match raw.parse::<f64>() {
                    Ok(value) => Value::Float(value),
                    Err(_) => {
                        self.record_error(
                            format!("`{raw}` is not a valid float"),
                            token.span,
                            QdlParseErrorKind::MalformedNumericLiteral {
                                literal: (*raw).to_string(),
                            },
                        );
                        Value::Invalid
                    }
                }
            }

            QdlTokenKind::StringValue(_) | QdlTokenKind::BlockStringValue(_) => {
                self.cursor.advance();
                match token.kind.string_content() {
                    Some(content) => Value::String(content),
                    None => Value::Invalid,
                }
            }

            QdlTokenKind::BooleanValue(value) => {
                let value = *value;
                self.cursor.advance();
                Value::Boolean(value)
            }

            QdlTokenKind::Name(name) => {
                let name = *name;
                self.cursor.advance();
                if name == "null" {
                    Value::Null
                } else {
                    Value::Enum(name)
                }
            }

            QdlTokenKind::SquareBracketOpen => {
                self.cursor.advance();
                let mut values = Vec::new();
                loop {
                    match self.cursor.peek().kind {
                        QdlTokenKind::SquareBracketClose => {
                            self.cursor.advance();
                            break;
                        }
                        QdlTokenKind::Eof => {
                            self.record_eof_error("]");
                            break;
                        }
                        _ => values.push(self.parse_value()),
                    }
                }
                Value::List(values)
            }

            QdlTokenKind::CurlyBraceOpen => {
                self.cursor.advance();
                let mut fields = IndexMap::new();
                loop {
                    match self.cursor.peek().kind {
                        QdlTokenKind::CurlyBraceClose => {
                            self.cursor.advance();
                            break;
                        }
                        QdlTokenKind::Eof => {
                            self.record_eof_error("}");
                            break;
                        }
                        _ => {
                            let name = self.expect_name();
                            self.expect_token(QdlTokenKind::Colon);
                            let value = self.parse_value();
                            // Duplicate field names resolve last-wins.
                            fields.insert(name, value);
                        }
                    }
                }
                Value::Object(fields)
            }

            QdlTokenKind::Error { message } => {
                let message = message.clone();
                self.cursor.advance();
                self.record_error(message, token.span, QdlParseErrorKind::IllegalLexeme);
                Value::Invalid
            }

            QdlTokenKind::Eof => {
                self.record_error(
                    "expected a value, found end of input",
                    token.span,
                    QdlParseErrorKind::UnexpectedToken {
                        found: "end of input".to_string(),
                    },
                );
                Value::Invalid
            }

            _ => {
                let found = token.kind.display_name().to_string();
                self.cursor.advance();
                self.record_error(
                    format!("expected a value, found `{found}`"),
                    token.span,
                    QdlParseErrorKind::UnexpectedToken { found },
                );
                Value::Invalid
            }
        }
    }

    // =========================================================================
    // Directive annotations and arguments
    // =========================================================================

    /// Parses zero or more `@name(args)` annotations.
    fn parse_directive_annotations(&mut self) -> Vec<DirectiveAnnotation<'src>> {
        let mut directives = Vec::new();
        while matches!(self.cursor.peek().kind, QdlTokenKind::At) {
            directives.push(self.parse_directive_annotation());
        }
        directives
    }

    fn parse_directive_annotation(&mut self) -> DirectiveAnnotation<'src> {
        self.cursor.advance(); // `@`
        let name = self.expect_name();
        let arguments = if matches!(self.cursor.peek().kind, QdlTokenKind::ParenOpen) {
            self.parse_arguments()
        } else {
            IndexMap::new()
        };
        DirectiveAnnotation { name, arguments }
    }

    /// Parses a `( name: value ... )` argument list. The caller has
    /// already checked for the opening `(`.
    fn parse_arguments(&mut self) -> IndexMap<&'src str, Value<'src>> {
        let mut arguments = IndexMap::new();
        self.cursor.advance(); // `(`
        loop {
            match self.cursor.peek().kind {
                QdlTokenKind::ParenClose => {
                    self.cursor.advance();
                    break;
                }
                // A `}` here means the surrounding block is closing with
                // this list still open; bail so the block can recover.
                QdlTokenKind::CurlyBraceClose => {
                    let span = self.cursor.peek().span;
                    self.record_error(
                        "expected `)`, found `}`",
                        span,
                        QdlParseErrorKind::MissingExpectedToken {
                            expected: ")".to_string(),
                            found: "}".to_string(),
                        },
                    );
                    break;
                }
                QdlTokenKind::Eof => {
                    self.record_eof_error(")");
                    break;
                }
                _ => {
                    let name = self.expect_name();
                    self.expect_token(QdlTokenKind::Colon);
                    let value = self.parse_value();
                    // Duplicate argument names resolve last-wins.
                    arguments.insert(name, value);
                }
            }
        }
        arguments
    }

    // =========================================================================
    // Executable definitions
    // =========================================================================

    /// Parses `query Name($vars) @dir { ... }` (or mutation /
    /// subscription).
    fn parse_operation_definition(&mut self, kind: OperationKind) -> OperationDefinition<'src> {
        self.expect_keyword(kind.as_str());

        let name = match &self.cursor.peek().kind {
            QdlTokenKind::Name(name) => {
                let name = *name;
                self.cursor.advance();
                Some(name)
            }
            _ => None,
        };

        let variable_definitions = if matches!(self.cursor.peek().kind, QdlTokenKind::ParenOpen) {
            self.parse_variable_definitions()
        } else {
            Vec::new()
        };
        let directives = self.parse_directive_annotations();
        let selection_set = self.parse_selection_set();

        OperationDefinition {
            kind,
            name,
            variable_definitions,
            directives,
            selection_set,
        }
    }

    /// Parses a `( $name: Type = default @dir ... )` variable definition
    /// list. The caller has already checked for the opening `(`.
    fn parse_variable_definitions(&mut self) -> Vec<VariableDefinition<'src>> {
        let mut definitions = Vec::new();
        self.cursor.advance(); // `(`
        loop {
            match self.cursor.peek().kind {
                QdlTokenKind::ParenClose => {
                    self.cursor.advance();
                    break;
                }
                // A `}` here means the surrounding block is closing with
                // this list still open; bail so the block can recover.
                QdlTokenKind::CurlyBraceClose => {
                    let span = self.cursor.peek().span;
                    self.record_error(
                        "expected `)`, found `}`",
                        span,
                        QdlParseErrorKind::MissingExpectedToken {
                            expected: ")".to_string(),
                            found: "}".to_string(),
                        },
                    );
                    break;
                }
                QdlTokenKind::Eof => {
                    self.record_eof_error(")");
                    break;
                }
                _ => definitions.push(self.parse_variable_definition()),
            }
        }
        definitions
    }

    fn parse_variable_definition(&mut self) -> VariableDefinition<'src> {
        self.expect_token(QdlTokenKind::Dollar);
        let name = self.expect_name();
        self.expect_token(QdlTokenKind::Colon);
        let ty = self.parse_type_reference();
        let default_value = if self.eat(QdlTokenKind::Equals) {
            Some(self.parse_value())
        } else {
            None
        };
        let directives = self.parse_directive_annotations();

        VariableDefinition {
            name,
            ty,
            default_value,
            directives,
        }
    }

    /// Parses `fragment Name on Type @dir { ... }`.
    fn parse_fragment_definition(&mut self) -> FragmentDefinition<'src> {
        self.expect_keyword("fragment");
        let name = self.expect_name();
        self.expect_keyword("on");
        let type_condition = self.expect_name();
        let directives = self.parse_directive_annotations();
        let selection_set = self.parse_selection_set();

        FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
        }
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Parses a required `{ selection ... }` block.
    fn parse_selection_set(&mut self) -> Vec<Selection<'src>> {
        if self.recursion_depth >= Self::MAX_RECURSION_DEPTH {
            let token = self.cursor.peek().clone();
            self.record_error(
                "selection nesting is too deep",
                token.span,
                QdlParseErrorKind::UnexpectedToken {
                    found: token.kind.display_name().to_string(),
                },
            );
            return Vec::new();
        }
        self.recursion_depth += 1;
        let selections = self.parse_selection_set_impl();
        self.recursion_depth -= 1;
        selections
    }

    fn parse_selection_set_impl(&mut self) -> Vec<Selection<'src>> {
        let mut selections = Vec::new();

        let token = self.cursor.peek().clone();
        if !matches!(token.kind, QdlTokenKind::CurlyBraceOpen) {
            self.record_error(
                format!("expected `{{`, found `{}`", token.kind.display_name()),
                token.span,
                QdlParseErrorKind::MissingExpectedToken {
                    expected: "{".to_string(),
                    found: token.kind.display_name().to_string(),
                },
            );
            return selections;
        }
        self.cursor.advance();

        loop {
            match self.cursor.peek().kind {
                QdlTokenKind::CurlyBraceClose => {
                    self.cursor.advance();
                    break;
                }
                QdlTokenKind::Eof => {
                    self.record_eof_error("}");
                    break;
                }
                _ => {
                    if let Some(selection) = self.parse_selection() {
                        selections.push(selection);
                    }
                }
            }
        }

        selections
    }

    /// Parses one selection. Returns `None` when the lookahead could not
    /// be classified (the error is recorded and at least one token
    /// consumed).
    fn parse_selection(&mut self) -> Option<Selection<'src>> {
        let token = self.cursor.peek().clone();
        match &token.kind {
            QdlTokenKind::Ellipsis => {
                self.cursor.advance();
                self.parse_fragment_spread_or_inline_fragment()
            }
            QdlTokenKind::Name(_) => Some(Selection::Field(self.parse_field())),
            QdlTokenKind::Error { message } => {
                let message = message.clone();
                self.cursor.advance();
                self.record_error(message, token.span, QdlParseErrorKind::IllegalLexeme);
                None
            }
            _ => {
                let found = token.kind.display_name().to_string();
                self.cursor.advance();
                self.record_error(
                    format!("expected a selection, found `{found}`"),
                    token.span,
                    QdlParseErrorKind::UnexpectedToken { found },
                );
                None
            }
        }
    }

    /// Disambiguates the two constructs behind `...` by one token of
    /// lookahead: `on` or a directive/selection-set opener means an
    /// inline fragment, any other name is a fragment spread.
    fn parse_fragment_spread_or_inline_fragment(&mut self) -> Option<Selection<'src>> {
        let token = self.cursor.peek().clone();
        match &token.kind {
            QdlTokenKind::Name(name) if *name == "on" => {
                self.cursor.advance();
                let type_condition = self.expect_name();
                let directives = self.parse_directive_annotations();
                let selection_set = self.parse_selection_set();
                Some(Selection::InlineFragment(InlineFragment {
                    type_condition: Some(type_condition),
                    directives,
                    selection_set,
                }))
            }
            QdlTokenKind::Name(name) => {
                let fragment_name = *name;
                self.cursor.advance();
                let directives = self.parse_directive_annotations();
                Some(Selection::FragmentSpread(FragmentSpread {
                    fragment_name,
                    directives,
                }))
            }
            QdlTokenKind::At | QdlTokenKind::CurlyBraceOpen => {
                let directives = self.parse_directive_annotations();
                let selection_set = self.parse_selection_set();
                Some(Selection::InlineFragment(InlineFragment {
                    type_condition: None,
                    directives,
                    selection_set,
                }))
            }
            _ => {
                // The `...` itself was consumed, so the loop still moves.
                self.record_error(
                    format!(
                        "expected a fragment name or type condition after `...`, found `{}`",
                        token.kind.display_name(),
                    ),
                    token.span,
                    QdlParseErrorKind::UnexpectedToken {
                        found: token.kind.display_name().to_string(),
                    },
                );
                None
            }
        }
    }

    /// Parses `alias: name(args) @dir { ... }`. Whether the first name
    /// is an alias or the field name is decided by the `:` that follows
    /// it.
    fn parse_field(&mut self) -> Field<'src> {
        let name_or_alias = self.expect_name();
        let (alias, name) = if self.eat(QdlTokenKind::Colon) {
            (Some(name_or_alias), self.expect_name())
        } else {
            (None, name_or_alias)
        };

        let arguments = if matches!(self.cursor.peek().kind, QdlTokenKind::ParenOpen) {
            self.parse_arguments()
        } else {
            IndexMap::new()
        };
        let directives = self.parse_directive_annotations();
        let selection_set = if matches!(self.cursor.peek().kind, QdlTokenKind::CurlyBraceOpen) {
            self.parse_selection_set()
        } else {
            // Leaf field.
            Vec::new()
        };

        Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
        }
    }
}

/// Extracts just the text half of a pending description.
fn description_text(description: Description<'_>) -> Option<&str> {
    description.map(|(text, _)| text)
}
