mod lexer_tests;
mod parser_type_system_tests;
mod token_cursor_tests;
mod utils;
