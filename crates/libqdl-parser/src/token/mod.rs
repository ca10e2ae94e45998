//! Token types produced by [`QdlLexer`](crate::QdlLexer).

mod qdl_token;
mod qdl_token_kind;
mod qdl_trivia_token;

pub use qdl_token::QdlToken;
pub use qdl_token::QdlTriviaTokenVec;
pub use qdl_token_kind::QdlTokenKind;
pub use qdl_trivia_token::QdlTriviaToken;
pub use qdl_trivia_token::QdlTriviaTokenKind;
