pub mod ast;
pub mod compiler;
pub mod emit;
pub mod error;
pub mod parser;
pub mod scanner;
pub mod symbols;
pub mod token;


pub use compiler::compile;
pub use error::CompileError;
pub use scanner::scan;
pub use symbols::SymbolTable;
pub use token::{Cursor, Token, TokenKind, TokenStream};

/// Scans and compiles FBDL source text.
pub fn compile_source(code: &str) -> anyhow::Result<String> {
    let tokens = scan(code)?;
    Ok(compile(&tokens)?)
}
