use tracing::{debug, error};

use crate::emit::{self, ENTRY_EPILOGUE, ENTRY_PROLOGUE};
use crate::error::CompileError;
use crate::parser::{self, RULEBASE, UNIVERSE};
use crate::symbols::SymbolTable;
use crate::token::{Cursor, TokenStream};

/// Compiles a token stream into a C entry routine calling the FRI API.
///
/// Every call starts from empty symbol tables. On error nothing is returned
/// of the code generated so far.
pub fn compile(tokens: &TokenStream) -> Result<String, CompileError> {
    Driver::compile(tokens)
}

#[derive(Debug, Default)]
struct Driver {
    symbols: SymbolTable,
    output: String,
}

impl Driver {
    fn compile_universe(&mut self, cursor: &mut Cursor<'_>) {
        let universe = parser::parse_universe(cursor, &mut self.symbols);
        self.output.push_str(&universe.to_c());
    }

    fn compile_rulebase(&mut self, cursor: &mut Cursor<'_>) -> Result<(), CompileError> {
        let rulebase = parser::parse_rulebase(cursor, &mut self.symbols)?;
        self.output.push_str(&rulebase.to_c(&self.symbols));
        Ok(())
    }

    fn compile(tokens: &TokenStream) -> Result<String, CompileError> {
        // Counted up front, so blocks that fail to resolve still count.
        let universe_count = tokens.count_keyword(UNIVERSE);
        let rulebase_count = tokens.count_keyword(RULEBASE);
        debug!(tokens = tokens.len(), universe_count, rulebase_count, "compiling");

        let mut zelf = Driver::default();
        zelf.output.push_str(ENTRY_PROLOGUE);
        zelf.output
            .push_str(&emit::init_call(universe_count, rulebase_count));

        let mut cursor = Cursor::new(tokens);
        while !cursor.is_at_end() {
            let token = cursor.peek();
            if token.is_keyword(UNIVERSE) {
                zelf.compile_universe(&mut cursor);
            } else if token.is_keyword(RULEBASE) {
                if let Err(err) = zelf.compile_rulebase(&mut cursor) {
                    error!("{}", err);
                    return Err(err);
                }
            } else {
                cursor.advance(1);
            }
        }

        zelf.output.push_str(ENTRY_EPILOGUE);
        Ok(zelf.output)
    }
}
