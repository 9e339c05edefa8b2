//! One interner and one standard library, shared by every stage.

use tarn_diagnostic::Diagnostic;
use tarn_eval::{Stdlib, Value};
use tarn_ir::StringInterner;
use tarn_parse::ParseOutput;
use tarn_types::Type;

/// A parsed program together with its principal type.
pub struct Checked {
    pub parsed: ParseOutput,
    pub ty: Type,
}

/// The result of running a program to completion.
#[derive(Debug)]
pub struct Outcome {
    pub ty: Type,
    pub value: Value,
}

/// Driver state for running Tarn programs.
///
/// Names interned by one program stay valid for the next, so a session can
/// be reused across many sources.
pub struct Session {
    interner: StringInterner,
    stdlib: Stdlib,
}

impl Session {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let stdlib = Stdlib::new(&interner);
        Session { interner, stdlib }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn stdlib(&self) -> &Stdlib {
        &self.stdlib
    }

    /// Lex and parse `source`.
    pub fn parse(&self, source: &str) -> Result<ParseOutput, Diagnostic> {
        let tokens = tarn_lexer::lex(source, &self.interner).map_err(|e| e.to_diagnostic())?;
        tarn_parse::parse(&tokens, &self.interner).map_err(|e| e.to_diagnostic())
    }

    /// Parse and type-check `source`.
    pub fn check(&self, source: &str) -> Result<Checked, Diagnostic> {
        let parsed = self.parse(source)?;
        let ty = tarn_types::type_check(&parsed.arena, parsed.root, &self.stdlib, &self.interner)
            .map_err(|e| e.to_diagnostic())?;
        Ok(Checked { parsed, ty })
    }

    /// Parse, type-check and evaluate `source`.
    pub fn run(&self, source: &str) -> Result<Outcome, Diagnostic> {
        let Checked { parsed, ty } = self.check(source)?;
        let value = tarn_eval::evaluate(&parsed.arena, parsed.root, &self.stdlib, &self.interner)
            .map_err(|e| {
                if e.is_internal() {
                    tracing::error!(error = %e, "well-typed program failed an evaluator invariant");
                }
                e.to_diagnostic()
            })?;
        Ok(Outcome { ty, value })
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
