//! Compiler pipeline orchestration

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use errors::Diagnostic;
use log::{debug, info};
use thiserror::Error;
use tokens::Token;

/// Failures of a compiler run
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("Failed to read file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
    /// A diagnostic has already been reported
    #[error("Compilation failed with 1 error(s)")]
    Failed,
}

/// Compiler instance that orchestrates the front end pipeline
#[derive(Debug, Default)]
pub struct Compiler {
    print_tokens: bool,
    print_ast: bool,
    use_color: bool,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Print every token after lexing
    pub fn with_token_dump(mut self, enabled: bool) -> Self {
        self.print_tokens = enabled;
        self
    }

    /// Print the syntax tree after parsing
    pub fn with_ast_dump(mut self, enabled: bool) -> Self {
        self.print_ast = enabled;
        self
    }

    pub fn with_color(mut self, enabled: bool) -> Self {
        self.use_color = enabled;
        self
    }

    /// Run the front end over a file, writing dumps to stdout and diagnostics to stderr
    pub fn compile_file(&self, input_file: &Path) -> Result<(), CompileError> {
        let path = input_file.display().to_string();
        let source = fs::read_to_string(input_file).map_err(|source| CompileError::Read {
            path: path.clone(),
            source,
        })?;

        let stdout = io::stdout();
        let stderr = io::stderr();
        self.compile_source(&path, &source, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Run the front end over `source`
    pub fn compile_source(
        &self,
        path: &str,
        source: &str,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> Result<(), CompileError> {
        info!("compiling {}", path);

        let tokens = match lexer::tokenize(path, source) {
            Ok(tokens) => tokens,
            Err(error) => return self.report(&error.to_diagnostic(), err),
        };
        if self.print_tokens {
            print_tokens(&tokens, out)?;
        }

        let block = match parser::parse(&tokens) {
            Ok(block) => block,
            Err(error) => return self.report(&error.to_diagnostic(), err),
        };
        debug!("parsed {} sections", section_count(&block));
        if self.print_ast {
            out.write_all(ast::dump(&block).as_bytes())?;
        }
        Ok(())
    }

    fn report(&self, diagnostic: &Diagnostic<'_>, err: &mut impl Write) -> Result<(), CompileError> {
        diagnostic.render(err, self.use_color)?;
        Err(CompileError::Failed)
    }
}

fn print_tokens(tokens: &[Token<'_>], out: &mut impl Write) -> io::Result<()> {
    for token in tokens {
        writeln!(out, "{}, {}", token.kind, token.location)?;
    }
    Ok(())
}

fn section_count(block: &ast::Block<'_>) -> usize {
    [
        block.label_declarations.is_some(),
        block.constant_definitions.is_some(),
        block.type_definitions.is_some(),
        block.variable_declarations.is_some(),
    ]
    .into_iter()
    .filter(|&present| present)
    .count()
}
