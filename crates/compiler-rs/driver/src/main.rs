//! `pascalc`: runs the Pascal front end over a source file

mod compiler;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use compiler::{CompileError, Compiler};

#[derive(Debug, clap::Parser)]
#[command(name = "pascalc", author, version, about, long_about = None)]
struct Cli {
    /// Pascal source file
    file: PathBuf,

    /// Print the token stream
    #[arg(long)]
    tokens: bool,

    /// Print the syntax tree
    #[arg(long)]
    ast: bool,

    /// When to color diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn use_color(self) -> bool {
        match self {
            ColorChoice::Auto => io::stderr().is_terminal(),
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli: Cli = clap::Parser::parse();

    let compiler = Compiler::new()
        .with_token_dump(cli.tokens)
        .with_ast_dump(cli.ast)
        .with_color(cli.color.use_color());

    match compiler.compile_file(&cli.file) {
        Ok(()) => ExitCode::SUCCESS,
        // The diagnostic is already on stderr
        Err(CompileError::Failed) => ExitCode::FAILURE,
        Err(error) => {
            eprintln!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
