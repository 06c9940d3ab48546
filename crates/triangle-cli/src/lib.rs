//! # triangle-cli
//!
//! The command-line driver: source file in, TAM object file out. Wires
//! the lexer and parser (`triangle-syntax`), the checker (`triangle-sema`)
//! and the code generator (`triangle-codegen`) into one pipeline and maps
//! each stage's failure onto an exit code.

pub mod ast_dump;
pub mod cli;

use std::fs;

use triangle_base::Interner;
use triangle_sema::Checker;
use triangle_syntax::ast::Ast;
use triangle_syntax::{Lexer, Parser};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_SYNTAX_ERROR: i32 = 1;
pub const EXIT_SEMANTIC_ERROR: i32 = 2;
pub const EXIT_CODEGEN_ERROR: i32 = 3;

/// Runs the full pipeline for `cli`, printing diagnostics to stderr and
/// any requested dumps to stdout. Returns the process exit code.
pub fn run(cli: &cli::Cli) -> i32 {
    let source = match fs::read_to_string(&cli.source) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{}: {e}", cli.source.display());
            return EXIT_SYNTAX_ERROR;
        }
    };

    let tokens = Lexer::new(&source).tokenize();
    log::debug!("lexer produced {} tokens", tokens.len());

    let ast = Ast::new();
    let mut interner = Interner::new();
    let program = match Parser::new(&ast, &mut interner, tokens).parse_program() {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{}: {e}", cli.source.display());
            return EXIT_SYNTAX_ERROR;
        }
    };

    if cli.dump_ast {
        print!("{}", ast_dump::dump(program, &interner));
    }

    let errors = Checker::new(&mut interner).check_program(program);
    if !errors.is_empty() {
        log::debug!("checker found {} semantic error(s)", errors.len());
        for error in &errors {
            eprintln!("{}: {error}", cli.source.display());
        }
        return EXIT_SEMANTIC_ERROR;
    }

    let mut object = Vec::new();
    if let Err(e) = triangle_codegen::compile(program, &mut interner, &mut object) {
        eprintln!("{}: {e}", cli.source.display());
        return EXIT_CODEGEN_ERROR;
    }

    if cli.dump_ir {
        print!("{}", dump_object(&object));
    }

    if let Err(e) = fs::write(&cli.output, &object) {
        eprintln!("{}: {e}", cli.output.display());
        return EXIT_CODEGEN_ERROR;
    }

    EXIT_SUCCESS
}

/// Decodes the 16-byte-per-instruction object format back into readable
/// `(op, r, n, d)` rows, for `--dump-ir`. Mirrors `triangle_codegen::writer`'s
/// encoding exactly, byte for byte.
fn dump_object(bytes: &[u8]) -> String {
    let mut out = String::new();
    for (i, chunk) in bytes.chunks_exact(16).enumerate() {
        let field = |n: usize| i32::from_be_bytes(chunk[n * 4..n * 4 + 4].try_into().unwrap());
        out.push_str(&format!(
            "{i:>4}: op={} r={} n={} d={}\n",
            field(0),
            field(1),
            field(2),
            field(3)
        ));
    }
    out
}
