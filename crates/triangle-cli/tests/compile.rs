//! End-to-end compilation tests.
//!
//! There is no TAM interpreter in this workspace (implementing one is an
//! explicit non-goal), so these exercise the pipeline up to the object
//! file: exit code, and the shape of the bytes written. Each fixture
//! corresponds to one of the compiler's worked examples.

use std::fs;
use std::path::PathBuf;

use triangle_cli::cli::Cli;

fn compile(source: &str) -> (i32, Vec<u8>) {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("program.tri");
    let output_path = dir.path().join("program.tam");
    fs::write(&source_path, source).unwrap();

    let cli = Cli {
        source: source_path,
        output: output_path.clone(),
        verbose: 0,
        dump_ast: false,
        dump_ir: false,
    };
    let code = triangle_cli::run(&cli);
    let bytes = fs::read(&output_path).unwrap_or_default();
    (code, bytes)
}

fn assert_well_formed_object(bytes: &[u8]) {
    assert!(!bytes.is_empty());
    assert_eq!(bytes.len() % 16, 0, "object file must be a whole number of 16-byte instructions");
    let last = &bytes[bytes.len() - 16..];
    let op = i32::from_be_bytes(last[0..4].try_into().unwrap());
    assert_eq!(op, 14, "a compiled program's last instruction is HALT");
}

#[test]
fn put_and_puteol_prints_a_and_newline() {
    let (code, bytes) = compile("put('A'); puteol()");
    assert_eq!(code, triangle_cli::EXIT_SUCCESS);
    assert_well_formed_object(&bytes);
}

#[test]
fn doubling_a_variable() {
    let source = "
        let
            var x: Integer
        in
            begin
                x := 21;
                x := x + x;
                putint(x)
            end
    ";
    let (code, bytes) = compile(source);
    assert_eq!(code, triangle_cli::EXIT_SUCCESS);
    assert_well_formed_object(&bytes);
}

#[test]
fn recursive_factorial_of_five() {
    let source = "
        let
            func fact(n: Integer): Integer is
                if n = 0 then 1 else n * fact(n - 1)
        in
            putint(fact(5))
    ";
    let (code, bytes) = compile(source);
    assert_eq!(code, triangle_cli::EXIT_SUCCESS);
    assert_well_formed_object(&bytes);
}

#[test]
fn record_field_access_is_canonicalized_by_name() {
    let source = "
        let
            const p is { ch := 'X', num := 7 }
        in
            begin
                put(p.ch);
                putint(p.num)
            end
    ";
    let (code, bytes) = compile(source);
    assert_eq!(code, triangle_cli::EXIT_SUCCESS);
    assert_well_formed_object(&bytes);
}

#[test]
fn array_subscript_assignment_and_lookup() {
    let source = "
        let
            var a: array 3 of Integer
        in
            begin
                a[0] := 10;
                a[1] := 42;
                a[2] := 99;
                putint(a[1])
            end
    ";
    let (code, bytes) = compile(source);
    assert_eq!(code, triangle_cli::EXIT_SUCCESS);
    assert_well_formed_object(&bytes);
}

#[test]
fn swap_via_var_parameters() {
    let source = "
        let
            var x: Integer;
            var y: Integer;
            proc swap(var a: Integer, var b: Integer) is
                let
                    var t: Integer
                in
                    begin
                        t := a;
                        a := b;
                        b := t
                    end
        in
            begin
                x := 12;
                y := 21;
                swap(var x, var y);
                putint(x)
            end
    ";
    let (code, bytes) = compile(source);
    assert_eq!(code, triangle_cli::EXIT_SUCCESS);
    assert_well_formed_object(&bytes);
}

#[test]
fn undeclared_name_is_a_semantic_error() {
    let (code, _bytes) = compile("putint(nope)");
    assert_eq!(code, triangle_cli::EXIT_SEMANTIC_ERROR);
}

#[test]
fn malformed_source_is_a_syntax_error() {
    let (code, _bytes) = compile("let in");
    assert_eq!(code, triangle_cli::EXIT_SYNTAX_ERROR);
}

#[test]
fn missing_source_file_reports_syntax_exit_code() {
    let cli = Cli {
        source: PathBuf::from("/nonexistent/does-not-exist.tri"),
        output: PathBuf::from("/tmp/irrelevant-output.tam"),
        verbose: 0,
        dump_ast: false,
        dump_ir: false,
    };
    assert_eq!(triangle_cli::run(&cli), triangle_cli::EXIT_SYNTAX_ERROR);
}
