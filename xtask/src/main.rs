use std::path::Path;

const DEFAULT_OUT_DIR: &str = "generated/com/cthuloops/jlox";
const SCRATCH_DIR: &str = "target/codegen-check";

fn main() {
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let dir = args.get(1).map(String::as_str).unwrap_or(DEFAULT_OUT_DIR);

    match args.first().map(String::as_str) {
        Some("codegen") => astgen(dir),
        Some("codegen-check") => codegen_check(Path::new(dir)),
        _ => help(),
    }
}

fn help() {
    let s = format!(
        "
usage: cargo x <command> [dir]

commands:
    codegen          regenerate the AST classes into [dir]
    codegen-check    fail if the AST classes in [dir] are stale

[dir] defaults to {DEFAULT_OUT_DIR}
"
    );
    eprint!("{s}");

    std::process::exit(1);
}

fn astgen(dir: &str) {
    run("cargo", &["run", "--release", "-p", "lox-astgen", "--", dir]);
}

/// Regenerates into a scratch directory and compares file by file,
/// so a stale or hand-edited checked-in class fails the check.
fn codegen_check(dir: &Path) {
    let scratch = Path::new(SCRATCH_DIR);
    if scratch.exists() {
        std::fs::remove_dir_all(scratch).expect("failed to clear scratch dir");
    }
    astgen(SCRATCH_DIR);

    let mut stale = Vec::new();
    for entry in std::fs::read_dir(scratch).expect("failed to read scratch dir") {
        let fresh = entry.expect("failed to read scratch entry").path();
        let Some(name) = fresh.file_name() else {
            continue;
        };
        let checked_in = dir.join(name);

        let expected = std::fs::read_to_string(&fresh).expect("failed to read generated file");
        match std::fs::read_to_string(&checked_in) {
            Ok(actual) if actual == expected => {}
            _ => stale.push(checked_in),
        }
    }

    if stale.is_empty() {
        return;
    }

    stale.sort();
    for path in &stale {
        eprintln!("out of date: {}", path.display());
    }
    eprintln!("run `cargo x codegen` to regenerate");
    std::process::exit(1);
}

fn run(program: &str, args: &[&str]) {
    let status = std::process::Command::new(program)
        .args(args)
        .status()
        .unwrap_or_else(|err| panic!("failed to run {program}: {err}"));
    if !status.success() {
        eprintln!("{program} exited with {status}");
        std::process::exit(1);
    }
}
