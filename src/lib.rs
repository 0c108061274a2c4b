//! Generates the Java AST classes for the Lox interpreter.
//!
//! Each node family (see [`catalog`]) becomes one source file holding an
//! abstract base class, one subclass per node shape and a `Visitor<R>`
//! interface for double dispatch over the shapes.

pub mod catalog;
pub mod emit;
pub mod error;
pub mod schema;
pub mod write;

use std::path::{Path, PathBuf};

pub use emit::{EmitOptions, render_family, render_family_with, validate};
pub use error::{Error, Result, SchemaError};

/// Regenerates every family into `output_dir`, returning the written paths.
///
/// Families are processed in catalog order. The first failure aborts the run.
pub fn generate(output_dir: &Path) -> Result<Vec<PathBuf>> {
    let options = EmitOptions::default();

    catalog::families()
        .iter()
        .map(|family| {
            validate(family.name, &family.variants)?;
            let source = render_family_with(&options, family.name, family.name, &family.variants);
            write::write_family(output_dir, family.name, &source)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_every_family() {
        let dir = tempfile::tempdir().unwrap();
        let paths = generate(dir.path()).unwrap();

        assert_eq!(
            paths,
            [
                dir.path().join("Expression.java"),
                dir.path().join("Statement.java"),
            ]
        );
        for (path, family) in paths.iter().zip(catalog::families()) {
            let written = std::fs::read_to_string(path).unwrap();
            assert_eq!(written, family.render());
        }
    }
}
