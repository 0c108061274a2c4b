use std::path::PathBuf;

/// A family's schema breaks one of the emitter's preconditions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("family `{family}` has no variants")]
    EmptyFamily { family: String },

    #[error("variant `{variant}` belongs to family `{found}`, expected `{expected}`")]
    FamilyMismatch {
        variant: String,
        expected: String,
        found: String,
    },

    #[error("duplicate tag `{tag}` in family `{family}`")]
    DuplicateTag { family: String, tag: String },

    #[error("duplicate field `{field}` in variant `{variant}`")]
    DuplicateField { variant: String, field: String },

    #[error("`{name}` is not a valid identifier")]
    InvalidIdentifier { name: String },

    #[error("base type `{base}` yields `{param}` as visitor parameter name, which is not a valid identifier")]
    InvalidParameterName { base: String, param: String },

    #[error("`{name}` would declare both the base type and {other}")]
    NameCollision { name: String, other: String },

    #[error("variant `{variant}` is a {found} but family `{family}` uses {expected}")]
    MixedTagSets {
        family: String,
        variant: String,
        expected: &'static str,
        found: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
