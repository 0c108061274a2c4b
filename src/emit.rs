//! Renders one node family as a Java source file.
//!
//! The output is a single abstract base class holding:
//! - a `Visitor<R>` interface with one `visit<Tag><Base>` method per tag
//! - one `static class <Tag> extends <Base>` per variant, with a constructor,
//!   an `accept` override dispatching to its visitor method, and `final` fields
//! - the abstract `accept` every variant overrides
//!
//! Each piece is a small `Display` type over borrowed schema data. They are
//! written out in a fixed order, so identical input always yields
//! byte-identical output.

mod join;

use std::fmt::Display;

use heck::AsLowerCamelCase;
use indoc::writedoc;

use self::join::JoinIter as _;
use crate::error::SchemaError;
use crate::schema::{Tag, Variant};

macro_rules! ln {
    ($f:ident, $($tt:tt)*) => (writeln!($f, $($tt)*)?);
    ($f:ident) => (writeln!($f)?);
}

#[derive(Debug, Clone, Copy)]
pub struct EmitOptions<'a> {
    /// Java package the generated file belongs to.
    pub package: &'a str,

    /// Fully qualified imports, emitted in order.
    pub imports: &'a [&'a str],
}

impl Default for EmitOptions<'_> {
    fn default() -> Self {
        Self {
            package: "com.cthuloops.jlox",
            imports: &["java.util.List"],
        }
    }
}

/// Renders `variants` with [`EmitOptions::default`].
///
/// Panics if `variants` fails [`validate`].
pub fn render_family(family_name: &str, base_type_name: &str, variants: &[Variant<'_>]) -> String {
    render_family_with(&EmitOptions::default(), family_name, base_type_name, variants)
}

/// Panics if `variants` fails [`validate`].
pub fn render_family_with(
    options: &EmitOptions<'_>,
    family_name: &str,
    base_type_name: &str,
    variants: &[Variant<'_>],
) -> String {
    if let Err(err) = validate(base_type_name, variants) {
        panic!("cannot render family `{family_name}`: {err}");
    }

    let out = FamilySource {
        options,
        base: base_type_name,
        variants,
    }
    .to_string();

    tracing::debug!(
        family = family_name,
        variants = variants.len(),
        bytes = out.len(),
        "rendered family"
    );

    out
}

/// Checks the preconditions `render_family` relies on.
///
/// Anything accepted here renders to a compilable class hierarchy:
/// identifiers are legal Java names, tags come from one tag set and
/// are unique, and no nested type shadows the base type.
pub fn validate(base_type_name: &str, variants: &[Variant<'_>]) -> Result<(), SchemaError> {
    let Some(first) = variants.first() else {
        return Err(SchemaError::EmptyFamily {
            family: base_type_name.to_owned(),
        });
    };
    check_identifier(base_type_name)?;
    check_visitor_param(base_type_name)?;

    if base_type_name == VISITOR {
        return Err(SchemaError::NameCollision {
            name: base_type_name.to_owned(),
            other: "the nested visitor interface".to_owned(),
        });
    }

    for (i, variant) in variants.iter().enumerate() {
        if variant.family != base_type_name {
            return Err(SchemaError::FamilyMismatch {
                variant: variant.tag.to_string(),
                expected: base_type_name.to_owned(),
                found: variant.family.to_owned(),
            });
        }

        if variant.tag.set_name() != first.tag.set_name() {
            return Err(SchemaError::MixedTagSets {
                family: base_type_name.to_owned(),
                variant: variant.tag.to_string(),
                expected: first.tag.set_name(),
                found: variant.tag.set_name(),
            });
        }

        if variant.tag.name() == base_type_name {
            return Err(SchemaError::NameCollision {
                name: base_type_name.to_owned(),
                other: format!("the class for variant `{}`", variant.tag),
            });
        }

        if variants[..i].iter().any(|prev| prev.tag == variant.tag) {
            return Err(SchemaError::DuplicateTag {
                family: base_type_name.to_owned(),
                tag: variant.tag.to_string(),
            });
        }

        for (j, field) in variant.fields.iter().enumerate() {
            check_identifier(field.name)?;

            if variant.fields[..j].iter().any(|prev| prev.name == field.name) {
                return Err(SchemaError::DuplicateField {
                    variant: variant.tag.to_string(),
                    field: field.name.to_owned(),
                });
            }
        }
    }

    Ok(())
}

/// Name of the nested visitor interface.
const VISITOR: &str = "Visitor";

/// Reserved words and literals, none of which may name anything.
/// `_` has been a keyword since Java 9.
const JAVA_RESERVED: &[&str] = &[
    "_", "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "false", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "null", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this", "throw",
    "throws", "transient", "true", "try", "void", "volatile", "while",
];

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let well_formed = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };

    well_formed && !JAVA_RESERVED.contains(&name)
}

fn check_identifier(name: &str) -> Result<(), SchemaError> {
    if is_identifier(name) {
        Ok(())
    } else {
        Err(SchemaError::InvalidIdentifier {
            name: name.to_owned(),
        })
    }
}

/// The visitor methods name their parameter after the base type.
fn check_visitor_param(base_type_name: &str) -> Result<(), SchemaError> {
    let param = AsLowerCamelCase(base_type_name).to_string();
    if is_identifier(&param) {
        Ok(())
    } else {
        Err(SchemaError::InvalidParameterName {
            base: base_type_name.to_owned(),
            param,
        })
    }
}

/// `visit<Tag><Base>`
struct VisitMethod<'a> {
    tag: Tag,
    base: &'a str,
}

impl Display for VisitMethod<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "visit{}{}", self.tag, self.base)
    }
}

struct FamilySource<'a> {
    options: &'a EmitOptions<'a>,
    base: &'a str,
    variants: &'a [Variant<'a>],
}

impl Display for FamilySource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            options,
            base,
            variants,
        } = *self;

        write!(f, "{}", Preamble { options, base })?;
        write!(f, "{}", VisitorInterface { base, variants })?;
        for variant in variants {
            write!(f, "{}", ClassBlock { base, variant })?;
        }
        write!(f, "{}", BaseAccept)?;
        ln!(f, "}}");

        Ok(())
    }
}

struct Preamble<'a> {
    options: &'a EmitOptions<'a>,
    base: &'a str,
}

impl Display for Preamble<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writedoc!(
            f,
            "
            // This file was generated by lox-astgen, any changes made
            // here may be overwritten.
            package {package};

            ",
            package = self.options.package,
        )?;

        if !self.options.imports.is_empty() {
            for import in self.options.imports {
                ln!(f, "import {import};");
            }
            ln!(f);
        }

        ln!(f, "abstract class {} {{", self.base);

        Ok(())
    }
}

struct VisitorInterface<'a> {
    base: &'a str,
    variants: &'a [Variant<'a>],
}

impl Display for VisitorInterface<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = self.base;
        let param = AsLowerCamelCase(base);

        ln!(f, "  interface Visitor<R> {{");
        // tags are unique once validated, one method each
        for variant in self.variants {
            let tag = variant.tag;
            let method = VisitMethod { tag, base };
            ln!(f, "    R {method}({tag} {param});");
        }
        ln!(f, "  }}");
        ln!(f);

        Ok(())
    }
}

struct ClassBlock<'a> {
    base: &'a str,
    variant: &'a Variant<'a>,
}

impl Display for ClassBlock<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let base = self.base;
        let tag = self.variant.tag;
        let fields = &self.variant.fields;

        ln!(f, "  static class {tag} extends {base} {{");

        ln!(f, "    {tag}({}) {{", fields.iter().join(", "));
        for field in fields {
            ln!(f, "        this.{name} = {name};", name = field.name);
        }
        ln!(f, "    }}");
        ln!(f);

        ln!(f, "    @Override");
        ln!(f, "    <R> R accept(Visitor<R> visitor) {{");
        ln!(f, "        return visitor.{}(this);", VisitMethod { tag, base });
        ln!(f, "    }}");
        ln!(f);

        for field in fields {
            ln!(f, "    final {field};");
        }
        ln!(f, "  }}");
        ln!(f);

        Ok(())
    }
}

/// The abstract `accept` every variant class overrides.
struct BaseAccept;

impl Display for BaseAccept {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ln!(f, "  // Base accept method");
        ln!(f, "  abstract <R> R accept(Visitor<R> visitor);");

        Ok(())
    }
}
