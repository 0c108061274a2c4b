//! Schema model: fields, variants and the closed tag sets per family.
//!
//! Everything here is plain immutable data. The emitter only ever reads it.

use std::fmt::Display;

use crate::emit::render_family;

/// Declared type of a constructor parameter / member in the generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Reference to another node of the expression family.
    ///
    /// Statements nest expressions, so this renders as `Expression`
    /// regardless of which family the owning variant belongs to.
    ExpressionRef,
    Token,
    Object,
}

impl FieldKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::ExpressionRef => "Expression",
            FieldKind::Token => "Token",
            FieldKind::Object => "Object",
        }
    }
}

impl Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<'a> {
    pub kind: FieldKind,
    pub name: &'a str,
}

impl<'a> Field<'a> {
    #[inline]
    pub const fn new(kind: FieldKind, name: &'a str) -> Self {
        Self { kind, name }
    }

    #[inline]
    pub const fn expr(name: &'a str) -> Self {
        Self::new(FieldKind::ExpressionRef, name)
    }

    #[inline]
    pub const fn token(name: &'a str) -> Self {
        Self::new(FieldKind::Token, name)
    }

    #[inline]
    pub const fn object(name: &'a str) -> Self {
        Self::new(FieldKind::Object, name)
    }
}

/// `<kind> <name>`, used verbatim for constructor parameters
/// and field declarations.
impl Display for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.kind, self.name)
    }
}

macro_rules! declare_tags {
    (
        #[tag($TagVariant:ident)]
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant,)*
        }

        impl $name {
            /// All tags, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            pub const fn name(self) -> &'static str {
                match self {
                    $($name::$variant => stringify!($variant),)*
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }

        impl From<$name> for Tag {
            #[inline]
            fn from(tag: $name) -> Tag {
                Tag::$TagVariant(tag)
            }
        }
    };
}

declare_tags! {
    #[tag(Expression)]
    /// Node shapes of the `Expression` family.
    pub enum ExpressionTag {
        Assign,
        Binary,
        Grouping,
        Literal,
        Unary,
        Variable,
    }
}

declare_tags! {
    #[tag(Statement)]
    /// Node shapes of the `Statement` family.
    pub enum StatementTag {
        Expr,
        Print,
        Var,
    }
}

/// Variant name, drawn from one of the per-family tag sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Expression(ExpressionTag),
    Statement(StatementTag),
}

impl Tag {
    pub const fn name(self) -> &'static str {
        match self {
            Tag::Expression(tag) => tag.name(),
            Tag::Statement(tag) => tag.name(),
        }
    }

    /// Name of the tag set this tag is drawn from.
    pub const fn set_name(self) -> &'static str {
        match self {
            Tag::Expression(_) => "ExpressionTag",
            Tag::Statement(_) => "StatementTag",
        }
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One concrete node shape.
///
/// Field order is significant: it fixes the generated constructor's
/// parameter order and the order of the field declarations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variant<'a> {
    pub family: &'a str,
    pub tag: Tag,
    pub fields: Vec<Field<'a>>,
}

impl<'a> Variant<'a> {
    pub fn new(
        family: &'a str,
        tag: impl Into<Tag>,
        fields: impl IntoIterator<Item = Field<'a>>,
    ) -> Self {
        Self {
            family,
            tag: tag.into(),
            fields: fields.into_iter().collect(),
        }
    }
}

/// A family name together with its variants, in declaration order.
///
/// The name doubles as the abstract base type name
/// and the output file's base name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Family<'a> {
    pub name: &'a str,
    pub variants: Vec<Variant<'a>>,
}

impl<'a> Family<'a> {
    pub fn new(name: &'a str, variants: Vec<Variant<'a>>) -> Self {
        Self { name, variants }
    }

    /// Renders with default options.
    ///
    /// Panics if the family fails validation, see [`crate::emit::validate`].
    pub fn render(&self) -> String {
        render_family(self.name, self.name, &self.variants)
    }
}

#[cfg(test)]
mod tests;
