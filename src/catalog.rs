//! The two node families the interpreter is built from.
//!
//! Adding a node shape means adding a tag to the family's tag set in
//! [`crate::schema`] and one entry here. The emitter needs no changes.

use crate::schema::{ExpressionTag, Family, Field, StatementTag, Variant};

pub const EXPRESSION: &str = "Expression";
pub const STATEMENT: &str = "Statement";

pub fn variants_for_expression_family() -> Vec<Variant<'static>> {
    use ExpressionTag as E;

    let base = EXPRESSION;
    vec![
        Variant::new(base, E::Assign, [Field::token("name"), Field::expr("value")]),
        Variant::new(
            base,
            E::Binary,
            [
                Field::expr("left"),
                Field::token("operator"),
                Field::expr("right"),
            ],
        ),
        Variant::new(base, E::Grouping, [Field::expr("expression")]),
        Variant::new(base, E::Literal, [Field::object("value")]),
        Variant::new(base, E::Unary, [Field::token("operator"), Field::expr("right")]),
        Variant::new(base, E::Variable, [Field::token("name")]),
    ]
}

pub fn variants_for_statement_family() -> Vec<Variant<'static>> {
    use StatementTag as S;

    let base = STATEMENT;
    vec![
        Variant::new(base, S::Expr, [Field::expr("expression")]),
        Variant::new(base, S::Print, [Field::expr("expression")]),
        Variant::new(base, S::Var, [Field::token("name"), Field::expr("initializer")]),
    ]
}

/// Every family, in generation order.
pub fn families() -> [Family<'static>; 2] {
    [
        Family::new(EXPRESSION, variants_for_expression_family()),
        Family::new(STATEMENT, variants_for_statement_family()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::validate;
    use crate::schema::{FieldKind, Tag};

    #[test]
    fn catalog_is_idempotent() {
        assert_eq!(
            variants_for_expression_family(),
            variants_for_expression_family()
        );
        assert_eq!(
            variants_for_statement_family(),
            variants_for_statement_family()
        );
    }

    #[test]
    fn every_family_validates() {
        for family in families() {
            validate(family.name, &family.variants).unwrap();
        }
    }

    #[test]
    fn families_are_in_generation_order() {
        let names = families().map(|family| family.name);
        assert_eq!(names, [EXPRESSION, STATEMENT]);
    }

    #[test]
    fn expression_family_covers_every_tag_once() {
        let tags: Vec<Tag> = variants_for_expression_family()
            .iter()
            .map(|v| v.tag)
            .collect();
        let expected: Vec<Tag> = ExpressionTag::ALL.iter().copied().map(Tag::from).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn statement_family_covers_every_tag_once() {
        let tags: Vec<Tag> = variants_for_statement_family()
            .iter()
            .map(|v| v.tag)
            .collect();
        let expected: Vec<Tag> = StatementTag::ALL.iter().copied().map(Tag::from).collect();
        assert_eq!(tags, expected);
    }

    #[test]
    fn var_statement_field_order() {
        let variants = variants_for_statement_family();
        let var = variants
            .iter()
            .find(|v| v.tag == Tag::Statement(StatementTag::Var))
            .unwrap();
        assert_eq!(
            var.fields,
            [
                Field::new(FieldKind::Token, "name"),
                Field::new(FieldKind::ExpressionRef, "initializer"),
            ]
        );
    }
}
