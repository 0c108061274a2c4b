use super::*;

#[test]
fn field_renders_kind_then_name() {
    assert_eq!(Field::expr("left").to_string(), "Expression left");
    assert_eq!(Field::token("operator").to_string(), "Token operator");
    assert_eq!(Field::object("value").to_string(), "Object value");
}

#[test]
fn tag_names() {
    assert_eq!(Tag::from(ExpressionTag::Grouping).name(), "Grouping");
    assert_eq!(Tag::from(StatementTag::Var).to_string(), "Var");
    assert_eq!(
        ExpressionTag::ALL.iter().map(|t| t.name()).collect::<Vec<_>>(),
        ["Assign", "Binary", "Grouping", "Literal", "Unary", "Variable"]
    );
    assert_eq!(
        StatementTag::ALL.iter().map(|t| t.name()).collect::<Vec<_>>(),
        ["Expr", "Print", "Var"]
    );
}

#[test]
fn tag_sets_are_disjoint() {
    for e in ExpressionTag::ALL {
        for s in StatementTag::ALL {
            assert_ne!(e.name(), s.name());
        }
    }
    assert_ne!(
        Tag::from(ExpressionTag::Literal),
        Tag::from(StatementTag::Print)
    );
}

#[test]
fn variant_keeps_field_order() {
    let variant = Variant::new(
        "Expression",
        ExpressionTag::Binary,
        [
            Field::expr("right"),
            Field::token("operator"),
            Field::expr("left"),
        ],
    );
    let names: Vec<&str> = variant.fields.iter().map(|f| f.name).collect();
    assert_eq!(names, ["right", "operator", "left"]);
}

#[test]
fn family_render_uses_name_as_base() {
    let family = Family::new(
        "Statement",
        vec![Variant::new(
            "Statement",
            StatementTag::Print,
            [Field::expr("expression")],
        )],
    );
    let out = family.render();
    assert!(out.contains("abstract class Statement {\n"));
    assert!(out.contains("    R visitPrintStatement(Print statement);\n"));
}
