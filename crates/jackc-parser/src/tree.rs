//! Parse tree for Jack class definitions.
//!
//! Interior nodes are labeled by the grammar rule that produced them;
//! leaves carry one token's kind and text. Children appear in the order
//! the grammar consumed them and are never reordered. Each subtree has
//! exactly one owner, so the whole structure is a strict tree.

use std::fmt;

use jackc_token::TokenKind;
use serde::Serialize;

/// The nonterminals of the Jack grammar, one per parser rule method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    Class,
    ClassVarDec,
    Subroutine,
    ParameterList,
    SubroutineBody,
    VarDec,
    Statements,
    LetStatement,
    IfStatement,
    WhileStatement,
    DoStatement,
    ReturnStatement,
    Expression,
    Term,
    ExpressionList,
}

impl Rule {
    /// The rule's label as it appears in rendered trees.
    pub fn label(self) -> &'static str {
        match self {
            Rule::Class => "class",
            Rule::ClassVarDec => "classVarDec",
            Rule::Subroutine => "subroutine",
            Rule::ParameterList => "parameterList",
            Rule::SubroutineBody => "subroutineBody",
            Rule::VarDec => "varDec",
            Rule::Statements => "statements",
            Rule::LetStatement => "letStatement",
            Rule::IfStatement => "ifStatement",
            Rule::WhileStatement => "whileStatement",
            Rule::DoStatement => "doStatement",
            Rule::ReturnStatement => "returnStatement",
            Rule::Expression => "expression",
            Rule::Term => "term",
            Rule::ExpressionList => "expressionList",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A node in the parse tree.
///
/// Terminals become `Leaf` nodes once attached to a parent; raw tokens
/// never appear in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParseTree {
    /// One successful rule invocation and everything it consumed.
    Node { rule: Rule, children: Vec<ParseTree> },

    /// A single terminal.
    Leaf { kind: TokenKind, value: String },
}

impl ParseTree {
    /// An interior node for `rule` with no children yet.
    pub fn node(rule: Rule) -> Self {
        ParseTree::Node {
            rule,
            children: Vec::new(),
        }
    }

    /// A terminal wrapping one token's kind and text.
    pub fn leaf(kind: TokenKind, value: impl Into<String>) -> Self {
        ParseTree::Leaf {
            kind,
            value: value.into(),
        }
    }

    /// Append a child to an interior node. Leaves ignore the append.
    pub fn push(&mut self, child: ParseTree) {
        if let ParseTree::Node { children, .. } = self {
            children.push(child);
        }
    }

    /// The children of an interior node; empty for leaves.
    pub fn children(&self) -> &[ParseTree] {
        match self {
            ParseTree::Node { children, .. } => children,
            ParseTree::Leaf { .. } => &[],
        }
    }

    /// The values of all leaf descendants, left to right.
    pub fn leaf_values(&self) -> Vec<&str> {
        match self {
            ParseTree::Leaf { value, .. } => vec![value.as_str()],
            ParseTree::Node { children, .. } => {
                children.iter().flat_map(|c| c.leaf_values()).collect()
            }
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let pad = "  ".repeat(depth);
        match self {
            ParseTree::Leaf { kind, value } => writeln!(f, "{pad}<{kind}> {value} </{kind}>"),
            ParseTree::Node { rule, children } => {
                writeln!(f, "{pad}<{rule}>")?;
                for child in children {
                    child.write_indented(f, depth + 1)?;
                }
                writeln!(f, "{pad}</{rule}>")
            }
        }
    }
}

impl fmt::Display for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_tree() -> ParseTree {
        let mut tree = ParseTree::node(Rule::Class);
        tree.push(ParseTree::leaf(TokenKind::Keyword, "class"));
        tree.push(ParseTree::leaf(TokenKind::Identifier, "Main"));
        tree.push(ParseTree::leaf(TokenKind::Symbol, "{"));
        tree.push(ParseTree::leaf(TokenKind::Symbol, "}"));
        tree
    }

    #[test]
    fn test_display_markup() {
        let expected = "\
<class>
  <keyword> class </keyword>
  <identifier> Main </identifier>
  <symbol> { </symbol>
  <symbol> } </symbol>
</class>
";
        assert_eq!(sample_tree().to_string(), expected);
    }

    #[test]
    fn test_display_empty_node() {
        let tree = ParseTree::node(Rule::ParameterList);
        assert_eq!(tree.to_string(), "<parameterList>\n</parameterList>\n");
    }

    #[test]
    fn test_display_nested_indentation() {
        let mut inner = ParseTree::node(Rule::Expression);
        inner.push(ParseTree::leaf(TokenKind::IntegerConstant, "5"));
        let mut outer = ParseTree::node(Rule::ReturnStatement);
        outer.push(ParseTree::leaf(TokenKind::Keyword, "return"));
        outer.push(inner);

        let expected = "\
<returnStatement>
  <keyword> return </keyword>
  <expression>
    <integerConstant> 5 </integerConstant>
  </expression>
</returnStatement>
";
        assert_eq!(outer.to_string(), expected);
    }

    #[test]
    fn test_leaf_values_in_order() {
        assert_eq!(sample_tree().leaf_values(), vec!["class", "Main", "{", "}"]);
    }

    #[test]
    fn test_push_on_leaf_is_ignored() {
        let mut leaf = ParseTree::leaf(TokenKind::Symbol, ";");
        leaf.push(ParseTree::leaf(TokenKind::Symbol, ";"));
        assert!(leaf.children().is_empty());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(sample_tree()).unwrap();
        assert_eq!(json["rule"], "class");
        assert_eq!(json["children"][0]["kind"], "keyword");
        assert_eq!(json["children"][0]["value"], "class");
        assert_eq!(json["children"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_rule_labels() {
        assert_eq!(Rule::ClassVarDec.label(), "classVarDec");
        assert_eq!(Rule::LetStatement.label(), "letStatement");
        assert_eq!(Rule::ExpressionList.label(), "expressionList");
    }
}
