//! Three-address statements.
//!
//! A [`Statement`] is one operation with an optional result and up to two operands. The
//! operator decides how the operand slots are read:
//!
//! | Operator kind | `result` | `operand_a` | `operand_b` |
//! |---------------|----------|-------------|-------------|
//! | Arithmetic, comparison | defined | variable | variable |
//! | [`Operator::Negation`], [`Operator::Copy`] | defined | variable | unused |
//! | [`Operator::Assign`] | defined | immediate constant | unused |
//! | [`Operator::IfStatement`] | none | condition variable | branch target node |
//!
//! Statements are stored in program order in a [`Block`].

use std::fmt;

use strum::{Display, EnumIter, IntoStaticStr};

use crate::{
    analysis::ssa::Variable,
    utils::{graph::NodeId, Sequence},
};

/// The statements of one basic block, in program order.
pub type Block = Sequence<Statement>;

/// The operation performed by a [`Statement`].
///
/// Displays as its source-level symbol.
///
/// # Examples
///
/// ```rust
/// use domssa::analysis::Operator;
///
/// assert_eq!(Operator::Addition.to_string(), "+");
/// assert_eq!(Operator::Addition.arity(), 2);
/// assert!(Operator::IfStatement.is_branch());
/// assert!(!Operator::IfStatement.has_result());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
pub enum Operator {
    /// `r = a + b`
    #[strum(serialize = "+")]
    Addition,
    /// `r = a - b`
    #[strum(serialize = "-")]
    Subtraction,
    /// `r = a * b`
    #[strum(serialize = "*")]
    Multiplication,
    /// `r = a / b`
    #[strum(serialize = "/")]
    Division,
    /// `r = a % b`
    #[strum(serialize = "%")]
    Modulus,
    /// `r = a == b`
    #[strum(serialize = "==")]
    EqualTo,
    /// `r = a != b`
    #[strum(serialize = "!=")]
    NotEqualTo,
    /// `r = a > b`
    #[strum(serialize = ">")]
    GreaterThan,
    /// `r = a >= b`
    #[strum(serialize = ">=")]
    GreaterOrEqual,
    /// `r = a < b`
    #[strum(serialize = "<")]
    LessThan,
    /// `r = a <= b`
    #[strum(serialize = "<=")]
    LessOrEqual,
    /// `r = -a`
    #[strum(serialize = "neg")]
    Negation,
    /// `r = a`
    #[strum(serialize = "copy")]
    Copy,
    /// `r = constant`
    #[strum(serialize = "=")]
    Assign,
    /// `if a goto target`
    #[strum(serialize = "if")]
    IfStatement,
}

impl Operator {
    /// Returns `true` if the operator writes its result slot.
    #[must_use]
    pub const fn has_result(self) -> bool {
        !matches!(self, Operator::IfStatement)
    }

    /// Returns `true` if the operator reads a single variable operand.
    #[must_use]
    pub const fn is_unary(self) -> bool {
        matches!(self, Operator::Negation | Operator::Copy)
    }

    /// Returns `true` for conditional branches.
    #[must_use]
    pub const fn is_branch(self) -> bool {
        matches!(self, Operator::IfStatement)
    }

    /// Returns the number of operand slots the operator reads.
    ///
    /// An [`Operator::Assign`] reads one slot holding a constant and an
    /// [`Operator::IfStatement`] reads the condition and the target.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Operator::Negation | Operator::Copy | Operator::Assign => 1,
            _ => 2,
        }
    }
}

/// One operand slot of a [`Statement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Operand {
    /// Unused slot.
    #[default]
    None,
    /// A variable reference, renamed by the SSA pass.
    Variable(Variable),
    /// A constant, only meaningful for [`Operator::Assign`].
    Immediate(i64),
    /// The node a conditional branch jumps to.
    Target(NodeId),
}

impl Operand {
    /// Returns the variable held in this slot, if any.
    #[must_use]
    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Operand::Variable(var) => Some(var),
            _ => None,
        }
    }

    /// Returns the variable held in this slot mutably, if any.
    pub fn as_variable_mut(&mut self) -> Option<&mut Variable> {
        match self {
            Operand::Variable(var) => Some(var),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::None => write!(f, "_"),
            Operand::Variable(var) => write!(f, "{var}"),
            Operand::Immediate(value) => write!(f, "{value}"),
            Operand::Target(node) => write!(f, "{node}"),
        }
    }
}

/// A single three-address statement.
///
/// # Examples
///
/// ```rust
/// use domssa::{analysis::{Operator, Statement, Variable}, utils::graph::NodeId};
///
/// let add = Statement::binary(
///     Variable::new('x', 1),
///     Operator::Addition,
///     Variable::new('y', 0),
///     Variable::new('z', 0),
/// );
/// assert_eq!(add.to_string(), "x1 = y0 + z0");
///
/// let jump = Statement::branch(Variable::new('c', 0), NodeId::new(3));
/// assert_eq!(jump.to_string(), "if c0 goto n3");
/// assert_eq!(jump.branch_target(), Some(NodeId::new(3)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement {
    /// The defined variable, `None` for operators without a result.
    pub result: Option<Variable>,
    /// The operation.
    pub operator: Operator,
    /// First operand slot.
    pub operand_a: Operand,
    /// Second operand slot.
    pub operand_b: Operand,
}

impl Statement {
    /// Creates `result = a <operator> b`.
    #[must_use]
    pub fn binary(result: Variable, operator: Operator, a: Variable, b: Variable) -> Self {
        Statement {
            result: Some(result),
            operator,
            operand_a: Operand::Variable(a),
            operand_b: Operand::Variable(b),
        }
    }

    /// Creates `result = <operator> a`.
    #[must_use]
    pub fn unary(result: Variable, operator: Operator, a: Variable) -> Self {
        Statement {
            result: Some(result),
            operator,
            operand_a: Operand::Variable(a),
            operand_b: Operand::None,
        }
    }

    /// Creates `result = value`.
    #[must_use]
    pub fn assign(result: Variable, value: i64) -> Self {
        Statement {
            result: Some(result),
            operator: Operator::Assign,
            operand_a: Operand::Immediate(value),
            operand_b: Operand::None,
        }
    }

    /// Creates `if condition goto target`.
    #[must_use]
    pub fn branch(condition: Variable, target: NodeId) -> Self {
        Statement {
            result: None,
            operator: Operator::IfStatement,
            operand_a: Operand::Variable(condition),
            operand_b: Operand::Target(target),
        }
    }

    /// Returns the variable this statement defines, if its operator has a result.
    #[must_use]
    pub fn defines(&self) -> Option<&Variable> {
        if self.operator.has_result() {
            self.result.as_ref()
        } else {
            None
        }
    }

    /// Returns the variables read by this statement, in operand order.
    ///
    /// Only the slots the operator reads are considered. Constants and branch targets are
    /// not variables and are skipped.
    pub fn uses(&self) -> impl Iterator<Item = &Variable> {
        [&self.operand_a, &self.operand_b]
            .into_iter()
            .take(self.operator.arity())
            .filter_map(Operand::as_variable)
    }

    /// Returns the variables read by this statement mutably, in operand order.
    pub fn uses_mut(&mut self) -> impl Iterator<Item = &mut Variable> {
        let arity = self.operator.arity();
        [&mut self.operand_a, &mut self.operand_b]
            .into_iter()
            .take(arity)
            .filter_map(Operand::as_variable_mut)
    }

    /// Returns the node a conditional branch jumps to.
    #[must_use]
    pub fn branch_target(&self) -> Option<NodeId> {
        match (self.operator, self.operand_b) {
            (Operator::IfStatement, Operand::Target(node)) => Some(node),
            _ => None,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator.is_branch() {
            return write!(f, "if {} goto {}", self.operand_a, self.operand_b);
        }

        match self.result {
            Some(result) => write!(f, "{result} = ")?,
            None => write!(f, "_ = ")?,
        }

        match self.operator {
            Operator::Negation => write!(f, "-{}", self.operand_a),
            Operator::Copy | Operator::Assign => write!(f, "{}", self.operand_a),
            op => {
                let symbol: &'static str = op.into();
                write!(f, "{} {symbol} {}", self.operand_a, self.operand_b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_operator_shape_is_consistent() {
        for op in Operator::iter() {
            if op.is_unary() {
                assert_eq!(op.arity(), 1, "{op:?}");
                assert!(op.has_result());
            }
            if op.is_branch() {
                assert!(!op.has_result());
                assert_eq!(op.arity(), 2);
            }
        }
        assert_eq!(Operator::iter().filter(|op| op.is_branch()).count(), 1);
        assert_eq!(Operator::iter().count(), 15);
    }

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Modulus.to_string(), "%");
        assert_eq!(Operator::NotEqualTo.to_string(), "!=");
        let symbol: &'static str = Operator::LessOrEqual.into();
        assert_eq!(symbol, "<=");
    }

    #[test]
    fn test_uses_respects_operator() {
        let add = Statement::binary(
            Variable::new('x', 0),
            Operator::Addition,
            Variable::new('y', 0),
            Variable::new('z', 0),
        );
        let used: Vec<Variable> = add.uses().copied().collect();
        assert_eq!(used, vec![Variable::new('y', 0), Variable::new('z', 0)]);

        let assign = Statement::assign(Variable::new('x', 0), 3);
        assert_eq!(assign.uses().count(), 0);

        let jump = Statement::branch(Variable::new('c', 0), NodeId::new(1));
        let used: Vec<Variable> = jump.uses().copied().collect();
        assert_eq!(used, vec![Variable::new('c', 0)]);

        let mut neg = Statement::unary(Variable::new('x', 0), Operator::Negation, Variable::new('y', 0));
        // stray data in the unused slot is not a use
        neg.operand_b = Operand::Variable(Variable::new('q', 0));
        assert_eq!(neg.uses().count(), 1);
    }

    #[test]
    fn test_uses_mut_rewrites_in_place() {
        let mut add = Statement::binary(
            Variable::new('x', 0),
            Operator::Multiplication,
            Variable::new('x', 0),
            Variable::new('z', 0),
        );
        for var in add.uses_mut() {
            var.version = 4;
        }
        assert_eq!(add.operand_a, Operand::Variable(Variable::new('x', 4)));
        assert_eq!(add.operand_b, Operand::Variable(Variable::new('z', 4)));
        assert_eq!(add.result, Some(Variable::new('x', 0)));
    }

    #[test]
    fn test_defines_and_branch_target() {
        let jump = Statement::branch(Variable::new('c', 0), NodeId::new(2));
        assert_eq!(jump.defines(), None);
        assert_eq!(jump.branch_target(), Some(NodeId::new(2)));

        let assign = Statement::assign(Variable::new('x', 0), -5);
        assert_eq!(assign.defines(), Some(&Variable::new('x', 0)));
        assert_eq!(assign.branch_target(), None);
    }

    #[test]
    fn test_display() {
        let cmp = Statement::binary(
            Variable::new('c', 0),
            Operator::EqualTo,
            Variable::new('x', 1),
            Variable::new('y', 0),
        );
        assert_eq!(cmp.to_string(), "c0 = x1 == y0");
        assert_eq!(Statement::assign(Variable::new('x', 0), 3).to_string(), "x0 = 3");
        assert_eq!(
            Statement::unary(Variable::new('n', 1), Operator::Negation, Variable::new('n', 0))
                .to_string(),
            "n1 = -n0"
        );
        assert_eq!(
            Statement::unary(Variable::new('a', 0), Operator::Copy, Variable::new('b', 2))
                .to_string(),
            "a0 = b2"
        );
    }
}
