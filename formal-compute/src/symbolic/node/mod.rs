//! The symbolic representation of a formula.
//!
//! A [`Node`] is an immutable tree: every node owns its children, and no operation in this crate
//! ever mutates a node in place. Building a new tree from an old one clones the parts that are
//! kept, which is cheap enough for the formula sizes this crate is meant for.
//!
//! # Undefined values
//!
//! Algebraic failures, such as a division by zero or the logarithm of a negative number, are not
//! errors. They produce the poison constant [`Node::UNDEFINED`], which absorbs every operator it
//! is combined with during simplification. [`Node::UNDEFINED`] is stored as a [`Constant`] holding
//! `NaN`; [`Node::constant`] maps every non-finite value onto it, so infinities never appear in a
//! tree built through the constructors.
//!
//! [`Constant`]: Node::Constant
//!
//! # Equality
//!
//! The [`PartialEq`], [`Eq`] and [`Ord`] implementations compare the trees **structurally**. Two
//! formulas that are mathematically equal, such as `x+y` and `y+x`, are generally not equal as
//! trees until both have been through the simplifier. See [`cmp`] for the cheaper commutative
//! check [`is_equal_simple`], and [`equivalent`](crate::symbolic::simplify::equivalent) for
//! equality after simplification.

pub mod cmp;
mod convert;
mod fmt;
mod iter;

pub use cmp::is_equal_simple;
pub use iter::NodeIter;
use std::{collections::BTreeSet, ops::{Add, Div, Mul, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An operator that takes a single operand.
///
/// The declaration order is significant: it is the order used by [`Ord`] for [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnaryOp {
    /// `-a`
    Negate,

    /// `exp(a)`
    Exp,

    /// `ln(a)`, the natural logarithm.
    Ln,

    /// `cos(a)`
    Cos,

    /// `sin(a)`
    Sin,

    /// `tan(a)`
    Tan,

    /// `(a)%`, which is `a / 100`.
    Percent,
}

impl UnaryOp {
    /// Returns the name of the operator as it is written in a formula.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Cos => "cos",
            Self::Sin => "sin",
            Self::Tan => "tan",
            Self::Percent => "%",
        }
    }
}

/// An operator that takes two operands.
///
/// The declaration order is significant: it is the order used by [`Ord`] for [`Node`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    /// Returns the symbol of the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }
}

/// A node of a symbolic formula.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A real number. `NaN` represents [`Node::UNDEFINED`].
    Constant(f64),

    /// A variable, such as `x` or `theta`.
    Variable(String),

    /// A unary operation applied to an operand.
    Unary(UnaryOp, Box<Node>),

    /// A binary operation applied to a left and right operand.
    Binary(BinaryOp, Box<Node>, Box<Node>),
}

impl Node {
    /// The constant `0`.
    pub const ZERO: Node = Node::Constant(0.0);

    /// The constant `1`.
    pub const ONE: Node = Node::Constant(1.0);

    /// The constant `2`.
    pub const TWO: Node = Node::Constant(2.0);

    /// The constant `-1`.
    pub const MINUS_ONE: Node = Node::Constant(-1.0);

    /// Euler's number, written `E` in a formula.
    pub const E: Node = Node::Constant(std::f64::consts::E);

    /// Archimedes' constant, written `PI` in a formula.
    pub const PI: Node = Node::Constant(std::f64::consts::PI);

    /// The poison value produced by undefined operations, written `UNDEFINED` in a formula.
    pub const UNDEFINED: Node = Node::Constant(f64::NAN);

    /// Creates a constant. Non-finite values become [`Node::UNDEFINED`], and `-0` becomes `0`.
    pub fn constant(value: f64) -> Self {
        if !value.is_finite() {
            Self::UNDEFINED
        } else if value == 0.0 {
            Self::ZERO
        } else {
            Self::Constant(value)
        }
    }

    /// Creates a variable with the given name.
    pub fn variable(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    /// Creates a unary operation. No simplification is done.
    pub fn unary(op: UnaryOp, operand: Node) -> Self {
        Self::Unary(op, Box::new(operand))
    }

    /// Creates a binary operation. No simplification is done.
    pub fn binary(op: BinaryOp, lhs: Node, rhs: Node) -> Self {
        Self::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    /// Returns `exp(self)`.
    pub fn exp(self) -> Self {
        Self::unary(UnaryOp::Exp, self)
    }

    /// Returns `ln(self)`.
    pub fn ln(self) -> Self {
        Self::unary(UnaryOp::Ln, self)
    }

    /// Returns `cos(self)`.
    pub fn cos(self) -> Self {
        Self::unary(UnaryOp::Cos, self)
    }

    /// Returns `sin(self)`.
    pub fn sin(self) -> Self {
        Self::unary(UnaryOp::Sin, self)
    }

    /// Returns `tan(self)`.
    pub fn tan(self) -> Self {
        Self::unary(UnaryOp::Tan, self)
    }

    /// Returns `(self)%`.
    pub fn percent(self) -> Self {
        Self::unary(UnaryOp::Percent, self)
    }

    /// Adds all the given nodes together, from left to right. The sum of no nodes is `0`.
    ///
    /// ```
    /// use formal_compute::symbolic::Node;
    ///
    /// let sum = Node::sum([Node::variable("x"), Node::ONE, Node::variable("y")]);
    /// assert_eq!(sum.to_string(), "(x+1)+y");
    /// ```
    pub fn sum(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut nodes = nodes.into_iter();
        match nodes.next() {
            Some(first) => nodes.fold(first, |acc, node| acc + node),
            None => Self::ZERO,
        }
    }

    /// Multiplies all the given nodes together, from left to right. The product of no nodes is
    /// `1`.
    pub fn product(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut nodes = nodes.into_iter();
        match nodes.next() {
            Some(first) => nodes.fold(first, |acc, node| acc * node),
            None => Self::ONE,
        }
    }

    /// Returns `self * self * ... * self`, with `count` factors. If `count` is zero, returns `1`.
    pub fn repeated_product(self, count: usize) -> Self {
        Self::product(std::iter::repeat(self).take(count))
    }

    /// Returns true if this node is [`Node::UNDEFINED`].
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::Constant(value) if value.is_nan())
    }

    /// Returns true if this node is a [`Node::Constant`], including [`Node::UNDEFINED`].
    pub fn is_constant(&self) -> bool {
        matches!(self, Self::Constant(_))
    }

    /// If this node is a defined [`Node::Constant`], returns its value.
    pub fn as_constant(&self) -> Option<f64> {
        match self {
            Self::Constant(value) if !value.is_nan() => Some(*value),
            _ => None,
        }
    }

    /// If this node is a [`Node::Variable`], returns its name.
    pub fn as_variable(&self) -> Option<&str> {
        match self {
            Self::Variable(name) => Some(name),
            _ => None,
        }
    }

    /// Returns the names of all variables that appear in this node, in sorted order.
    pub fn variables(&self) -> BTreeSet<String> {
        self.post_order_iter()
            .filter_map(Node::as_variable)
            .map(str::to_owned)
            .collect()
    }

    /// Returns an iterator that traverses the tree of nodes in left-to-right post-order (i.e.
    /// depth-first).
    pub fn post_order_iter(&self) -> NodeIter {
        NodeIter::new(self)
    }
}

impl From<f64> for Node {
    fn from(value: f64) -> Self {
        Self::constant(value)
    }
}

impl Add for Node {
    type Output = Node;

    fn add(self, rhs: Self) -> Self::Output {
        Self::binary(BinaryOp::Add, self, rhs)
    }
}

impl Sub for Node {
    type Output = Node;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::binary(BinaryOp::Sub, self, rhs)
    }
}

impl Mul for Node {
    type Output = Node;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::binary(BinaryOp::Mul, self, rhs)
    }
}

impl Div for Node {
    type Output = Node;

    fn div(self, rhs: Self) -> Self::Output {
        Self::binary(BinaryOp::Div, self, rhs)
    }
}

impl Neg for Node {
    type Output = Node;

    fn neg(self) -> Self::Output {
        Self::unary(UnaryOp::Negate, self)
    }
}
