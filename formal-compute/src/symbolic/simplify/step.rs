/// A rewrite applied by the simplifier.
///
/// Collecting the steps with [`simplify_with_steps`](super::simplify_with_steps) shows how a
/// formula reached its simplified form, one entry per rewrite, in the order the rewrites
/// happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `UNDEFINED` absorbs every operator applied to it.
    PropagateUndefined,

    /// `a/0 = UNDEFINED`, `ln(-1) = UNDEFINED`
    Undefined,

    /// `2*3 = 6`, `1+2 = 3`, `cos(0) = 1`
    FoldConstants,

    /// `0*a = 0`
    MultiplyZero,

    /// `a+a = 2*a`, `5*a-2*a = 3*a`, `a-a = 0`
    CombineLikeTerms,

    /// `(a*b)/(b*c) = a/c`
    CancelFactors,

    /// `sin(a)/cos(a) = tan(a)`
    TangentQuotient,

    /// `exp(a)*exp(b) = exp(a+b)`, `exp(a)/exp(b) = exp(a-b)`
    MergeExponentials,

    /// `ln(a)+ln(b) = ln(a*b)`, `ln(a)-ln(b) = ln(a/b)`
    MergeLogarithms,

    /// `cos(a)*cos(b) - sin(a)*sin(b) = cos(a+b)`
    CosineAngleSum,

    /// `sin(a)*cos(b) + cos(a)*sin(b) = sin(a+b)`
    SineAngleSum,

    /// `exp(3*ln(a)) = a*a*a`
    PowerToProduct,

    /// `exp(ln(a)) = a`, `ln(exp(a)) = a`
    InverseFunctions,

    /// `cos(-a) = cos(a)`
    EvenFunction,

    /// `sin(-a) = -sin(a)`, `tan(-a) = -tan(a)`, `(-a)% = -(a)%`
    OddFunction,

    /// `-(-a) = a`
    DoubleNegation,

    /// `(0)% = 0`
    PercentOfZero,
}
