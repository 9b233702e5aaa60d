//! Attribute filtering.
//!
//! A filter compares one attribute of a close approach (or of its linked
//! object) against a reference value fixed at construction. The comparison is
//! data, a [`Comparison`], and the attribute is supplied by an [`Attribute`]
//! accessor type. [`AttributeFilter`] joins the two; every concrete filter kind
//! is an `AttributeFilter` over a different accessor.
//!
//! Query code sees filters only through the object-safe [`ApproachFilter`]
//! trait, so new kinds need a new accessor and nothing else.
//!
//! [`create_filters`] builds the filter set for a [`Criteria`].

pub mod attribute;
pub mod criteria;

pub use attribute::{
    ApproachFilter, Attribute, AttributeFilter, BaseFilter, ByDate, ByDiameter, ByDistance,
    ByHazardous, ByVelocity, DateFilter, DiameterFilter, DistanceFilter, HazardousFilter,
    Unspecified, VelocityFilter,
};
pub use criteria::{create_filters, Criteria, Filters};

use std::fmt;

/// Comparison operation between an attribute and a reference value.
///
/// The attribute is always the left-hand side: `Le` means
/// `attribute <= value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Eq,
    Ne,
    Le,
    Ge,
    Lt,
    Gt,
}

impl Comparison {
    pub fn apply<T: PartialOrd + ?Sized>(self, attribute: &T, value: &T) -> bool {
        match self {
            Comparison::Eq => attribute == value,
            Comparison::Ne => attribute != value,
            Comparison::Le => attribute <= value,
            Comparison::Ge => attribute >= value,
            Comparison::Lt => attribute < value,
            Comparison::Gt => attribute > value,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Comparison::Eq => "eq",
            Comparison::Ne => "ne",
            Comparison::Le => "le",
            Comparison::Ge => "ge",
            Comparison::Lt => "lt",
            Comparison::Gt => "gt",
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparisons_put_attribute_on_the_left() {
        assert!(Comparison::Le.apply(&1.0, &2.0));
        assert!(!Comparison::Ge.apply(&1.0, &2.0));
        assert!(Comparison::Lt.apply(&1, &2));
        assert!(!Comparison::Gt.apply(&1, &2));
        assert!(Comparison::Eq.apply("a", "a"));
        assert!(Comparison::Ne.apply(&true, &false));
    }

    #[test]
    fn nan_never_satisfies_ordering() {
        for op in [Comparison::Le, Comparison::Ge, Comparison::Lt, Comparison::Gt, Comparison::Eq] {
            assert!(!op.apply(&f64::NAN, &1.0), "{} matched NaN", op);
        }
        assert!(Comparison::Ne.apply(&f64::NAN, &1.0));
    }
}
