use super::Comparison;
use crate::error::{NeoError, Result};
use crate::model::LinkedApproach;
use chrono::NaiveDate;
use std::fmt;

/// Extracts one comparable attribute from a close approach.
///
/// The default [`Attribute::get`] has no attribute to read and fails with
/// [`NeoError::UnsupportedCriterion`]; every concrete accessor overrides it.
pub trait Attribute {
    type Value: PartialOrd + fmt::Debug + Clone;

    /// Name of the filter kind built on this accessor, e.g. `DistanceFilter`.
    const FILTER_NAME: &'static str;

    fn get(approach: &LinkedApproach<'_>) -> Result<Self::Value> {
        let _ = approach;
        Err(NeoError::UnsupportedCriterion(Self::FILTER_NAME.to_string()))
    }
}

/// A predicate `get(approach) OP value` over close approaches.
#[derive(Debug, Clone)]
pub struct AttributeFilter<A: Attribute> {
    op: Comparison,
    value: A::Value,
}

impl<A: Attribute> AttributeFilter<A> {
    pub fn new(op: Comparison, value: A::Value) -> Self {
        Self { op, value }
    }

    pub fn evaluate(&self, approach: &LinkedApproach<'_>) -> Result<bool> {
        let attribute = A::get(approach)?;
        Ok(self.op.apply(&attribute, &self.value))
    }
}

impl<A: Attribute> fmt::Display for AttributeFilter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(op={}, value={:?})",
            A::FILTER_NAME,
            self.op,
            self.value
        )
    }
}

/// Object-safe view of a filter, as seen by the query engine.
pub trait ApproachFilter: fmt::Debug + fmt::Display {
    fn evaluate(&self, approach: &LinkedApproach<'_>) -> Result<bool>;
}

impl<A> ApproachFilter for AttributeFilter<A>
where
    A: Attribute + fmt::Debug,
{
    fn evaluate(&self, approach: &LinkedApproach<'_>) -> Result<bool> {
        AttributeFilter::evaluate(self, approach)
    }
}

/// Accessor without an attribute.
#[derive(Debug, Clone, Copy)]
pub struct Unspecified;

impl Attribute for Unspecified {
    type Value = f64;
    const FILTER_NAME: &'static str = "AttributeFilter";
}

/// Calendar date of the approach; the time of day is ignored.
#[derive(Debug, Clone, Copy)]
pub struct ByDate;

impl Attribute for ByDate {
    type Value = NaiveDate;
    const FILTER_NAME: &'static str = "DateFilter";

    fn get(approach: &LinkedApproach<'_>) -> Result<NaiveDate> {
        Ok(approach.approach.time.date())
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ByDistance;

impl Attribute for ByDistance {
    type Value = f64;
    const FILTER_NAME: &'static str = "DistanceFilter";

    fn get(approach: &LinkedApproach<'_>) -> Result<f64> {
        Ok(approach.approach.distance)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ByVelocity;

impl Attribute for ByVelocity {
    type Value = f64;
    const FILTER_NAME: &'static str = "VelocityFilter";

    fn get(approach: &LinkedApproach<'_>) -> Result<f64> {
        Ok(approach.approach.velocity)
    }
}

/// Diameter of the linked object. Unknown diameters are NaN and match no
/// ordering comparison.
#[derive(Debug, Clone, Copy)]
pub struct ByDiameter;

impl Attribute for ByDiameter {
    type Value = f64;
    const FILTER_NAME: &'static str = "DiameterFilter";

    fn get(approach: &LinkedApproach<'_>) -> Result<f64> {
        Ok(approach.require_neo("diameter")?.diameter)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ByHazardous;

impl Attribute for ByHazardous {
    type Value = bool;
    const FILTER_NAME: &'static str = "HazardousFilter";

    fn get(approach: &LinkedApproach<'_>) -> Result<bool> {
        Ok(approach.require_neo("hazardous")?.hazardous)
    }
}

pub type BaseFilter = AttributeFilter<Unspecified>;
pub type DateFilter = AttributeFilter<ByDate>;
pub type DistanceFilter = AttributeFilter<ByDistance>;
pub type VelocityFilter = AttributeFilter<ByVelocity>;
pub type DiameterFilter = AttributeFilter<ByDiameter>;
pub type HazardousFilter = AttributeFilter<ByHazardous>;
