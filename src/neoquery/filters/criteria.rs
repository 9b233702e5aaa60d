use super::attribute::{
    ApproachFilter, DateFilter, DiameterFilter, DistanceFilter, HazardousFilter, VelocityFilter,
};
use super::Comparison;
use crate::error::{NeoError, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

pub type Filters = Vec<Box<dyn ApproachFilter>>;

/// User-supplied query criteria. Every field is optional.
///
/// `hazardous` is tri-state: `None` does not filter, `Some(false)` selects
/// approaches of objects that are not potentially hazardous.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Criteria {
    pub date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    pub hazardous: Option<bool>,
}

/// Build one filter per specified criterion.
///
/// Maximum bounds must be greater than zero; a zero or negative maximum fails
/// with [`NeoError::InvalidBound`] before any filter is returned. A minimum of
/// exactly zero counts as unspecified, so it produces no filter. An exact date
/// and a start/end range are independent filters and may both be present.
pub fn create_filters(criteria: &Criteria) -> Result<Filters> {
    check_maximum("distance", criteria.distance_max)?;
    check_maximum("velocity", criteria.velocity_max)?;
    check_maximum("diameter", criteria.diameter_max)?;

    let mut filters: Filters = Vec::new();

    if let Some(date) = criteria.date {
        filters.push(Box::new(DateFilter::new(Comparison::Eq, date)));
    }
    if let Some(start) = criteria.start_date {
        filters.push(Box::new(DateFilter::new(Comparison::Ge, start)));
    }
    if let Some(end) = criteria.end_date {
        filters.push(Box::new(DateFilter::new(Comparison::Le, end)));
    }

    if let Some(min) = minimum(criteria.distance_min) {
        filters.push(Box::new(DistanceFilter::new(Comparison::Ge, min)));
    }
    if let Some(max) = maximum(criteria.distance_max) {
        filters.push(Box::new(DistanceFilter::new(Comparison::Le, max)));
    }

    if let Some(min) = minimum(criteria.velocity_min) {
        filters.push(Box::new(VelocityFilter::new(Comparison::Ge, min)));
    }
    if let Some(max) = maximum(criteria.velocity_max) {
        filters.push(Box::new(VelocityFilter::new(Comparison::Le, max)));
    }

    if let Some(min) = minimum(criteria.diameter_min) {
        filters.push(Box::new(DiameterFilter::new(Comparison::Ge, min)));
    }
    if let Some(max) = maximum(criteria.diameter_max) {
        filters.push(Box::new(DiameterFilter::new(Comparison::Le, max)));
    }

    if let Some(hazardous) = criteria.hazardous {
        filters.push(Box::new(HazardousFilter::new(Comparison::Eq, hazardous)));
    }

    for filter in &filters {
        debug!(%filter, "built filter");
    }
    Ok(filters)
}

fn check_maximum(criterion: &'static str, value: Option<f64>) -> Result<()> {
    match value {
        Some(v) if v <= 0.0 => Err(NeoError::InvalidBound {
            criterion,
            value: v,
        }),
        _ => Ok(()),
    }
}

// Zero is "not given".
fn minimum(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

// NaN passes `check_maximum` and is dropped here.
fn maximum(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helpers::cd_to_datetime;
    use crate::model::{CloseApproach, LinkedApproach, NearEarthObject};

    fn names(filters: &Filters) -> Vec<String> {
        filters.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn no_criteria_no_filters() {
        assert!(create_filters(&Criteria::default()).unwrap().is_empty());
    }

    #[test]
    fn one_filter_per_criterion() {
        let day = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        let criteria = Criteria {
            date: Some(day),
            start_date: Some(day),
            end_date: Some(day),
            distance_min: Some(0.1),
            distance_max: Some(0.5),
            velocity_min: Some(1.0),
            velocity_max: Some(30.0),
            diameter_min: Some(0.01),
            diameter_max: Some(2.0),
            hazardous: Some(true),
        };
        let filters = create_filters(&criteria).unwrap();
        assert_eq!(filters.len(), 10);
        assert_eq!(
            names(&filters)[..3].to_vec(),
            vec![
                "DateFilter(op=eq, value=2020-01-01)",
                "DateFilter(op=ge, value=2020-01-01)",
                "DateFilter(op=le, value=2020-01-01)",
            ]
        );
    }

    #[test]
    fn zero_or_negative_maximum_is_rejected() {
        for bad in [0.0, -1.0] {
            let criteria = Criteria {
                distance_max: Some(bad),
                ..Default::default()
            };
            let err = create_filters(&criteria).unwrap_err();
            assert!(matches!(
                err,
                NeoError::InvalidBound {
                    criterion: "distance",
                    ..
                }
            ));
        }

        let criteria = Criteria {
            velocity_min: Some(10.0),
            diameter_max: Some(-0.5),
            ..Default::default()
        };
        assert!(create_filters(&criteria)
            .unwrap_err()
            .to_string()
            .contains("maximum must be greater than zero"));
    }

    #[test]
    fn zero_minimum_is_omitted() {
        let criteria = Criteria {
            distance_min: Some(0.0),
            velocity_min: Some(0.0),
            diameter_min: Some(0.0),
            ..Default::default()
        };
        assert!(create_filters(&criteria).unwrap().is_empty());
    }

    #[test]
    fn hazardous_is_tri_state() {
        assert!(create_filters(&Criteria::default()).unwrap().is_empty());

        let criteria = Criteria {
            hazardous: Some(false),
            ..Default::default()
        };
        let filters = create_filters(&criteria).unwrap();
        assert_eq!(names(&filters), vec!["HazardousFilter(op=eq, value=false)"]);

        let time = cd_to_datetime("2020-Jan-01 06:00").unwrap();
        let safe = NearEarthObject::new("433", None, 16.84, false);
        let risky = NearEarthObject::new("99942", None, 0.37, true);
        let a = CloseApproach::new("433", time, 0.1, 1.0);
        let b = CloseApproach::new("99942", time, 0.1, 1.0);

        assert!(filters[0]
            .evaluate(&LinkedApproach::new(&a, Some(&safe)))
            .unwrap());
        assert!(!filters[0]
            .evaluate(&LinkedApproach::new(&b, Some(&risky)))
            .unwrap());
    }

    #[test]
    fn criteria_deserialize_from_json() {
        let criteria: Criteria =
            serde_json::from_str(r#"{"start_date": "2020-01-01", "hazardous": true}"#).unwrap();
        assert_eq!(criteria.start_date, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(criteria.hazardous, Some(true));
        assert_eq!(criteria.distance_max, None);
    }
}
