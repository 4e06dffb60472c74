//! Emission impact estimation for logistics scenarios.
//!
//! A scenario is reduced to three scalars (carbon, cost, time). Each scalar
//! starts from a linear base over distance and weight and is then scaled by
//! one multiplier per categorical input, looked up from fixed tables.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Per-dimension multipliers applied to the base quantities.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Multipliers {
    pub carbon: f64,
    pub cost: f64,
    pub time: f64,
}

impl Multipliers {
    pub const NEUTRAL: Multipliers = Multipliers::new(1.0, 1.0, 1.0);

    pub const fn new(carbon: f64, cost: f64, time: f64) -> Self {
        Self { carbon, cost, time }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RouteType {
    Direct,
    Optimized,
    EcoFriendly,
    Express,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FreightType {
    Truck,
    Rail,
    Ship,
    Air,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupplierRating {
    Excellent,
    Good,
    Average,
    Poor,
}

const ROUTE_TABLE: [(RouteType, Multipliers); 4] = [
    (RouteType::Direct, Multipliers::new(1.0, 1.2, 1.0)),
    (RouteType::Optimized, Multipliers::new(0.7, 0.9, 0.85)),
    (RouteType::EcoFriendly, Multipliers::new(0.6, 1.1, 1.1)),
    (RouteType::Express, Multipliers::new(1.3, 1.5, 0.7)),
];

const FREIGHT_TABLE: [(FreightType, Multipliers); 4] = [
    (FreightType::Truck, Multipliers::new(1.0, 1.0, 1.0)),
    (FreightType::Rail, Multipliers::new(0.4, 0.8, 1.5)),
    (FreightType::Ship, Multipliers::new(0.3, 0.6, 3.0)),
    (FreightType::Air, Multipliers::new(2.5, 3.0, 0.3)),
];

const SUPPLIER_TABLE: [(SupplierRating, Multipliers); 4] = [
    (SupplierRating::Excellent, Multipliers::new(0.8, 1.1, 0.9)),
    (SupplierRating::Good, Multipliers::new(0.9, 1.0, 1.0)),
    (SupplierRating::Average, Multipliers::new(1.0, 1.0, 1.1)),
    (SupplierRating::Poor, Multipliers::new(1.2, 0.9, 1.3)),
];

fn lookup<K: PartialEq + Copy>(table: &[(K, Multipliers)], key: Option<K>) -> Multipliers {
    key.and_then(|key| {
        table
            .iter()
            .find(|(candidate, _)| *candidate == key)
            .map(|(_, multipliers)| *multipliers)
    })
    .unwrap_or(Multipliers::NEUTRAL)
}

impl RouteType {
    pub const ALL: [RouteType; 4] = [
        RouteType::Direct,
        RouteType::Optimized,
        RouteType::EcoFriendly,
        RouteType::Express,
    ];

    pub fn multipliers(self) -> Multipliers {
        lookup(&ROUTE_TABLE, Some(self))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteType::Direct => "direct",
            RouteType::Optimized => "optimized",
            RouteType::EcoFriendly => "eco-friendly",
            RouteType::Express => "express",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RouteType::Direct => "Direct Route",
            RouteType::Optimized => "AI-Optimized Route",
            RouteType::EcoFriendly => "Eco-Friendly Route",
            RouteType::Express => "Express Route",
        }
    }
}

impl FreightType {
    pub const ALL: [FreightType; 4] = [
        FreightType::Truck,
        FreightType::Rail,
        FreightType::Ship,
        FreightType::Air,
    ];

    pub fn multipliers(self) -> Multipliers {
        lookup(&FREIGHT_TABLE, Some(self))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FreightType::Truck => "truck",
            FreightType::Rail => "rail",
            FreightType::Ship => "ship",
            FreightType::Air => "air",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FreightType::Truck => "Truck",
            FreightType::Rail => "Rail",
            FreightType::Ship => "Ship",
            FreightType::Air => "Air",
        }
    }
}

impl SupplierRating {
    pub const ALL: [SupplierRating; 4] = [
        SupplierRating::Excellent,
        SupplierRating::Good,
        SupplierRating::Average,
        SupplierRating::Poor,
    ];

    pub fn multipliers(self) -> Multipliers {
        lookup(&SUPPLIER_TABLE, Some(self))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SupplierRating::Excellent => "excellent",
            SupplierRating::Good => "good",
            SupplierRating::Average => "average",
            SupplierRating::Poor => "poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupplierRating::Excellent => "Excellent (90-100)",
            SupplierRating::Good => "Good (70-89)",
            SupplierRating::Average => "Average (50-69)",
            SupplierRating::Poor => "Poor (0-49)",
        }
    }
}

/// Error for category strings outside the known set. Callers that follow the
/// neutral-multiplier policy should use [`parse_category`] instead.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

macro_rules! category_from_str {
    ($ty:ty) => {
        impl FromStr for $ty {
            type Err = UnknownCategory;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                let needle = raw.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|value| value.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| UnknownCategory(raw.to_string()))
            }
        }
    };
}

category_from_str!(RouteType);
category_from_str!(FreightType);
category_from_str!(SupplierRating);

/// Parses a category, mapping absent or unrecognized values to `None`.
pub fn parse_category<T: FromStr>(raw: &str) -> Option<T> {
    raw.parse().ok()
}

/// Coerces a raw form value to a non-negative finite number, or zero.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(0.0)
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ImpactInputs {
    /// Kilometers.
    pub distance: f64,
    /// Tons.
    pub weight: f64,
    pub route_type: Option<RouteType>,
    pub freight_type: Option<FreightType>,
    pub supplier_rating: Option<SupplierRating>,
}

impl ImpactInputs {
    /// Builds inputs from raw form strings using the coerce-or-zero policy.
    pub fn from_raw(
        distance: &str,
        weight: &str,
        route_type: &str,
        freight_type: &str,
        supplier_rating: &str,
    ) -> Self {
        Self {
            distance: coerce_number(distance),
            weight: coerce_number(weight),
            route_type: parse_category(route_type),
            freight_type: parse_category(freight_type),
            supplier_rating: parse_category(supplier_rating),
        }
    }
}

/// Carbon (kg CO₂e), cost (currency units) and time (hours).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ImpactEstimate {
    pub carbon_impact: f64,
    pub cost_impact: f64,
    pub time_impact: f64,
}

/// Base quantities before categorical adjustment.
pub fn base_quantities(distance: f64, weight: f64) -> ImpactEstimate {
    let distance = sanitize(distance);
    let weight = sanitize(weight);
    ImpactEstimate {
        carbon_impact: distance * weight * 0.1,
        cost_impact: distance * 0.5 + weight * 0.2,
        time_impact: distance * 0.02,
    }
}

pub fn estimate_impacts(inputs: &ImpactInputs) -> ImpactEstimate {
    let base = base_quantities(inputs.distance, inputs.weight);
    let route = lookup(&ROUTE_TABLE, inputs.route_type);
    let freight = lookup(&FREIGHT_TABLE, inputs.freight_type);
    let supplier = lookup(&SUPPLIER_TABLE, inputs.supplier_rating);

    ImpactEstimate {
        carbon_impact: base.carbon_impact * route.carbon * freight.carbon * supplier.carbon,
        cost_impact: base.cost_impact * route.cost * freight.cost * supplier.cost,
        time_impact: base.time_impact * route.time * freight.time * supplier.time,
    }
}

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactDimension {
    Carbon,
    Cost,
    Time,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImpactTone {
    Good,
    Warning,
    Bad,
}

impl ImpactTone {
    pub fn is_good(&self) -> bool {
        matches!(self, ImpactTone::Good)
    }
}

/// Display classification of a stored impact value.
pub fn impact_tone(value: f64, dimension: ImpactDimension) -> ImpactTone {
    let (good_below, warn_below) = match dimension {
        ImpactDimension::Carbon => (50.0, 100.0),
        ImpactDimension::Cost | ImpactDimension::Time => (100.0, 200.0),
    };
    if value < good_below {
        ImpactTone::Good
    } else if value < warn_below {
        ImpactTone::Warning
    } else {
        ImpactTone::Bad
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn optimized_rail_good_matches_reference_figures() {
        let inputs = ImpactInputs {
            distance: 1000.0,
            weight: 10.0,
            route_type: Some(RouteType::Optimized),
            freight_type: Some(FreightType::Rail),
            supplier_rating: Some(SupplierRating::Good),
        };
        let estimate = estimate_impacts(&inputs);
        assert!(close(estimate.carbon_impact, 252.0), "{estimate:?}");
        assert!(close(estimate.cost_impact, 361.44), "{estimate:?}");
        assert!(close(estimate.time_impact, 25.5), "{estimate:?}");
    }

    #[test]
    fn unknown_categories_leave_base_quantities_untouched() {
        let inputs = ImpactInputs::from_raw("420", "3.5", "teleport", "", "legendary");
        assert_eq!(inputs.route_type, None);
        assert_eq!(inputs.freight_type, None);
        assert_eq!(inputs.supplier_rating, None);

        let estimate = estimate_impacts(&inputs);
        assert_eq!(estimate, base_quantities(420.0, 3.5));
    }

    #[test]
    fn zero_weight_keeps_distance_terms() {
        let inputs = ImpactInputs {
            distance: 500.0,
            weight: 0.0,
            ..ImpactInputs::default()
        };
        let estimate = estimate_impacts(&inputs);
        assert_eq!(estimate.carbon_impact, 0.0);
        assert_eq!(estimate.cost_impact, 250.0);
        assert_eq!(estimate.time_impact, 10.0);
    }

    #[test]
    fn zero_distance_zeroes_carbon_and_time() {
        let inputs = ImpactInputs {
            distance: 0.0,
            weight: 40.0,
            route_type: Some(RouteType::Express),
            freight_type: Some(FreightType::Air),
            supplier_rating: Some(SupplierRating::Poor),
        };
        let estimate = estimate_impacts(&inputs);
        assert_eq!(estimate.carbon_impact, 0.0);
        assert_eq!(estimate.time_impact, 0.0);
        assert!(close(estimate.cost_impact, 40.0 * 0.2 * 1.5 * 3.0 * 0.9));
    }

    #[test]
    fn malformed_numbers_coerce_to_zero() {
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
        assert_eq!(coerce_number("-12"), 0.0);
        assert_eq!(coerce_number(" 12.5 "), 12.5);
    }

    #[test]
    fn estimates_are_non_negative_and_repeatable() {
        for route in RouteType::ALL {
            for freight in FreightType::ALL {
                for rating in SupplierRating::ALL {
                    let inputs = ImpactInputs {
                        distance: 1234.5,
                        weight: 17.25,
                        route_type: Some(route),
                        freight_type: Some(freight),
                        supplier_rating: Some(rating),
                    };
                    let first = estimate_impacts(&inputs);
                    let second = estimate_impacts(&inputs);
                    assert!(first.carbon_impact >= 0.0);
                    assert!(first.cost_impact >= 0.0);
                    assert!(first.time_impact >= 0.0);
                    assert_eq!(first.carbon_impact.to_bits(), second.carbon_impact.to_bits());
                    assert_eq!(first.cost_impact.to_bits(), second.cost_impact.to_bits());
                    assert_eq!(first.time_impact.to_bits(), second.time_impact.to_bits());
                }
            }
        }
    }

    #[test]
    fn categories_parse_case_insensitively() {
        assert_eq!(parse_category::<RouteType>("Eco-Friendly"), Some(RouteType::EcoFriendly));
        assert_eq!(parse_category::<FreightType>(" SHIP "), Some(FreightType::Ship));
        assert!("platinum".parse::<SupplierRating>().is_err());
    }

    #[test]
    fn table_values_are_reproduced() {
        assert_eq!(RouteType::Express.multipliers(), Multipliers::new(1.3, 1.5, 0.7));
        assert_eq!(FreightType::Ship.multipliers(), Multipliers::new(0.3, 0.6, 3.0));
        assert_eq!(SupplierRating::Excellent.multipliers(), Multipliers::new(0.8, 1.1, 0.9));
    }

    #[test]
    fn tone_thresholds_differ_for_carbon() {
        assert_eq!(impact_tone(49.9, ImpactDimension::Carbon), ImpactTone::Good);
        assert_eq!(impact_tone(75.0, ImpactDimension::Carbon), ImpactTone::Warning);
        assert_eq!(impact_tone(75.0, ImpactDimension::Cost), ImpactTone::Good);
        assert_eq!(impact_tone(150.0, ImpactDimension::Time), ImpactTone::Warning);
        assert_eq!(impact_tone(200.0, ImpactDimension::Cost), ImpactTone::Bad);
    }
}
