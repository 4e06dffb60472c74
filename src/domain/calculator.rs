//! Point-to-point shipment emissions for the standalone calculator view.

use serde::{Deserialize, Serialize};

use super::estimator::{coerce_number, parse_category};

/// Flat reduction applied to produce the "optimized" figure. This is a
/// display placeholder, not the output of any search.
pub const OPTIMIZATION_FACTOR: f64 = 0.65;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Truck,
    Plane,
    Ship,
    Rail,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Diesel,
    Electric,
    Hybrid,
    Hydrogen,
}

/// kg CO₂ per ton-km.
const TRANSPORT_FACTORS: [(TransportMode, f64); 4] = [
    (TransportMode::Truck, 0.234),
    (TransportMode::Plane, 0.602),
    (TransportMode::Ship, 0.015),
    (TransportMode::Rail, 0.041),
];

const FUEL_FACTORS: [(FuelType, f64); 4] = [
    (FuelType::Diesel, 1.0),
    (FuelType::Electric, 0.3),
    (FuelType::Hybrid, 0.7),
    (FuelType::Hydrogen, 0.2),
];

fn factor<K: PartialEq + Copy>(table: &[(K, f64)], key: K) -> f64 {
    table
        .iter()
        .find(|(candidate, _)| *candidate == key)
        .map(|(_, value)| *value)
        .unwrap_or(1.0)
}

impl TransportMode {
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Truck,
        TransportMode::Plane,
        TransportMode::Ship,
        TransportMode::Rail,
    ];

    pub fn factor(self) -> f64 {
        factor(&TRANSPORT_FACTORS, self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMode::Truck => "truck",
            TransportMode::Plane => "plane",
            TransportMode::Ship => "ship",
            TransportMode::Rail => "rail",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TransportMode::Truck => "Truck",
            TransportMode::Plane => "Air Freight",
            TransportMode::Ship => "Sea Freight",
            TransportMode::Rail => "Rail",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TransportMode::Plane => "✈️",
            TransportMode::Ship => "🚢",
            TransportMode::Truck | TransportMode::Rail => "🚛",
        }
    }
}

impl FuelType {
    pub const ALL: [FuelType; 4] = [
        FuelType::Diesel,
        FuelType::Electric,
        FuelType::Hybrid,
        FuelType::Hydrogen,
    ];

    pub fn factor(self) -> f64 {
        factor(&FUEL_FACTORS, self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FuelType::Diesel => "diesel",
            FuelType::Electric => "electric",
            FuelType::Hybrid => "hybrid",
            FuelType::Hydrogen => "hydrogen",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Diesel => "Diesel",
            FuelType::Electric => "Electric",
            FuelType::Hybrid => "Hybrid",
            FuelType::Hydrogen => "Hydrogen",
        }
    }
}

impl std::str::FromStr for TransportMode {
    type Err = super::estimator::UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| super::estimator::UnknownCategory(raw.to_string()))
    }
}

impl std::str::FromStr for FuelType {
    type Err = super::estimator::UnknownCategory;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|fuel| fuel.as_str().eq_ignore_ascii_case(raw.trim()))
            .ok_or_else(|| super::estimator::UnknownCategory(raw.to_string()))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ShipmentInputs {
    pub distance: f64,
    pub weight: f64,
    pub transport_mode: Option<TransportMode>,
    pub fuel_type: Option<FuelType>,
}

impl ShipmentInputs {
    pub fn from_raw(distance: &str, weight: &str, transport_mode: &str, fuel_type: &str) -> Self {
        Self {
            distance: coerce_number(distance),
            weight: coerce_number(weight),
            transport_mode: parse_category(transport_mode),
            fuel_type: parse_category(fuel_type),
        }
    }

    /// True when every field needed for a result is present and non-zero.
    pub fn is_complete(&self) -> bool {
        self.distance > 0.0
            && self.weight > 0.0
            && self.transport_mode.is_some()
            && self.fuel_type.is_some()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmissionResult {
    /// kg CO₂ for the shipment as entered.
    pub emissions: f64,
    pub optimized_emissions: f64,
    /// Percentage reduction of `optimized_emissions` relative to `emissions`.
    pub savings: f64,
}

/// `distance × weight × mode × fuel`, with no categorical fallback.
pub fn base_emissions(distance: f64, weight: f64, mode: TransportMode, fuel: FuelType) -> f64 {
    distance * weight * mode.factor() * fuel.factor()
}

/// Returns `None` until the inputs are complete, mirroring the disabled
/// calculate action in the view.
pub fn calculate_emissions(inputs: &ShipmentInputs) -> Option<EmissionResult> {
    if !inputs.is_complete() {
        return None;
    }
    let mode = inputs.transport_mode?;
    let fuel = inputs.fuel_type?;

    let emissions = base_emissions(inputs.distance, inputs.weight, mode, fuel);
    let optimized_emissions = emissions * OPTIMIZATION_FACTOR;
    let savings = (emissions - optimized_emissions) / emissions * 100.0;

    Some(EmissionResult {
        emissions,
        optimized_emissions,
        savings,
    })
}

pub const RECOMMENDATIONS: [&str; 4] = [
    "🚛 Use electric or hybrid vehicles when available",
    "📍 Optimize route planning to reduce distance",
    "📦 Consolidate shipments to maximize load efficiency",
    "🌱 Consider alternative transport modes",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truck_diesel_reference_shipment() {
        let inputs = ShipmentInputs {
            distance: 2500.0,
            weight: 25.0,
            transport_mode: Some(TransportMode::Truck),
            fuel_type: Some(FuelType::Diesel),
        };
        let result = calculate_emissions(&inputs).expect("complete inputs");
        assert!((result.emissions - 14625.0).abs() < 1e-6);
        assert!((result.optimized_emissions - 9506.25).abs() < 1e-6);
        assert!((result.savings - 35.0).abs() < 1e-9);
    }

    #[test]
    fn savings_is_constant_across_modes_and_fuels() {
        for mode in TransportMode::ALL {
            for fuel in FuelType::ALL {
                let inputs = ShipmentInputs {
                    distance: 812.0,
                    weight: 3.3,
                    transport_mode: Some(mode),
                    fuel_type: Some(fuel),
                };
                let result = calculate_emissions(&inputs).expect("complete inputs");
                assert!((result.savings - 35.0).abs() < 1e-9, "{mode:?}/{fuel:?}");
            }
        }
    }

    #[test]
    fn incomplete_inputs_produce_no_result() {
        let raw = ShipmentInputs::from_raw("2500", "", "truck", "diesel");
        assert!(calculate_emissions(&raw).is_none());

        let raw = ShipmentInputs::from_raw("2500", "25", "hovercraft", "diesel");
        assert!(calculate_emissions(&raw).is_none());

        let raw = ShipmentInputs::from_raw("2500", "25", "rail", "");
        assert!(calculate_emissions(&raw).is_none());
    }

    #[test]
    fn plane_hydrogen_uses_both_factors() {
        let emissions = base_emissions(100.0, 2.0, TransportMode::Plane, FuelType::Hydrogen);
        assert!((emissions - 100.0 * 2.0 * 0.602 * 0.2).abs() < 1e-12);
    }
}
