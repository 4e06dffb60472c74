//! Sample figures for the dashboard, route optimizer and supplier panels.
//!
//! None of these are computed from live data; the panels display them as-is.

#[derive(Clone, Debug, PartialEq)]
pub struct CarbonSnapshot {
    /// Tons CO₂ this month.
    pub total_emissions: u32,
    pub reduced_emissions: u32,
    /// Percent.
    pub target_reduction: f64,
    pub current_reduction: f64,
    pub monthly_trend: f64,
    pub optimized_routes: u32,
    pub carbon_credits: u32,
}

impl CarbonSnapshot {
    pub fn remaining_reduction(&self) -> f64 {
        (self.target_reduction - self.current_reduction).max(0.0)
    }

    pub fn progress_pct(&self) -> f64 {
        self.current_reduction.clamp(0.0, 100.0)
    }
}

pub fn carbon_snapshot() -> CarbonSnapshot {
    CarbonSnapshot {
        total_emissions: 2456,
        reduced_emissions: 987,
        target_reduction: 40.0,
        current_reduction: 28.5,
        monthly_trend: -12.3,
        optimized_routes: 847,
        carbon_credits: 156,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecentOptimization {
    pub route: &'static str,
    pub savings: &'static str,
    pub efficiency: u8,
}

impl RecentOptimization {
    pub fn is_highly_efficient(&self) -> bool {
        self.efficiency > 90
    }
}

pub fn recent_optimizations() -> Vec<RecentOptimization> {
    vec![
        RecentOptimization {
            route: "LA → NYC",
            savings: "15.2 tons CO₂",
            efficiency: 92,
        },
        RecentOptimization {
            route: "Chicago → Miami",
            savings: "8.7 tons CO₂",
            efficiency: 88,
        },
        RecentOptimization {
            route: "Seattle → Denver",
            savings: "12.1 tons CO₂",
            efficiency: 95,
        },
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteFigures {
    pub distance: &'static str,
    pub emissions: &'static str,
    pub cost: &'static str,
    pub duration: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteComparison {
    pub original: RouteFigures,
    pub optimized: RouteFigures,
    /// Percent saved per dimension.
    pub emissions_saved: f64,
    pub cost_saved: f64,
    pub time_saved: f64,
}

pub fn route_comparison() -> RouteComparison {
    RouteComparison {
        original: RouteFigures {
            distance: "2,847 km",
            emissions: "187.2 tons CO₂",
            cost: "$4,250",
            duration: "3.2 days",
        },
        optimized: RouteFigures {
            distance: "2,691 km",
            emissions: "142.8 tons CO₂",
            cost: "$3,890",
            duration: "2.9 days",
        },
        emissions_saved: 23.7,
        cost_saved: 8.5,
        time_saved: 9.4,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Current,
    Pending,
}

impl StepStatus {
    pub fn label(&self) -> &'static str {
        match self {
            StepStatus::Completed => "completed",
            StepStatus::Current => "current",
            StepStatus::Pending => "pending",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RouteStep {
    pub city: &'static str,
    pub status: StepStatus,
    /// Tons CO₂ emitted on the leg into this stop.
    pub emissions: f64,
}

pub fn route_steps() -> Vec<RouteStep> {
    vec![
        RouteStep {
            city: "Los Angeles",
            status: StepStatus::Completed,
            emissions: 0.0,
        },
        RouteStep {
            city: "Phoenix",
            status: StepStatus::Completed,
            emissions: 12.4,
        },
        RouteStep {
            city: "Dallas",
            status: StepStatus::Current,
            emissions: 8.7,
        },
        RouteStep {
            city: "Memphis",
            status: StepStatus::Pending,
            emissions: 0.0,
        },
        RouteStep {
            city: "New York",
            status: StepStatus::Pending,
            emissions: 0.0,
        },
    ]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupplierStatus {
    Verified,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

pub fn score_tier(score: u8) -> ScoreTier {
    if score >= 90 {
        ScoreTier::High
    } else if score >= 80 {
        ScoreTier::Medium
    } else {
        ScoreTier::Low
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Supplier {
    pub id: u32,
    pub name: &'static str,
    pub carbon_score: u8,
    pub reliability_score: u8,
    pub cost_efficiency: u8,
    pub location: &'static str,
    pub certifications: Vec<&'static str>,
    pub emission_rate: &'static str,
    pub status: SupplierStatus,
}

pub fn suppliers() -> Vec<Supplier> {
    vec![
        Supplier {
            id: 1,
            name: "GreenLogistics Corp",
            carbon_score: 95,
            reliability_score: 92,
            cost_efficiency: 88,
            location: "Portland, OR",
            certifications: vec!["ISO 14001", "SmartWay"],
            emission_rate: "2.1 kg CO₂/km",
            status: SupplierStatus::Verified,
        },
        Supplier {
            id: 2,
            name: "EcoTransport Solutions",
            carbon_score: 89,
            reliability_score: 94,
            cost_efficiency: 85,
            location: "Denver, CO",
            certifications: vec!["EPA SmartWay", "Carbon Neutral"],
            emission_rate: "2.4 kg CO₂/km",
            status: SupplierStatus::Verified,
        },
        Supplier {
            id: 3,
            name: "SustainableFreight Ltd",
            carbon_score: 91,
            reliability_score: 87,
            cost_efficiency: 90,
            location: "Austin, TX",
            certifications: vec!["Green Fleet"],
            emission_rate: "2.2 kg CO₂/km",
            status: SupplierStatus::Pending,
        },
        Supplier {
            id: 4,
            name: "CleanHaul Logistics",
            carbon_score: 76,
            reliability_score: 89,
            cost_efficiency: 92,
            location: "Chicago, IL",
            certifications: vec!["ISO 14001"],
            emission_rate: "3.1 kg CO₂/km",
            status: SupplierStatus::Verified,
        },
    ]
}

#[derive(Clone, Debug, PartialEq)]
pub struct SupplierOverview {
    pub verified: usize,
    pub average_carbon_score: u32,
    pub average_reliability: u32,
    pub total_certifications: usize,
}

pub fn supplier_overview(suppliers: &[Supplier]) -> SupplierOverview {
    let average = |score: fn(&Supplier) -> u8| -> u32 {
        if suppliers.is_empty() {
            return 0;
        }
        let sum: u32 = suppliers.iter().map(|s| score(s) as u32).sum();
        (sum as f64 / suppliers.len() as f64).round() as u32
    };

    SupplierOverview {
        verified: suppliers
            .iter()
            .filter(|s| s.status == SupplierStatus::Verified)
            .count(),
        average_carbon_score: average(|s| s.carbon_score),
        average_reliability: average(|s| s.reliability_score),
        total_certifications: suppliers.iter().map(|s| s.certifications.len()).sum(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remaining_reduction_is_target_minus_current() {
        let snapshot = carbon_snapshot();
        assert!((snapshot.remaining_reduction() - 11.5).abs() < 1e-9);
    }

    #[test]
    fn supplier_overview_matches_sample_list() {
        let overview = supplier_overview(&suppliers());
        assert_eq!(overview.verified, 3);
        // (95 + 89 + 91 + 76) / 4 = 87.75
        assert_eq!(overview.average_carbon_score, 88);
        // (92 + 94 + 87 + 89) / 4 = 90.5
        assert_eq!(overview.average_reliability, 91);
        assert_eq!(overview.total_certifications, 6);
    }

    #[test]
    fn empty_supplier_list_has_zero_averages() {
        let overview = supplier_overview(&[]);
        assert_eq!(overview.verified, 0);
        assert_eq!(overview.average_carbon_score, 0);
    }

    #[test]
    fn score_tiers_split_at_90_and_80() {
        assert_eq!(score_tier(95), ScoreTier::High);
        assert_eq!(score_tier(90), ScoreTier::High);
        assert_eq!(score_tier(89), ScoreTier::Medium);
        assert_eq!(score_tier(80), ScoreTier::Medium);
        assert_eq!(score_tier(79), ScoreTier::Low);
    }

    #[test]
    fn exactly_one_route_step_is_current() {
        let steps = route_steps();
        assert_eq!(
            steps.iter().filter(|s| s.status == StepStatus::Current).count(),
            1
        );
        assert_eq!(steps.first().map(|s| s.city), Some("Los Angeles"));
    }
}
