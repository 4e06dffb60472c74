//! Carbon offset listings: filtering and presentation helpers.

use super::entities::CarbonOffset;

pub const OFFSET_TYPES: [&str; 5] = [
    "Forestry",
    "Renewable Energy",
    "Waste Management",
    "Blue Carbon",
    "Direct Air Capture",
];

pub const CERTIFICATIONS: [&str; 4] = ["Gold Standard", "Verra VCS", "CDM", "Plan Vivo"];

/// `(value, label)` pairs offered by the price filter.
pub const PRICE_RANGES: [(&str, &str); 4] = [
    ("0-20", "$0 - $20"),
    ("20-50", "$20 - $50"),
    ("50-100", "$50 - $100"),
    ("100", "$100+"),
];

/// Empty strings mean "no restriction".
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OffsetFilter {
    pub offset_type: String,
    pub certification: String,
    pub price_range: String,
}

impl OffsetFilter {
    pub fn is_empty(&self) -> bool {
        self.offset_type.is_empty() && self.certification.is_empty() && self.price_range.is_empty()
    }

    pub fn matches(&self, offset: &CarbonOffset) -> bool {
        if !self.offset_type.is_empty() && offset.offset_type != self.offset_type {
            return false;
        }
        if !self.certification.is_empty()
            && offset.certification.as_deref() != Some(self.certification.as_str())
        {
            return false;
        }
        if let Some(range) = PriceRange::parse(&self.price_range) {
            if !range.contains(offset.price_per_ton) {
                return false;
            }
        }
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PriceRange {
    pub min: f64,
    pub max: Option<f64>,
}

impl PriceRange {
    /// Parses `"min-max"` or an open-ended `"min"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.split_once('-') {
            Some((min, max)) => Some(Self {
                min: min.trim().parse().ok()?,
                max: Some(max.trim().parse().ok()?),
            }),
            None => Some(Self {
                min: raw.parse().ok()?,
                max: None,
            }),
        }
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && self.max.map(|max| price <= max).unwrap_or(true)
    }
}

pub fn apply_filters(offsets: &[CarbonOffset], filter: &OffsetFilter) -> Vec<CarbonOffset> {
    offsets
        .iter()
        .filter(|offset| filter.matches(offset))
        .cloned()
        .collect()
}

pub fn total_available_tons(offsets: &[CarbonOffset]) -> f64 {
    offsets.iter().map(|offset| offset.available_tons).sum()
}

pub fn offset_type_icon(offset_type: &str) -> &'static str {
    match offset_type {
        "Forestry" => "🌲",
        "Renewable Energy" => "⚡",
        "Waste Management" => "♻️",
        "Blue Carbon" => "🌊",
        "Direct Air Capture" => "🏭",
        _ => "🌱",
    }
}

/// Listings shown before (or instead of) the remote collection.
pub fn sample_offsets() -> Vec<CarbonOffset> {
    let sample = |id: &str,
                  provider: &str,
                  kind: &str,
                  price: f64,
                  tons: f64,
                  certification: &str,
                  description: &str| CarbonOffset {
        id: id.to_string(),
        provider_name: provider.to_string(),
        offset_type: kind.to_string(),
        price_per_ton: price,
        available_tons: tons,
        certification: Some(certification.to_string()),
        project_description: Some(description.to_string()),
        is_available: true,
    };

    vec![
        sample(
            "sample-1",
            "Gold Standard Forestry",
            "Forestry",
            15.50,
            1000.0,
            "Gold Standard",
            "Reforestation project in Costa Rica protecting biodiversity and sequestering carbon through native tree planting.",
        ),
        sample(
            "sample-2",
            "Verra Renewable Energy",
            "Renewable Energy",
            12.25,
            2500.0,
            "Verra VCS",
            "Wind farm development in India providing clean energy and reducing fossil fuel dependency.",
        ),
        sample(
            "sample-3",
            "Clean Development Mechanism",
            "Waste Management",
            18.75,
            750.0,
            "CDM",
            "Methane capture from landfills in Brazil, converting waste gas to clean energy.",
        ),
        sample(
            "sample-4",
            "Blue Carbon Initiative",
            "Blue Carbon",
            22.00,
            500.0,
            "Plan Vivo",
            "Mangrove restoration in Indonesia protecting coastal ecosystems and marine biodiversity.",
        ),
        sample(
            "sample-5",
            "Direct Air Capture Co.",
            "Direct Air Capture",
            150.00,
            100.0,
            "Gold Standard",
            "Advanced direct air capture technology permanently removing CO₂ from the atmosphere.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_keeps_everything() {
        let offsets = sample_offsets();
        let filtered = apply_filters(&offsets, &OffsetFilter::default());
        assert_eq!(filtered.len(), 5);
        assert_eq!(total_available_tons(&filtered), 4850.0);
    }

    #[test]
    fn closed_price_range_is_inclusive() {
        let filter = OffsetFilter {
            price_range: "0-20".into(),
            ..OffsetFilter::default()
        };
        let names: Vec<_> = apply_filters(&sample_offsets(), &filter)
            .into_iter()
            .map(|offset| offset.id)
            .collect();
        assert_eq!(names, vec!["sample-1", "sample-2", "sample-3"]);

        let range = PriceRange::parse("20-50").expect("range");
        assert!(range.contains(20.0));
        assert!(range.contains(50.0));
        assert!(!range.contains(50.01));
    }

    #[test]
    fn open_ended_range_has_no_upper_bound() {
        let filter = OffsetFilter {
            price_range: "100".into(),
            ..OffsetFilter::default()
        };
        let filtered = apply_filters(&sample_offsets(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].provider_name, "Direct Air Capture Co.");
    }

    #[test]
    fn type_and_certification_combine() {
        let filter = OffsetFilter {
            offset_type: "Direct Air Capture".into(),
            certification: "Gold Standard".into(),
            price_range: String::new(),
        };
        assert_eq!(apply_filters(&sample_offsets(), &filter).len(), 1);

        let filter = OffsetFilter {
            offset_type: "Forestry".into(),
            certification: "CDM".into(),
            price_range: String::new(),
        };
        let filtered = apply_filters(&sample_offsets(), &filter);
        assert!(filtered.is_empty());
        assert_eq!(total_available_tons(&filtered), 0.0);
    }

    #[test]
    fn malformed_price_range_is_ignored() {
        assert_eq!(PriceRange::parse("cheap"), None);
        let filter = OffsetFilter {
            price_range: "cheap".into(),
            ..OffsetFilter::default()
        };
        assert_eq!(apply_filters(&sample_offsets(), &filter).len(), 5);
    }
}
