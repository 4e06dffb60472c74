//! Audit report figures and CSV rendering.

use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};
use time::Date;
use uuid::Uuid;

use super::entities::{format_date, format_timestamp, AuditReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReportType {
    Annual,
    Quarterly,
    Monthly,
    Scope3,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        ReportType::Annual,
        ReportType::Quarterly,
        ReportType::Monthly,
        ReportType::Scope3,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Annual => "annual",
            ReportType::Quarterly => "quarterly",
            ReportType::Monthly => "monthly",
            ReportType::Scope3 => "scope3",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReportType::Annual => "Annual Report",
            ReportType::Quarterly => "Quarterly Report",
            ReportType::Monthly => "Monthly Report",
            ReportType::Scope3 => "Scope 3 Emissions",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(raw.trim()))
    }
}

/// Generated figures for a new report.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportFigures {
    pub total_shipments: u32,
    /// Tons CO₂.
    pub total_emissions: f64,
    pub report_data: Value,
}

const TRANSPORT_SPLIT: [(&str, f64, f64); 4] = [
    ("truck", 0.6, 0.65),
    ("rail", 0.2, 0.15),
    ("ship", 0.15, 0.12),
    ("air", 0.05, 0.08),
];

const DISTANCE_SPLIT: [(&str, f64, f64); 4] = [
    ("0-100km", 0.3, 0.15),
    ("100-500km", 0.4, 0.35),
    ("500-1000km", 0.2, 0.3),
    ("1000km+", 0.1, 0.2),
];

pub const REPORT_RECOMMENDATIONS: [&str; 4] = [
    "Consider rail transport for long-distance shipments to reduce emissions",
    "Optimize route planning to reduce total distance traveled",
    "Evaluate supplier locations for shorter transport distances",
    "Investigate electric vehicle options for short-distance deliveries",
];

/// Sample figures for demonstration reports: 100..1100 shipments at
/// 0.5..2.5 tons each.
pub fn generate_figures<R: Rng + ?Sized>(rng: &mut R) -> ReportFigures {
    let shipments = rng.gen_range(100..1100u32);
    let per_shipment = rng.gen_range(0.5..2.5);
    build_figures(shipments, shipments as f64 * per_shipment)
}

pub fn build_figures(total_shipments: u32, total_emissions: f64) -> ReportFigures {
    let shipments = total_shipments as f64;
    let intensity = if total_shipments == 0 {
        0.0
    } else {
        total_emissions / shipments
    };

    let breakdown = |split: &[(&str, f64, f64)]| -> Value {
        split
            .iter()
            .map(|(key, shipment_share, emission_share)| {
                (
                    key.to_string(),
                    json!({
                        "shipments": (shipments * shipment_share).floor() as u32,
                        "emissions": total_emissions * emission_share,
                    }),
                )
            })
            .collect::<serde_json::Map<_, _>>()
            .into()
    };

    let report_data = json!({
        "summary": {
            "total_shipments": total_shipments,
            "total_emissions": total_emissions,
            "average_emissions_per_shipment": intensity,
            "carbon_intensity": intensity,
        },
        "breakdown": {
            "by_transport_mode": breakdown(&TRANSPORT_SPLIT),
            "by_distance": breakdown(&DISTANCE_SPLIT),
        },
        "recommendations": REPORT_RECOMMENDATIONS,
    });

    ReportFigures {
        total_shipments,
        total_emissions,
        report_data,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReportForm {
    pub report_name: String,
    pub report_type: String,
    pub period_start: String,
    pub period_end: String,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReportFormError {
    #[error("Report name is required")]
    MissingName,
    #[error("Select a report type")]
    MissingType,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Period end is before period start")]
    InvertedPeriod,
}

pub fn parse_iso_date(raw: &str) -> Result<Date, ReportFormError> {
    Date::parse(
        raw.trim(),
        time::macros::format_description!("[year]-[month]-[day]"),
    )
    .map_err(|_| ReportFormError::InvalidDate(raw.to_string()))
}

/// Row inserted into the `audit_reports` collection.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewAuditReport {
    pub user_id: Uuid,
    pub report_name: String,
    pub report_type: String,
    pub period_start: String,
    pub period_end: String,
    pub total_emissions: f64,
    pub total_shipments: u32,
    pub report_data: Value,
}

impl NewAuditReport {
    pub fn from_form(
        user_id: Uuid,
        form: &ReportForm,
        figures: ReportFigures,
    ) -> Result<Self, ReportFormError> {
        if form.report_name.trim().is_empty() {
            return Err(ReportFormError::MissingName);
        }
        let report_type = ReportType::parse(&form.report_type).ok_or(ReportFormError::MissingType)?;
        let start = parse_iso_date(&form.period_start)?;
        let end = parse_iso_date(&form.period_end)?;
        if end < start {
            return Err(ReportFormError::InvertedPeriod);
        }

        Ok(Self {
            user_id,
            report_name: form.report_name.trim().to_string(),
            report_type: report_type.as_str().to_string(),
            period_start: format_date(start),
            period_end: format_date(end),
            total_emissions: figures.total_emissions,
            total_shipments: figures.total_shipments,
            report_data: figures.report_data,
        })
    }
}

pub fn report_csv(report: &AuditReport) -> String {
    let period = format!(
        "{} to {}",
        report.period_start.map(format_date).unwrap_or_default(),
        report.period_end.map(format_date).unwrap_or_default()
    );
    let rows: Vec<Vec<String>> = vec![
        vec!["Report Name".into(), report.report_name.clone()],
        vec!["Report Type".into(), report.report_type.clone()],
        vec!["Period".into(), period],
        vec!["Total Shipments".into(), report.total_shipments.to_string()],
        vec![
            "Total Emissions (tons CO₂)".into(),
            format!("{:.2}", report.total_emissions),
        ],
        vec![
            "Average Emissions per Shipment (kg CO₂)".into(),
            format!("{:.2}", report.average_emissions_kg()),
        ],
        vec![String::new()],
        vec!["Generated on".into(), format_timestamp(report.generated_at)],
    ];

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| csv_cell(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn csv_cell(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn report_file_name(report_name: &str) -> String {
    let stem = report_name.split_whitespace().collect::<Vec<_>>().join("_");
    format!("{stem}_audit_report.csv")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use time::macros::{date, datetime};

    fn report() -> AuditReport {
        AuditReport {
            id: "r-9".into(),
            report_name: "Q1 2024 Emissions Report".into(),
            report_type: "quarterly".into(),
            period_start: Some(date!(2024 - 01 - 01)),
            period_end: Some(date!(2024 - 03 - 31)),
            total_emissions: 512.5,
            total_shipments: 400,
            report_data: None,
            generated_at: datetime!(2024-04-01 08:00:00 UTC),
        }
    }

    #[test]
    fn csv_lists_rows_in_order() {
        let csv = report_csv(&report());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "Report Name,Q1 2024 Emissions Report");
        assert_eq!(lines[2], "Period,2024-01-01 to 2024-03-31");
        assert_eq!(lines[3], "Total Shipments,400");
        assert_eq!(lines[4], "Total Emissions (tons CO₂),512.50");
        assert_eq!(lines[5], "Average Emissions per Shipment (kg CO₂),1281.25");
        assert_eq!(lines[6], "");
        assert_eq!(lines[7], "Generated on,2024-04-01 08:00:00 UTC");
    }

    #[test]
    fn csv_quotes_cells_with_commas() {
        let mut report = report();
        report.report_name = "North, South".into();
        assert!(report_csv(&report).starts_with("Report Name,\"North, South\""));
    }

    #[test]
    fn file_name_collapses_whitespace() {
        assert_eq!(
            report_file_name("Q1  2024\tReport"),
            "Q1_2024_Report_audit_report.csv"
        );
    }

    #[test]
    fn generated_figures_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let figures = generate_figures(&mut rng);
            assert!((100..1100).contains(&figures.total_shipments));
            let per_shipment = figures.total_emissions / figures.total_shipments as f64;
            assert!((0.5..2.5).contains(&per_shipment));
        }
    }

    #[test]
    fn breakdown_uses_fixed_shares() {
        let figures = build_figures(1000, 2000.0);
        let modes = &figures.report_data["breakdown"]["by_transport_mode"];
        assert_eq!(modes["truck"]["shipments"], 600);
        assert_eq!(modes["air"]["shipments"], 50);
        assert_eq!(modes["truck"]["emissions"], 1300.0);
        let bands = &figures.report_data["breakdown"]["by_distance"];
        assert_eq!(bands["100-500km"]["shipments"], 400);
        assert_eq!(figures.report_data["summary"]["carbon_intensity"], 2.0);
        assert_eq!(figures.report_data["recommendations"].as_array().map(Vec::len), Some(4));
    }

    #[test]
    fn form_requires_ordered_period() {
        let form = ReportForm {
            report_name: "Annual".into(),
            report_type: "annual".into(),
            period_start: "2024-12-31".into(),
            period_end: "2024-01-01".into(),
        };
        let figures = build_figures(100, 50.0);
        assert_eq!(
            NewAuditReport::from_form(Uuid::nil(), &form, figures.clone()),
            Err(ReportFormError::InvertedPeriod)
        );

        let form = ReportForm {
            period_start: "2024-01-01".into(),
            period_end: "2024-12-31".into(),
            ..form
        };
        let payload = NewAuditReport::from_form(Uuid::nil(), &form, figures).expect("valid");
        assert_eq!(payload.report_type, "annual");
        assert_eq!(payload.period_end, "2024-12-31");
    }

    #[test]
    fn unknown_report_type_is_rejected() {
        let form = ReportForm {
            report_name: "x".into(),
            report_type: "weekly".into(),
            period_start: "2024-01-01".into(),
            period_end: "2024-01-02".into(),
        };
        assert_eq!(
            NewAuditReport::from_form(Uuid::nil(), &form, build_figures(1, 1.0)),
            Err(ReportFormError::MissingType)
        );
    }
}
