//! Emission estimation, reporting and marketplace logic lives here.

pub mod app_state;
pub mod calculator;
pub mod dashboard;
pub mod entities;
pub mod estimator;
pub mod integrations;
pub mod marketplace;
pub mod password;
pub mod reports;
pub mod scenarios;

#[allow(unused_imports)]
pub use app_state::{AppState, CacheResource, CacheTimestamps, PersistedState};
#[allow(unused_imports)]
pub use calculator::{
    calculate_emissions, EmissionResult, FuelType, ShipmentInputs, TransportMode,
    OPTIMIZATION_FACTOR, RECOMMENDATIONS,
};
#[allow(unused_imports)]
pub use entities::{
    format_date, format_timestamp, ApiIntegration, AuditReport, AuthUser, CarbonOffset, RecordId,
    Scenario, Session, UserProfile,
};
#[allow(unused_imports)]
pub use estimator::{
    estimate_impacts, impact_tone, FreightType, ImpactDimension, ImpactEstimate, ImpactInputs,
    ImpactTone, RouteType, SupplierRating,
};
#[allow(unused_imports)]
pub use integrations::{IntegrationForm, IntegrationFormError, IntegrationType, NewIntegration};
#[allow(unused_imports)]
pub use marketplace::{apply_filters, total_available_tons, OffsetFilter};
#[allow(unused_imports)]
pub use password::{password_strength, PasswordStrength, StrengthLevel};
#[allow(unused_imports)]
pub use reports::{
    generate_figures, report_csv, report_file_name, NewAuditReport, ReportForm, ReportFormError,
    ReportType,
};
#[allow(unused_imports)]
pub use scenarios::{NewScenario, ScenarioForm, ScenarioFormError};
