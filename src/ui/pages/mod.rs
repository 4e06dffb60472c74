pub mod account;
pub mod calculator;
pub mod dashboard;
pub mod hero;
pub mod integrations;
pub mod marketplace;
pub mod reports;
pub mod routes;
pub mod scenarios;
pub mod suppliers;

pub use account::AccountPage;
pub use calculator::CalculatorPage;
pub use dashboard::DashboardPage;
pub use hero::HeroPage;
pub use integrations::IntegrationsPage;
pub use marketplace::MarketplacePage;
pub use reports::ReportsPage;
pub use routes::RoutesPage;
pub use scenarios::ScenariosPage;
pub use suppliers::SuppliersPage;
