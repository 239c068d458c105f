// Generators and catalogs behind the HTTP handlers
pub mod analytics;
pub mod automation;
pub mod forecasting;
pub mod insights;
pub mod integrations;

pub use analytics::AnalyticsService;
pub use automation::AutomationService;
pub use forecasting::ForecastingService;
pub use insights::InsightsService;
pub use integrations::IntegrationService;
