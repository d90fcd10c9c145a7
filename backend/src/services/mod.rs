//! Business logic services
//!
//! Services encapsulate business logic and coordinate between repositories
//! and the shared domain types.

pub mod export;
pub mod history;
pub mod settings;
pub mod stats;
pub mod user;
pub mod workout;

pub use export::ExportService;
pub use history::HistoryService;
pub use settings::SettingsService;
pub use stats::StatsService;
pub use user::UserService;
pub use workout::WorkoutService;
