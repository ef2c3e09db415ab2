pub mod compare;
pub mod settings;

pub use compare::ComparePage;
pub use settings::SettingsPage;
