pub mod dispatch;
pub mod health;
pub mod import;
pub mod rules;
pub mod shared;
pub mod snapshot;
pub mod species;
pub mod zones;
