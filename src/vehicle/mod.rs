//! Vehicle and financing inputs, plus the identification and catalog seams

pub mod catalog;
mod data;
pub mod resolver;

pub use catalog::{Catalog, StaticCatalog, YearRange};
pub use data::{Condition, FinancingInputs, LeaseTerms, VehicleProfile};
pub use resolver::{resolve_or_manual, StaticResolver, VehicleIdentity, VehicleResolver, Vin};

impl VehicleProfile {
    /// Profile from a resolved identity plus condition and usage
    pub fn from_identity(identity: VehicleIdentity, condition: Condition, annual_distance: f64) -> Self {
        Self::new(identity.make, identity.model, identity.year, condition, annual_distance)
    }
}
