//! Vehicle identification seam
//!
//! Decoding a VIN into make/model/year is delegated to an external provider.
//! The engine never depends on it succeeding: when the VIN is malformed, the
//! provider is unavailable or the vehicle is unknown, the manual selection is
//! used instead.

use super::catalog::title_case;
use log::{debug, warn};
use std::collections::HashMap;
use std::fmt;

/// Vehicle identification number: 17 ASCII alphanumerics, upper-cased
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vin(String);

impl Vin {
    pub const LEN: usize = 17;

    /// Parse and normalise a VIN, `None` when it can't be one
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.len() != Self::LEN || !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
            return None;
        }
        Some(Self(trimmed.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Make, model and year identifying a vehicle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleIdentity {
    pub make: String,
    pub model: String,
    pub year: i32,
}

impl VehicleIdentity {
    /// Identity with make and model title-cased
    pub fn new(make: &str, model: &str, year: i32) -> Self {
        Self {
            make: title_case(make),
            model: title_case(model),
            year,
        }
    }
}

/// External VIN decoder
pub trait VehicleResolver {
    /// Decode a VIN, `None` when not found or the provider failed
    fn resolve(&self, vin: &Vin) -> Option<VehicleIdentity>;
}

/// In-memory resolver keyed by VIN
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    vehicles: HashMap<Vin, VehicleIdentity>,
}

impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vin: Vin, identity: VehicleIdentity) {
        self.vehicles.insert(vin, identity);
    }
}

impl VehicleResolver for StaticResolver {
    fn resolve(&self, vin: &Vin) -> Option<VehicleIdentity> {
        self.vehicles.get(vin).cloned()
    }
}

/// Resolve a VIN when possible, otherwise fall back to the manual selection
///
/// Returns `None` only when neither source produced an identity.
pub fn resolve_or_manual<R: VehicleResolver + ?Sized>(
    resolver: &R,
    vin: Option<&str>,
    manual: Option<VehicleIdentity>,
) -> Option<VehicleIdentity> {
    if let Some(raw) = vin.filter(|v| !v.trim().is_empty()) {
        match Vin::parse(raw) {
            Some(vin) => match resolver.resolve(&vin) {
                Some(identity) => {
                    debug!("Resolved VIN {} to {} {} {}", vin, identity.year, identity.make, identity.model);
                    return Some(identity);
                }
                None => warn!("VIN {} could not be resolved, using manual selection", vin),
            },
            None => warn!("Invalid VIN {:?}, using manual selection", raw),
        }
    }
    manual
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIN: &str = "5tfsz5an3nx123456";

    fn resolver() -> StaticResolver {
        let mut resolver = StaticResolver::new();
        resolver.insert(
            Vin::parse(VIN).unwrap(),
            VehicleIdentity::new("TOYOTA", "TACOMA", 2022),
        );
        resolver
    }

    #[test]
    fn test_vin_parse() {
        let vin = Vin::parse(VIN).unwrap();
        assert_eq!(vin.as_str(), "5TFSZ5AN3NX123456");

        assert!(Vin::parse("SHORT").is_none());
        assert!(Vin::parse("5TFSZ5AN3NX12345-").is_none());
        assert!(Vin::parse(" 5TFSZ5AN3NX123456 ").is_some());
    }

    #[test]
    fn test_resolver_hit() {
        let identity = resolve_or_manual(&resolver(), Some(VIN), None).unwrap();
        assert_eq!(identity, VehicleIdentity::new("Toyota", "Tacoma", 2022));
        assert_eq!(identity.make, "Toyota");
    }

    #[test]
    fn test_fallback_to_manual() {
        let manual = VehicleIdentity::new("Honda", "Civic", 2021);

        // Unknown VIN
        let identity = resolve_or_manual(&resolver(), Some("1HGCM82633A004352"), Some(manual.clone()));
        assert_eq!(identity, Some(manual.clone()));

        // Malformed VIN
        let identity = resolve_or_manual(&resolver(), Some("bad"), Some(manual.clone()));
        assert_eq!(identity, Some(manual.clone()));

        // No VIN at all
        let identity = resolve_or_manual(&resolver(), None, Some(manual.clone()));
        assert_eq!(identity, Some(manual));

        assert_eq!(resolve_or_manual(&resolver(), Some("bad"), None), None);
    }
}
