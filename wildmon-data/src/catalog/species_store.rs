use anyhow::Result;

use crate::SpeciesData;

/// Read-only access to the species catalog.
///
/// This trait can be implemented for different data sources, such as an external database or an
/// in-memory map. The engine only ever reads from it; loading and refreshing the catalog is the
/// caller's responsibility.
pub trait SpeciesStore: Send + Sync {
    /// Gets a species by its national dex number.
    fn species(&self, number: u16) -> Result<Option<SpeciesData>>;

    /// Gets a species by name.
    fn species_by_name(&self, name: &str) -> Result<Option<SpeciesData>>;

    /// Gets the dex numbers of all species matching the given filter.
    fn all_species(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<u16>>;
}
