mod local;
mod species_store;

pub use local::LocalCatalog;
pub use species_store::SpeciesStore;
