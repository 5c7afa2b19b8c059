use ahash::{
    HashMap,
    HashMapExt,
};
use anyhow::{
    Error,
    Result,
};

use crate::{
    SpeciesData,
    catalog::SpeciesStore,
};

/// An in-memory [`SpeciesStore`], backed by a map keyed on dex number.
///
/// Intended for tests and for deployments that load the whole catalog up front.
pub struct LocalCatalog {
    by_number: HashMap<u16, SpeciesData>,
    by_name: HashMap<String, u16>,
}

impl LocalCatalog {
    /// Creates a new catalog from the given species entries.
    ///
    /// Fails if two entries share a dex number or name.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = SpeciesData>,
    {
        let mut by_number = HashMap::new();
        let mut by_name = HashMap::new();
        for species in entries {
            if by_name
                .insert(species.name.to_lowercase(), species.number)
                .is_some()
            {
                return Err(Error::msg(format!("duplicate species name {}", species.name)));
            }
            let number = species.number;
            if by_number.insert(number, species).is_some() {
                return Err(Error::msg(format!("duplicate species number {number}")));
            }
        }
        Ok(Self { by_number, by_name })
    }

    /// Creates a new catalog from a JSON array of species entries.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries = serde_json::from_str::<Vec<SpeciesData>>(json)?;
        Self::new(entries)
    }

    /// The number of species in the catalog.
    pub fn len(&self) -> usize {
        self.by_number.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.by_number.is_empty()
    }
}

impl SpeciesStore for LocalCatalog {
    fn species(&self, number: u16) -> Result<Option<SpeciesData>> {
        Ok(self.by_number.get(&number).cloned())
    }

    fn species_by_name(&self, name: &str) -> Result<Option<SpeciesData>> {
        match self.by_name.get(&name.to_lowercase()) {
            Some(number) => self.species(*number),
            None => Ok(None),
        }
    }

    fn all_species(&self, filter: &dyn Fn(&SpeciesData) -> bool) -> Result<Vec<u16>> {
        let mut numbers = self
            .by_number
            .values()
            .filter(|species| filter(species))
            .map(|species| species.number)
            .collect::<Vec<_>>();
        numbers.sort_unstable();
        Ok(numbers)
    }
}

#[cfg(test)]
mod local_catalog_test {
    use crate::{
        LocalCatalog,
        Rarity,
        SpeciesData,
        SpeciesStore,
        StatTable,
        Type,
    };

    fn species(number: u16, name: &str, catch_rate: u8) -> SpeciesData {
        SpeciesData {
            number,
            name: name.to_owned(),
            primary_type: Type::Normal,
            secondary_type: None,
            base_stats: StatTable::uniform(50),
            abilities: Vec::new(),
            catch_rate,
            legendary: false,
            mythical: false,
        }
    }

    #[test]
    fn looks_up_by_number_and_name() {
        let catalog = LocalCatalog::new([
            species(16, "Pidgey", 255),
            species(149, "Dragonite", 45),
        ])
        .unwrap();
        assert_matches::assert_matches!(catalog.species(16), Ok(Some(found)) => {
            assert_eq!(found.name, "Pidgey");
        });
        assert_matches::assert_matches!(catalog.species_by_name("dragonite"), Ok(Some(found)) => {
            assert_eq!(found.number, 149);
        });
        assert_matches::assert_matches!(catalog.species(1), Ok(None));
    }

    #[test]
    fn filters_species() {
        let catalog = LocalCatalog::new([
            species(16, "Pidgey", 255),
            species(19, "Rattata", 255),
            species(149, "Dragonite", 45),
        ])
        .unwrap();
        assert_eq!(
            catalog
                .all_species(&|species| species.rarity() == Rarity::Common)
                .unwrap(),
            Vec::from_iter([16, 19]),
        );
    }

    #[test]
    fn rejects_duplicate_numbers() {
        assert!(LocalCatalog::new([species(16, "Pidgey", 255), species(16, "Other", 3)]).is_err());
    }
}
