mod species;

pub use species::SpeciesCommands;
