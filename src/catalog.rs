// src/catalog.rs  —  The game catalog
//
// Ids are opaque to this side; the player page resolves them to ROM
// files.  The built-in list matches the shipped roms/ set and can be
// replaced wholesale from the config file.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEntry {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    games: Vec<GameEntry>,
}

impl Catalog {
    pub fn new(games: Vec<GameEntry>) -> Self {
        Self { games }
    }

    pub fn builtin() -> Self {
        let entry = |id: &str, title: &str| GameEntry {
            id: id.to_string(),
            title: title.to_string(),
        };
        Self {
            games: vec![
                entry("sonic", "Sonic the Hedgehog"),
                entry("sonic2", "Sonic 2"),
                entry("streets_of_rage2", "Streets of Rage 2"),
                entry("golden_axe", "Golden Axe"),
                entry("comix_zone", "Comix Zone"),
                entry("vectorman", "Vectorman"),
                entry("road_rash2", "Road Rash 2"),
                entry("mortal_kombat2", "Mortal Kombat 2"),
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&GameEntry> {
        self.games.iter().find(|g| g.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEntry> {
        self.games.iter()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}
