use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};

use crate::{ColorToken, GenderToken, ResourceUrl};

/// A SWAPI character.
///
/// Only `RecordCodec::decode` builds one; fields are read through accessors and never
/// change afterwards. `PartialEq` compares every field, timestamps by instant.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterRecord {
    pub(crate) name: String,
    pub(crate) height: String,
    pub(crate) mass: String,
    pub(crate) hair_color: ColorToken,
    pub(crate) skin_color: ColorToken,
    pub(crate) eye_color: ColorToken,
    pub(crate) birth_year: String,
    pub(crate) gender: GenderToken,
    pub(crate) homeworld: ResourceUrl,
    pub(crate) films: Vec<ResourceUrl>,
    pub(crate) species: Vec<ResourceUrl>,
    pub(crate) vehicles: Vec<ResourceUrl>,
    pub(crate) starships: Vec<ResourceUrl>,
    pub(crate) created: DateTime<FixedOffset>,
    pub(crate) edited: DateTime<FixedOffset>,
    pub(crate) url: ResourceUrl,
}

impl CharacterRecord {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> &str {
        &self.height
    }

    pub fn mass(&self) -> &str {
        &self.mass
    }

    pub fn hair_color(&self) -> &ColorToken {
        &self.hair_color
    }

    pub fn skin_color(&self) -> &ColorToken {
        &self.skin_color
    }

    pub fn eye_color(&self) -> &ColorToken {
        &self.eye_color
    }

    pub fn birth_year(&self) -> &str {
        &self.birth_year
    }

    pub fn gender(&self) -> &GenderToken {
        &self.gender
    }

    pub fn homeworld(&self) -> &ResourceUrl {
        &self.homeworld
    }

    pub fn films(&self) -> &[ResourceUrl] {
        &self.films
    }

    pub fn species(&self) -> &[ResourceUrl] {
        &self.species
    }

    pub fn vehicles(&self) -> &[ResourceUrl] {
        &self.vehicles
    }

    pub fn starships(&self) -> &[ResourceUrl] {
        &self.starships
    }

    pub fn created(&self) -> DateTime<FixedOffset> {
        self.created
    }

    pub fn edited(&self) -> DateTime<FixedOffset> {
        self.edited
    }

    pub fn url(&self) -> &ResourceUrl {
        &self.url
    }

    /// Field-by-field equality; `url` takes part only when `compare_url` is set.
    pub fn matches(&self, other: &Self, compare_url: bool) -> bool {
        // destructured so a new field can't be silently left out
        let Self {
            name,
            height,
            mass,
            hair_color,
            skin_color,
            eye_color,
            birth_year,
            gender,
            homeworld,
            films,
            species,
            vehicles,
            starships,
            created,
            edited,
            url,
        } = self;

        *name == other.name
            && *height == other.height
            && *mass == other.mass
            && *hair_color == other.hair_color
            && *skin_color == other.skin_color
            && *eye_color == other.eye_color
            && *birth_year == other.birth_year
            && *gender == other.gender
            && *homeworld == other.homeworld
            && *films == other.films
            && *species == other.species
            && *vehicles == other.vehicles
            && *starships == other.starships
            && *created == other.created
            && *edited == other.edited
            && (!compare_url || *url == other.url)
    }
}

// The JSON shape of a character, keyed by field name.
// URLs are parsed via FromStr / written via Display (serde_with::DisplayFromStr);
// tokens and timestamps stay text here because how they're read depends on the codec config.
#[serde_as]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct CharacterWire {
    pub name: String,
    pub height: String,
    pub mass: String,
    pub hair_color: String,
    pub skin_color: String,
    pub eye_color: String,
    pub birth_year: String,
    pub gender: String,
    #[serde_as(as = "DisplayFromStr")]
    pub homeworld: ResourceUrl,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub films: Vec<ResourceUrl>,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub species: Vec<ResourceUrl>,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub vehicles: Vec<ResourceUrl>,
    #[serde_as(as = "Vec<DisplayFromStr>")]
    pub starships: Vec<ResourceUrl>,
    pub created: String,
    pub edited: String,
    #[serde_as(as = "DisplayFromStr")]
    pub url: ResourceUrl,
}
