use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Pyro,
    Hydro,
    Cryo,
    Electro,
    Anemo,
    Geo,
    Dendro,
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Element::Pyro => "Pyro",
            Element::Hydro => "Hydro",
            Element::Cryo => "Cryo",
            Element::Electro => "Electro",
            Element::Anemo => "Anemo",
            Element::Geo => "Geo",
            Element::Dendro => "Dendro",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeaponType {
    Sword,
    Claymore,
    Polearm,
    Bow,
    Catalyst,
}

impl fmt::Display for WeaponType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeaponType::Sword => "Sword",
            WeaponType::Claymore => "Claymore",
            WeaponType::Polearm => "Polearm",
            WeaponType::Bow => "Bow",
            WeaponType::Catalyst => "Catalyst",
        };
        f.write_str(name)
    }
}

/// Recommended artifact set and main/sub stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtifactBuild {
    pub primary_set: &'static str,
    pub alternative_set: &'static str,
    pub sands_stat: &'static str,
    pub goblet_stat: &'static str,
    pub circlet_stat: &'static str,
    pub substat_priority: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeaponPick {
    pub name: &'static str,
    pub rarity: u8,
    pub note: &'static str,
}

/// One entry of the character table.
///
/// `identifier` is the lowercase lookup key. Everything else is display data
/// that ends up in the build block sent to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterBuild {
    pub identifier: &'static str,
    pub name: &'static str,
    pub element: Element,
    pub weapon_type: WeaponType,
    pub role: &'static str,
    pub rarity: u8,
    pub region: &'static str,
    pub artifacts: ArtifactBuild,
    pub weapons: &'static [WeaponPick],
    pub team_compositions: &'static [&'static str],
    pub notes: &'static str,
}
