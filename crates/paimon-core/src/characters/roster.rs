use super::build::{ArtifactBuild, CharacterBuild, Element, WeaponPick, WeaponType};

pub const HU_TAO: CharacterBuild = CharacterBuild {
    identifier: "hu tao",
    name: "Hu Tao",
    element: Element::Pyro,
    weapon_type: WeaponType::Polearm,
    role: "Main DPS",
    rarity: 5,
    region: "Liyue",
    artifacts: ArtifactBuild {
        primary_set: "Crimson Witch of Flames (4pc)",
        alternative_set: "Shimenawa's Reminiscence (4pc)",
        sands_stat: "HP%",
        goblet_stat: "Pyro DMG Bonus",
        circlet_stat: "Crit Rate / Crit DMG",
        substat_priority: "Crit Rate > Crit DMG > HP% > Elemental Mastery",
    },
    weapons: &[
        WeaponPick { name: "Staff of Homa", rarity: 5, note: "Best in Slot" },
        WeaponPick { name: "Dragon's Bane", rarity: 4, note: "Excellent F2P" },
        WeaponPick { name: "Deathmatch", rarity: 4, note: "Battle Pass" },
    ],
    team_compositions: &[
        "Hu Tao + Xingqiu + Yelan + Zhongli (Double Hydro)",
        "Hu Tao + Xingqiu + Albedo + Zhongli (Geo Resonance)",
    ],
    notes: "Focus on HP scaling. Use Elemental Skill then spam Charged Attacks. Best with Xingqiu for Vaporize.",
};

pub const SKIRK: CharacterBuild = CharacterBuild {
    identifier: "skirk",
    name: "Skirk",
    element: Element::Hydro,
    weapon_type: WeaponType::Sword,
    role: "Main DPS",
    rarity: 5,
    region: "Khaenri'ah",
    artifacts: ArtifactBuild {
        primary_set: "Heart of Depth (4pc)",
        alternative_set: "Nymph's Dream (4pc)",
        sands_stat: "HP% / ATK%",
        goblet_stat: "Hydro DMG Bonus",
        circlet_stat: "Crit Rate / Crit DMG",
        substat_priority: "Crit Rate > Crit DMG > HP% > ATK%",
    },
    weapons: &[
        WeaponPick {
            name: "Splendor of Tranquil Waters",
            rarity: 5,
            note: "Best in Slot - HP scaling",
        },
        WeaponPick { name: "Mistsplitter Reforged", rarity: 5, note: "High Crit DMG" },
        WeaponPick { name: "Fleuve Cendre Ferryman", rarity: 4, note: "F2P with ER" },
    ],
    team_compositions: &[
        "Skirk + Furina + Kazuha + Zhongli (Abyssal Waters)",
        "Skirk + Xingqiu + Bennett + Sucrose (F2P Hydro)",
    ],
    notes: "HP-scaling Hydro DPS from Khaenri'ah. Uses fast sword attacks. Best with Furina for HP manipulation synergy.",
};

pub const GANYU: CharacterBuild = CharacterBuild {
    identifier: "ganyu",
    name: "Ganyu",
    element: Element::Cryo,
    weapon_type: WeaponType::Bow,
    role: "Main DPS",
    rarity: 5,
    region: "Liyue",
    artifacts: ArtifactBuild {
        primary_set: "Blizzard Strayer (4pc)",
        alternative_set: "Wanderer's Troupe (4pc)",
        sands_stat: "ATK%",
        goblet_stat: "Cryo DMG Bonus",
        circlet_stat: "Crit DMG",
        substat_priority: "Crit DMG > ATK% > ER > Crit Rate",
    },
    weapons: &[
        WeaponPick { name: "Amos' Bow", rarity: 5, note: "Best in Slot" },
        WeaponPick { name: "Prototype Crescent", rarity: 4, note: "F2P craftable" },
        WeaponPick { name: "Hamayumi", rarity: 4, note: "Alternative F2P" },
    ],
    team_compositions: &[
        "Ganyu + Mona + Venti + Diona (Morgana)",
        "Ganyu + Bennett + Xiangling + Zhongli (Melt)",
    ],
    notes: "Charged Attack focused. Blizzard Strayer gives 40% Crit Rate on frozen enemies. Focus on Crit DMG.",
};

pub const RAIDEN_SHOGUN: CharacterBuild = CharacterBuild {
    identifier: "raiden shogun",
    name: "Raiden Shogun",
    element: Element::Electro,
    weapon_type: WeaponType::Polearm,
    role: "Main DPS",
    rarity: 5,
    region: "Inazuma",
    artifacts: ArtifactBuild {
        primary_set: "Emblem of Severed Fate (4pc)",
        alternative_set: "Thundering Fury (2pc) + Noblesse Oblige (2pc)",
        sands_stat: "Energy Recharge / ATK%",
        goblet_stat: "Electro DMG Bonus / ATK%",
        circlet_stat: "Crit Rate / Crit DMG",
        substat_priority: "Energy Recharge (250%) > Crit Rate > Crit DMG > ATK%",
    },
    weapons: &[
        WeaponPick { name: "Engulfing Lightning", rarity: 5, note: "Signature weapon" },
        WeaponPick { name: "The Catch", rarity: 4, note: "Best F2P option" },
        WeaponPick { name: "Grasscutter's Light", rarity: 5, note: "Alternative 5-star" },
    ],
    team_compositions: &[
        "Raiden + Bennett + Xingqiu + Xiangling (Raiden National)",
        "Raiden + Bennett + Sara + Kazuha (Hypercarry)",
    ],
    notes: "Energy Recharge converts to Burst DMG. Stack ER for maximum damage. Best with Bennett buff.",
};

pub const DILUC: CharacterBuild = CharacterBuild {
    identifier: "diluc",
    name: "Diluc",
    element: Element::Pyro,
    weapon_type: WeaponType::Claymore,
    role: "Main DPS",
    rarity: 5,
    region: "Mondstadt",
    artifacts: ArtifactBuild {
        primary_set: "Crimson Witch of Flames (4pc)",
        alternative_set: "Gladiator's Finale (4pc)",
        sands_stat: "ATK%",
        goblet_stat: "Pyro DMG Bonus",
        circlet_stat: "Crit Rate / Crit DMG",
        substat_priority: "Crit Rate > Crit DMG > ATK% > EM",
    },
    weapons: &[
        WeaponPick { name: "Wolf's Gravestone", rarity: 5, note: "Best in Slot" },
        WeaponPick { name: "Serpent Spine", rarity: 4, note: "Battle Pass" },
        WeaponPick { name: "Prototype Archaic", rarity: 4, note: "F2P" },
    ],
    team_compositions: &[
        "Diluc + Xingqiu + Bennett + Kazuha (Vaporize)",
        "Diluc + Xingqiu + Bennett + Sucrose (Budget)",
    ],
    notes: "Standard Pyro carry. Use with Xingqiu for Vaporize reactions.",
};

/// Built-in table, in lookup order.
pub const ROSTER: &[CharacterBuild] = &[HU_TAO, SKIRK, GANYU, RAIDEN_SHOGUN, DILUC];
