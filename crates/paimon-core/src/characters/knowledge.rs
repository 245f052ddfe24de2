use super::build::CharacterBuild;
use super::roster::ROSTER;
use crate::error::{PaimonError, Result};
use std::collections::HashSet;

/// Read-only table of character builds.
///
/// Entries keep their insertion order; `lookup` returns the first entry whose
/// identifier or display name appears in the query.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    entries: Vec<CharacterBuild>,
}

impl KnowledgeBase {
    /// Validate and wrap a table. Any incomplete entry is rejected.
    pub fn new(entries: impl Into<Vec<CharacterBuild>>) -> Result<Self> {
        let entries = entries.into();
        let mut seen = HashSet::new();
        for entry in &entries {
            validate(entry)?;
            if !seen.insert(entry.identifier) {
                return Err(PaimonError::configuration(format!(
                    "duplicate character identifier '{}'",
                    entry.identifier
                )));
            }
        }
        Ok(Self { entries })
    }

    /// The built-in roster.
    pub fn builtin() -> Result<Self> {
        Self::new(ROSTER)
    }

    pub fn lookup(&self, query: &str) -> Option<&CharacterBuild> {
        let query = query.to_lowercase();
        self.entries.iter().find(|c| {
            query.contains(c.identifier) || query.contains(&c.name.to_lowercase())
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CharacterBuild> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(c: &CharacterBuild) -> Result<()> {
    let fail = |what: &str| {
        Err(PaimonError::configuration(format!(
            "character '{}': {}",
            c.identifier, what
        )))
    };

    if c.identifier.trim().is_empty() {
        return fail("identifier is empty");
    }
    if c.identifier != c.identifier.to_lowercase() {
        return fail("identifier must be lowercase");
    }
    if !(1..=5).contains(&c.rarity) {
        return fail("rarity must be between 1 and 5");
    }
    if c.weapons.is_empty() {
        return fail("no recommended weapons");
    }
    if c.team_compositions.is_empty() {
        return fail("no team compositions");
    }
    if c.weapons.iter().any(|w| !(1..=5).contains(&w.rarity)) {
        return fail("weapon rarity must be between 1 and 5");
    }

    let a = &c.artifacts;
    let text_fields = [
        ("name", c.name),
        ("role", c.role),
        ("region", c.region),
        ("notes", c.notes),
        ("artifact set", a.primary_set),
        ("alternative set", a.alternative_set),
        ("sands stat", a.sands_stat),
        ("goblet stat", a.goblet_stat),
        ("circlet stat", a.circlet_stat),
        ("substat priority", a.substat_priority),
    ];
    if let Some((field, _)) = text_fields.iter().find(|(_, v)| v.trim().is_empty()) {
        return fail(&format!("{field} is empty"));
    }
    if c
        .weapons
        .iter()
        .any(|w| w.name.trim().is_empty() || w.note.trim().is_empty())
    {
        return fail("weapon entry has an empty name or note");
    }
    if c.team_compositions.iter().any(|t| t.trim().is_empty()) {
        return fail("team composition is empty");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::characters::roster::{DILUC, GANYU, HU_TAO, RAIDEN_SHOGUN, SKIRK};

    fn kb() -> KnowledgeBase {
        KnowledgeBase::builtin().unwrap()
    }

    // ── lookup ──────────────────────────────────────────────────────────────

    #[test]
    fn builtin_roster_loads_in_table_order() {
        let names: Vec<&str> = kb().iter().map(|c| c.name).collect();
        assert_eq!(names, ["Hu Tao", "Skirk", "Ganyu", "Raiden Shogun", "Diluc"]);
    }

    #[test]
    fn lookup_finds_identifier_inside_query() {
        let kb = kb();
        assert_eq!(kb.lookup("build hu tao dong").unwrap().name, "Hu Tao");
        assert_eq!(kb.lookup("weapon terbaik untuk ganyu").unwrap().name, "Ganyu");
        assert_eq!(kb.lookup("skirk").unwrap().name, "Skirk");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let kb = kb();
        assert_eq!(kb.lookup("BUILD SKIRK").unwrap().identifier, "skirk");
        assert_eq!(kb.lookup("Raiden Shogun team?").unwrap().identifier, "raiden shogun");
    }

    #[test]
    fn lookup_returns_none_for_unknown_characters() {
        let kb = kb();
        assert!(kb.lookup("build nahida").is_none());
        assert!(kb.lookup("").is_none());
        // "raiden" alone is neither the identifier nor the display name
        assert!(kb.lookup("build raiden").is_none());
    }

    #[test]
    fn lookup_prefers_first_entry_in_table_order() {
        let kb = kb();
        // Diluc comes after Hu Tao in the roster
        assert_eq!(kb.lookup("diluc atau hu tao?").unwrap().name, "Hu Tao");
        assert_eq!(kb.lookup("ganyu vs skirk").unwrap().name, "Skirk");
    }

    #[test]
    fn lookup_matches_display_name_when_identifier_is_an_alias() {
        let kb = KnowledgeBase::new(vec![CharacterBuild {
            identifier: "ei",
            ..RAIDEN_SHOGUN
        }])
        .unwrap();
        assert_eq!(kb.lookup("team for raiden shogun").unwrap().identifier, "ei");
        assert_eq!(kb.lookup("build ei").unwrap().identifier, "ei");
    }

    // ── validation ──────────────────────────────────────────────────────────

    #[test]
    fn duplicate_identifiers_are_rejected() {
        let err = KnowledgeBase::new(vec![HU_TAO, SKIRK, HU_TAO]).unwrap_err();
        assert!(matches!(err, PaimonError::Configuration(_)));
        assert!(err.to_string().contains("duplicate"), "got: {err}");
    }

    #[test]
    fn uppercase_identifier_is_rejected() {
        let bad = CharacterBuild {
            identifier: "Ganyu",
            ..GANYU
        };
        assert!(KnowledgeBase::new(vec![bad]).is_err());
    }

    #[test]
    fn rarity_out_of_range_is_rejected() {
        let bad = CharacterBuild { rarity: 6, ..DILUC };
        assert!(KnowledgeBase::new(vec![bad]).is_err());
        let bad = CharacterBuild { rarity: 0, ..DILUC };
        assert!(KnowledgeBase::new(vec![bad]).is_err());
    }

    #[test]
    fn empty_fields_are_rejected() {
        let bad = CharacterBuild { notes: "  ", ..DILUC };
        let err = KnowledgeBase::new(vec![bad]).unwrap_err();
        assert!(err.to_string().contains("notes"), "got: {err}");

        let bad = CharacterBuild { weapons: &[], ..DILUC };
        assert!(KnowledgeBase::new(vec![bad]).is_err());

        let bad = CharacterBuild {
            team_compositions: &[],
            ..DILUC
        };
        assert!(KnowledgeBase::new(vec![bad]).is_err());
    }

    #[test]
    fn empty_table_is_allowed() {
        let kb = KnowledgeBase::new(Vec::<CharacterBuild>::new()).unwrap();
        assert!(kb.is_empty());
        assert!(kb.lookup("build hu tao").is_none());
    }
}
