use crate::characters::CharacterBuild;

const RULE: &str = "═══════════════════════════════";

const EXPLAIN_INSTRUCTION: &str = "INSTRUKSI: Jelaskan build ini dengan gaya Paimon yang ceria dan detail! Kasih tau kenapa artifact dan weapon ini bagus untuk karakter tersebut.";

/// Render a character's build as the text block handed to the model.
pub fn format_build(build: &CharacterBuild) -> String {
    let weapons = build
        .weapons
        .iter()
        .enumerate()
        .map(|(i, w)| format!("{}. {} ({}⭐) - {}", i + 1, w.name, w.rarity, w.note))
        .collect::<Vec<_>>()
        .join("\n");

    let teams = build
        .team_compositions
        .iter()
        .map(|t| format!("• {t}"))
        .collect::<Vec<_>>()
        .join("\n");

    let a = &build.artifacts;
    format!(
        "
{RULE}
CHARACTER INFO
{RULE}
Nama: {name}
Element: {element}
Weapon Type: {weapon_type}
Role: {role}
Rarity: {rarity}⭐
Region: {region}

{RULE}
BUILD RECOMMENDATION
{RULE}

📦 ARTIFACT SET:
{set}
Alternative: {alternative}

⚙️ MAIN STATS:
├─ Sands: {sands}
├─ Goblet: {goblet}
└─ Circlet: {circlet}

🎯 SUBSTATS PRIORITY:
{substats}

⚔️ RECOMMENDED WEAPONS:
{weapons}

👥 TEAM COMPOSITIONS:
{teams}

📝 NOTES:
{notes}

{RULE}

{EXPLAIN_INSTRUCTION}
",
        name = build.name,
        element = build.element,
        weapon_type = build.weapon_type,
        role = build.role,
        rarity = build.rarity,
        region = build.region,
        set = a.primary_set,
        alternative = a.alternative_set,
        sands = a.sands_stat,
        goblet = a.goblet_stat,
        circlet = a.circlet_stat,
        substats = a.substat_priority,
        notes = build.notes,
    )
}
