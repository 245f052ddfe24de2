pub mod build;
pub mod knowledge;
pub mod roster;

pub use build::{ArtifactBuild, CharacterBuild, Element, WeaponPick, WeaponType};
pub use knowledge::KnowledgeBase;
