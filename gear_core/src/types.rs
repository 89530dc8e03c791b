use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A character stat granted or referenced by gear
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    // Main attributes
    Strength,
    Dexterity,
    Vitality,
    Intelligence,
    Mind,
    // Battle substats
    CriticalHit,
    Determination,
    DirectHit,
    SkillSpeed,
    SpellSpeed,
    Tenacity,
    Piety,
    // Crafting and gathering
    Craftsmanship,
    Control,
    Cp,
    Gp,
}

/// Mapping from stat to a non-negative value; absent = not granted
pub type StatMap = HashMap<Stat, u32>;

impl Stat {
    /// Get all stat variants
    pub fn all() -> &'static [Stat] {
        &[
            Stat::Strength,
            Stat::Dexterity,
            Stat::Vitality,
            Stat::Intelligence,
            Stat::Mind,
            Stat::CriticalHit,
            Stat::Determination,
            Stat::DirectHit,
            Stat::SkillSpeed,
            Stat::SpellSpeed,
            Stat::Tenacity,
            Stat::Piety,
            Stat::Craftsmanship,
            Stat::Control,
            Stat::Cp,
            Stat::Gp,
        ]
    }

    /// Whether this is one of the five main attributes
    pub fn is_main_attribute(&self) -> bool {
        matches!(
            self,
            Stat::Strength | Stat::Dexterity | Stat::Vitality | Stat::Intelligence | Stat::Mind
        )
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Strength => write!(f, "Strength"),
            Stat::Dexterity => write!(f, "Dexterity"),
            Stat::Vitality => write!(f, "Vitality"),
            Stat::Intelligence => write!(f, "Intelligence"),
            Stat::Mind => write!(f, "Mind"),
            Stat::CriticalHit => write!(f, "Critical Hit"),
            Stat::Determination => write!(f, "Determination"),
            Stat::DirectHit => write!(f, "Direct Hit"),
            Stat::SkillSpeed => write!(f, "Skill Speed"),
            Stat::SpellSpeed => write!(f, "Spell Speed"),
            Stat::Tenacity => write!(f, "Tenacity"),
            Stat::Piety => write!(f, "Piety"),
            Stat::Craftsmanship => write!(f, "Craftsmanship"),
            Stat::Control => write!(f, "Control"),
            Stat::Cp => write!(f, "CP"),
            Stat::Gp => write!(f, "GP"),
        }
    }
}

/// Equipment slot for gear
///
/// `Food` is the reserved consumable slot, distinct from the armor and
/// weapon slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    MainHand,
    OffHand,
    Head,
    Body,
    Hands,
    Legs,
    Feet,
    Earrings,
    Necklace,
    Bracelets,
    Ring1,
    Ring2,
    Food,
}

impl Slot {
    /// Get all equipment slots
    pub fn all() -> &'static [Slot] {
        &[
            Slot::MainHand,
            Slot::OffHand,
            Slot::Head,
            Slot::Body,
            Slot::Hands,
            Slot::Legs,
            Slot::Feet,
            Slot::Earrings,
            Slot::Necklace,
            Slot::Bracelets,
            Slot::Ring1,
            Slot::Ring2,
            Slot::Food,
        ]
    }

    /// Whether this is the reserved food slot
    pub fn is_food(&self) -> bool {
        matches!(self, Slot::Food)
    }
}

/// Combat jobs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Job {
    // Tanks
    Paladin,
    Warrior,
    DarkKnight,
    Gunbreaker,
    // Healers
    WhiteMage,
    Scholar,
    Astrologian,
    Sage,
    // Melee
    Monk,
    Dragoon,
    Ninja,
    Samurai,
    Reaper,
    Viper,
    // Physical ranged
    Bard,
    Machinist,
    Dancer,
    // Magical ranged
    BlackMage,
    Summoner,
    RedMage,
    Pictomancer,
}

/// Job applicability category carried by a gear definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobCategory {
    All,
    Tanks,
    Healers,
    Melee,
    PhysicalRanged,
    MagicalRanged,
}

impl JobCategory {
    /// Resolve this category to the jobs it covers
    pub fn jobs(&self) -> &'static [Job] {
        match self {
            JobCategory::All => &[
                Job::Paladin,
                Job::Warrior,
                Job::DarkKnight,
                Job::Gunbreaker,
                Job::WhiteMage,
                Job::Scholar,
                Job::Astrologian,
                Job::Sage,
                Job::Monk,
                Job::Dragoon,
                Job::Ninja,
                Job::Samurai,
                Job::Reaper,
                Job::Viper,
                Job::Bard,
                Job::Machinist,
                Job::Dancer,
                Job::BlackMage,
                Job::Summoner,
                Job::RedMage,
                Job::Pictomancer,
            ],
            JobCategory::Tanks => &[Job::Paladin, Job::Warrior, Job::DarkKnight, Job::Gunbreaker],
            JobCategory::Healers => &[Job::WhiteMage, Job::Scholar, Job::Astrologian, Job::Sage],
            JobCategory::Melee => &[
                Job::Monk,
                Job::Dragoon,
                Job::Ninja,
                Job::Samurai,
                Job::Reaper,
                Job::Viper,
            ],
            JobCategory::PhysicalRanged => &[Job::Bard, Job::Machinist, Job::Dancer],
            JobCategory::MagicalRanged => &[
                Job::BlackMage,
                Job::Summoner,
                Job::RedMage,
                Job::Pictomancer,
            ],
        }
    }
}

/// Display color tag for a gear definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GearColor {
    White,
    Green,
    Blue,
    Purple,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_slot_is_reserved() {
        assert!(Slot::Food.is_food());
        for slot in Slot::all() {
            if *slot != Slot::Food {
                assert!(!slot.is_food());
            }
        }
    }

    #[test]
    fn test_category_jobs_are_disjoint_roles() {
        let tanks = JobCategory::Tanks.jobs();
        let healers = JobCategory::Healers.jobs();
        assert!(tanks.iter().all(|j| !healers.contains(j)));
    }

    #[test]
    fn test_all_covers_every_role() {
        let all = JobCategory::All.jobs();
        for category in [
            JobCategory::Tanks,
            JobCategory::Healers,
            JobCategory::Melee,
            JobCategory::PhysicalRanged,
            JobCategory::MagicalRanged,
        ] {
            for job in category.jobs() {
                assert!(all.contains(job), "{:?} missing from All", job);
            }
        }
    }

    #[test]
    fn test_stat_serde_names() {
        let json = serde_json::to_string(&Stat::CriticalHit).unwrap();
        assert_eq!(json, "\"critical_hit\"");
        let stat: Stat = serde_json::from_str("\"skill_speed\"").unwrap();
        assert_eq!(stat, Stat::SkillSpeed);
    }
}
