//! Artifact set catalog and two-piece effect lookup

use phf::phf_map;

/// Artifact set information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactSet {
    /// Set key as exported by GOOD (e.g. "GladiatorsFinale")
    pub key: &'static str,
    pub name: &'static str,
    /// Two-piece effect id shared with other sets
    pub two_piece: &'static str,
}

const fn set(key: &'static str, name: &'static str, two_piece: &'static str) -> ArtifactSet {
    ArtifactSet {
        key,
        name,
        two_piece,
    }
}

/// Known five-star sets (plus a couple of four-star staples)
pub const ARTIFACT_SETS: &[ArtifactSet] = &[
    set("GladiatorsFinale", "Gladiator's Finale", "atk18"),
    set("ShimenawasReminiscence", "Shimenawa's Reminiscence", "atk18"),
    set("VermillionHereafter", "Vermillion Hereafter", "atk18"),
    set("EchoesOfAnOffering", "Echoes of an Offering", "atk18"),
    set("FragmentOfHarmonicWhimsy", "Fragment of Harmonic Whimsy", "atk18"),
    set("EmblemOfSeveredFate", "Emblem of Severed Fate", "er20"),
    set("TheExile", "The Exile", "er20"),
    set("WanderersTroupe", "Wanderer's Troupe", "em80"),
    set("GildedDreams", "Gilded Dreams", "em80"),
    set("FlowerOfParadiseLost", "Flower of Paradise Lost", "em80"),
    set("Instructor", "Instructor", "em80"),
    set("TenacityOfTheMillelith", "Tenacity of the Millelith", "hp20"),
    set("VourukashasGlow", "Vourukasha's Glow", "hp20"),
    set("HuskOfOpulentDreams", "Husk of Opulent Dreams", "def30"),
    set("OceanHuedClam", "Ocean-Hued Clam", "heal15"),
    set("MaidenBeloved", "Maiden Beloved", "heal15"),
    set("SongOfDaysPast", "Song of Days Past", "heal15"),
    set("PaleFlame", "Pale Flame", "physical25"),
    set("BloodstainedChivalry", "Bloodstained Chivalry", "physical25"),
    set("CrimsonWitchOfFlames", "Crimson Witch of Flames", "pyro15"),
    set("HeartOfDepth", "Heart of Depth", "hydro15"),
    set("NymphsDream", "Nymph's Dream", "hydro15"),
    set("BlizzardStrayer", "Blizzard Strayer", "cryo15"),
    set("ThunderingFury", "Thundering Fury", "electro15"),
    set("ViridescentVenerer", "Viridescent Venerer", "anemo15"),
    set("DesertPavilionChronicle", "Desert Pavilion Chronicle", "anemo15"),
    set("ArchaicPetra", "Archaic Petra", "geo15"),
    set("DeepwoodMemories", "Deepwood Memories", "dendro15"),
];

/// Two-piece effect id → every full set carrying that effect
static HALF_SET_LOOKUP: phf::Map<&'static str, &'static [&'static str]> = phf_map! {
    "atk18" => &[
        "GladiatorsFinale",
        "ShimenawasReminiscence",
        "VermillionHereafter",
        "EchoesOfAnOffering",
        "FragmentOfHarmonicWhimsy",
    ],
    "er20" => &["EmblemOfSeveredFate", "TheExile"],
    "em80" => &["WanderersTroupe", "GildedDreams", "FlowerOfParadiseLost", "Instructor"],
    "hp20" => &["TenacityOfTheMillelith", "VourukashasGlow"],
    "def30" => &["HuskOfOpulentDreams"],
    "heal15" => &["OceanHuedClam", "MaidenBeloved", "SongOfDaysPast"],
    "physical25" => &["PaleFlame", "BloodstainedChivalry"],
    "pyro15" => &["CrimsonWitchOfFlames"],
    "hydro15" => &["HeartOfDepth", "NymphsDream"],
    "cryo15" => &["BlizzardStrayer"],
    "electro15" => &["ThunderingFury"],
    "anemo15" => &["ViridescentVenerer", "DesertPavilionChronicle"],
    "geo15" => &["ArchaicPetra"],
    "dendro15" => &["DeepwoodMemories"],
};

/// Full sets reachable from a two-piece effect id. Unknown ids yield nothing.
pub fn full_sets_for_half(half_id: &str) -> &'static [&'static str] {
    HALF_SET_LOOKUP.get(half_id).copied().unwrap_or(&[])
}

/// Get set by key
pub fn set_by_key(key: &str) -> Option<&'static ArtifactSet> {
    ARTIFACT_SETS.iter().find(|s| s.key == key)
}

/// Display name for a set key, falling back to the key itself
pub fn set_display_name(key: &str) -> &str {
    set_by_key(key).map(|s| s.name).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_half_set_lookup() {
        let atk = full_sets_for_half("atk18");
        assert!(atk.contains(&"GladiatorsFinale"));
        assert!(atk.contains(&"ShimenawasReminiscence"));
        assert_eq!(full_sets_for_half("em80").len(), 4);
        assert!(full_sets_for_half("nope").is_empty());
    }

    #[test]
    fn test_lookup_matches_catalog() {
        for set in ARTIFACT_SETS {
            assert!(
                full_sets_for_half(set.two_piece).contains(&set.key),
                "{} missing from {} lookup",
                set.key,
                set.two_piece
            );
        }
        let mapped: usize = HALF_SET_LOOKUP.values().map(|v| v.len()).sum();
        assert_eq!(mapped, ARTIFACT_SETS.len());
    }

    #[test]
    fn test_set_names() {
        assert_eq!(set_display_name("EmblemOfSeveredFate"), "Emblem of Severed Fate");
        assert_eq!(set_display_name("Homebrew"), "Homebrew");
    }
}
