//! Closed label vocabularies for game entries
//!
//! Every enum serializes to its human-readable label (`"Open World"`,
//! `"E10+"`, ...). Those strings are the contract with the quiz backend,
//! which keys lookups by them.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! label_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every label in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Serialized label
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

label_enum! {
    /// Canonical platform family
    pub enum Platform {
        Pc => "PC",
        PlayStation => "PlayStation",
        Xbox => "Xbox",
        NintendoSwitch => "Nintendo Switch",
        Mobile => "Mobile",
    }
}

label_enum! {
    /// Camera / perspective style (perspective mirrors camera)
    pub enum Camera {
        ThirdPerson => "Third Person",
        FirstPerson => "First Person",
        Isometric => "Isometric",
        TopDown => "Top-down",
        Side => "Side",
        Unknown => "Unknown",
    }
}

label_enum! {
    pub enum WorldType {
        OpenWorld => "Open World",
        Metroidvania => "Metroidvania",
        LevelBased => "Level-based",
        HubBased => "Hub-based",
        LinearMixed => "Linear / Mixed",
    }
}

label_enum! {
    pub enum Theme {
        Horror => "Horror",
        PostApocalyptic => "Post-Apocalyptic",
        SciFi => "Sci-Fi",
        Fantasy => "Fantasy",
        Historical => "Historical",
        ModernOther => "Modern / Other",
    }
}

label_enum! {
    pub enum Tone {
        Dark => "Dark",
        Wholesome => "Wholesome",
        Comedic => "Comedic",
        Emotional => "Emotional",
        Cute => "Cute",
        Neutral => "Neutral",
    }
}

label_enum! {
    pub enum Difficulty {
        SoulsLike => "Souls-like",
        Hard => "Hard",
        Easy => "Easy",
        NormalUnknown => "Normal / Unknown",
    }
}

label_enum! {
    pub enum Replayability {
        Roguelike => "Roguelike",
        High => "High",
        MediumLowUnknown => "Medium / Low / Unknown",
    }
}

label_enum! {
    /// Major studio bucket derived from developer names
    pub enum DeveloperBucket {
        FromSoftware => "FromSoftware",
        Rockstar => "Rockstar",
        Ubisoft => "Ubisoft",
        Ea => "EA",
        Nintendo => "Nintendo",
        SquareEnix => "Square Enix",
        Capcom => "Capcom",
        CdProjekt => "CD PROJEKT",
        Bethesda => "Bethesda",
        IndieOther => "Indie / Other",
    }
}

label_enum! {
    pub enum DeveloperRegion {
        Japan => "Japan",
        Europe => "Europe",
        NorthAmerica => "North America",
        UnknownVarious => "Unknown / Various",
    }
}

label_enum! {
    pub enum Franchise {
        GrandTheftAuto => "Grand Theft Auto",
        CallOfDuty => "Call of Duty",
        AssassinsCreed => "Assassin's Creed",
        Soulsborne => "Soulsborne",
        ResidentEvil => "Resident Evil",
        Battlefield => "Battlefield",
        Zelda => "The Legend of Zelda",
        FinalFantasy => "Final Fantasy",
        FarCry => "Far Cry",
        Halo => "Halo",
        Forza => "Forza",
        FifaEaFc => "FIFA / EA FC",
        StandaloneOther => "Standalone / Other",
    }
}

label_enum! {
    /// ESRB grade
    pub enum Esrb {
        Everyone => "E",
        Everyone10 => "E10+",
        Teen => "T",
        Mature => "M",
        Unknown => "Unknown",
    }
}

label_enum! {
    pub enum AgeRating {
        ThreePlus => "3+",
        SevenPlus => "7+",
        TwelvePlus => "12+",
        SixteenPlus => "16+",
        Unknown => "Unknown",
    }
}

label_enum! {
    pub enum ViolenceLevel {
        High => "High",
        Medium => "Medium",
        Low => "Low",
        UnknownVaries => "Unknown / Varies",
    }
}

label_enum! {
    pub enum VisualStyle {
        PixelArt => "Pixel Art",
        Retro => "Retro",
        Anime => "Anime",
        Realistic => "Realistic",
        Cartoon => "Cartoon",
        Stylized => "Stylized",
        LowPoly => "Low Poly",
        Minimalist => "Minimalist",
        Unspecified => "Unspecified",
    }
}

label_enum! {
    pub enum CombatStyle {
        Melee => "Melee",
        Guns => "Guns",
        Magic => "Magic",
        Stealth => "Stealth",
        Tactical => "Tactical",
        Unspecified => "Unspecified",
    }
}

label_enum! {
    pub enum StructureFeature {
        Crafting => "Crafting",
        Survival => "Survival",
        SkillTree => "Skill Tree",
        Loot => "Loot",
        BaseBuilding => "Base Building",
        ProceduralGeneration => "Procedural Generation",
        BranchingStory => "Branching Story",
        NoneStandard => "None / Standard",
    }
}

label_enum! {
    pub enum Mood {
        Atmospheric => "Atmospheric",
        Psychological => "Psychological",
        Mysterious => "Mysterious",
        Thrilling => "Thrilling",
        StoryDriven => "Story-Driven",
        Relaxing => "Relaxing",
        Neutral => "Neutral",
    }
}

label_enum! {
    pub enum Setting {
        Space => "Space / Sci-Fi",
        Underwater => "Underwater",
        Urban => "Urban",
        DesertWasteland => "Desert / Wasteland",
        Island => "Island",
        Wilderness => "Wilderness",
        Medieval => "Medieval",
        PostApocalyptic => "Post-Apocalyptic",
        UnspecifiedMixed => "Unspecified / Mixed",
    }
}

label_enum! {
    pub enum Monetization {
        FreeToPlay => "Free to Play",
        Microtransactions => "Microtransactions",
        DlcHeavy => "DLC-heavy",
        Seasonal => "Seasonal / Live Service",
        PaidStandard => "Paid / Standard",
    }
}

label_enum! {
    pub enum MultiplayerMode {
        Singleplayer => "Singleplayer",
        Mmo => "MMO",
        BattleRoyale => "Battle Royale",
        CompetitiveOnline => "Competitive Online",
        LocalCoop => "Local Co-op",
        OnlineCoop => "Online Co-op",
        MultiplayerMixed => "Multiplayer / Mixed",
        Unknown => "Unknown",
    }
}

label_enum! {
    /// Critic score bucket
    pub enum ScoreBucket {
        NinetyPlus => "90+",
        Eighties => "80-89",
        Seventies => "70-79",
        Sixties => "60-69",
        BelowSixty => "<60",
        Unknown => "Unknown",
    }
}
