//! Phrase vocabularies for the disaster classifier
//!
//! Vocabularies are plain data: ordered slices of normalized phrases.
//! Matching is whole-word only (see `text::phrase`), so short Filipino
//! tokens like "di" or "apoy" never fire inside longer words. Slang and
//! typo variants observed in field reports are listed alongside the
//! dictionary spellings.

use crate::types::DisasterType;

// ============================================================================
// Type Buckets
// ============================================================================

/// Fixed type-bucket scan order. The first bucket reaching the strictly
/// highest hit count wins; all-zero means `Other`.
pub static TYPE_BUCKETS: &[(DisasterType, &[&str])] = &[
    (DisasterType::Flood, FLOOD_CUES),
    (DisasterType::Fire, FIRE_CUES),
    (DisasterType::Landslide, LANDSLIDE_CUES),
    (DisasterType::Typhoon, TYPHOON_CUES),
    (DisasterType::Earthquake, EARTHQUAKE_CUES),
    (DisasterType::Power, POWER_CUES),
    (DisasterType::Medical, MEDICAL_CUES),
];

pub static FLOOD_CUES: &[&str] = &[
    "baha", "bumabaha", "binabaha", "bahang", "flood", "flooding", "flash flood", "lubog",
    "lumulubog", "apaw", "umaapaw", "umapaw", "tumataas ang tubig", "tumaas ang tubig",
    "hanggang tuhod", "hanggang baywang",
];

pub static FIRE_CUES: &[&str] = &[
    "sunog", "nasusunog", "nasunog", "may sunog", "fire", "apoy", "usok", "nagliliyab",
    "nagliyab", "burning", "smoke", "nakasunog",
];

pub static LANDSLIDE_CUES: &[&str] = &[
    "guho", "gumuho", "pagguho", "landslide", "mudslide", "pagguho ng lupa", "gumuguho",
    "natabunan", "tinabunan",
];

pub static TYPHOON_CUES: &[&str] = &[
    "bagyo", "typhoon", "storm", "unos", "malakas na hangin", "hanging habagat", "umuulan",
    "ulan", "malakas na ulan", "bumabagyo", "signal no",
];

pub static EARTHQUAKE_CUES: &[&str] = &[
    "lindol", "earthquake", "lumindol", "yanig", "yumanig", "yumayanig", "tremor", "aftershock",
    "pagyanig",
];

pub static POWER_CUES: &[&str] = &[
    "brownout", "blackout", "walang kuryente", "nawalan ng kuryente", "kuryente", "outage",
    "power outage", "nahulog na poste", "putol na kable", "live wire", "nakalaylay na kable",
];

pub static MEDICAL_CUES: &[&str] = &[
    "ambulance", "ambulansya", "hirap huminga", "nasugatan", "injured", "atake sa puso",
    "heart attack", "stroke", "hinimatay", "nahimatay", "walang malay", "dinudugo", "sugatan",
    "inatake", "naaksidente", "aksidente",
];

// ============================================================================
// Evidence Gate
// ============================================================================

/// Hazard vocabularies counted by the evidence gate — the type buckets that
/// name a trigger event. Medical cues are impact-shaped and counted there.
pub static HAZARD_SETS: &[&[&str]] = &[
    FLOOD_CUES,
    FIRE_CUES,
    LANDSLIDE_CUES,
    TYPHOON_CUES,
    EARTHQUAKE_CUES,
    POWER_CUES,
];

/// Impact/need vocabularies counted by the evidence gate
pub static IMPACT_SETS: &[&[&str]] = &[
    RESCUE_CUES,
    TRAPPED_CUES,
    INJURED_CUES,
    EVACUATION_CUES,
    ROAD_CUES,
    DAMAGE_CUES,
];

pub static RESCUE_CUES: &[&str] = &[
    "saklolo", "tulong", "rescue", "need help", "sos", "tulungan niyo kami", "pasaklolo",
];

pub static TRAPPED_CUES: &[&str] = &[
    "trapped", "naiipit", "naipit", "na trap", "stranded", "nastranded", "hindi makalabas",
    "di makalabas", "nasa bubong", "umakyat sa bubong", "rooftop", "nakulong sa",
];

pub static INJURED_CUES: &[&str] = &[
    "nasugatan", "injured", "sugatan", "may nasaktan", "hirap huminga", "walang malay",
    "hinimatay", "nahimatay", "dinudugo", "unconscious", "not breathing", "hindi humihinga",
    "may nadisgrasya",
];

pub static EVACUATION_CUES: &[&str] = &[
    "evacuate", "evacuation", "lumikas", "ilikas", "paalisin", "evacuation center", "lumilikas",
];

pub static ROAD_CUES: &[&str] = &[
    "hindi madaanan", "di madaanan", "road blocked", "roadblock", "sarado ang daan",
    "putol ang tulay", "impassable", "barado ang kalsada",
];

pub static DAMAGE_CUES: &[&str] = &[
    "nasira", "wasak", "nawasak", "gumuho ang bahay", "nawalan ng bubong", "damaged",
    "destroyed", "washed out", "naanod",
];

// ============================================================================
// Noise Prefilter
// ============================================================================

/// Non-disaster cues: banter, commerce, lost & found, greetings. A report
/// matching any of these is dropped unless it also carries at least two
/// hazard/impact hits.
pub static NOISE_CUES: &[&str] = &[
    "joke", "joke lang", "jk", "charot", "lol", "haha", "hehe", "prank", "trip lang",
    "for sale", "selling", "benta", "bentahan", "murang mura", "promo", "discount", "raffle",
    "giveaway", "libreng load", "pa like", "pa follow",
    "nawawalang aso", "nawawalang pusa", "lost dog", "lost cat", "found wallet", "nakapulot",
    "congrats", "congratulations", "happy birthday", "happy fiesta", "good morning",
    "good evening",
];

// ============================================================================
// Urgency Cues
// ============================================================================

pub static CRITICAL_CUES: &[&str] = &[
    "saklolo", "sos", "trapped", "naiipit", "naipit", "bubong", "rooftop", "may bata",
    "may matanda", "matanda", "buntis", "urgent", "asap", "di makalabas", "hindi makalabas",
    "stranded", "walang malay", "hindi humihinga", "mamamatay", "emergency", "agaw buhay",
];

pub static HIGH_CUES: &[&str] = &[
    "need help", "tulong", "evacuate", "lumikas", "nasugatan", "injured", "delikado",
    "mabilis", "lumalalim", "kumakalat", "usok", "apoy", "dumadami",
];

pub static MODERATE_CUES: &[&str] = &[
    "monitoring", "bahagya", "mahina", "unti unti", "paunti unti", "konti", "ambon",
    "light rain", "watch", "abangan",
];

pub static INTENSITY_CUES: &[&str] = &[
    "malakas", "matindi", "grabe", "sobrang", "napakalakas", "severe", "intense", "massive",
    "malaki", "malawak",
];

// ============================================================================
// Type-Specific Urgency Boosters
// ============================================================================

/// Fire spreading / explosion cues (+18)
pub static FIRE_BOOST_CUES: &[&str] = &[
    "explosion", "sumabog", "pumutok", "kumakalat", "spreading", "lumalaki ang apoy",
    "dikit dikit ang bahay",
];

/// Flash-flood / rapid-rise cues (+16)
pub static FLOOD_BOOST_CUES: &[&str] = &[
    "flash flood", "biglang tumaas", "mabilis tumataas", "rumaragasa", "lumalalim",
    "bumubulusok",
];

/// Collapse / crack cues for earthquake and landslide (+12)
pub static COLLAPSE_BOOST_CUES: &[&str] = &[
    "gumuho", "collapsed", "bumagsak", "may bitak", "bitak", "crack", "nawasak", "natabunan",
];

/// Unconsciousness / not-breathing cues for medical (+22)
pub static MEDICAL_BOOST_CUES: &[&str] = &[
    "walang malay", "unconscious", "hindi humihinga", "not breathing", "hinimatay",
    "nahimatay", "agaw buhay",
];
