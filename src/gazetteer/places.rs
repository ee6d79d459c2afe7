//! Static gazetteer table for Lipa City
//!
//! Canonical keys are pre-normalized (lowercase ASCII, diacritics folded).
//! Aliases cover common alternate spellings and typos observed in field
//! reports; each alias must resolve to exactly one canonical key.

/// One row of the static place table
pub struct PlaceSpec {
    /// Canonical key in normalized form
    pub key: &'static str,
    /// Display label
    pub label: &'static str,
    pub lat: f64,
    pub lon: f64,
    /// Alternate spellings that resolve to this place
    pub aliases: &'static [&'static str],
}

/// City-center fallback pin
pub const CITY_CENTER_LABEL: &str = "Lipa City (unspecified)";
pub const CITY_CENTER_LAT: f64 = 13.9411;
pub const CITY_CENTER_LON: f64 = 121.1631;

/// Generic district label when only "poblacion" is mentioned
pub const POBLACION_DISTRICT_LABEL: &str = "Poblacion, Lipa City";

/// City name appended to numeric barangay labels
pub const CITY_NAME: &str = "Lipa City";

pub static LIPA_PLACES: &[PlaceSpec] = &[
    // Named barangays
    PlaceSpec { key: "sabang", label: "Sabang, Lipa City", lat: 13.936, lon: 121.170, aliases: &[] },
    PlaceSpec { key: "marawoy", label: "Marawoy, Lipa City", lat: 13.956, lon: 121.150, aliases: &["marauoy"] },
    PlaceSpec { key: "lodlod", label: "Lodlod, Lipa City", lat: 13.927, lon: 121.169, aliases: &[] },
    PlaceSpec { key: "bulacnin", label: "Bulacnin, Lipa City", lat: 13.944, lon: 121.149, aliases: &["bulaknin"] },
    PlaceSpec { key: "sico", label: "Sico, Lipa City", lat: 13.941, lon: 121.206, aliases: &[] },
    PlaceSpec { key: "tambo", label: "Tambo, Lipa City", lat: 13.970, lon: 121.160, aliases: &[] },
    PlaceSpec { key: "balintawak", label: "Balintawak, Lipa City", lat: 13.947, lon: 121.176, aliases: &[] },
    PlaceSpec { key: "san carlos", label: "San Carlos, Lipa City", lat: 13.959, lon: 121.182, aliases: &[] },
    PlaceSpec { key: "pinagtongulan", label: "Pinagtongulan, Lipa City", lat: 13.951, lon: 121.162, aliases: &["pinagtungulan"] },
    PlaceSpec { key: "adya", label: "Adya, Lipa City", lat: 13.985, lon: 121.168, aliases: &[] },
    PlaceSpec { key: "anilao", label: "Anilao, Lipa City", lat: 13.918, lon: 121.195, aliases: &[] },
    PlaceSpec { key: "antipolo del norte", label: "Antipolo del Norte, Lipa City", lat: 13.965, lon: 121.145, aliases: &[] },
    PlaceSpec { key: "antipolo del sur", label: "Antipolo del Sur, Lipa City", lat: 13.957, lon: 121.141, aliases: &[] },
    PlaceSpec { key: "bagong pook", label: "Bagong Pook, Lipa City", lat: 13.924, lon: 121.158, aliases: &[] },
    PlaceSpec { key: "banaybanay", label: "Banaybanay, Lipa City", lat: 13.930, lon: 121.180, aliases: &["banay banay"] },
    PlaceSpec { key: "bolbok", label: "Bolbok, Lipa City", lat: 13.933, lon: 121.145, aliases: &["bulbok"] },
    PlaceSpec { key: "bugtong na pulo", label: "Bugtong na Pulo, Lipa City", lat: 13.975, lon: 121.135, aliases: &[] },
    PlaceSpec { key: "dagatan", label: "Dagatan, Lipa City", lat: 13.902, lon: 121.212, aliases: &[] },
    PlaceSpec { key: "halang", label: "Halang, Lipa City", lat: 13.920, lon: 121.133, aliases: &[] },
    PlaceSpec { key: "inosloban", label: "Inosloban, Lipa City", lat: 13.973, lon: 121.172, aliases: &[] },
    PlaceSpec { key: "kayumanggi", label: "Kayumanggi, Lipa City", lat: 13.908, lon: 121.155, aliases: &[] },
    PlaceSpec { key: "latag", label: "Latag, Lipa City", lat: 13.895, lon: 121.170, aliases: &[] },
    PlaceSpec { key: "lumbang", label: "Lumbang, Lipa City", lat: 13.899, lon: 121.142, aliases: &[] },
    PlaceSpec { key: "mabini", label: "Mabini, Lipa City", lat: 13.913, lon: 121.177, aliases: &[] },
    PlaceSpec { key: "malitlit", label: "Malitlit, Lipa City", lat: 13.888, lon: 121.186, aliases: &[] },
    PlaceSpec { key: "mataas na lupa", label: "Mataas na Lupa, Lipa City", lat: 13.941, lon: 121.178, aliases: &[] },
    PlaceSpec { key: "munting pulo", label: "Munting Pulo, Lipa City", lat: 13.962, lon: 121.190, aliases: &[] },
    PlaceSpec { key: "pangao", label: "Pangao, Lipa City", lat: 13.890, lon: 121.125, aliases: &[] },
    PlaceSpec { key: "paninsingin", label: "Paninsingin, Lipa City", lat: 13.936, lon: 121.186, aliases: &[] },
    PlaceSpec { key: "pinagkawitan", label: "Pinagkawitan, Lipa City", lat: 13.905, lon: 121.190, aliases: &[] },
    PlaceSpec { key: "plaridel", label: "Plaridel, Lipa City", lat: 13.982, lon: 121.202, aliases: &[] },
    PlaceSpec { key: "quezon", label: "Quezon, Lipa City", lat: 13.917, lon: 121.148, aliases: &[] },
    PlaceSpec { key: "rizal", label: "Rizal, Lipa City", lat: 13.928, lon: 121.137, aliases: &[] },
    PlaceSpec { key: "san benito", label: "San Benito, Lipa City", lat: 13.995, lon: 121.160, aliases: &[] },
    PlaceSpec { key: "san celestino", label: "San Celestino, Lipa City", lat: 13.911, lon: 121.226, aliases: &[] },
    PlaceSpec { key: "san francisco", label: "San Francisco, Lipa City", lat: 13.948, lon: 121.190, aliases: &[] },
    PlaceSpec { key: "san jose", label: "San Jose, Lipa City", lat: 13.925, lon: 121.103, aliases: &[] },
    PlaceSpec { key: "san lucas", label: "San Lucas, Lipa City", lat: 13.904, lon: 121.135, aliases: &[] },
    PlaceSpec { key: "san salvador", label: "San Salvador, Lipa City", lat: 13.894, lon: 121.200, aliases: &[] },
    PlaceSpec { key: "san sebastian", label: "San Sebastian, Lipa City", lat: 13.934, lon: 121.162, aliases: &["balagbag"] },
    PlaceSpec { key: "santo nino", label: "Santo Niño, Lipa City", lat: 13.957, lon: 121.210, aliases: &["sto nino"] },
    PlaceSpec { key: "santo toribio", label: "Santo Toribio, Lipa City", lat: 13.942, lon: 121.128, aliases: &["sto toribio"] },
    PlaceSpec { key: "sapac", label: "Sapac, Lipa City", lat: 13.888, lon: 121.160, aliases: &[] },
    PlaceSpec { key: "talisay", label: "Talisay, Lipa City", lat: 13.952, lon: 121.220, aliases: &[] },
    PlaceSpec { key: "tangob", label: "Tangob, Lipa City", lat: 13.880, lon: 121.145, aliases: &[] },
    PlaceSpec { key: "tibig", label: "Tibig, Lipa City", lat: 13.945, lon: 121.195, aliases: &[] },
    PlaceSpec { key: "tipacan", label: "Tipacan, Lipa City", lat: 13.968, lon: 121.148, aliases: &[] },
    // Poblacion numeric barangays (city core)
    PlaceSpec { key: "poblacion barangay 1", label: "Poblacion Barangay 1, Lipa City", lat: 13.9402, lon: 121.1611, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 2", label: "Poblacion Barangay 2, Lipa City", lat: 13.9408, lon: 121.1620, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 3", label: "Poblacion Barangay 3, Lipa City", lat: 13.9414, lon: 121.1628, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 4", label: "Poblacion Barangay 4, Lipa City", lat: 13.9419, lon: 121.1637, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 5", label: "Poblacion Barangay 5, Lipa City", lat: 13.9425, lon: 121.1645, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 6", label: "Poblacion Barangay 6, Lipa City", lat: 13.9431, lon: 121.1653, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 7", label: "Poblacion Barangay 7, Lipa City", lat: 13.9437, lon: 121.1662, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 8", label: "Poblacion Barangay 8, Lipa City", lat: 13.9443, lon: 121.1670, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 9", label: "Poblacion Barangay 9, Lipa City", lat: 13.9449, lon: 121.1678, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 9 a", label: "Poblacion Barangay 9-A, Lipa City", lat: 13.9453, lon: 121.1684, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 10", label: "Poblacion Barangay 10, Lipa City", lat: 13.9455, lon: 121.1690, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 11", label: "Poblacion Barangay 11, Lipa City", lat: 13.9461, lon: 121.1697, aliases: &[] },
    PlaceSpec { key: "poblacion barangay 12", label: "Poblacion Barangay 12, Lipa City", lat: 13.9467, lon: 121.1705, aliases: &[] },
];
