//! Postal-code to region lookup.
//!
//! Spanish postal codes are five digits; the first two identify the
//! province. The table below covers all fifty provinces plus the autonomous
//! cities of Ceuta (51) and Melilla (52).

/// Name returned for a five-character code whose prefix is not in the table.
pub const UNKNOWN_REGION: &str = "Desconocida";

/// Number of characters a postal code must have before a lookup is attempted.
pub const POSTAL_CODE_LENGTH: usize = 5;

/// Two-digit prefix to region name, sorted by prefix.
pub const REGIONS: [(&str, &str); 52] = [
    ("01", "Álava"),
    ("02", "Albacete"),
    ("03", "Alicante"),
    ("04", "Almería"),
    ("05", "Ávila"),
    ("06", "Badajoz"),
    ("07", "Baleares"),
    ("08", "Barcelona"),
    ("09", "Burgos"),
    ("10", "Cáceres"),
    ("11", "Cádiz"),
    ("12", "Castellón"),
    ("13", "Ciudad Real"),
    ("14", "Córdoba"),
    ("15", "A Coruña"),
    ("16", "Cuenca"),
    ("17", "Girona"),
    ("18", "Granada"),
    ("19", "Guadalajara"),
    ("20", "Gipuzkoa"),
    ("21", "Huelva"),
    ("22", "Huesca"),
    ("23", "Jaén"),
    ("24", "León"),
    ("25", "Lleida"),
    ("26", "La Rioja"),
    ("27", "Lugo"),
    ("28", "Madrid"),
    ("29", "Málaga"),
    ("30", "Murcia"),
    ("31", "Navarra"),
    ("32", "Ourense"),
    ("33", "Asturias"),
    ("34", "Palencia"),
    ("35", "Las Palmas"),
    ("36", "Pontevedra"),
    ("37", "Salamanca"),
    ("38", "Santa Cruz de Tenerife"),
    ("39", "Cantabria"),
    ("40", "Segovia"),
    ("41", "Sevilla"),
    ("42", "Soria"),
    ("43", "Tarragona"),
    ("44", "Teruel"),
    ("45", "Toledo"),
    ("46", "Valencia"),
    ("47", "Valladolid"),
    ("48", "Bizkaia"),
    ("49", "Zamora"),
    ("50", "Zaragoza"),
    ("51", "Ceuta"),
    ("52", "Melilla"),
];

/// Look up the region name for a two-character prefix.
pub fn lookup_prefix(prefix: &str) -> Option<&'static str> {
    REGIONS
        .binary_search_by(|(code, _)| (*code).cmp(prefix))
        .ok()
        .map(|idx| REGIONS[idx].1)
}

/// Derive the region for a postal code.
///
/// Returns an empty string unless the input is exactly five characters long.
/// A five-character input whose first two characters are not a known
/// prefix yields [`UNKNOWN_REGION`]. The input is not otherwise checked for
/// digits; that is the postal-code validator's job.
pub fn region_for(postal_code: &str) -> String {
    if postal_code.chars().count() != POSTAL_CODE_LENGTH {
        return String::new();
    }

    let prefix: String = postal_code.chars().take(2).collect();
    lookup_prefix(&prefix).unwrap_or(UNKNOWN_REGION).to_string()
}
