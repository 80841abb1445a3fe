//! Party/location splitting.

use std::collections::HashSet;

use crate::models::ParserConfig;

/// Trailing words that look like place names but belong to the party name.
const NON_LOCATION_WORDS: &[&str] = &[
    "BUSINESS", "MACHINE", "STORE", "AGENCY", "TRADERS", "PHARMA", "CHEMIST", "MEDICOS",
    "MEDICAL", "DRUG", "HOUSE", "HALL", "CENTRE", "CENTER",
];

/// Built-in place names, upper case.
const KNOWN_LOCATIONS: &[&str] = &[
    // Major cities
    "DELHI", "MUMBAI", "KOLKATA", "CHENNAI", "BANGALORE", "HYDERABAD", "AHMEDABAD", "PUNE",
    "SURAT", "JAIPUR", "LUCKNOW", "KANPUR", "NAGPUR", "INDORE", "THANE", "BHOPAL", "PATNA",
    "VADODARA", "GHAZIABAD", "LUDHIANA", "AGRA", "NASHIK", "FARIDABAD", "MEERUT", "RAJKOT",
    "VARANASI", "SRINAGAR", "AURANGABAD", "DHANBAD", "AMRITSAR", "JODHPUR", "RAIPUR", "RANCHI",
    "GWALIOR", "CHANDIGARH", "VIJAYAWADA", "MADURAI", "COIMBATORE", "KOCHI", "GUWAHATI",
    "BHUBANESWAR", "DEHRADUN", "NOIDA", "GURUGRAM", "GURGAON", "NCR", "GWALIOUR",
    // Towns and areas seen in receipt books
    "SEKHREJ", "SHAMBHUA", "MUSKRA", "BILLHAUR", "RASULABAD", "MUNGISAPUR", "JUNIHA",
    "MAHARAMAU", "AKBARPUR", "AKABARPUR", "CHIBRAMAU", "DHAURA", "CHAMIYANI", "CHAUDAGRA",
    "BARAUR", "INDERGAR", "GHATAMPUR", "BITHOOR", "BIGHAPUR", "BAIRAGIHAR", "SIKANDRA",
    "ACHALGANJ", "PUKHRAYA", "PUKHRAYAN", "DIBIAPUR", "DIBIYAPUR", "MIYAGANJ", "AURAIYA",
    "LALITPUR", "MAKANPUR", "RAATH", "KHAKHRERU", "SAHAYAL", "CHANI", "SAJETI", "BASIRAT",
    "JALLAUN", "BANGARMAU", "ALIYAPUR", "TIRWA", "BAKEWAR", "BHAUTY", "KANNOUJ", "KONCH",
    "NAWABGANJ", "FATEHPUR", "ORAI", "HARDOI", "UNNAO", "SITAPUR", "ETAWAH", "BANDA", "JHANSI",
    "HAMEERPUR", "BHEWAN", "NABIPUR", "TISTI", "UMARDA", "TALEGRAM", "KENJARI", "KENJARY",
    "JHIJHAK", "HASEERAN", "SHIVRAJPUR", "BAHOSI", "KUDANY", "VISHDHAN", "KAKVAN", "MAUDAHA",
    "JAHANABAD", "MURADIPUR", "PARSAULI", "AJGAIN", "RAMAIPUR", "DHANI", "BARUA", "SAHAR",
    "KHAJUA", "FARRUKHABAD", "LAKHIMPUR", "GONDA", "SHIVLI", "MANIMAU", "ROORA", "ROOMA",
    "RANIA", "NOONARI", "NARWAL", "TIKRA", "BHARUA", "CHHIBRAMAU", "FAZALGANJ", "KALYANPUR",
    "KALYAN", "KAKADEV", "BIRHANA", "MANISHA", "SUMER", "BEEGAHPUR", "HASWA", "SIRATHU",
    "VIJAIPUR", "ATARDHANI", "MAURANIPUR", "SACHENDI", "BITHHOR", "BARAIGHAR", "HAPUR", "GEHLO",
    "DEHAT", "NAUBASTA", "PANKI", "BHAGHPUR", "NARAMAU", "THATHIA", "REWARI", "BAIRAMPUR",
    "GALUAPUR", "SAROSI", "AGAUS", "PATARA", "BANIPARA", "MAQSUDABAD", "TIGAI", "HAIDRABAD",
    "KHEDA", "ALLIPUR", "ASHOTHAR", "THARIYAOAN", "SIMRI", "CHAURA", "CHOWKI", "CHHILLA",
    "SAHLI", "SAKURABAD", "SUMRAHA", "MURADAB", "GURSHAYAN", "BARADEVI", "BARRA", "PATARSA",
    "KHAGA", "KORIYAN", "BHOGNIPUR", "RAJPUR", "SAHJHANPUR",
];

/// Longest trailing word the upper-case fallback accepts as a place name.
const MAX_FALLBACK_LOCATION_LEN: usize = 14;

/// Place-name list used to split a trailing location off a party field.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    locations: Vec<String>,
    non_locations: HashSet<String>,
}

impl Gazetteer {
    /// The built-in place names and exceptions.
    pub fn new() -> Self {
        Self {
            locations: KNOWN_LOCATIONS.iter().map(|s| s.to_string()).collect(),
            non_locations: NON_LOCATION_WORDS.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in lists extended with the configured extras.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new()
            .with_locations(config.extra_locations.iter().map(String::as_str))
            .with_non_locations(config.extra_non_locations.iter().map(String::as_str))
    }

    /// Add place names.
    pub fn with_locations<'a>(mut self, names: impl IntoIterator<Item = &'a str>) -> Self {
        for name in names {
            let name = name.trim().to_uppercase();
            if !name.is_empty() && !self.locations.contains(&name) {
                self.locations.push(name);
            }
        }
        self
    }

    /// Add words that must never be split off as a location.
    pub fn with_non_locations<'a>(mut self, words: impl IntoIterator<Item = &'a str>) -> Self {
        self.non_locations
            .extend(words.into_iter().map(|w| w.trim().to_uppercase()).filter(|w| !w.is_empty()));
        self
    }

    /// Whether `word` names or starts with a known place.
    pub fn is_known_location(&self, word: &str) -> bool {
        let word = word.to_uppercase();
        self.locations.iter().any(|loc| word.starts_with(loc.as_str()))
    }

    /// Split a party field into `(name, location)`.
    ///
    /// The last word is a location when it is a known place, or failing that an
    /// upper-case alphabetic word of 3-14 letters that is not an exception.
    /// Single-word fields never split.
    pub fn split_party_location(&self, text: &str) -> (String, String) {
        let text = text.trim();
        let words: Vec<&str> = text.split_whitespace().collect();
        let Some((&last, rest)) = words.split_last() else {
            return (text.to_string(), String::new());
        };

        let upper = last.to_uppercase();
        if self.non_locations.contains(&upper) || rest.is_empty() {
            return (text.to_string(), String::new());
        }

        let split = || (rest.join(" "), last.to_string());

        if self.is_known_location(&upper) {
            return split();
        }

        let looks_like_place = upper == last
            && upper.len() > 2
            && upper.len() <= MAX_FALLBACK_LOCATION_LEN
            && upper.chars().all(|c| c.is_ascii_uppercase());
        if looks_like_place {
            return split();
        }

        (text.to_string(), String::new())
    }
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> (String, String) {
        Gazetteer::new().split_party_location(text)
    }

    fn pair(name: &str, location: &str) -> (String, String) {
        (name.to_string(), location.to_string())
    }

    #[test]
    fn test_split_known_locations() {
        assert_eq!(split("BABA MEDICAL STORE DELHI"), pair("BABA MEDICAL STORE", "DELHI"));
        assert_eq!(split("SANDHYA MEDICAL LUCKNOW"), pair("SANDHYA MEDICAL", "LUCKNOW"));
        assert_eq!(split("STORE MUMBAI"), pair("STORE", "MUMBAI"));
        assert_eq!(split("GUPTA MEDICAL Kanpur"), pair("GUPTA MEDICAL", "Kanpur"));
    }

    #[test]
    fn test_split_prefix_of_known_location() {
        assert_eq!(split("JAIN MEDICAL ORAIYA"), pair("JAIN MEDICAL", "ORAIYA"));
    }

    #[test]
    fn test_exception_words_stay_in_name() {
        assert_eq!(split("SIMPLE STORE"), pair("SIMPLE STORE", ""));
        assert_eq!(split("SHRI SHYAM AGENCY"), pair("SHRI SHYAM AGENCY", ""));
    }

    #[test]
    fn test_uppercase_fallback() {
        assert_eq!(
            split("UPMANYU TRADERS BIRHANA ROAD"),
            pair("UPMANYU TRADERS BIRHANA", "ROAD")
        );
        // Too short, mixed case, digits, or too long
        assert_eq!(split("KRISHNA MEDICAL UP"), pair("KRISHNA MEDICAL UP", ""));
        assert_eq!(split("KRISHNA MEDICAL Road"), pair("KRISHNA MEDICAL Road", ""));
        assert_eq!(split("KRISHNA MEDICAL 2ND"), pair("KRISHNA MEDICAL 2ND", ""));
        assert_eq!(
            split("KRISHNA ABCDEFGHIJKLMNO"),
            pair("KRISHNA ABCDEFGHIJKLMNO", "")
        );
    }

    #[test]
    fn test_single_word_never_splits() {
        assert_eq!(split("LUCKNOW"), pair("LUCKNOW", ""));
        assert_eq!(split(""), pair("", ""));
    }

    #[test]
    fn test_configured_extras() {
        let config = ParserConfig {
            default_year: None,
            extra_locations: vec!["khapra".to_string()],
            extra_non_locations: vec!["WORKS".to_string()],
        };
        let gazetteer = Gazetteer::from_config(&config);
        assert_eq!(
            gazetteer.split_party_location("NEW DAWA Khapra"),
            pair("NEW DAWA", "Khapra")
        );
        assert_eq!(
            gazetteer.split_party_location("STEEL WORKS"),
            pair("STEEL WORKS", "")
        );
    }
}
