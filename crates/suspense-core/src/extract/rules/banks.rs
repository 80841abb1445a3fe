//! Bank-name normalization.

/// Truncated bank names as they appear in narrations, and their full names.
/// Order matters for the prefix fallback.
const BANK_NAMES: &[(&str, &str)] = &[
    ("UNION BANKOF I", "UNION BANK OF INDIA"),
    ("STATE BANK O", "STATE BANK OF INDIA"),
    ("STATE BANK OF I", "STATE BANK OF INDIA"),
    ("BANK OF BARO", "BANK OF BARODA"),
    ("PUNJAB NATIO", "PUNJAB NATIONAL BANK"),
    ("CANARA BANK", "CANARA BANK"),
    ("HDFC BANK", "HDFC BANK"),
    ("ICICI BANK", "ICICI BANK"),
    ("AXIS BANK", "AXIS BANK"),
    ("KOTAK MAHIND", "KOTAK MAHINDRA BANK"),
    ("INDUSIND BAN", "INDUSIND BANK"),
    ("YES BANK", "YES BANK"),
    ("IDBI BANK", "IDBI BANK"),
    ("CENTRAL BANK", "CENTRAL BANK OF INDIA"),
    ("INDIAN BANK", "INDIAN BANK"),
    ("INDIAN OVERS", "INDIAN OVERSEAS BANK"),
    ("UCO BANK", "UCO BANK"),
    ("BANK OF INDI", "BANK OF INDIA"),
    ("SYNDICATE BA", "SYNDICATE BANK"),
    ("ALLAHABAD BA", "ALLAHABAD BANK"),
    ("CORPORATION", "CORPORATION BANK"),
    ("ORIENTAL BAN", "ORIENTAL BANK OF COMMERCE"),
    ("UNITED BANK", "UNITED BANK OF INDIA"),
    ("DENA BANK", "DENA BANK"),
    ("VIJAYA BANK", "VIJAYA BANK"),
    ("FEDERAL BANK", "FEDERAL BANK"),
    ("SOUTH INDIAN", "SOUTH INDIAN BANK"),
    ("KARNATAKA BA", "KARNATAKA BANK"),
    ("BANDHAN BANK", "BANDHAN BANK"),
    ("RBL BANK", "RBL BANK"),
    ("IDFC FIRST B", "IDFC FIRST BANK"),
    ("AU SMALL FIN", "AU SMALL FINANCE BANK"),
    ("EQUITAS SMAL", "EQUITAS SMALL FINANCE BANK"),
    ("UJJIVAN SMAL", "UJJIVAN SMALL FINANCE BANK"),
    ("PAYTM PAYMEN", "PAYTM PAYMENTS BANK"),
    ("AIRTEL PAYME", "AIRTEL PAYMENTS BANK"),
    ("FINO PAYMENT", "FINO PAYMENTS BANK"),
    ("JIOPAYMENTSB", "JIO PAYMENTS BANK"),
    ("PUNJAB AND SIND", "PUNJAB AND SIND BANK"),
    ("PUNJAB AND S", "PUNJAB AND SIND BANK"),
];

/// Expand a truncated bank name.
///
/// Exact table hits win; otherwise the first entry where either string is a
/// prefix of the other. Unknown names come back trimmed, and empty input
/// stays empty.
pub fn normalize_bank(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Some((_, full)) = BANK_NAMES.iter().find(|(short, _)| *short == raw) {
        return full.to_string();
    }

    BANK_NAMES
        .iter()
        .find(|(short, _)| short.starts_with(raw) || raw.starts_with(short))
        .map_or_else(|| raw.to_string(), |(_, full)| full.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert_eq!(normalize_bank("UNION BANKOF I"), "UNION BANK OF INDIA");
        assert_eq!(normalize_bank(" HDFC BANK "), "HDFC BANK");
        assert_eq!(normalize_bank("PUNJAB AND S"), "PUNJAB AND SIND BANK");
    }

    #[test]
    fn test_prefix_match_both_ways() {
        assert_eq!(normalize_bank("YES BANK LTD"), "YES BANK");
        assert_eq!(normalize_bank("BANK OF BARODA"), "BANK OF BARODA");
        assert_eq!(normalize_bank("KOTAK"), "KOTAK MAHINDRA BANK");
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(normalize_bank("SARASWAT CO-OP"), "SARASWAT CO-OP");
        assert_eq!(normalize_bank("   "), "");
    }
}
