//! Payment-mode detection and cash-deposit fields.

use regex::Regex;

use crate::models::PaymentMode;
use crate::patterns::{
    CASH_BANK_CODE, CASH_LOCATION, CASH_MODE, CHEQUE_MODE, CLG_MODE, IMPS_MODE, INF_MODE,
    NEFT_MODE, POS_MODE, RTGS_MODE, UPI_MODE,
};

/// Mode patterns in priority order. Wire-transfer markers come before the
/// generic ones they would otherwise be shadowed by.
fn mode_rules() -> [(PaymentMode, &'static Regex); 9] {
    [
        (PaymentMode::Rtgs, &*RTGS_MODE),
        (PaymentMode::Neft, &*NEFT_MODE),
        (PaymentMode::Imps, &*IMPS_MODE),
        (PaymentMode::Upi, &*UPI_MODE),
        (PaymentMode::Clg, &*CLG_MODE),
        (PaymentMode::Inf, &*INF_MODE),
        (PaymentMode::Cheque, &*CHEQUE_MODE),
        (PaymentMode::Pos, &*POS_MODE),
        (PaymentMode::Cash, &*CASH_MODE),
    ]
}

/// Detect the payment mode of a narration. First matching rule wins.
pub fn detect_payment_mode(narration: &str) -> PaymentMode {
    mode_rules()
        .into_iter()
        .find(|(_, pattern)| pattern.is_match(narration))
        .map(|(mode, _)| mode)
        .unwrap_or(PaymentMode::Other)
}

/// Bank code and location of a `BY CASH -<code> <place>[ (ST)]` narration.
pub fn cash_deposit_fields(narration: &str) -> Option<(String, String)> {
    let upper = narration.to_uppercase();
    let code = CASH_BANK_CODE.captures(&upper)?[1].to_string();
    let location = CASH_LOCATION.captures(&upper)?[1].trim().to_string();
    Some((code, location))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_each_mode() {
        let cases = [
            ("ICICI 1921 100.00 RTGS-HDFCR52025 GUPTA", PaymentMode::Rtgs),
            ("NEFT-SBIN125123456789-GUPTA MEDICAL-", PaymentMode::Neft),
            ("MMT/IMPS/527412932576/DURGA/AGNIHOTRIM/UNION BANKOF I", PaymentMode::Imps),
            ("UPI/512345678901/UPI/9450852076@YBL/HDFCBANK LTD/", PaymentMode::Upi),
            ("CLG/GUPTA MEDICAL/HDFC", PaymentMode::Clg),
            ("INF/INFT/037123456/RAM KUMAR", PaymentMode::Inf),
            ("Chq.704339 Dt. 26-12-2025", PaymentMode::Cheque),
            ("FT-MESPOS SET 123", PaymentMode::Pos),
            ("BY CASH -733300 TIRWA (UP)", PaymentMode::Cash),
            ("", PaymentMode::Other),
            ("SOMETHING ELSE", PaymentMode::Other),
        ];
        for (narration, expected) in cases {
            assert_eq!(detect_payment_mode(narration), expected, "{narration}");
        }
    }

    #[test]
    fn test_priority_order() {
        // Bank line followed by a UPI narration that mentions IMPS
        let narration = "ICICI 192105002017 11145.00 UPI/IMPS/123 RTGS-ABC";
        assert_eq!(detect_payment_mode(narration), PaymentMode::Rtgs);
        assert_eq!(
            detect_payment_mode("ICICI 192105002017 500.00 UPI/IMPS/123"),
            PaymentMode::Imps
        );
    }

    #[test]
    fn test_cash_deposit_fields() {
        assert_eq!(
            cash_deposit_fields("BY CASH -733300 TIRWA (UP)"),
            Some(("733300".to_string(), "TIRWA (UP)".to_string()))
        );
        assert_eq!(
            cash_deposit_fields("ICICI 1921 500.00 BY CASH -12345 Kanpur"),
            Some(("12345".to_string(), "KANPUR".to_string()))
        );
        assert_eq!(cash_deposit_fields("BY CASH"), None);
    }
}
