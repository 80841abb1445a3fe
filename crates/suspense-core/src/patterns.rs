//! Common regex patterns for ledger line classification and narration extraction.

use lazy_static::lazy_static;
use regex::Regex;

/// Marker carried by the house suspense account's party field.
pub const SUSPENSE_MARKER: &str = "SUSPENSE A/C";

/// Prefixes that open a bank narration rather than a party line.
pub const NARRATION_PREFIXES: &[&str] = &[
    "UPI/", "NEFT-", "RTGS-", "IMPS/", "MMT/", "CLG/", "INF/", "INFT/", "CHQ.", "CHEQUE",
    "BY CASH", "FT-MESPOS", "BIL/", "NEFT_IN:", "FROM:",
];

lazy_static! {
    // Ledger structure
    pub static ref TRANSACTION_DATE: Regex = Regex::new(
        r"^(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+(\d{1,2})\s+"
    ).unwrap();

    // Trailing amount: plain digits or comma-grouped, optional two decimals
    pub static ref TRAILING_AMOUNT: Regex = Regex::new(
        r"((?:\d{1,3}(?:,\d{2,3})+|\d+)(?:\.\d{2})?)\s*$"
    ).unwrap();

    // e.g. "ICICI 192105002017 11145.00"
    pub static ref BANK_ACCOUNT_LINE: Regex = Regex::new(
        r"(?i)^(ICICI|HDFC|SBI|PNB|AXIS|KOTAK|YES|IDBI|CANARA|BOI|BOB|IDFC|UNION|INDIAN|UCO|CENTRAL|PUNJAB|BARODA|ALLAHABAD|ANDHRA|BANK|STATE)\s+\d+\s+[\d,.]+"
    ).unwrap();

    // "Ag. DDG024782", "Ag. *DDG028429,*DDG028437,..." - everything after the marker goes
    pub static ref INVOICE_REFERENCE: Regex = Regex::new(
        r"\s*\bAg\..*$"
    ).unwrap();

    // "01-04-2025 - 30-06-2025"
    pub static ref HEADER_DATE_RANGE: Regex = Regex::new(
        r"^(\d{2})-(\d{2})-(\d{4})\s+-\s+(\d{2})-(\d{2})-(\d{4})$"
    ).unwrap();

    pub static ref NOISE_LINES: Vec<Regex> = [
        r"(?i)^SUB\s+TOTAL",
        r"(?i)\.\.\.Continued",
        r"(?i)^SUSPENSE\s+A/C",
        r"^-+$",
        r"(?i)^TOTAL\s+[\d,.]+\s+[\d,.]+$",
        r"(?i)^\*\*\*.*\*\*\*$",
        r"(?i)^DATE\s+PARTICULARS\s+DEBIT\s+CREDIT",
        r"(?i)^RECEIPT\s+BOOK",
        r"(?i)^DURGA\s+DAWA\s+GHAR",
        r"^\d{2}-\d{2}-\d{4}\s+-\s+\d{2}-\d{2}-\d{4}$",
        r"(?i)^E-Mail\s*:",
        r"(?i)^D\.?L\.?\s*No\.?\s*:",
        r"(?i)^GSTIN\s*:",
        r"^\d+/\d+,",
        r"(?i)^PAGE\s+\d+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect();

    // Payment modes; these match anywhere since a bank-account line usually comes first
    pub static ref RTGS_MODE: Regex = Regex::new(r"(?i)\sRTGS-|^RTGS-").unwrap();
    pub static ref NEFT_MODE: Regex = Regex::new(r"(?i)\sNEFT-|^NEFT-").unwrap();
    pub static ref IMPS_MODE: Regex = Regex::new(r"(?i)IMPS/|/IMPS/|MMT/IMPS").unwrap();
    pub static ref UPI_MODE: Regex = Regex::new(r"(?i)^UPI/|/UPI/|/UPI$|\sUPI/").unwrap();
    pub static ref CLG_MODE: Regex = Regex::new(r"(?i)\sCLG/|^CLG/").unwrap();
    pub static ref INF_MODE: Regex = Regex::new(r"(?i)\sINF/|^INF/|^INFT/|/INFT/|\sINFT/").unwrap();
    pub static ref CHEQUE_MODE: Regex = Regex::new(r"(?i)Chq\.|Cheque|CHQ").unwrap();
    pub static ref POS_MODE: Regex = Regex::new(r"(?i)FT-MESPOS|MESPOS\s+SET|POS\s+MACHINE").unwrap();
    pub static ref CASH_MODE: Regex = Regex::new(r"(?i)^BY\s+CASH|\sBY\s+CASH|CASH\s+DEP|CAM/").unwrap();

    // UPI handles; the generic form runs against original case
    pub static ref UPI_HANDLE: Regex = Regex::new(
        r"([a-zA-Z0-9][a-zA-Z0-9._-]{1,255}@[a-zA-Z]{1,64})"
    ).unwrap();

    // UPI/<txn_id>/UPI/<upi_id>/<bank>
    pub static ref UPI_AFTER_UPI_TAG: Regex = Regex::new(
        r"UPI/\d+/UPI/([A-Za-z0-9._@-]+)/"
    ).unwrap();

    // UPI/<name>/<upi_id>/PAYMENT FR/<bank>/<ref>/<provider_code>
    pub static ref UPI_BEFORE_PAYMENT_FROM: Regex = Regex::new(
        r"UPI/[^/]+/([A-Za-z0-9._-]+)/PAYMENT FR/"
    ).unwrap();

    // UPI/<txn_id>/<name>/<upi_id>/<location>/<ref>
    pub static ref UPI_AFTER_NAME: Regex = Regex::new(
        r"UPI/\d+/[^/]+/([A-Za-z0-9._@-]+)/"
    ).unwrap();

    // UPI/<name>/<upi_id>/<other>/<bank>/<ref>/<code>
    pub static ref UPI_BEFORE_REFERENCE: Regex = Regex::new(
        r"UPI/[^/]+/([A-Za-z0-9._@-]+)/[^/]+/[^/]+/\d+/"
    ).unwrap();

    // UPI/<upi_id>/<name>/<bank>/<ref>/<code>
    pub static ref UPI_LEADING: Regex = Regex::new(
        r"UPI/([A-Za-z0-9._@-]+)/[^/]+/[^/]+/\d+/[A-Za-z0-9]+$"
    ).unwrap();

    // Ten digits starting 6-9; the digit-run boundary is checked by the caller
    pub static ref PHONE: Regex = Regex::new(r"[6-9]\d{9}").unwrap();

    // Digits of a -<digits>- or trailing -<digits> NEFT/RTGS reference; the dashes are checked by the caller
    pub static ref ACCOUNT_IN_REFERENCE: Regex = Regex::new(r"\d{9,18}").unwrap();

    pub static ref ACCOUNT_LABELED: Regex = Regex::new(
        r"(?i)(?:A/C|ACCT?|ACCOUNT)\s*(?:NO\.?|#)?\s*(\d{9,18})"
    ).unwrap();

    // 4 letters + 0 + 6 alphanumerics
    pub static ref IFSC: Regex = Regex::new(r"[A-Z]{4}0[A-Z0-9]{6}").unwrap();

    // IMPS layouts, tried in this order
    pub static ref IMPS_OK: Regex = Regex::new(
        r"MMT/IMPS/\d{12}/OK/([^/]+)/(.+)"
    ).unwrap();
    pub static ref IMPS_TWO_NAMES: Regex = Regex::new(
        r"MMT/IMPS/\d{12}/([A-Z][A-Z\s]*)/([A-Z][A-Z\s]*)/(.+)"
    ).unwrap();
    pub static ref IMPS_SECONDARY_REF: Regex = Regex::new(
        r"MMT/IMPS/\d{12}/\d+\s*/([^/]+)/(.+)"
    ).unwrap();
    pub static ref IMPS_P2A: Regex = Regex::new(
        r"MMT/IMPS/\d{12}/IMPS P2A\s+([^/]+?)\s*/([^/]+)/(.+)"
    ).unwrap();
    pub static ref IMPS_REQPAY: Regex = Regex::new(
        r"MMT/IMPS/\d{12}/REQPAY/([^/]+?)\s*/(.+)"
    ).unwrap();
    pub static ref IMPS_SIMPLE: Regex = Regex::new(
        r"MMT/IMPS/\d{12}/([A-Z][A-Z\s]*)/([A-Z][A-Z\s]+)$"
    ).unwrap();

    // NEFT/INFT layouts, tried in this order
    pub static ref NEFT_CLASSIC: Regex = Regex::new(
        r"NEFT-[A-Z]{4,5}[A-Z0-9]*\d+-([^-]+)-"
    ).unwrap();
    pub static ref INFT_TWO_NAMES: Regex = Regex::new(
        r"INF/INFT/\d+/[^/]+\s*/([^/]+)"
    ).unwrap();
    pub static ref INFT_SINGLE_NAME: Regex = Regex::new(
        r"INF/INFT/\d+/([A-Z][A-Z\s]+)$"
    ).unwrap();
    pub static ref BIL_INFT: Regex = Regex::new(
        r"BIL/INFT/[A-Z0-9]+/\s*([A-Z][A-Z\s]+)"
    ).unwrap();
    pub static ref NEFT_IN: Regex = Regex::new(
        r"NEFT_IN:[^/]*//[A-Z0-9]+/([A-Z][A-Z\s]+?)(?:\s+AG\.|\s*$)"
    ).unwrap();

    // Cash deposits: "BY CASH -733300 TIRWA (UP) Ag. DDG000201"
    pub static ref CASH_BANK_CODE: Regex = Regex::new(
        r"(?i)BY\s+CASH\s+-(\d{5,8})"
    ).unwrap();
    pub static ref CASH_LOCATION: Regex = Regex::new(
        r"(?i)BY\s+CASH\s+-\d{5,8}\s+([A-Z][A-Za-z]*(?:\s+\([A-Z]{2}\))?)"
    ).unwrap();
    pub static ref CASH_AGENT_CODE: Regex = Regex::new(
        r"\b(?:AG\.?|AGT\.?|AGENCY)\s*\*?([A-Z]{2,4}\d{6,10})"
    ).unwrap();

    // From:XXXX<4 digits>:<SENDER NAME>
    pub static ref MASKED_SOURCE: Regex = Regex::new(
        r"FROM:(X{4}\d{4}):([A-Z][A-Z\s]+)"
    ).unwrap();

    // Sale-bill registers
    pub static ref SALE_HEADER: Regex = Regex::new(
        r"(?i)SALE\s+FROM\s+\d{2}-\d{2}-(\d{4})\s+TO\s+\d{2}-\d{2}-(\d{4})"
    ).unwrap();
    pub static ref SALE_BILL_LINE: Regex = Regex::new(
        r"^([A-Z0-9]+)\s+(\d{2})-(\d{2})\s+(.+?)\s+([\d,]+\.\d{2})$"
    ).unwrap();
    pub static ref CASH_SALE_PARTY: Regex = Regex::new(
        r"(?i)^CASH\s*\(([^)]+)\)"
    ).unwrap();
    pub static ref BARE_NUMBER: Regex = Regex::new(r"^\d+$").unwrap();
}
