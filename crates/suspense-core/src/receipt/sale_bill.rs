//! Sale-bill register parsing.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::SaleBill;
use crate::patterns::{BARE_NUMBER, CASH_SALE_PARTY, SALE_BILL_LINE, SALE_HEADER};

use super::dates::calendar_date;
use super::parser::LedgerParser;

/// Parser for `<bill> DD-MM <party> <amount>` registers.
#[derive(Debug, Clone, Copy, Default)]
pub struct SaleBillParser;

impl SaleBillParser {
    pub fn new() -> Self {
        Self
    }

    fn parse_line(&self, line: &str, year: i32) -> Option<SaleBill> {
        let caps = SALE_BILL_LINE.captures(line)?;
        let day: u32 = caps[2].parse().ok()?;
        let month: u32 = caps[3].parse().ok()?;
        let Some(date) = calendar_date(year, month, day) else {
            debug!("Skipping bill with invalid date: {}", line);
            return None;
        };
        let amount = Decimal::from_str(&caps[5].replace(',', "")).ok()?;

        let party = caps[4].trim();
        let (party_name, is_cash_sale) = match CASH_SALE_PARTY.captures(party) {
            Some(cash) => (cash[1].trim().to_string(), true),
            None => (party.to_string(), party.eq_ignore_ascii_case("CASH")),
        };

        Some(SaleBill {
            bill_number: caps[1].to_string(),
            date,
            party_name,
            amount,
            is_cash_sale,
        })
    }
}

/// The `TO` year of a `SALE FROM .. TO ..` header.
pub fn header_year(text: &str) -> Option<i32> {
    text.lines()
        .find_map(|line| SALE_HEADER.captures(line))
        .and_then(|caps| caps[2].parse().ok())
}

fn is_skipped(line: &str) -> bool {
    let upper = line.to_uppercase();
    upper.contains("SALE FROM")
        || upper.contains("BILL NO")
        || upper.contains("BILLNO")
        || upper.contains("PARTY NAME")
        || upper.contains("PARTYNAME")
        || upper.starts_with("PAGE")
        || upper.starts_with("TOTAL")
        || upper.starts_with("GRAND TOTAL")
        || upper.contains("CONTINUED")
        || line.starts_with("---")
        || line.starts_with("===")
        || BARE_NUMBER.is_match(line)
}

impl LedgerParser for SaleBillParser {
    type Record = SaleBill;

    /// `year` is used only when the register has no header.
    fn parse(&self, text: &str, year: i32) -> Vec<SaleBill> {
        let year = header_year(text).unwrap_or(year);

        let bills: Vec<SaleBill> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !is_skipped(line))
            .filter_map(|line| self.parse_line(line, year))
            .collect();

        info!("Parsed {} sale bills", bills.len());
        bills
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const REGISTER: &str = "\
DURGA DAWA GHAR
SALE FROM 01-04-2024 TO 31-03-2025
BILL NO DATE PARTY NAME AMOUNT
---------------------------------
A240100001 01-04 GUPTA MEDICAL STORE 1,234.56
A240100002 02-04 CASH (RAM KUMAR) 250.00
A240100003 02-04 CASH 99.00
Page 1
TOTAL 1,583.56
12";

    #[test]
    fn test_parse_register() {
        let bills = SaleBillParser::new().parse(REGISTER, 2020);
        assert_eq!(bills.len(), 3);

        assert_eq!(bills[0].bill_number, "A240100001");
        assert_eq!(bills[0].date, NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(bills[0].party_name, "GUPTA MEDICAL STORE");
        assert_eq!(bills[0].amount, Decimal::new(123456, 2));
        assert!(!bills[0].is_cash_sale);

        assert_eq!(bills[1].party_name, "RAM KUMAR");
        assert!(bills[1].is_cash_sale);

        assert_eq!(bills[2].party_name, "CASH");
        assert!(bills[2].is_cash_sale);
    }

    #[test]
    fn test_default_year_without_header() {
        let bills = SaleBillParser::new().parse("B1 15-08 SHARMA DRUG HOUSE 10.00", 2023);
        assert_eq!(bills[0].date, NaiveDate::from_ymd_opt(2023, 8, 15).unwrap());
    }

    #[test]
    fn test_invalid_month_is_skipped() {
        assert!(SaleBillParser::new().parse("B1 15-13 SHARMA DRUG HOUSE 10.00", 2023).is_empty());
    }

    #[test]
    fn test_header_year() {
        assert_eq!(header_year(REGISTER), Some(2025));
        assert_eq!(header_year("no header"), None);
    }
}
