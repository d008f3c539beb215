//! Compliance warnings surfaced on claim forms.
//!
//! Warnings are advisory: they accompany a successful result and the caller
//! decides whether one blocks submission. Their text is printed verbatim on the
//! generated documents, so it is kept in Thai.

use std::fmt;

use rust_decimal::Decimal;

/// Formats a baht amount with thousands separators and a fixed number of decimals.
///
/// # Examples
///
/// ```
/// use travel_claim_engine::models::format_baht;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_baht(Decimal::new(123456789, 2), 2), "1,234,567.89");
/// assert_eq!(format_baht(Decimal::new(2200, 0), 0), "2,200");
/// ```
pub fn format_baht(amount: Decimal, decimals: u32) -> String {
    let text = format!("{:.*}", decimals as usize, amount.round_dp(decimals));
    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// A non-blocking compliance caveat attached to a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComplianceWarning {
    /// Receipts and the hotel folio must be attached.
    ReceiptRequired,
    /// Receipted accommodation spend is above the ceiling for the stay.
    AccommodationCeilingExceeded {
        /// The receipted spend.
        actual_cost: Decimal,
        /// The ceiling for all nights.
        ceiling_total: Decimal,
    },
    /// Training at a state venue is capped using the general travel tables.
    StateVenueCeiling,
    /// Receipted spend at a state training venue is above the general ceiling.
    StateVenueCeilingExceeded {
        /// The ceiling for all nights.
        ceiling_total: Decimal,
    },
    /// Junior grades training at a private venue must share a room.
    DoubleOccupancyRequired,
    /// A public-transport fare is above the cap for its route class.
    FareCapExceeded {
        /// The fare paid.
        actual_cost: Decimal,
        /// The cap for the route.
        cap: Decimal,
    },
}

impl fmt::Display for ComplianceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComplianceWarning::ReceiptRequired => {
                f.write_str("ต้องแนบใบเสร็จรับเงิน (Receipt) และ Folio ประกอบการเบิก")
            }
            ComplianceWarning::AccommodationCeilingExceeded {
                actual_cost,
                ceiling_total,
            } => write!(
                f,
                "ค่าที่พักจริง ({} บาท) เกินเพดาน ({} บาท) — เบิกได้ไม่เกินเพดาน",
                format_baht(*actual_cost, 2),
                format_baht(*ceiling_total, 2)
            ),
            ComplianceWarning::StateVenueCeiling => {
                f.write_str("ฝึกอบรม ณ สถานที่ราชการ — ใช้เพดานจ่ายจริงตามอัตรา General")
            }
            ComplianceWarning::StateVenueCeilingExceeded { ceiling_total } => write!(
                f,
                "เกินเพดาน — เบิกได้ไม่เกิน {} บาท",
                format_baht(*ceiling_total, 2)
            ),
            ComplianceWarning::DoubleOccupancyRequired => f.write_str(
                "ระดับ C1-C8 ฝึกอบรม ณ สถานที่เอกชน — ต้องพักคู่ (Double) เท่านั้น\n\
                 หากจำเป็นต้องพักเดี่ยว ต้องมีหนังสือรับรองเหตุผลความจำเป็นในการไม่พักคู่",
            ),
            ComplianceWarning::FareCapExceeded { actual_cost, cap } => write!(
                f,
                "ค่าโดยสารจริง ({} บาท) เกินวงเงิน ({} บาท) — เบิกได้ไม่เกินวงเงิน",
                format_baht(*actual_cost, 2),
                format_baht(*cap, 2)
            ),
        }
    }
}
