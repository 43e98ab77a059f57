//! Rule-based sample value synthesis.
//!
//! Dispatch is table driven: the keyword rules are tried against the
//! lower-cased column name, then the type rules against the data type family.
//! Anything left over goes to the [`SampleGenerator`] fallback.

use chrono::{Days, NaiveDate};
use ddv_model::{DictionaryRow, SampleGenerator, SampleRequest, SampleValues, error_placeholder};
use rand::Rng;
use tracing::warn;

/// Number of values produced per column.
pub const SAMPLE_COUNT: usize = 3;

/// Currency prefix for monetary samples.
pub const CURRENCY_PREFIX: &str = "$";

/// Inclusive day offsets for past dates.
pub const PAST_DATE_OFFSET_DAYS: (u64, u64) = (5000, 30000);

const ID_RANGE: (u32, u32) = (1000, 9999);
const CURRENCY_RANGE: (u64, u64) = (10, 10000);
const DEFAULT_INTEGER_RANGE: (u64, u64) = (1, 9999);
const DEFAULT_DECIMAL_DIGITS: u32 = 4;
const MAX_DECIMAL_DIGITS: u32 = 15;
const MAX_INTEGER_DIGITS: u32 = 18;
const MAX_FRACTION_DIGITS: u32 = 18;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleKind {
    PastDate,
    Identifier,
    Currency,
    Decimal,
    Integer,
    PastTimestamp,
    TimeOfDay,
    /// Delegated to the external generator.
    Generated,
}

/// Column-name keywords mapped to a sample kind.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub kind: SampleKind,
}

/// Data type family prefix mapped to a sample kind.
#[derive(Debug, Clone, Copy)]
pub struct TypeRule {
    pub type_prefix: &'static str,
    pub kind: SampleKind,
}

pub const SAMPLE_KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        keywords: &["date", "dob", "birth"],
        kind: SampleKind::PastDate,
    },
    KeywordRule {
        keywords: &["id", "code", "ref"],
        kind: SampleKind::Identifier,
    },
    KeywordRule {
        keywords: &["price", "amount", "cost"],
        kind: SampleKind::Currency,
    },
];

// DATETIME and TIMESTAMP must precede DATE and TIME.
pub const SAMPLE_TYPE_RULES: &[TypeRule] = &[
    TypeRule {
        type_prefix: "DECIMAL",
        kind: SampleKind::Decimal,
    },
    TypeRule {
        type_prefix: "FLOAT",
        kind: SampleKind::Decimal,
    },
    TypeRule {
        type_prefix: "INT",
        kind: SampleKind::Integer,
    },
    TypeRule {
        type_prefix: "BIGINT",
        kind: SampleKind::Integer,
    },
    TypeRule {
        type_prefix: "DATETIME",
        kind: SampleKind::PastTimestamp,
    },
    TypeRule {
        type_prefix: "TIMESTAMP",
        kind: SampleKind::PastTimestamp,
    },
    TypeRule {
        type_prefix: "DATE",
        kind: SampleKind::PastDate,
    },
    TypeRule {
        type_prefix: "TIME",
        kind: SampleKind::TimeOfDay,
    },
];

/// The row attributes sample synthesis looks at.
#[derive(Debug, Clone, Copy)]
pub struct SampleInput<'a> {
    pub data_type: &'a str,
    pub precision: u32,
    pub scale: u32,
    pub column_name: &'a str,
    pub description: &'a str,
}

impl<'a> SampleInput<'a> {
    pub fn from_row(row: &'a DictionaryRow) -> Self {
        Self {
            data_type: &row.data_type,
            precision: row.precision,
            scale: row.scale,
            column_name: &row.column_name,
            description: &row.description,
        }
    }
}

/// First matching keyword rule, then first matching type rule.
pub fn classify(column_name: &str, data_type: &str) -> SampleKind {
    let column = column_name.to_lowercase();
    if let Some(rule) = SAMPLE_KEYWORD_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|keyword| column.contains(keyword)))
    {
        return rule.kind;
    }
    let family = ddv_model::data_type_family(data_type);
    SAMPLE_TYPE_RULES
        .iter()
        .find(|rule| family.starts_with(rule.type_prefix))
        .map_or(SampleKind::Generated, |rule| rule.kind)
}

/// Integer-part digit count for DECIMAL/FLOAT samples.
fn decimal_digits(precision: u32, scale: u32) -> u32 {
    if precision == 0 {
        return DEFAULT_DECIMAL_DIGITS;
    }
    precision.saturating_sub(scale).min(MAX_DECIMAL_DIGITS)
}

/// Half-open range of the integer part of DECIMAL/FLOAT samples.
pub fn decimal_range(precision: u32, scale: u32) -> (u64, u64) {
    match decimal_digits(precision, scale) {
        0 => (0, 1),
        digits => (10u64.pow(digits - 1), 10u64.pow(digits)),
    }
}

/// Inclusive value range for INT/BIGINT samples.
pub fn integer_range(precision: u32) -> (u64, u64) {
    if precision == 0 {
        return DEFAULT_INTEGER_RANGE;
    }
    let digits = precision.min(MAX_INTEGER_DIGITS);
    (10u64.pow(digits - 1), 10u64.pow(digits) - 1)
}

fn fraction_digits(scale: u32) -> usize {
    scale.min(MAX_FRACTION_DIGITS) as usize
}

/// Fixed-point value with an integer part in `[low, high)` and `places`
/// fraction digits. Drawn in scaled units so rounding never reaches `high`.
fn fixed_point<R: Rng + ?Sized>(rng: &mut R, (low, high): (u64, u64), places: usize) -> String {
    let unit = 10u128.pow(places as u32);
    let raw = rng.gen_range(u128::from(low) * unit..u128::from(high) * unit);
    if places == 0 {
        raw.to_string()
    } else {
        format!("{}.{:0places$}", raw / unit, raw % unit)
    }
}

/// Synthesizes three sample values per row.
pub struct SampleSynthesizer<'a> {
    today: NaiveDate,
    fallback: &'a dyn SampleGenerator,
}

impl<'a> SampleSynthesizer<'a> {
    pub fn new(today: NaiveDate, fallback: &'a dyn SampleGenerator) -> Self {
        Self { today, fallback }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Always exactly three values; fallback failures become the error
    /// placeholder.
    pub fn synthesize<R: Rng + ?Sized>(&self, input: &SampleInput<'_>, rng: &mut R) -> SampleValues {
        match classify(input.column_name, input.data_type) {
            SampleKind::PastDate => {
                self.fill(rng, |rng| self.past_date(rng).format("%Y-%m-%d").to_string())
            }
            SampleKind::PastTimestamp => self.fill(rng, |rng| {
                let date = self.past_date(rng);
                format!("{} {}", date.format("%Y-%m-%d"), clock_time(rng))
            }),
            SampleKind::TimeOfDay => self.fill(rng, clock_time),
            SampleKind::Identifier => self.fill(rng, |rng| {
                format!("ID{}", rng.gen_range(ID_RANGE.0..=ID_RANGE.1))
            }),
            SampleKind::Currency => {
                let places = fraction_digits(input.scale);
                self.fill(rng, |rng| {
                    format!("{CURRENCY_PREFIX}{}", fixed_point(rng, CURRENCY_RANGE, places))
                })
            }
            SampleKind::Decimal => {
                let range = decimal_range(input.precision, input.scale);
                let places = fraction_digits(input.scale);
                self.fill(rng, |rng| fixed_point(rng, range, places))
            }
            SampleKind::Integer => {
                let (low, high) = integer_range(input.precision);
                self.fill(rng, |rng| rng.gen_range(low..=high).to_string())
            }
            SampleKind::Generated => self.generated(input),
        }
    }

    fn fill<R, F>(&self, rng: &mut R, mut make: F) -> SampleValues
    where
        R: Rng + ?Sized,
        F: FnMut(&mut R) -> String,
    {
        std::array::from_fn(|_| make(rng))
    }

    fn past_date<R: Rng + ?Sized>(&self, rng: &mut R) -> NaiveDate {
        let offset = rng.gen_range(PAST_DATE_OFFSET_DAYS.0..=PAST_DATE_OFFSET_DAYS.1);
        self.today
            .checked_sub_days(Days::new(offset))
            .unwrap_or(NaiveDate::MIN)
    }

    fn generated(&self, input: &SampleInput<'_>) -> SampleValues {
        let request = SampleRequest {
            column_name: input.column_name.to_string(),
            description: input.description.to_string(),
            precision: input.precision,
            scale: input.scale,
        };
        match self.fallback.generate(&request) {
            Ok(values) => values,
            Err(error) => {
                warn!(column = %input.column_name, %error, "sample generation failed");
                error_placeholder(&error.to_string())
            }
        }
    }
}

fn clock_time<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        rng.gen_range(0..24u32),
        rng.gen_range(0..60u32),
        rng.gen_range(0..60u32)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ddv_model::AdvisorError;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct Unavailable;

    impl SampleGenerator for Unavailable {
        fn generate(&self, _: &SampleRequest) -> Result<SampleValues, AdvisorError> {
            Err(AdvisorError::Network("connection refused".to_string()))
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")
    }

    fn input<'a>(column: &'a str, data_type: &'a str, precision: u32, scale: u32) -> SampleInput<'a> {
        SampleInput {
            data_type,
            precision,
            scale,
            column_name: column,
            description: "",
        }
    }

    #[test]
    fn keyword_rules_take_priority() {
        assert_eq!(classify("BIRTH_DTE", "INT"), SampleKind::PastDate);
        assert_eq!(classify("CUS_ID", "DATE"), SampleKind::Identifier);
        assert_eq!(classify("UNIT_PRICE", "VARCHAR"), SampleKind::Currency);
    }

    #[test]
    fn type_rules_by_family_prefix() {
        assert_eq!(classify("ORD_DTE", "DATE"), SampleKind::PastDate);
        assert_eq!(classify("ORD_TMS", "TIMESTAMP"), SampleKind::PastTimestamp);
        assert_eq!(classify("ORD_TME", "TIME"), SampleKind::TimeOfDay);
        assert_eq!(classify("ORD_AMT", "DECIMAL(12,2)"), SampleKind::Decimal);
        assert_eq!(classify("ORD_CNT", "BIGINT"), SampleKind::Integer);
        assert_eq!(classify("CUS_NAM", "VARCHAR"), SampleKind::Generated);
    }

    #[test]
    fn decimal_range_guards_degenerate_precision() {
        assert_eq!(decimal_range(5, 2), (100, 1000));
        assert_eq!(decimal_range(2, 2), (0, 1));
        assert_eq!(decimal_range(2, 5), (0, 1));
        assert_eq!(decimal_range(0, 0), (1000, 10000));
    }

    #[test]
    fn integer_range_by_precision() {
        assert_eq!(integer_range(0), (1, 9999));
        assert_eq!(integer_range(1), (1, 9));
        assert_eq!(integer_range(3), (100, 999));
        assert_eq!(integer_range(40), (10u64.pow(17), 10u64.pow(18) - 1));
    }

    #[test]
    fn dates_are_in_the_past() {
        let synthesizer = SampleSynthesizer::new(today(), &Unavailable);
        let mut rng = StdRng::seed_from_u64(7);
        for value in synthesizer.synthesize(&input("ORD_DTE", "DATE", 0, 0), &mut rng) {
            let date = NaiveDate::parse_from_str(&value, "%Y-%m-%d").expect("date sample");
            let age = (today() - date).num_days();
            assert!((5000..=30000).contains(&age), "{value} is {age} days old");
        }
    }

    #[test]
    fn currency_uses_scale() {
        let synthesizer = SampleSynthesizer::new(today(), &Unavailable);
        let mut rng = StdRng::seed_from_u64(7);
        for value in synthesizer.synthesize(&input("ORD_AMOUNT", "DECIMAL", 10, 2), &mut rng) {
            let digits = value.strip_prefix('$').expect("currency prefix");
            let (_, fraction) = digits.split_once('.').expect("two decimals");
            assert_eq!(fraction.len(), 2);
        }
    }

    #[test]
    fn zero_scale_decimal_has_no_fraction() {
        let synthesizer = SampleSynthesizer::new(today(), &Unavailable);
        let mut rng = StdRng::seed_from_u64(3);
        for value in synthesizer.synthesize(&input("ORD_QTY", "DECIMAL", 3, 0), &mut rng) {
            let number: u32 = value.parse().expect("integral value");
            assert!((100..1000).contains(&number), "{value} exceeds three digits");
        }
    }

    #[test]
    fn fixed_point_stays_below_the_upper_bound() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..2000 {
            let value = fixed_point(&mut rng, (100, 1000), 0);
            assert!(value.len() == 3, "{value} has more than three digits");
            let scaled = fixed_point(&mut rng, (0, 1), 2);
            let (whole, fraction) = scaled.split_once('.').expect("fraction");
            assert_eq!(whole, "0");
            assert_eq!(fraction.len(), 2);
        }
    }

    #[test]
    fn fallback_failure_yields_placeholder() {
        let synthesizer = SampleSynthesizer::new(today(), &Unavailable);
        let mut rng = StdRng::seed_from_u64(1);
        let samples = synthesizer.synthesize(&input("CUS_NAM", "VARCHAR", 0, 0), &mut rng);
        assert_eq!(samples[0], "Error: network error: connection refused");
        assert_eq!(samples[1], "N/A");
        assert_eq!(samples[2], "N/A");
    }
}
