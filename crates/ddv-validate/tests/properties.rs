use chrono::NaiveDate;
use ddv_model::{
    AdvisorError, ClassWordTypeMap, SampleGenerator, SampleRequest, SampleValues, ValidationStatus,
};
use ddv_standards::default_class_word_type_map;
use ddv_validate::{
    SampleInput, SampleSynthesizer, TokenSet, canonicalize, class_word, is_numeric_token,
    missing_tokens, tokenize,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

struct Offline;

impl SampleGenerator for Offline {
    fn generate(&self, _: &SampleRequest) -> Result<SampleValues, AdvisorError> {
        Err(AdvisorError::Disabled)
    }
}

fn approved_strategy() -> impl Strategy<Value = TokenSet> {
    prop::collection::btree_set("[A-Z]{2,4}", 0..8)
}

proptest! {
    #[test]
    fn missing_is_empty_iff_every_part_is_approved_or_numeric(
        parts in prop::collection::vec("[A-Z]{1,3}|[0-9]{1,2}", 1..5),
        approved in approved_strategy(),
    ) {
        let identifier = parts.join("_");
        let missing = missing_tokens(&tokenize(&identifier), &approved);
        let all_known = parts
            .iter()
            .all(|part| approved.contains(part) || is_numeric_token(part));
        prop_assert_eq!(missing.is_empty(), all_known);
    }

    #[test]
    fn canonicalize_is_idempotent(name in "[a-zA-Z ]{0,40}") {
        let once = canonicalize(&name);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn known_prefix_passes_iff_type_is_expected(
        index in 0usize..10,
        data_type in "(INT|BIGINT|VARCHAR|VARCHAR2|TEXT|DATE|TIME|DECIMAL|FLOAT|BOOLEAN|CHAR|NUMBER|GEOGRAPHY)",
    ) {
        let types: ClassWordTypeMap = default_class_word_type_map();
        let (code, expected) = types.iter().nth(index).expect("ten default class words");
        let column = format!("{code}_XYZ");
        let check = class_word::check(&column, &data_type, "Sample", &types);
        let member = expected.contains(&data_type);
        prop_assert_eq!(check.status == ValidationStatus::Pass, member);
    }

    #[test]
    fn synthesize_always_yields_three_values(
        column in "[A-Z_]{1,12}",
        data_type in "(INT|BIGINT|DECIMAL|FLOAT|DATE|DATETIME|TIMESTAMP|TIME|VARCHAR|BLOB)",
        precision in 0u32..40,
        scale in 0u32..40,
        seed in any::<u64>(),
    ) {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");
        let synthesizer = SampleSynthesizer::new(today, &Offline);
        let input = SampleInput {
            data_type: &data_type,
            precision,
            scale,
            column_name: &column,
            description: "",
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let samples = synthesizer.synthesize(&input, &mut rng);
        prop_assert_eq!(samples.len(), 3);
        prop_assert!(samples.iter().all(|value| !value.is_empty()));
    }
}
