//! Property-based tests for configuration system.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat};
use proptest::prelude::*;

fn output_format_strategy() -> impl Strategy<Value = OutputFormat> {
    prop_oneof![Just(OutputFormat::Text), Just(OutputFormat::Json)]
}

// Strategy for generating configs
fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(any::<bool>()),
        prop::option::of(output_format_strategy()),
    )
        .prop_map(|(nocase, output_format)| Config {
            nocase,
            output_format,
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Configuration merging preserves non-None values from higher precedence
    #[test]
    fn config_merge_higher_precedence_wins(low in config_strategy(), high in config_strategy()) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        prop_assert_eq!(merged.nocase, high.nocase.or(low.nocase));
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
    }

    // Merging a config into itself changes nothing
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Serialized configs parse back to the same value
    #[test]
    fn config_yaml_roundtrip(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }

    // Defaults only fill gaps
    #[test]
    fn config_defaults_preserve_set_values(config in config_strategy()) {
        let defaulted = config.clone().with_defaults();
        prop_assert_eq!(defaulted.nocase, Some(config.nocase.unwrap_or(false)));
        prop_assert_eq!(defaulted.output_format, Some(config.output_format()));
    }
}
