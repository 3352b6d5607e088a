#[cfg(test)]
mod tests {
    use super::super::engine::{convert, resolve};
    use super::super::error::ConversionError;
    use super::super::table::{entries, factor};
    use super::super::types::Resolution;

    const SAMPLE_VALUES: [f64; 6] = [0.0, 1.0, 2.5, -3.75, 123456.789, 1e-6];

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
    }

    #[test]
    fn test_every_row_converts_forward_by_multiplication() {
        for entry in entries() {
            for v in SAMPLE_VALUES {
                assert_eq!(
                    convert(v, entry.from, entry.to).unwrap(),
                    v * entry.factor,
                    "{} {} -> {}",
                    v,
                    entry.from,
                    entry.to
                );
            }
        }
    }

    #[test]
    fn test_rows_without_listed_reverse_invert_by_division() {
        for entry in entries().filter(|e| factor(e.to, e.from).is_none()) {
            for v in SAMPLE_VALUES {
                assert_eq!(
                    convert(v, entry.to, entry.from).unwrap(),
                    v / entry.factor,
                    "{} {} -> {}",
                    v,
                    entry.to,
                    entry.from
                );
            }
        }
    }

    #[test]
    fn test_round_trip_returns_original_value() {
        for entry in entries().filter(|e| factor(e.to, e.from).is_none()) {
            for v in SAMPLE_VALUES {
                let there = convert(v, entry.from, entry.to).unwrap();
                let back = convert(there, entry.to, entry.from).unwrap();
                assert!(
                    approx_eq(back, v),
                    "{} {} -> {} -> {} gave {}",
                    v,
                    entry.from,
                    entry.to,
                    entry.from,
                    back
                );
            }
        }
    }

    #[test]
    fn test_listed_reverse_pairs_are_reciprocal_except_concentration_pair() {
        for entry in entries() {
            if let Some(reverse) = factor(entry.to, entry.from) {
                let pair = (entry.from, entry.to);
                if pair == ("mg/mL", "g/L") || pair == ("g/L", "mg/mL") {
                    continue;
                }
                assert!(
                    approx_eq(entry.factor * reverse, 1.0),
                    "{} <-> {} is not reciprocal",
                    entry.from,
                    entry.to
                );
            }
        }
    }

    #[test]
    fn test_direct_entry_takes_precedence_over_inversion() {
        // Both directions are stored for mg/mL and g/L, each with its own factor
        assert_eq!(
            resolve("g/L", "mg/mL"),
            Some(Resolution::Direct { factor: 1000.0 })
        );
        assert_eq!(
            resolve("mg/mL", "g/L"),
            Some(Resolution::Direct { factor: 1.0 })
        );
        assert_eq!(convert(3.0, "g/L", "mg/mL").unwrap(), 3000.0);
        assert_eq!(convert(3.0, "mg/mL", "g/L").unwrap(), 3.0);
    }

    #[test]
    fn test_unsupported_pair_names_both_units() {
        let err = convert(1.0, "mg", "mL").unwrap_err();
        assert_eq!(
            err,
            ConversionError::Unsupported {
                from: "mg".to_string(),
                to: "mL".to_string()
            }
        );
        assert_eq!(err.to_string(), "Conversion from mg to mL not supported.");
    }

    #[test]
    fn test_no_transitive_chaining() {
        // mg -> g and g -> kg exist, but mg -> kg is not composed
        assert!(convert(1.0, "mg", "kg").is_err());
        assert!(convert(1.0, "kg", "mg").is_err());
        // %w/v -> ppm -> mg/L would bridge, but is not attempted
        assert!(convert(1.0, "%w/v", "mg/L").is_err());
    }

    #[test]
    fn test_unknown_and_mis_cased_units() {
        assert!(convert(1.0, "lb", "kg").is_err());
        assert!(convert(1.0, "G", "mg").is_err());
        assert!(convert(1.0, "ML", "L").is_err());
        assert!(convert(1.0, "", "L").is_err());
    }

    #[test]
    fn test_percent_weight_volume_to_ppm() {
        assert_eq!(convert(100.0, "%w/v", "ppm").unwrap(), 1_000_000.0);
    }

    #[test]
    fn test_grams_and_milligrams() {
        assert_eq!(convert(5.0, "g", "mg").unwrap(), 5000.0);
        assert_eq!(convert(5000.0, "mg", "g").unwrap(), 5.0);
    }

    #[test]
    fn test_molar_and_millimolar() {
        assert_eq!(convert(2.0, "M", "mM").unwrap(), 2000.0);
        assert_eq!(convert(2000.0, "mM", "M").unwrap(), 2.0);
    }

    #[test]
    fn test_inverse_only_pairs() {
        assert_eq!(convert(10.0, "mg/mL", "%w/v").unwrap(), 1.0);
        assert_eq!(convert(20000.0, "ppm", "%w/w").unwrap(), 2.0);
        assert_eq!(convert(1.0, "g/L", "%w/v").unwrap(), 0.1);
    }
}
