//! Tests for linear search implementations

use super::code::{self, ScanOrder};
use super::generate_test_data;
use crate::error::VerifyError;
use crate::suite::{announce, expect_eq, passed};

/// `(v, x, expected)` fixtures shared by the whole-slice searches.
const INT_FIXTURES: &[(&[i32], i32, Option<usize>)] = &[
    (&[5, 2, 1, 3, 4], 1, Some(2)),
    (&[5, 2, 1, 3, 4], 2, Some(1)),
    (&[5, 2, 1, 3, 4], 3, Some(3)),
    (&[5, 2, 1, 3, 4], 4, Some(4)),
    (&[5, 2, 1, 3, 4], 5, Some(0)),
    (&[5, 2, 1, 3, 4], 6, None),
    (&[], 1, None),
    (&[1], 1, Some(0)),
    (&[1], -2, None),
    (&[1], 2, None),
];

/// `(v, x, begin, end, expected)` fixtures for the range searches.
const RANGE_FIXTURES: &[(&[i32], i32, usize, usize, Option<usize>)] = &[
    (&[5, 2, 1, 3, 4], 1, 0, 4, Some(2)),
    (&[5, 2, 1, 3, 4], 2, 1, 3, Some(1)),
    (&[5, 2, 1, 3, 4], 3, 2, 5, Some(3)),
    (&[5, 2, 1, 3, 4], 4, 4, 5, Some(4)),
    (&[5, 2, 1, 3, 4], 5, 0, 5, Some(0)),
    (&[5, 2, 1, 3, 4], 6, 0, 5, None),
    (&[], 1, 0, 0, None),
    (&[1], 1, 0, 1, Some(0)),
    (&[1], -2, 0, 1, None),
    (&[1], 2, 0, 1, None),
];

const TEXT_FIXTURES: &[(&str, char, Option<usize>)] = &[
    ("hello", 'h', Some(0)),
    ("hello", 'e', Some(1)),
    ("hello", 'l', Some(2)),
    ("hello", 'o', Some(4)),
    ("hello", 'x', None),
    ("", 'x', None),
    ("x", 'x', Some(0)),
    ("x", 'y', None),
];

/// Run `search` over [`INT_FIXTURES`], also checking the input comes back
/// unchanged.
fn run_int_fixtures<F>(routine: &'static str, label: &str, mut search: F) -> Result<(), VerifyError>
where
    F: FnMut(&mut [i32], i32) -> Option<usize>,
{
    for &(fixture, x, expected) in INT_FIXTURES {
        let mut v = fixture.to_vec();
        let actual = search(&mut v, x);
        expect_eq(routine, || format!("{label}({fixture:?}, {x})"), expected, actual)?;
        expect_eq(routine, || format!("{label}({fixture:?}, {x}) input"), fixture, v.as_slice())?;
    }
    Ok(())
}

fn run_range_fixtures<F>(routine: &'static str, label: &str, search: F) -> Result<(), VerifyError>
where
    F: Fn(&[i32], i32, usize, usize) -> Option<usize>,
{
    for &(v, x, begin, end, expected) in RANGE_FIXTURES {
        let actual = search(v, x, begin, end);
        expect_eq(
            routine,
            || format!("{label}({v:?}, {x}, {begin}, {end})"),
            expected,
            actual,
        )?;
    }
    Ok(())
}

pub fn test_linear_search1() -> Result<(), VerifyError> {
    const NAME: &str = "test_linear_search1";
    announce(NAME);
    run_int_fixtures(NAME, "linear_search1", |v, x| code::linear_search1(v, x))?;
    passed(NAME);
    Ok(())
}

pub fn test_linear_search1a() -> Result<(), VerifyError> {
    const NAME: &str = "test_linear_search1a";
    announce(NAME);
    for &(s, c, expected) in TEXT_FIXTURES {
        let actual = code::linear_search1a(s, c);
        expect_eq(NAME, || format!("linear_search1a({s:?}, {c:?})"), expected, actual)?;
    }
    passed(NAME);
    Ok(())
}

pub fn test_reverse_linear_search() -> Result<(), VerifyError> {
    const NAME: &str = "test_reverse_linear_search";
    announce(NAME);
    // The fixtures have no repeated values, so forward and backward agree.
    run_int_fixtures(NAME, "reverse_linear_search", |v, x| code::reverse_linear_search(v, x))?;

    let v = [7, 1, 7, 2, 7];
    expect_eq(NAME, || format!("reverse_linear_search({v:?}, 7)"), Some(4), code::reverse_linear_search(&v, 7))?;
    passed(NAME);
    Ok(())
}

pub fn test_location_of() -> Result<(), VerifyError> {
    const NAME: &str = "test_location_of";
    announce(NAME);
    for &(v, x, expected) in INT_FIXTURES {
        // Only fixtures that satisfy the precondition.
        let Some(expected) = expected else { continue };
        // SAFETY: the fixture says x is at `expected`.
        let actual = unsafe { code::location_of(v, x) };
        expect_eq(NAME, || format!("location_of({v:?}, {x})"), expected, actual)?;
    }
    passed(NAME);
    Ok(())
}

pub fn test_linear_search2() -> Result<(), VerifyError> {
    const NAME: &str = "test_linear_search2";
    announce(NAME);
    run_int_fixtures(NAME, "linear_search2", code::linear_search2)?;

    // Target only in the sentinel slot, and target both inside and at the end.
    let mut v = vec![5, 2, 1, 3, 4];
    expect_eq(NAME, || "linear_search2([5, 2, 1, 3, 4], 4)".to_string(), Some(4), code::linear_search2(&mut v, 4))?;
    let mut v = vec![4, 2, 4];
    expect_eq(NAME, || "linear_search2([4, 2, 4], 4)".to_string(), Some(0), code::linear_search2(&mut v, 4))?;
    expect_eq(NAME, || "linear_search2([4, 2, 4], 4) input".to_string(), vec![4, 2, 4], v)?;
    passed(NAME);
    Ok(())
}

pub fn test_linear_search3() -> Result<(), VerifyError> {
    const NAME: &str = "test_linear_search3";
    announce(NAME);
    run_range_fixtures(NAME, "linear_search3", code::linear_search3)?;
    passed(NAME);
    Ok(())
}

pub fn test_linear_search4() -> Result<(), VerifyError> {
    const NAME: &str = "test_linear_search4";
    announce(NAME);
    run_int_fixtures(NAME, "linear_search4", |v, x| code::linear_search4_all(v, x))?;
    run_range_fixtures(NAME, "linear_search4", code::linear_search4)?;
    passed(NAME);
    Ok(())
}

/// Verify every variant against the reference for its scan order, and that
/// no variant leaves its input modified.
pub fn verify_all() -> Result<(), VerifyError> {
    let variants = code::available_variants();
    let original = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or(VerifyError::MissingReference {
            algorithm: "linear_search",
        })?;

    let (unique, repeated) = generate_test_data(257, 0x5EED_1234);
    let datasets: [&[i32]; 4] = [&unique, &repeated, &[], &[1]];

    for data in datasets {
        let mut targets: Vec<i32> = data.iter().copied().step_by(3).collect();
        targets.extend([-1, i32::MIN, i32::MAX, data.len() as i32]);

        for &x in &targets {
            let mut reference_input = data.to_vec();
            let forward = (original.function)(&mut reference_input, x);
            let backward = data.iter().rposition(|&e| e == x);

            for variant in &variants {
                let mut input = data.to_vec();
                let actual = (variant.function)(&mut input, x);
                let expected = match variant.order {
                    ScanOrder::Forward => forward,
                    ScanOrder::Backward => backward,
                };

                if actual != expected {
                    return Err(VerifyError::VariantMismatch {
                        variant: variant.name,
                        detail: format!(
                            "target {} in {} elements: expected {:?}, got {:?}",
                            x,
                            data.len(),
                            expected,
                            actual
                        ),
                    });
                }
                if input != data {
                    return Err(VerifyError::InputModified {
                        variant: variant.name,
                        before: format!("{:?}", data),
                        after: format!("{:?}", input),
                    });
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_all_variants() {
        verify_all().expect("All variants should produce correct results");
    }

    #[rstest]
    #[case::linear_search1(test_linear_search1)]
    #[case::linear_search1a(test_linear_search1a)]
    #[case::reverse_linear_search(test_reverse_linear_search)]
    #[case::location_of(test_location_of)]
    #[case::linear_search2(test_linear_search2)]
    #[case::linear_search3(test_linear_search3)]
    #[case::linear_search4(test_linear_search4)]
    fn test_routine_passes(#[case] routine: fn() -> Result<(), VerifyError>) {
        routine().unwrap();
    }

    #[rstest]
    #[case(1, Some(2))]
    #[case(2, Some(1))]
    #[case(5, Some(0))]
    #[case(6, None)]
    fn test_every_variant_on_source_fixture(#[case] x: i32, #[case] expected: Option<usize>) {
        for variant in code::available_variants() {
            let mut v = vec![5, 2, 1, 3, 4];
            assert_eq!((variant.function)(&mut v, x), expected, "{}", variant.name);
            assert_eq!(v, [5, 2, 1, 3, 4], "{} modified its input", variant.name);
        }
    }

    #[test]
    fn test_empty_input_all_variants() {
        for variant in code::available_variants() {
            let mut v: Vec<i32> = Vec::new();
            assert_eq!((variant.function)(&mut v, 1), None, "{}", variant.name);
        }
        assert_eq!(code::linear_search3(&[], 1, 0, 0), None);
        assert_eq!(code::linear_search4(&[], 1, 0, 0), None);
        assert_eq!(code::linear_search1a("", 'a'), None);
    }

    #[test]
    fn test_duplicates_tie_break() {
        let v = [1, 2, 4, 4, 4, 5, 6];
        assert_eq!(code::linear_search1(&v, 4), Some(2));
        assert_eq!(code::reverse_linear_search(&v, 4), Some(4));
        assert_eq!(code::linear_search2(&mut v.to_vec(), 4), Some(2));
        assert_eq!(code::linear_search3(&v, 4, 3, 7), Some(3));
        assert_eq!(code::linear_search4(&v, 4, 3, 7), Some(3));
    }

    #[test]
    fn test_range_excludes_end() {
        let v = [5, 2, 1, 3, 4];
        assert_eq!(code::linear_search3(&v, 4, 0, 4), None);
        assert_eq!(code::linear_search4(&v, 4, 0, 4), None);
        assert_eq!(code::linear_search3(&v, 5, 1, 5), None);
        assert_eq!(code::linear_search4(&v, 5, 1, 5), None);
    }

    #[test]
    fn test_empty_range() {
        let v = [5, 2, 1, 3, 4];
        for i in 0..=v.len() {
            assert_eq!(code::linear_search3(&v, 5, i, i), None);
            assert_eq!(code::linear_search4(&v, 5, i, i), None);
        }
    }

    #[test]
    fn test_recursive_search_on_deep_range() {
        let mut v = vec![0i32; 200_000];
        assert_eq!(code::linear_search4(&v, 1, 0, v.len()), None);
        assert_eq!(code::linear_search4_all(&v, 1), code::linear_search3(&v, 1, 0, v.len()));

        v[150_001] = 1;
        v[199_999] = 1;
        assert_eq!(code::linear_search4_all(&v, 1), Some(150_001));
        assert_eq!(code::linear_search4(&v, 1, 150_002, 200_000), Some(199_999));
        assert_eq!(code::linear_search4(&v, 1, 0, 150_001), None);
    }

    #[test]
    fn test_text_counts_chars_not_bytes() {
        assert_eq!(code::linear_search1a("héllo", 'l'), Some(2));
        assert_eq!(code::linear_search1a("héllo", 'é'), Some(1));
    }

    #[test]
    fn test_fixture_mismatch_is_reported() {
        let err = run_int_fixtures("probe", "always_none", |_, _| None).unwrap_err();
        assert!(matches!(err, VerifyError::Mismatch { routine: "probe", .. }));
    }

    #[test]
    fn test_input_modification_is_reported() {
        let err = run_int_fixtures("probe", "clobber", |v, x| {
            let found = code::linear_search1(v, x);
            if let Some(first) = v.first_mut() {
                *first = 99;
            }
            found
        })
        .unwrap_err();
        assert!(err.to_string().contains("input"));
    }
}
