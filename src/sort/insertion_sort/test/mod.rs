//! Tests for insertion sort implementations

use super::code;
use super::generate_test_data;
use crate::error::VerifyError;
use crate::suite::{announce, expect_eq, passed};

fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

pub fn test_insert_before() -> Result<(), VerifyError> {
    const NAME: &str = "test_insert_before";
    announce(NAME);

    let mut v = Vec::new();
    let steps: [(i32, &[i32]); 3] = [(3, &[3]), (0, &[0, 3]), (5, &[0, 3, 5])];
    for (x, expected) in steps {
        let before = v.clone();
        code::insert_before(&mut v, x);
        expect_eq(NAME, || format!("insert_before({before:?}, {x})"), expected, v.as_slice())?;
    }

    passed(NAME);
    Ok(())
}

pub fn test_insertion_sort() -> Result<(), VerifyError> {
    const NAME: &str = "test_insertion_sort";
    announce(NAME);

    let cases: [(&[i32], &[i32]); 5] = [
        (&[5, 2, 1, 3, 4], &[1, 2, 3, 4, 5]),
        (&[], &[]),
        (&[1], &[1]),
        (&[2, 2, 1, 1], &[1, 1, 2, 2]),
        (&[-3, 7, 0, -3], &[-3, -3, 0, 7]),
    ];
    for (input, expected) in cases {
        let actual = code::insertion_sort(input);
        expect_eq(NAME, || format!("insertion_sort({input:?})"), expected, actual.as_slice())?;
    }

    passed(NAME);
    Ok(())
}

/// Verify every variant produces the reference output and leaves its input
/// alone.
pub fn verify_all() -> Result<(), VerifyError> {
    let variants = code::available_variants();
    let original = variants
        .iter()
        .find(|v| v.name == "original")
        .ok_or(VerifyError::MissingReference {
            algorithm: "insertion_sort",
        })?;

    let random = generate_test_data(300, 0xC0FF_EE00);
    let mut ascending = random.clone();
    ascending.sort();
    let descending: Vec<i32> = ascending.iter().rev().copied().collect();
    let inputs: [&[i32]; 6] = [&random, &ascending, &descending, &[7; 40], &[], &[1]];

    for input in inputs {
        let pristine = input.to_vec();
        let expected = (original.function)(input);
        if !is_sorted(&expected) || expected.len() != input.len() {
            return Err(VerifyError::VariantMismatch {
                variant: original.name,
                detail: format!("output for {} elements is not a sorted permutation", input.len()),
            });
        }

        for variant in &variants {
            let actual = (variant.function)(input);
            if actual != expected {
                return Err(VerifyError::VariantMismatch {
                    variant: variant.name,
                    detail: format!(
                        "{} elements: expected {:?}, got {:?}",
                        input.len(),
                        expected,
                        actual
                    ),
                });
            }
            if input != pristine.as_slice() {
                return Err(VerifyError::InputModified {
                    variant: variant.name,
                    before: format!("{:?}", pristine),
                    after: format!("{:?}", input),
                });
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

    #[test]
    fn test_routines_pass() {
        test_insert_before().unwrap();
        test_insertion_sort().unwrap();
    }

    #[rstest]
    #[case(vec![], 3, vec![3])]
    #[case(vec![3], 0, vec![0, 3])]
    #[case(vec![0, 3], 5, vec![0, 3, 5])]
    #[case(vec![0, 3, 5], 3, vec![0, 3, 3, 5])]
    #[case(vec![1, 1, 1], 0, vec![0, 1, 1, 1])]
    fn test_insert_before_cases(#[case] mut v: Vec<i32>, #[case] x: i32, #[case] expected: Vec<i32>) {
        let len = v.len();
        code::insert_before(&mut v, x);
        assert_eq!(v, expected);
        assert_eq!(v.len(), len + 1);
    }

    #[test]
    fn test_insert_before_lands_after_equals() {
        let mut v = vec![1, 3, 4];
        code::insert_before(&mut v, 3);
        assert_eq!(v, [1, 3, 3, 4]);

        // Swaps stop at the first predecessor that is not greater.
        let mut v = vec![3, 3, 3];
        code::insert_before(&mut v, 3);
        assert_eq!(v, [3, 3, 3, 3]);
    }

    #[test]
    fn test_insertion_sort_leaves_input() {
        let v = vec![5, 2, 1, 3, 4];
        let sorted = code::insertion_sort(&v);
        assert_eq!(sorted, [1, 2, 3, 4, 5]);
        assert_eq!(v, [5, 2, 1, 3, 4]);
    }

    #[test]
    fn test_in_place_sorts() {
        let mut v = [10, 323, 11, 35, 76, 2, 11, 393, 14];
        code::insertion_sort_in_place(&mut v);
        assert_eq!(v, [2, 10, 11, 11, 14, 35, 76, 323, 393]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let once = code::insertion_sort(&generate_test_data(100, 3));
        assert_eq!(code::insertion_sort(&once), once);
    }
}
