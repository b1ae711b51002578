use crate::models::Measurements;

/// Merge per-document mappings with the max-wins policy: for each identifier
/// keep the largest value seen. Commutative and associative, so document
/// order (or parallel extraction order) cannot affect the result.
pub fn merge_max<I>(mappings: I) -> Measurements
where
    I: IntoIterator<Item = Measurements>,
{
    let mut merged = Measurements::new();
    for mapping in mappings {
        for (test, value) in mapping.iter() {
            merged.insert_max(test, value);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::LabTest;

    fn mapping(pairs: &[(LabTest, f64)]) -> Measurements {
        pairs.iter().copied().collect()
    }

    #[test]
    fn keeps_largest_value_per_identifier() {
        let a = mapping(&[(LabTest::Glucose, 104.0), (LabTest::Tsh, 2.1)]);
        let b = mapping(&[(LabTest::Glucose, 99.0), (LabTest::Alt, 50.0)]);
        let merged = merge_max([a, b]);
        assert_eq!(merged.get(LabTest::Glucose), Some(104.0));
        assert_eq!(merged.get(LabTest::Tsh), Some(2.1));
        assert_eq!(merged.get(LabTest::Alt), Some(50.0));
    }

    #[test]
    fn merge_is_order_independent() {
        let a = mapping(&[(LabTest::Glucose, 104.0), (LabTest::Urea, 52.0)]);
        let b = mapping(&[(LabTest::Glucose, 131.0)]);
        let ab = merge_max([a.clone(), b.clone()]);
        let ba = merge_max([b, a]);
        assert_eq!(ab, ba);
    }

    #[test]
    fn empty_contribution_changes_nothing() {
        let a = mapping(&[(LabTest::Hemoglobin, 12.8)]);
        let merged = merge_max([a.clone(), Measurements::new()]);
        assert_eq!(merged, a);
    }
}
