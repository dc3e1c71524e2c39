/// Name of the decision variable at `index` (0-based): `x1`, `x2`, ...
pub fn variable_name(index: usize) -> String {
    format!("x{}", index + 1)
}

/// Names for `count` decision variables, in index order.
pub fn variable_names(count: usize) -> Vec<String> {
    (0..count).map(variable_name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_follow_index() {
        for n in 1..=12 {
            let names = variable_names(n);
            assert_eq!(names.len(), n);
            for (i, name) in names.iter().enumerate() {
                assert_eq!(name, &format!("x{}", i + 1));
            }
        }
    }

    #[test]
    fn test_zero_count() {
        assert!(variable_names(0).is_empty());
    }
}
