/// All `k`-element selections of `items`, each keeping the input order.
///
/// Results come out in lexicographic order of item index.
pub fn combinations<T: Clone>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k > items.len() {
        return Vec::new();
    }
    if k == 0 {
        return vec![Vec::new()];
    }
    if k == items.len() {
        return vec![items.to_vec()];
    }
    if k == 1 {
        return items.iter().map(|item| vec![item.clone()]).collect();
    }

    let mut result = Vec::new();
    let mut current = Vec::with_capacity(k);
    collect(items, k, 0, &mut current, &mut result);
    result
}

fn collect<T: Clone>(
    items: &[T],
    k: usize,
    idx: usize,
    current: &mut Vec<T>,
    result: &mut Vec<Vec<T>>,
) {
    if current.len() == k {
        result.push(current.clone());
        return;
    }
    if idx >= items.len() {
        return;
    }

    current.push(items[idx].clone());
    collect(items, k, idx + 1, current, result);
    current.pop();

    // Skipping items[idx] only helps if enough items remain to finish.
    if items.len() - (idx + 1) >= k - current.len() {
        collect(items, k, idx + 1, current, result);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn binomial(n: usize, k: usize) -> usize {
        (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
    }

    #[test]
    fn zero_yields_one_empty_selection() {
        let result = combinations(&[1, 2, 3], 0);
        assert_eq!(result, vec![Vec::<i32>::new()]);
    }

    #[test]
    fn full_length_yields_everything() {
        assert_eq!(combinations(&[1, 2, 3], 3), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn singletons() {
        assert_eq!(combinations(&['a', 'b'], 1), vec![vec!['a'], vec!['b']]);
    }

    #[test]
    fn too_many_yields_nothing() {
        assert!(combinations(&[1, 2], 3).is_empty());
        assert!(combinations::<u8>(&[], 1).is_empty());
    }

    #[test]
    fn pairs_in_index_order() {
        assert_eq!(
            combinations(&[1, 2, 3, 4], 2),
            vec![
                vec![1, 2],
                vec![1, 3],
                vec![1, 4],
                vec![2, 3],
                vec![2, 4],
                vec![3, 4]
            ]
        );
    }

    #[test]
    fn four_subsets_are_complete_and_distinct() {
        let items: Vec<u32> = (0..9).collect();
        let result = combinations(&items, 4);
        assert_eq!(result.len(), binomial(9, 4));

        let distinct: HashSet<Vec<u32>> = result.iter().cloned().collect();
        assert_eq!(distinct.len(), result.len());

        for combo in &result {
            assert_eq!(combo.len(), 4);
            assert!(combo.windows(2).all(|w| w[0] < w[1]));
        }

        let covered: HashSet<u32> = result.into_iter().flatten().collect();
        assert_eq!(covered.len(), items.len());
    }

    #[test]
    fn triples_of_points() {
        let pts = [(0, 0), (1, 0), (0, 1), (1, 1), (2, 2)];
        let result = combinations(&pts, 3);
        assert_eq!(result.len(), 10);
        assert_eq!(result[0], vec![(0, 0), (1, 0), (0, 1)]);
        assert_eq!(result[9], vec![(0, 1), (1, 1), (2, 2)]);
    }
}
