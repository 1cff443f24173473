use core::cmp::Ordering;

/// Sorts `v` in place with a recursive Lomuto quicksort.
///
/// Not stable. Already sorted (or reverse sorted) input degrades to *O*(*n*²)
/// time and *O*(*n*) recursion depth, because the pivot is always the last element.
pub(crate) fn quick_sort<T, F>(v: &mut [T], compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return;
    }
    let pivot = partition(v, compare);
    let (left, right) = v.split_at_mut(pivot);
    quick_sort(left, compare);
    quick_sort(&mut right[1..], compare);
}

/// Moves every element that is not greater than the last one to the front,
/// then swaps the pivot in behind them and returns its final position.
fn partition<T, F>(v: &mut [T], compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    let high = v.len() - 1;
    // Next slot for an element `<= pivot`.
    let mut boundary = 0;
    for j in 0..high {
        if compare(&v[j], &v[high]) != Ordering::Greater {
            v.swap(boundary, j);
            boundary += 1;
        }
    }
    v.swap(boundary, high);
    boundary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_places_pivot() {
        let mut v = [7, 2, 9, 1, 5];
        let p = partition(&mut v, &mut Ord::cmp);
        assert_eq!(p, 2);
        assert_eq!(v[p], 5);
        assert!(v[..p].iter().all(|x| *x <= 5));
        assert!(v[p + 1..].iter().all(|x| *x > 5));
    }

    #[test]
    fn test_partition_lomuto_order() {
        // Elements `<= pivot` keep their relative scan order on the left.
        let mut v = [3, 8, 1, 6, 2, 4];
        let p = partition(&mut v, &mut Ord::cmp);
        assert_eq!(p, 3);
        assert_eq!(v, [3, 1, 2, 4, 8, 6]);
    }

    #[test]
    fn test_partition_all_equal() {
        let mut v = [4, 4, 4, 4];
        assert_eq!(partition(&mut v, &mut Ord::cmp), 3);
    }

    #[test]
    fn test_quick_sort_small() {
        let mut empty: [u8; 0] = [];
        quick_sort(&mut empty, &mut Ord::cmp);

        let mut one = [1];
        quick_sort(&mut one, &mut Ord::cmp);
        assert_eq!(one, [1]);

        let mut two = [2, 1];
        quick_sort(&mut two, &mut Ord::cmp);
        assert_eq!(two, [1, 2]);
    }

    #[test]
    fn test_quick_sort_duplicates_and_reverse() {
        let mut v = [5, 3, 5, 1, 3, 9, 0, 5];
        quick_sort(&mut v, &mut Ord::cmp);
        assert_eq!(v, [0, 1, 3, 3, 5, 5, 5, 9]);

        quick_sort(&mut v, &mut |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(v, [9, 5, 5, 5, 3, 3, 1, 0]);
    }
}
