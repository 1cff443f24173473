use dynamic_array::{DynamicArray, Error};
use quickcheck::TestResult;
use quickcheck_macros::quickcheck;

fn build(values: &[i32]) -> DynamicArray<i32> {
    let mut arr = DynamicArray::with_capacity(0).unwrap();
    for &val in values {
        arr.push(val);
    }
    arr
}

fn is_sorted_by<T>(values: &[T], mut le: impl FnMut(&T, &T) -> bool) -> bool {
    values.windows(2).all(|w| le(&w[0], &w[1]))
}

#[quickcheck]
fn push_counts_and_keeps_order(values: Vec<i32>) -> bool {
    let arr = build(&values);
    arr.len() == values.len() && arr == values && arr.capacity() >= arr.len()
}

#[quickcheck]
fn set_then_get(values: Vec<i32>, index: usize, val: i32) -> TestResult {
    if values.is_empty() {
        return TestResult::discard();
    }
    let index = index % values.len();
    let mut arr = build(&values);
    let mut expected = values;
    expected[index] = val;

    arr.set(index, val).unwrap();
    TestResult::from_bool(arr.get(index) == Ok(&val) && arr == expected)
}

#[quickcheck]
fn insert_shifts_right(values: Vec<i32>, index: usize, val: i32) -> bool {
    let index = index % (values.len() + 1);
    let mut arr = build(&values);
    let mut expected = values;
    expected.insert(index, val);

    arr.insert(index, val).unwrap();
    arr == expected
}

#[quickcheck]
fn remove_shifts_left(values: Vec<i32>, index: usize) -> TestResult {
    if values.is_empty() {
        return TestResult::discard();
    }
    let index = index % values.len();
    let mut arr = build(&values);
    let mut expected = values;
    let removed = expected.remove(index);

    TestResult::from_bool(arr.remove(index) == Ok(removed) && arr == expected)
}

#[quickcheck]
fn out_of_range_leaves_array_untouched(values: Vec<i32>, past_end: u8) -> bool {
    let len = values.len();
    let mut arr = build(&values);
    let get_index = len + past_end as usize;
    let insert_index = len + 1 + past_end as usize;

    arr.get(get_index) == Err(Error::IndexOutOfRange { index: get_index, len })
        && arr.set(get_index, 0) == Err(Error::IndexOutOfRange { index: get_index, len })
        && arr.remove(get_index) == Err(Error::IndexOutOfRange { index: get_index, len })
        && arr.insert(insert_index, 0) == Err(Error::IndexOutOfRange { index: insert_index, len })
        && arr == values
}

#[quickcheck]
fn clear_empties(values: Vec<i32>) -> bool {
    let mut arr = build(&values);
    let capacity = arr.capacity();
    arr.clear();
    let once = arr.is_empty() && arr.capacity() == capacity;
    arr.clear();
    once && arr.is_empty()
}

#[quickcheck]
fn sort_is_ordered_permutation(values: Vec<i32>) -> bool {
    let mut arr = build(&values);
    let mut expected = values;
    expected.sort();

    arr.sort();
    is_sorted_by(arr.as_slice(), |a, b| a <= b) && arr == expected
}

#[quickcheck]
fn sort_by_comparator(values: Vec<(u8, u8)>) -> bool {
    let mut arr = DynamicArray::new();
    arr.extend(values.iter().copied());

    // Ties on the key may come out in any order.
    arr.sort_by(|a, b| b.0.cmp(&a.0));
    let ordered = is_sorted_by(arr.as_slice(), |a, b| a.0 >= b.0);

    let mut got = arr.as_slice().to_vec();
    let mut expected = values;
    got.sort();
    expected.sort();
    ordered && got == expected
}

#[quickcheck]
fn sort_partial_orders_floats(values: Vec<f64>) -> TestResult {
    if values.iter().any(|v| v.is_nan()) {
        return TestResult::discard();
    }
    let mut arr = DynamicArray::from(values.as_slice());
    if arr.sort_partial().is_err() {
        return TestResult::failed();
    }
    TestResult::from_bool(arr.len() == values.len() && is_sorted_by(arr.as_slice(), |a, b| a <= b))
}
