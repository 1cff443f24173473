use core::{
    cmp::Ordering,
    fmt,
    mem::{replace, MaybeUninit},
    ops::{Index, IndexMut},
    ptr,
};
use log::{debug, trace};

mod error;
mod partial_eq;
mod sort;

pub use error::{Error, Result};

/// Capacity of an array created with [`DynamicArray::new`].
pub const DEFAULT_CAPACITY: usize = 10;

/// SAFETY: Caller must ensure that `dest` is properly initialized.
unsafe fn take<T>(dest: &mut MaybeUninit<T>) -> T {
    replace(dest, MaybeUninit::uninit()).assume_init()
}

fn uninit_slots<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    (0..capacity).map(|_| MaybeUninit::uninit()).collect()
}

#[cold]
#[inline(never)]
#[track_caller]
fn index_failed(index: usize, len: usize) -> ! {
    panic!("{}", Error::IndexOutOfRange { index, len });
}

/// A resizable array backed by one contiguous allocation.
///
/// Slots `[0, len)` hold live elements, the rest of the allocation is unused.
/// The allocation doubles when it is full and never shrinks.
pub struct DynamicArray<T> {
    len: usize,
    data: Box<[MaybeUninit<T>]>,
}

impl<T> DynamicArray<T> {
    /// Creates an empty array with room for [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, DEFAULT_CAPACITY};
    ///
    /// let array: DynamicArray<u8> = DynamicArray::new();
    /// assert_eq!(array.len(), 0);
    /// assert_eq!(array.capacity(), DEFAULT_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self {
            len: 0,
            data: uninit_slots(DEFAULT_CAPACITY),
        }
    }

    /// Creates an empty array with room for `capacity` elements.
    ///
    /// A capacity of zero is allowed, the first push allocates a single slot.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `capacity` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let array = DynamicArray::<u8>::with_capacity(15).unwrap();
    /// assert_eq!(array.capacity(), 15);
    ///
    /// let err = DynamicArray::<u8>::with_capacity(-1).unwrap_err();
    /// assert_eq!(err, Error::InvalidArgument(-1));
    /// ```
    pub fn with_capacity(capacity: isize) -> Result<Self> {
        let capacity =
            usize::try_from(capacity).map_err(|_| Error::InvalidArgument(capacity))?;
        Ok(Self {
            len: 0,
            data: uninit_slots(capacity),
        })
    }

    /// Returns the number of elements the array can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Returns the number of elements currently in the array.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let array = DynamicArray::from([1, 2]);
    /// assert_eq!(array.len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extracts a slice of the live elements.
    pub fn as_slice(&self) -> &[T] {
        self.as_ref()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: `self.data[..self.len]` is initialized.
        unsafe { &mut *(&mut self.data[..self.len] as *mut [MaybeUninit<T>] as *mut [T]) }
    }

    /// Appends an element to the back of the array, growing the storage if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::with_capacity(0).unwrap();
    /// array.push(1);
    /// array.push(2);
    /// array.push(3);
    /// assert_eq!(array, [1, 2, 3]);
    /// ```
    pub fn push(&mut self, val: T) {
        self.reserve_one();
        self.data[self.len] = MaybeUninit::new(val);
        self.len += 1;
    }

    /// Inserts an element at position `index`, shifting all elements after it to the right.
    ///
    /// `index` may equal [`len`](Self::len), which appends.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index > len`. The array is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2]);
    /// array.insert(1, 3).unwrap();
    /// assert_eq!(array, [1, 3, 2]);
    /// assert!(array.insert(5, 9).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, val: T) -> Result<()> {
        self.check_insert_index(index)?;
        self.reserve_one();
        for i in (index..self.len).rev() {
            self.data[i + 1] = replace(&mut self.data[i], MaybeUninit::uninit());
        }
        self.data[index] = MaybeUninit::new(val);
        self.len += 1;
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let array = DynamicArray::from([42]);
    /// assert_eq!(array.get(0), Ok(&42));
    /// assert_eq!(array.get(5), Err(Error::IndexOutOfRange { index: 5, len: 1 }));
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        self.check_index(index)?;
        Ok(&self.as_slice()[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.check_index(index)?;
        Ok(&mut self.as_mut_slice()[index])
    }

    /// Replaces the element at `index`, dropping the previous one.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3]);
    /// array.set(1, 5).unwrap();
    /// assert_eq!(array, [1, 5, 3]);
    /// ```
    pub fn set(&mut self, index: usize, val: T) -> Result<()> {
        *self.get_mut(index)? = val;
        Ok(())
    }

    /// Removes the element at `index` and returns it, shifting all elements after it to the left.
    ///
    /// # Errors
    ///
    /// [`Error::IndexOutOfRange`] if `index >= len`. The array is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([10, 20, 30]);
    /// assert_eq!(array.remove(1), Ok(20));
    /// assert_eq!(array, [10, 30]);
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        // SAFETY: `index < self.len`, so the slot is initialized.
        let value = unsafe { take(&mut self.data[index]) };
        self.len -= 1;
        for i in index..self.len {
            self.data[i] = replace(&mut self.data[i + 1], MaybeUninit::uninit());
        }
        Ok(value)
    }

    /// Drops every element. The capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([1, 2, 3]);
    /// array.clear();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 3);
    /// ```
    pub fn clear(&mut self) {
        let live: *mut [T] = self.as_mut_slice();
        self.len = 0;
        // SAFETY: `live` covered exactly the initialized slots, which are no
        // longer reachable now that `len` is zero.
        unsafe {
            ptr::drop_in_place(live);
        }
    }

    /// Sorts the array by the elements' natural order.
    ///
    /// Uses quicksort with the last element of each range as pivot, so the
    /// sort is not stable and already ordered input costs *O*(*n*²).
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([3, 1, 4, 2]);
    /// array.sort();
    /// assert_eq!(array, [1, 2, 3, 4]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp)
    }

    /// Sorts the array by [`PartialOrd`], for element types that only have a
    /// partial order, such as floats.
    ///
    /// Only the first element is checked: if it is not comparable with itself
    /// (`NaN`), nothing is sorted. Any other incomparable element is treated
    /// as greater than the pivot it is compared with.
    ///
    /// # Errors
    ///
    /// [`Error::UnsupportedOperation`] if the array is non-empty and its first
    /// element has no ordering. The array is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::{DynamicArray, Error};
    ///
    /// let mut array = DynamicArray::from([2.5, -1.0, 0.5]);
    /// array.sort_partial().unwrap();
    /// assert_eq!(array, [-1.0, 0.5, 2.5]);
    ///
    /// let mut array = DynamicArray::from([f64::NAN, 1.0]);
    /// assert_eq!(array.sort_partial(), Err(Error::UnsupportedOperation));
    /// ```
    pub fn sort_partial(&mut self) -> Result<()>
    where
        T: PartialOrd,
    {
        if let Some(first) = self.as_slice().first() {
            if first.partial_cmp(first).is_none() {
                return Err(Error::UnsupportedOperation);
            }
        }
        self.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Greater));
        Ok(())
    }

    /// Sorts the array with a comparator function.
    ///
    /// # Examples
    ///
    /// ```
    /// use dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from([3, 1, 4, 2]);
    /// array.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(array, [4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        trace!("sorting {} elements", self.len);
        sort::quick_sort(self.as_mut_slice(), &mut compare);
    }

    //============================================================

    fn reserve_one(&mut self) {
        if self.len < self.capacity() {
            return;
        }
        // Doubling zero stays zero.
        let new_capacity = self.capacity().saturating_mul(2).max(1);
        debug!("growing storage from {} to {} slots", self.capacity(), new_capacity);

        let mut data = uninit_slots(new_capacity);
        for (dst, src) in data.iter_mut().zip(&mut self.data[..self.len]) {
            *dst = replace(src, MaybeUninit::uninit());
        }
        self.data = data;
    }

    fn check_insert_index(&self, index: usize) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AsRef<[T]> for DynamicArray<T> {
    fn as_ref(&self) -> &[T] {
        // SAFETY: `self.data[..self.len]` is initialized.
        unsafe { &*(&self.data[..self.len] as *const [MaybeUninit<T>] as *const [T]) }
    }
}

impl<T> Index<usize> for DynamicArray<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(val) => val,
            Err(_) => index_failed(index, self.len),
        }
    }
}

impl<T> IndexMut<usize> for DynamicArray<T> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len;
        match self.get_mut(index) {
            Ok(val) => val,
            Err(_) => index_failed(index, len),
        }
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        let mut array = Self {
            len: 0,
            data: uninit_slots(self.capacity()),
        };
        for val in self.as_slice() {
            array.push(val.clone());
        }
        array
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for val in iter {
            self.push(val);
        }
    }
}

impl<T: Clone> From<&[T]> for DynamicArray<T> {
    fn from(values: &[T]) -> Self {
        let mut array = Self {
            len: 0,
            data: uninit_slots(values.len()),
        };
        array.extend(values.iter().cloned());
        array
    }
}

impl<T, const N: usize> From<[T; N]> for DynamicArray<T> {
    fn from(values: [T; N]) -> Self {
        let mut array = Self {
            len: 0,
            data: uninit_slots(N),
        };
        array.extend(values);
        array
    }
}
