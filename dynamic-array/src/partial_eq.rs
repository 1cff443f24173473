use crate::DynamicArray;

macro_rules! __impl_slice_eq1 {
    ([$($vars:tt)*] $lhs:ty, $rhs:ty) => {
        impl<T, U, $($vars)*> PartialEq<$rhs> for $lhs
        where
            T: PartialEq<U>,
        {
            #[inline]
            fn eq(&self, other: &$rhs) -> bool {
                <$lhs as AsRef<[T]>>::as_ref(self) == <$rhs as AsRef<[U]>>::as_ref(other)
            }
        }
    }
}

__impl_slice_eq1! { [] DynamicArray<T>, DynamicArray<U> }
__impl_slice_eq1! { [] DynamicArray<T>, [U] }
__impl_slice_eq1! { [] DynamicArray<T>, &[U] }
__impl_slice_eq1! { [] DynamicArray<T>, &mut [U] }
__impl_slice_eq1! { [] DynamicArray<T>, Vec<U> }
__impl_slice_eq1! { [] [T], DynamicArray<U> }
__impl_slice_eq1! { [] &[T], DynamicArray<U> }
__impl_slice_eq1! { [] &mut [T], DynamicArray<U> }
__impl_slice_eq1! { [] Vec<T>, DynamicArray<U> }

__impl_slice_eq1! { [const N: usize] DynamicArray<T>, [U; N] }
__impl_slice_eq1! { [const N: usize] DynamicArray<T>, &[U; N] }

impl<T: Eq> Eq for DynamicArray<T> {}
