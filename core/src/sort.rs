//! Descending selection-sort variant that swaps on every inversion it
//! scans, not once per outer pass. The extra writes are part of the
//! measured workload; do not reduce them to the textbook single swap.

pub fn sort_descending(arr: &mut [i64]) {
    let len = arr.len();
    for i in 0..len {
        for j in i + 1..len {
            if arr[i] < arr[j] {
                arr.swap(i, j);
            }
        }
    }
}
