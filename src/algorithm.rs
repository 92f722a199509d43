use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::{stable, unstable, Error};

/// Every operation the `sorter` binary can run on an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    QuickSort,
    BubbleSort,
    InsertionSort,
    SelectionSort,
    HeapSort,
    MergeSort,
    /// Only builds a max-heap, the array is not sorted afterwards.
    BuildHeap,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::QuickSort,
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::SelectionSort,
        Algorithm::HeapSort,
        Algorithm::MergeSort,
        Algorithm::BuildHeap,
    ];

    pub const SORTS: [Algorithm; 6] = [
        Algorithm::QuickSort,
        Algorithm::BubbleSort,
        Algorithm::InsertionSort,
        Algorithm::SelectionSort,
        Algorithm::HeapSort,
        Algorithm::MergeSort,
    ];

    /// Canonical name, as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::QuickSort => "quickSort",
            Algorithm::BubbleSort => "bubbleSort",
            Algorithm::InsertionSort => "insertionSort",
            Algorithm::SelectionSort => "selectionSort",
            Algorithm::HeapSort => "heapSort",
            Algorithm::MergeSort => "mergeSort",
            Algorithm::BuildHeap => "buildHeap",
        }
    }

    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|algorithm| algorithm.name()).collect()
    }

    pub fn is_sort(self) -> bool {
        self != Algorithm::BuildHeap
    }

    pub fn apply(self, v: &mut [i32]) {
        debug!(algorithm = self.name(), len = v.len(), "running");

        match self {
            Algorithm::QuickSort => unstable::quicksort::sort(v),
            Algorithm::BubbleSort => stable::bubble::sort(v),
            Algorithm::InsertionSort => stable::insertion::sort(v),
            Algorithm::SelectionSort => unstable::selection::sort(v),
            Algorithm::HeapSort => unstable::heapsort::sort(v),
            Algorithm::MergeSort => stable::mergesort::sort(v),
            Algorithm::BuildHeap => unstable::heapsort::build_heap(v),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// "quickSort", "quicksort" and "quick_sort" all name the same algorithm.
static BY_NAME: Lazy<HashMap<String, Algorithm>> = Lazy::new(|| {
    let mut by_name = HashMap::new();
    for algorithm in Algorithm::ALL {
        let name = algorithm.name();
        by_name.insert(name.to_owned(), algorithm);
        by_name.insert(name.to_lowercase(), algorithm);
        by_name.insert(snake_case(name), algorithm);
    }
    by_name
});

fn snake_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 1);
    for c in camel.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BY_NAME
            .get(s)
            .copied()
            .ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
    }
}
