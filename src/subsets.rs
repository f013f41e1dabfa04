//! Subset enumeration.
//!
//! Every function here returns all `2^n` subsets of its input, with each
//! subset keeping the relative order of the input elements. They differ only
//! in how the result is assembled, which is what the benchmark compares.

use clap::ValueEnum;

/// Return every subset of `input` by recursive doubling.
///
/// The result lists the subsets of the tail first, followed by the same
/// subsets with the head prepended:
///
/// ```
/// use subset_bench_lib::subsets::subsets;
///
/// assert_eq!(subsets(&[0, 1]), vec![vec![], vec![1], vec![0], vec![0, 1]]);
/// ```
///
/// The empty input yields one empty subset, not an empty collection.
pub fn subsets<T: Clone>(input: &[T]) -> Vec<Vec<T>> {
    let Some((head, tail)) = input.split_first() else {
        return vec![Vec::new()];
    };

    let children = subsets(tail);
    let children_plus: Vec<Vec<T>> = children
        .iter()
        .map(|child| prepend(head, child))
        .collect();

    let mut results = children;
    results.extend(children_plus);
    results
}

/// Same recursion as [`subsets`], but each child is followed directly by its
/// copy with the head prepended.
pub fn subsets_interleaved<T: Clone>(input: &[T]) -> Vec<Vec<T>> {
    let Some((head, tail)) = input.split_first() else {
        return vec![Vec::new()];
    };

    subsets_interleaved(tail)
        .into_iter()
        .flat_map(|child| {
            let plus = prepend(head, &child);
            [child, plus]
        })
        .collect()
}

/// Non-recursive doubling. Yields exactly the order of [`subsets`] without
/// growing the call stack with the input length.
pub fn subsets_iterative<T: Clone>(input: &[T]) -> Vec<Vec<T>> {
    let mut results: Vec<Vec<T>> = vec![Vec::new()];
    for head in input.iter().rev() {
        let doubled: Vec<Vec<T>> = results.iter().map(|child| prepend(head, child)).collect();
        results.extend(doubled);
    }
    results
}

fn prepend<T: Clone>(head: &T, child: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(child.len() + 1);
    out.push(head.clone());
    out.extend_from_slice(child);
    out
}

/// Which subset generator to time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Tail subsets, then tail subsets with the head prepended
    #[default]
    Concat,
    /// Each tail subset immediately followed by its head-prepended copy
    Interleaved,
    /// Explicit accumulator, no recursion
    Iterative,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Strategy::Concat, Strategy::Interleaved, Strategy::Iterative];

    /// Run this strategy on `input`.
    pub fn generate<T: Clone>(self, input: &[T]) -> Vec<Vec<T>> {
        match self {
            Strategy::Concat => subsets(input),
            Strategy::Interleaved => subsets_interleaved(input),
            Strategy::Iterative => subsets_iterative(input),
        }
    }

    /// Human-readable name used in report banners.
    pub fn label(self) -> &'static str {
        match self {
            Strategy::Concat => "Concat",
            Strategy::Interleaved => "Interleaved",
            Strategy::Iterative => "Iterative",
        }
    }
}
