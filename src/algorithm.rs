use std::fmt;
use std::str::FromStr;

use crate::error::SortError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quicksort,
    Mergesort,
    Heapsort,
    Introsort,
    Shellsort,
    Bogo,
}

impl Algorithm {
    // numeric selectors are the positions in this table
    pub const ALL: [Algorithm; 9] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quicksort,
        Algorithm::Mergesort,
        Algorithm::Heapsort,
        Algorithm::Introsort,
        Algorithm::Shellsort,
        Algorithm::Bogo,
    ];

    pub fn from_index(index: usize) -> Result<Algorithm, SortError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| SortError::UnknownAlgorithm(index.to_string()))
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|&a| a == self).unwrap_or_default()
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble sort",
            Algorithm::Selection => "selection sort",
            Algorithm::Insertion => "insertion sort",
            Algorithm::Quicksort => "quicksort",
            Algorithm::Mergesort => "mergesort",
            Algorithm::Heapsort => "heapsort",
            Algorithm::Introsort => "introsort",
            Algorithm::Shellsort => "shellsort",
            Algorithm::Bogo => "bogo sort",
        }
    }

    /// Algorithms that finish in bounded time on any input.
    pub fn is_bounded(self) -> bool {
        self != Algorithm::Bogo
    }

    pub fn help() -> String {
        let mut res = String::new();
        for algorithm in Self::ALL {
            res.push_str(&format!("    {}: {}\n", algorithm.index(), algorithm.name()));
        }
        res
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    /// Accepts a numeric selector, a full name ("heapsort", "bubble sort") or
    /// the short form without " sort".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<usize>() {
            return Algorithm::from_index(index);
        }
        let key = s.to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', " ");
        let key = key.strip_suffix(" sort").unwrap_or(&key);
        Self::ALL
            .into_iter()
            .find(|a| {
                let name = a.name();
                name == key || name.strip_suffix(" sort") == Some(key)
            })
            .ok_or_else(|| SortError::UnknownAlgorithm(s.to_string()))
    }
}
