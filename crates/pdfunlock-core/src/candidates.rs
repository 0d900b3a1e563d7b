//! The ordered list of candidate passwords tried before prompting.

/// A single remembered password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The password text.
    pub password: String,
    /// Whether the password belongs in the persisted store.
    ///
    /// Session-only passwords (discovered without "memorize", or supplied on
    /// the command line) are tried like any other but never written to disk.
    pub persisted: bool,
}

/// Ordered, duplicate-free list of candidate passwords.
///
/// Trial order is insertion order, so the most recently added password is
/// tried last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateList {
    entries: Vec<Candidate>,
}

impl CandidateList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list of persisted candidates, as loaded from a store.
    ///
    /// Duplicates in the input keep their first position.
    pub fn from_persisted<I, S>(passwords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for password in passwords {
            list.insert(password, true);
        }
        list
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no candidates.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if `password` is already a candidate.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.iter().any(|c| c.password == password)
    }

    /// Access a candidate by 0-based index.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.entries.get(index)
    }

    /// Iterate over candidates in trial order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.entries.iter()
    }

    /// Iterate over the password strings in trial order.
    pub fn passwords(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|c| c.password.as_str())
    }

    /// Append `password` unless it is already present.
    ///
    /// Returns `true` if the password was added. An existing session-only
    /// entry is promoted to persisted when `persisted` is set.
    pub fn insert(&mut self, password: impl Into<String>, persisted: bool) -> bool {
        let password = password.into();
        if let Some(existing) = self.entries.iter_mut().find(|c| c.password == password) {
            existing.persisted |= persisted;
            return false;
        }
        self.entries.push(Candidate {
            password,
            persisted,
        });
        true
    }

    /// Remove `password` from the list. Returns `true` if it was present.
    pub fn remove(&mut self, password: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|c| c.password != password);
        self.entries.len() != before
    }

    /// The persisted subset, in trial order, as written to the store.
    pub fn persisted(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|c| c.persisted)
            .map(|c| c.password.clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
