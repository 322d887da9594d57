use hashbrown::HashSet;

/// Keys of elements that have already faded in. Reveal is one-shot: once a
/// key is in the set, later intersections are ignored.
#[derive(Debug, Clone, Default)]
pub struct RevealSet {
    revealed: HashSet<u32>,
    registered: u32,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hands out a key for a newly watched element.
    pub fn register(&mut self) -> u32 {
        let key = self.registered;
        self.registered += 1;
        key
    }

    /// Records the first intersection of `key`. Returns `false` if the element
    /// was already revealed.
    pub fn reveal(&mut self, key: u32) -> bool {
        self.revealed.insert(key)
    }

    #[cfg(test)]
    pub fn is_revealed(&self, key: u32) -> bool {
        self.revealed.contains(&key)
    }

    pub fn pending(&self) -> usize {
        (self.registered as usize).saturating_sub(self.revealed.len())
    }
}
