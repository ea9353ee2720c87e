//! Prefix cache
//!
//! A letter-indexed trie remembering, for every prefix of every word matched on
//! one board, the best tile path found so far and its score. It only grows.
//!
//! Reusing these paths is a heuristic: the best path for a prefix is not always
//! the start of the best path for a longer word, so cached answers can score
//! lower than an exhaustive search would.

use rustc_hash::FxHashMap;

/// Update rule for an existing node: replace only on a strictly higher score
#[inline]
#[must_use]
pub const fn improves(existing: u32, candidate: u32) -> bool {
    candidate > existing
}

/// One trie node: the best path for the prefix spelled from the root to here
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    children: FxHashMap<u8, TrieNode>,
    tiles: Vec<usize>,
    score: u32,
}

impl TrieNode {
    /// Tiles of the best path recorded for this prefix (empty at the root)
    #[must_use]
    pub fn tiles(&self) -> &[usize] {
        &self.tiles
    }

    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn child(&self, letter: u8) -> Option<&Self> {
        self.children.get(&letter)
    }

    fn set_if_better(&mut self, tiles: &[usize], score: u32) {
        if improves(self.score, score) {
            self.tiles = tiles.to_vec();
            self.score = score;
        }
    }
}

/// Root of the trie plus a node count
#[derive(Debug, Clone, Default)]
pub struct PrefixCache {
    root: TrieNode,
    nodes: usize,
}

impl PrefixCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached prefixes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.nodes
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    /// Node reached by following `word` letter by letter, if every link exists
    ///
    /// # Examples
    /// ```
    /// use wordgrid_solver::solver::prefix_cache::PrefixCache;
    ///
    /// let mut cache = PrefixCache::new();
    /// cache.add_word(b"shed", &[11, 14, 10, 15], |tiles| tiles.len() as u32);
    ///
    /// let node = cache.find_node(b"she").unwrap();
    /// assert_eq!(node.tiles(), &[11, 14, 10]);
    /// assert_eq!(node.score(), 3);
    /// assert!(cache.find_node(b"shy").is_none());
    /// ```
    #[must_use]
    pub fn find_node(&self, word: &[u8]) -> Option<&TrieNode> {
        word.iter()
            .try_fold(&self.root, |node, &letter| node.child(letter))
    }

    /// Deepest cached proper prefix of `word` at least `min_len` letters long
    ///
    /// Returns the prefix length together with its node.
    #[must_use]
    pub fn longest_prefix(&self, word: &[u8], min_len: usize) -> Option<(usize, &TrieNode)> {
        let mut node = &self.root;
        let mut found = None;
        for (depth, &letter) in word.iter().enumerate().take(word.len().saturating_sub(1)) {
            let Some(child) = node.child(letter) else {
                break;
            };
            node = child;
            if depth + 1 >= min_len {
                found = Some((depth + 1, node));
            }
        }
        found
    }

    /// Record every prefix of `word` with the matching prefix of `tiles`
    ///
    /// New nodes take the prefix path unconditionally; existing nodes keep their
    /// path unless `scorer` rates the new one strictly higher.
    pub fn add_word<F>(&mut self, word: &[u8], tiles: &[usize], scorer: F)
    where
        F: Fn(&[usize]) -> u32,
    {
        debug_assert_eq!(word.len(), tiles.len());
        let mut node = &mut self.root;
        for (i, &letter) in word.iter().enumerate() {
            let sub_tiles = &tiles[..=i];
            let sub_score = scorer(sub_tiles);
            node = match node.children.entry(letter) {
                std::collections::hash_map::Entry::Occupied(entry) => {
                    let child = entry.into_mut();
                    child.set_if_better(sub_tiles, sub_score);
                    child
                }
                std::collections::hash_map::Entry::Vacant(entry) => {
                    self.nodes += 1;
                    entry.insert(TrieNode {
                        children: FxHashMap::default(),
                        tiles: sub_tiles.to_vec(),
                        score: sub_score,
                    })
                }
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_scorer(tiles: &[usize]) -> u32 {
        tiles.iter().map(|&t| t as u32).sum()
    }

    #[test]
    fn improves_is_strict() {
        assert!(improves(3, 4));
        assert!(!improves(4, 4));
        assert!(!improves(5, 4));
    }

    #[test]
    fn empty_cache_finds_only_root() {
        let cache = PrefixCache::new();
        assert!(cache.is_empty());
        let root = cache.find_node(b"").unwrap();
        assert!(root.tiles().is_empty());
        assert_eq!(root.score(), 0);
        assert!(cache.find_node(b"a").is_none());
    }

    #[test]
    fn add_word_records_every_prefix() {
        let mut cache = PrefixCache::new();
        cache.add_word(b"abc", &[1, 2, 3], sum_scorer);

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.find_node(b"a").unwrap().tiles(), &[1]);
        assert_eq!(cache.find_node(b"ab").unwrap().score(), 3);
        assert_eq!(cache.find_node(b"abc").unwrap().score(), 6);
    }

    #[test]
    fn existing_nodes_only_improve() {
        let mut cache = PrefixCache::new();
        cache.add_word(b"abc", &[5, 6, 7], sum_scorer);
        // Lower-scoring "ab" prefix, higher-scoring "abd"
        cache.add_word(b"abd", &[1, 2, 9], sum_scorer);

        assert_eq!(cache.find_node(b"a").unwrap().tiles(), &[5]);
        assert_eq!(cache.find_node(b"ab").unwrap().tiles(), &[5, 6]);
        assert_eq!(cache.find_node(b"abd").unwrap().tiles(), &[1, 2, 9]);
        assert_eq!(cache.len(), 4);

        cache.add_word(b"ab", &[8, 9], sum_scorer);
        assert_eq!(cache.find_node(b"ab").unwrap().tiles(), &[8, 9]);
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn equal_score_keeps_first_path() {
        let mut cache = PrefixCache::new();
        cache.add_word(b"ab", &[1, 4], sum_scorer);
        cache.add_word(b"ab", &[2, 3], sum_scorer);
        assert_eq!(cache.find_node(b"ab").unwrap().tiles(), &[1, 4]);
    }

    #[test]
    fn longest_prefix_excludes_whole_word() {
        let mut cache = PrefixCache::new();
        cache.add_word(b"abcd", &[1, 2, 3, 4], sum_scorer);

        let (len, node) = cache.longest_prefix(b"abcd", 2).unwrap();
        assert_eq!(len, 3);
        assert_eq!(node.tiles(), &[1, 2, 3]);

        let (len, _) = cache.longest_prefix(b"abxyz", 2).unwrap();
        assert_eq!(len, 2);

        assert!(cache.longest_prefix(b"axyz", 2).is_none());
        assert!(cache.longest_prefix(b"ab", 2).is_none());
        assert_eq!(cache.longest_prefix(b"axyz", 1).unwrap().0, 1);
    }
}
