//! Trie node.

use rustc_hash::FxHashMap;

/// A node of the phrase trie.
///
/// Each node owns its children outright. A node with no children is where a
/// complete phrase ends; there is no separate end-of-phrase marker, so a
/// phrase that is a strict prefix of a longer one never completes.
#[derive(Debug, Clone)]
pub struct TrieNode {
    token: Option<Box<str>>,
    is_root: bool,
    children: FxHashMap<Box<str>, TrieNode>,
}

impl TrieNode {
    pub(crate) fn root() -> Self {
        Self {
            token: None,
            is_root: true,
            children: FxHashMap::default(),
        }
    }

    pub(crate) fn with_token(token: &str) -> Self {
        Self {
            token: Some(token.into()),
            is_root: false,
            children: FxHashMap::default(),
        }
    }

    /// The word this node stands for. `None` only for the root.
    #[inline(always)]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns `true` for the root of a trie.
    #[inline(always)]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }

    /// Returns `true` if the node has no children.
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Same as [`is_leaf`](Self::is_leaf).
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns the child keyed by `token`, if any.
    #[inline(always)]
    pub fn child(&self, token: &str) -> Option<&TrieNode> {
        self.children.get(token)
    }

    /// Follows `tokens` from this node, stopping at the first missing key.
    pub fn descend<S: AsRef<str>>(&self, tokens: &[S]) -> Option<&TrieNode> {
        tokens
            .iter()
            .try_fold(self, |node, token| node.child(token.as_ref()))
    }

    /// Tokens of the direct children, sorted.
    pub fn child_tokens(&self) -> Vec<&str> {
        let mut tokens: Vec<&str> = self.children.keys().map(|k| &**k).collect();
        tokens.sort_unstable();
        tokens
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = &TrieNode> {
        self.children.values()
    }

    /// Returns the child for `token`, inserting a new node if absent.
    pub(crate) fn child_or_insert(&mut self, token: &str) -> &mut TrieNode {
        self.children
            .entry(token.into())
            .or_insert_with(|| TrieNode::with_token(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_has_no_token() {
        let root = TrieNode::root();
        assert!(root.is_root());
        assert_eq!(root.token(), None);
        assert!(root.is_leaf());
    }

    #[test]
    fn child_or_insert_reuses_existing() {
        let mut root = TrieNode::root();
        root.child_or_insert("quick").child_or_insert("fox");
        root.child_or_insert("quick").child_or_insert("bear");

        assert_eq!(root.len(), 1);
        let quick = root.child("quick").expect("quick inserted");
        assert_eq!(quick.token(), Some("quick"));
        assert!(!quick.is_root());
        assert_eq!(quick.child_tokens(), vec!["bear", "fox"]);
    }

    #[test]
    fn descend_stops_at_missing_key() {
        let mut root = TrieNode::root();
        root.child_or_insert("a").child_or_insert("b");

        assert!(root.descend(&["a", "b"]).is_some_and(TrieNode::is_leaf));
        assert!(root.descend(&["a", "c"]).is_none());
        assert!(root.descend::<&str>(&[]).is_some_and(TrieNode::is_root));
    }
}
