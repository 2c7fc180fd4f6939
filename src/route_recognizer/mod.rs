use percent_encoding::percent_decode_str;

use crate::{path::param_name, Params};

/// One segment position of a stored path.
///
/// `children` is the ordered list of alternatives for the next segment.
#[derive(Debug, Eq, PartialEq)]
struct Node<T> {
    key: String,
    route: Option<T>,
    children: Vec<Node<T>>,
}

impl<T> Node<T> {
    fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            route: None,
            children: Vec::new(),
        }
    }

    fn child_mut(&mut self, key: &str) -> &mut Node<T> {
        let idx = match self.children.iter().position(|child| child.key == key) {
            Some(idx) => idx,
            None => {
                self.children.push(Node::new(key));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }

    fn find_static_child(&self, segment: &str) -> Option<&Node<T>> {
        self.children.iter().find(|child| child.key == segment)
    }

    fn find_param_child(&self) -> Option<(&Node<T>, &str)> {
        self.children
            .iter()
            .find_map(|child| param_name(&child.key).map(|name| (child, name)))
    }
}

/// The result of a successful [`Trie::lookup`].
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Lookup<'a, T> {
    pub(crate) route: &'a T,
    pub(crate) params: Params,
}

/// A segment-keyed trie.
///
/// Lookup prefers a literal key over a parameter marker at each depth and
/// commits to that choice; a dead end deeper down is a miss, it does not
/// retry a sibling. Literal keys are compared with the raw request segment,
/// captured values are percent-decoded.
#[derive(Debug, Eq, PartialEq)]
pub(crate) struct Trie<T> {
    root: Node<T>,
    len: usize,
}

impl<T> Default for Trie<T> {
    fn default() -> Self {
        Self {
            root: Node::new(""),
            len: 0,
        }
    }
}

impl<T> Trie<T> {
    /// Stores `route` at the node addressed by `segments`, returning the route
    /// it replaced.
    pub(crate) fn insert(&mut self, segments: &[&str], route: T) -> Option<T> {
        let mut node = &mut self.root;
        for segment in segments {
            node = node.child_mut(segment);
        }

        let prev = node.route.replace(route);
        if prev.is_none() {
            self.len += 1;
        }
        prev
    }

    pub(crate) fn lookup(&self, segments: &[&str]) -> Option<Lookup<'_, T>> {
        let mut node = &self.root;
        let mut params = Params::default();

        for segment in segments {
            node = match node.find_static_child(segment) {
                Some(child) => child,
                None => {
                    let (child, name) = node.find_param_child()?;
                    // invalid UTF-8 after decoding keeps the raw segment
                    match percent_decode_str(segment).decode_utf8() {
                        Ok(value) => params.insert(name, &value),
                        Err(_) => params.insert(name, segment),
                    }
                    child
                }
            };
        }

        node.route.as_ref().map(|route| Lookup { route, params })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<T>(key: &str, route: Option<T>, children: Vec<Node<T>>) -> Node<T> {
        Node {
            key: key.to_string(),
            route,
            children,
        }
    }

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_insert() {
        let mut trie = Trie::default();
        assert_eq!(trie.insert(&["GET", "users"], 1), None);
        assert_eq!(trie.insert(&["GET", "users", "$id"], 2), None);
        assert_eq!(trie.insert(&["GET", "users", "active"], 3), None);
        assert_eq!(trie.insert(&["POST", "users"], 4), None);
        assert_eq!(trie.len(), 4);

        assert_eq!(
            trie,
            Trie {
                root: node(
                    "",
                    None,
                    vec![
                        node(
                            "GET",
                            None,
                            vec![node(
                                "users",
                                Some(1),
                                vec![
                                    node("$id", Some(2), vec![]),
                                    node("active", Some(3), vec![]),
                                ]
                            )]
                        ),
                        node("POST", None, vec![node("users", Some(4), vec![])]),
                    ]
                ),
                len: 4,
            }
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut trie = Trie::default();
        assert_eq!(trie.insert(&["GET", "ping"], 1), None);
        assert_eq!(trie.insert(&["GET", "ping"], 2), Some(1));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.lookup(&["GET", "ping"]).map(|m| *m.route), Some(2));
    }

    #[test]
    fn test_lookup_literal() {
        let mut trie = Trie::default();
        trie.insert(&["GET", "a", "b"], 1);
        trie.insert(&["GET", ""], 2);

        let m = trie.lookup(&["GET", "a", "b"]).unwrap();
        assert_eq!(*m.route, 1);
        assert!(m.params.is_empty());
        assert_eq!(*trie.lookup(&["GET", ""]).unwrap().route, 2);

        // prefix of a longer route, no route of its own
        assert!(trie.lookup(&["GET", "a"]).is_none());
        assert!(trie.lookup(&["GET", "a", "b", "c"]).is_none());
        assert!(trie.lookup(&["POST", "a", "b"]).is_none());
    }

    #[test]
    fn test_lookup_params() {
        let mut trie = Trie::default();
        trie.insert(&["GET", "posts", "$post_id", "comments", "$id"], 1);
        trie.insert(&["GET", "posts", "$post_id", "comments"], 2);

        let m = trie
            .lookup(&["GET", "posts", "12", "comments", "100"])
            .unwrap();
        assert_eq!(*m.route, 1);
        assert_eq!(m.params, params(&[("post_id", "12"), ("id", "100")]));

        let m = trie.lookup(&["GET", "posts", "12", "comments"]).unwrap();
        assert_eq!(*m.route, 2);
        assert_eq!(m.params, params(&[("post_id", "12")]));
    }

    #[test]
    fn test_literal_before_param() {
        for order in [[0, 1], [1, 0]] {
            let routes = [
                (["GET", "users", "$id"], "id"),
                (["GET", "users", "active"], "active"),
            ];
            let mut trie = Trie::default();
            for i in order {
                trie.insert(&routes[i].0, routes[i].1);
            }

            let m = trie.lookup(&["GET", "users", "active"]).unwrap();
            assert_eq!(*m.route, "active");
            assert!(m.params.is_empty());

            let m = trie.lookup(&["GET", "users", "7"]).unwrap();
            assert_eq!(*m.route, "id");
            assert_eq!(m.params, params(&[("id", "7")]));
        }
    }

    #[test]
    fn test_no_backtracking() {
        let mut trie = Trie::default();
        trie.insert(&["GET", "a", "x"], 1);
        trie.insert(&["GET", "$p", "y"], 2);

        // `a` commits to the literal branch, which has no `y`
        assert!(trie.lookup(&["GET", "a", "y"]).is_none());
        assert_eq!(*trie.lookup(&["GET", "b", "y"]).unwrap().route, 2);
    }

    #[test]
    fn test_first_marker_wins() {
        let mut trie = Trie::default();
        trie.insert(&["GET", "$id"], 1);
        trie.insert(&["GET", "$name"], 2);

        let m = trie.lookup(&["GET", "bob"]).unwrap();
        assert_eq!(*m.route, 1);
        assert_eq!(m.params, params(&[("id", "bob")]));
    }

    #[test]
    fn test_marker_matches_empty_segment() {
        let mut trie = Trie::default();
        trie.insert(&["GET", "$id"], 1);

        let m = trie.lookup(&["GET", ""]).unwrap();
        assert_eq!(m.params, params(&[("id", "")]));
    }

    #[test]
    fn test_percent_decoded() {
        let mut trie = Trie::default();
        trie.insert(&["GET", "a", "$id"], 1);
        trie.insert(&["GET", "a", "b c"], 2);

        let m = trie.lookup(&["GET", "a", "%E4%BD%A0%E5%A5%BD"]).unwrap();
        assert_eq!(*m.route, 1);
        assert_eq!(m.params, params(&[("id", "你好")]));

        let m = trie.lookup(&["GET", "a", "x%2Fy%20z"]).unwrap();
        assert_eq!(m.params, params(&[("id", "x/y z")]));

        // literals are not decoded
        let m = trie.lookup(&["GET", "a", "b%20c"]).unwrap();
        assert_eq!(*m.route, 1);
        assert_eq!(m.params, params(&[("id", "b c")]));

        // not UTF-8 once decoded
        let m = trie.lookup(&["GET", "a", "%FF"]).unwrap();
        assert_eq!(m.params, params(&[("id", "%FF")]));
    }

    #[test]
    fn test_literal_dollar_segment() {
        let mut trie = Trie::default();
        trie.insert(&["GET", "$id"], 1);

        // a request segment equal to the marker text is a literal hit
        let m = trie.lookup(&["GET", "$id"]).unwrap();
        assert_eq!(*m.route, 1);
        assert!(m.params.is_empty());
    }
}
