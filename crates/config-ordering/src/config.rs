//! Configuration for the dependency orderer

use crate::domain::entities::Placement;
use crate::domain::value_objects::Node;
use serde::{Deserialize, Serialize};

/// Orderer configuration
///
/// The defaults are applied to entries added with neither `after` nor
/// `before` declared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, bound(deserialize = "N: Deserialize<'de>"))]
pub struct OrdererConfig<N> {
    /// Nodes an unconstrained entry follows
    pub default_after: Option<Vec<Node<N>>>,
    /// Nodes an unconstrained entry precedes
    pub default_before: Option<Vec<Node<N>>>,
}

impl<N> OrdererConfig<N> {
    /// Unconstrained entries chain after FIRST with no upper bound.
    pub fn anchored_after_first() -> Self {
        Self {
            default_after: Some(vec![Node::First]),
            default_before: None,
        }
    }

    /// The placement given to an entry that declared nothing.
    pub fn default_placement(&self) -> Placement<N>
    where
        N: Clone,
    {
        Placement {
            after: self.default_after.clone(),
            before: self.default_before.clone(),
        }
    }
}

impl<N> Default for OrdererConfig<N> {
    fn default() -> Self {
        Self {
            default_after: None,
            default_before: Some(vec![Node::Last]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OrdererConfig::<String>::default();
        assert!(config.default_after.is_none());
        assert_eq!(config.default_before, Some(vec![Node::Last]));
        assert!(!config.default_placement().is_unconstrained());
    }

    #[test]
    fn test_config_from_json() {
        let config: OrdererConfig<String> =
            serde_json::from_str(r#"{ "default_after": ["First", { "Entry": "ingress" }] }"#)
                .unwrap();

        assert_eq!(
            config.default_after,
            Some(vec![Node::First, Node::Entry("ingress".to_string())])
        );
        // Missing fields fall back to Default
        assert_eq!(config.default_before, Some(vec![Node::Last]));
    }

    #[test]
    fn test_anchored_after_first() {
        let config = OrdererConfig::<&str>::anchored_after_first();
        let placement = config.default_placement();
        assert_eq!(placement.after_targets(), &[Node::First]);
        assert!(placement.before.is_none());
    }
}
