//! Edges — one direction of a named, weighted connection.
//!
//! An [`Edge`] records where a connection leads, what it is called and what it
//! costs to travel. The source node is implicit: it is the node whose edge set
//! the edge was read from.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{GraphError, Result};

/// Travel cost of an edge. Signed so that negative input can be rejected
/// instead of wrapping.
pub type Weight = i64;

/// Largest weight a single edge may carry.
///
/// Any path visits each node at most once, so path totals stay far below
/// `Weight::MAX` and never overflow.
pub const MAX_WEIGHT: Weight = i32::MAX as Weight;

/// Check that a weight is usable for an edge.
///
/// Returns the weight unchanged when it lies in `0..=MAX_WEIGHT`.
pub fn validate_weight(weight: Weight) -> Result<Weight> {
    if (0..=MAX_WEIGHT).contains(&weight) {
        Ok(weight)
    } else {
        Err(GraphError::InvalidWeight(weight))
    }
}

/// A link from an implicit source node to `destination`.
///
/// `Default` gives an empty placeholder (zero weight, empty name) for callers
/// that fill fields in later. Deserialized edges pass through
/// [`validate_weight`] like constructed ones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawEdge<T>")]
pub struct Edge<T> {
    destination: T,
    weight: Weight,
    name: String,
}

/// Wire shape of an [`Edge`] before its weight is checked.
#[derive(Deserialize)]
struct RawEdge<T> {
    destination: T,
    weight: Weight,
    name: String,
}

impl<T> TryFrom<RawEdge<T>> for Edge<T> {
    type Error = GraphError;

    fn try_from(raw: RawEdge<T>) -> Result<Self> {
        Edge::new(raw.destination, raw.weight, raw.name)
    }
}

impl<T> Edge<T> {
    /// Create an edge. Fails with [`GraphError::InvalidWeight`] unless
    /// `0 <= weight <= MAX_WEIGHT`.
    pub fn new(destination: T, weight: Weight, name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            destination,
            weight: validate_weight(weight)?,
            name: name.into(),
        })
    }

    #[inline]
    pub fn destination(&self) -> &T {
        &self.destination
    }

    #[inline]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the weight. A rejected weight leaves the edge untouched.
    pub fn set_weight(&mut self, weight: Weight) -> Result<()> {
        self.weight = validate_weight(weight)?;
        Ok(())
    }

    /// The same connection pointing at another destination.
    ///
    /// Name and weight are carried over as they are, so no validation happens.
    pub fn with_destination<U>(&self, destination: U) -> Edge<U> {
        Edge {
            destination,
            weight: self.weight,
            name: self.name.clone(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "to {} by {} takes {}",
            self.destination, self.name, self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_constructed_fields() {
        let edge = Edge::new("Stockholm", 12, "E4").unwrap();
        assert_eq!(*edge.destination(), "Stockholm");
        assert_eq!(edge.weight(), 12);
        assert_eq!(edge.name(), "E4");
    }

    #[test]
    fn display_is_a_travel_summary() {
        let edge = Edge::new("Malmo", 3, "Train").unwrap();
        assert_eq!(edge.to_string(), "to Malmo by Train takes 3");
    }

    #[test]
    fn negative_weight_is_rejected_on_construction() {
        assert_eq!(
            Edge::new("Malmo", -1, "Train"),
            Err(GraphError::InvalidWeight(-1))
        );
    }

    #[test]
    fn weights_above_the_cap_are_rejected() {
        assert_eq!(validate_weight(MAX_WEIGHT), Ok(MAX_WEIGHT));
        assert_eq!(
            validate_weight(MAX_WEIGHT + 1),
            Err(GraphError::InvalidWeight(MAX_WEIGHT + 1))
        );
        assert_eq!(
            Edge::new("Kiruna", Weight::MAX, "E10"),
            Err(GraphError::InvalidWeight(Weight::MAX))
        );
    }

    #[test]
    fn set_weight_keeps_old_value_on_rejection() {
        let mut edge = Edge::new("Lund", 4, "Bus").unwrap();
        assert!(edge.set_weight(-5).is_err());
        assert_eq!(edge.weight(), 4);
        assert!(edge.set_weight(Weight::MAX).is_err());
        assert_eq!(edge.weight(), 4);

        edge.set_weight(0).unwrap();
        assert_eq!(edge.weight(), 0);
    }

    #[test]
    fn with_destination_keeps_name_and_weight() {
        let template = Edge::new((), 9, "Ferry").unwrap();
        let edge = template.with_destination("Visby");
        assert_eq!(*edge.destination(), "Visby");
        assert_eq!(edge.weight(), 9);
        assert_eq!(edge.name(), "Ferry");
    }

    #[test]
    fn default_is_an_empty_placeholder() {
        let edge: Edge<String> = Edge::default();
        assert_eq!(edge.destination(), "");
        assert_eq!(edge.weight(), 0);
        assert_eq!(edge.name(), "");
    }

    #[test]
    fn serializes_with_named_fields() {
        let edge = Edge::new("Uppsala".to_string(), 7, "Road 55").unwrap();
        let json = serde_json::to_value(&edge).unwrap();
        assert_eq!(json["destination"], "Uppsala");
        assert_eq!(json["weight"], 7);
        assert_eq!(json["name"], "Road 55");
    }

    #[test]
    fn deserializing_validates_the_weight() {
        let edge: Edge<String> =
            serde_json::from_str(r#"{"destination":"Gavle","weight":7,"name":"Road"}"#).unwrap();
        assert_eq!(edge, Edge::new("Gavle".to_string(), 7, "Road").unwrap());

        let negative =
            serde_json::from_str::<Edge<String>>(r#"{"destination":"X","weight":-7,"name":"Road"}"#);
        let err = negative.unwrap_err().to_string();
        assert!(err.contains("Invalid weight: -7"), "{err}");

        let huge = format!(
            r#"{{"destination":"X","weight":{},"name":"Road"}}"#,
            Weight::MAX
        );
        assert!(serde_json::from_str::<Edge<String>>(&huge).is_err());
    }
}
