//! Semantic model for parsed service blueprints.
//!
//! These types are the output of the parser and the input of the layout
//! engine. A [`Blueprint`] is immutable after parsing; the layout engine
//! derives a [`scene::Scene`](crate::scene::Scene) from it without mutating
//! it back.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ parser
//! Blueprint (these types)
//!     ↓ layout
//! Scene (positioned boxes and connectors)
//!     ↓ export
//! SVG
//! ```

use crate::lane::Lane;

/// The kind of connector drawn between two consecutive actions of a step.
///
/// The kind is determined by the separator that followed the action in the
/// source line: `/` is one-way, `//` is two-way, `|` draws no line while the
/// following action still occupies its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorKind {
    /// A single-headed arrow from the earlier action to the later one.
    OneWay,
    /// A double-headed arrow between the two actions.
    TwoWay,
    /// No visible line; the pair is still recorded in the scene as metadata.
    None,
}

impl ConnectorKind {
    /// The DSL separator token that produces this kind.
    pub fn separator(self) -> &'static str {
        match self {
            ConnectorKind::OneWay => "/",
            ConnectorKind::TwoWay => "//",
            ConnectorKind::None => "|",
        }
    }

    /// Whether this connector is drawn with a visible stroke.
    pub fn is_visible(self) -> bool {
        !matches!(self, ConnectorKind::None)
    }
}

/// One labeled box belonging to a lane within a step.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    lane: Lane,
    label: String,
    connector_to_next: Option<ConnectorKind>,
}

impl Action {
    /// Creates an action with no connector to a following action.
    pub fn new(lane: Lane, label: impl Into<String>) -> Self {
        Self {
            lane,
            label: label.into(),
            connector_to_next: None,
        }
    }

    /// Sets the connector linking this action to the next one (builder style).
    pub fn with_connector(mut self, kind: ConnectorKind) -> Self {
        self.connector_to_next = Some(kind);
        self
    }

    /// The lane this action belongs to.
    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// The action's label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The connector to the next action within the same step, if any.
    ///
    /// `None` for the final action of a step.
    pub fn connector_to_next(&self) -> Option<ConnectorKind> {
        self.connector_to_next
    }
}

/// A named sequence of actions; one column of the diagram.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    name: String,
    actions: Vec<Action>,
}

impl Step {
    /// Creates a step from its name and a non-empty action sequence.
    pub fn new(name: impl Into<String>, actions: Vec<Action>) -> Self {
        Self {
            name: name.into(),
            actions,
        }
    }

    /// The step name shown above the column.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The actions of this step, in source order.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}

/// A complete parsed blueprint: the ordered steps of one input document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blueprint {
    steps: Vec<Step>,
}

impl Blueprint {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// The steps in source order; this order becomes the left-to-right
    /// column order of the layout.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// All lanes referenced by any action, deduplicated, in first-seen order.
    pub fn referenced_lanes(&self) -> Vec<Lane> {
        let mut seen = Vec::new();
        for step in &self.steps {
            for action in step.actions() {
                if !seen.contains(&action.lane()) {
                    seen.push(action.lane());
                }
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Blueprint {
        Blueprint::new(vec![
            Step::new(
                "Order",
                vec![
                    Action::new(Lane::Customer, "Click order").with_connector(ConnectorKind::OneWay),
                    Action::new(Lane::Front, "Confirm"),
                ],
            ),
            Step::new("Ship", vec![Action::new(Lane::Back, "Pack box")]),
        ])
    }

    #[test]
    fn test_connector_separators() {
        assert_eq!(ConnectorKind::OneWay.separator(), "/");
        assert_eq!(ConnectorKind::TwoWay.separator(), "//");
        assert_eq!(ConnectorKind::None.separator(), "|");
    }

    #[test]
    fn test_connector_visibility() {
        assert!(ConnectorKind::OneWay.is_visible());
        assert!(ConnectorKind::TwoWay.is_visible());
        assert!(!ConnectorKind::None.is_visible());
    }

    #[test]
    fn test_action_connector_default_none() {
        let action = Action::new(Lane::Customer, "Browse");
        assert_eq!(action.connector_to_next(), None);
    }

    #[test]
    fn test_step_preserves_action_order() {
        let blueprint = sample();
        let labels: Vec<&str> = blueprint.steps()[0]
            .actions()
            .iter()
            .map(Action::label)
            .collect();
        assert_eq!(labels, ["Click order", "Confirm"]);
    }

    #[test]
    fn test_referenced_lanes_first_seen_order() {
        let blueprint = sample();
        assert_eq!(
            blueprint.referenced_lanes(),
            vec![Lane::Customer, Lane::Front, Lane::Back]
        );
    }
}
