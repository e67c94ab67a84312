//! Swimlane roles for service blueprint diagrams.
//!
//! A service blueprint is drawn over four fixed horizontal lanes. Their
//! canonical top-to-bottom order is Customer, Front, Back, Process; a layout
//! configuration may reorder the rows but never invent new lanes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four swimlane roles of a service blueprint.
///
/// Each lane is addressed in the input DSL by a single uppercase
/// abbreviation character: `C`, `F`, `B` or `P`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    /// The customer's own actions.
    Customer,
    /// Frontstage: interactions visible to the customer.
    Front,
    /// Backstage: staff actions invisible to the customer.
    Back,
    /// Support processes and systems.
    Process,
}

impl Lane {
    /// The canonical top-to-bottom row order.
    pub const CANONICAL_ORDER: [Lane; 4] = [Lane::Customer, Lane::Front, Lane::Back, Lane::Process];

    /// Resolve a DSL abbreviation character to its lane.
    ///
    /// Abbreviations are uppercase-only; any other character is `None`.
    pub fn from_abbrev(ch: char) -> Option<Self> {
        match ch {
            'C' => Some(Lane::Customer),
            'F' => Some(Lane::Front),
            'B' => Some(Lane::Back),
            'P' => Some(Lane::Process),
            _ => None,
        }
    }

    /// The abbreviation character used in the input DSL.
    pub fn abbrev(self) -> char {
        match self {
            Lane::Customer => 'C',
            Lane::Front => 'F',
            Lane::Back => 'B',
            Lane::Process => 'P',
        }
    }

    /// The human-readable lane name, as drawn in the row gutter.
    pub fn name(self) -> &'static str {
        match self {
            Lane::Customer => "Customer",
            Lane::Front => "Front",
            Lane::Back => "Back",
            Lane::Process => "Process",
        }
    }
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
