//! Reconstruction of a valuation from a terminal instance.
//!
//! Each instance derived during a [search](crate::procedures::search) records the decision which produced it.
//! Following these from a terminal instance leads back to the root, and the decisions along the way *are* the satisfying assignment: every clause of the root was dropped at the step whose decision satisfied it.
//!
//! Atoms never branched on are absent from the reconstruction, and are unconstrained --- see [Valuation](crate::structures::valuation).

use crate::{
    misc::log::targets::{self},
    structures::{instance::Instance, valuation::Valuation},
};

impl Instance {
    /// The valuation given by the decisions from the instance back to the root.
    pub fn reconstruct(&self) -> Valuation {
        let mut valuation = Valuation::default();

        let mut edge = self.decision();
        while let Some(decision) = edge {
            valuation.insert(&decision.atom, decision.value);
            edge = decision.parent.decision();
        }

        log::trace!(target: targets::RECONSTRUCT, "Valuation over {} atoms", valuation.atom_count());
        valuation
    }
}
