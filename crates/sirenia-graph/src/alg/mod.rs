//! Graph primitives used while coarsening.
//!
//! All algorithms run on an [`UndirectedView`](crate::UndirectedView) and are deterministic:
//! ties are broken by vertex or edge index, never by hash order.

mod components;
mod condense;
mod independent_set;
mod matching;

pub use components::{Components, infect_labels, label_components};
pub use condense::{Condensation, condense};
pub use independent_set::maximal_independent_set;
pub use matching::maximum_weight_matching;
