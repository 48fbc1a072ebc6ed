// Term analysis — filtering, grouping, density, relation scoring and the
// per-chapter classifier that chains them.

pub mod classifier;
pub mod density;
pub mod filter;
pub mod grouping;
pub mod relation;
