pub mod kids;
pub mod links;
pub mod metrics;
pub mod parents;
