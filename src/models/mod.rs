pub mod common;
pub mod kid;
pub mod parent;
pub mod patch;
