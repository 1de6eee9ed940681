//! Literal palette tables, one module per provider.

pub mod japan_cudo;
pub mod paul_tol;

pub use japan_cudo::JAPAN_CUDO;
pub use paul_tol::PAUL_TOL;
