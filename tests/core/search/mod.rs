//! Search layer tests
//!
//! End-to-end engine behavior over the fixture catalog, plus the
//! ranking and weighting rules it relies on.

mod test_modes;
mod test_ranking;
