//! Run planner tests
//!
//! Directory layout, generated documents and the run manifest.

mod test_run;
