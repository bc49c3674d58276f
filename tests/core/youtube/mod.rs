//! Channel dump workflow tests against an in-memory channel source
