// Common test utilities and fixtures

pub mod helpers;

// Re-export commonly used items
// Note: These may appear unused in some test binaries
#[allow(unused_imports)]
pub use fixtures::{
    channel_resource, sample_dump, sample_narration, video_resource, FakeChannelSource,
};
#[allow(unused_imports)]
pub use helpers::{assert_lossless, create_test_services, words};
