// Common test utilities and fixtures


// Re-export commonly used items
// Note: These may appear unused in unit tests but are used in integration tests
#[allow(unused_imports)]
pub use fixtures::{doc, topic, TestCorpus};
#[allow(unused_imports)]
pub use helpers::{assert_valid_stats, build_services, read_result_ids, test_config};
