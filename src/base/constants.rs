/// Defines the default directory for output files
pub const DEFAULT_OUT_DIR: &str = "/tmp/potsim/results";

/// Defines the default directory for test output files
pub const DEFAULT_TEST_DIR: &str = "/tmp/potsim/test";
