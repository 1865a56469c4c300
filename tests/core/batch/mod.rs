//! Batch run tests: every topic evaluated and written to its result file
