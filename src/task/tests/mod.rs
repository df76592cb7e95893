//! Unit tests for the task resource.
