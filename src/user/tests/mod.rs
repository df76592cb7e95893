//! Unit tests for the user resource.
