//! Unit tests for the edit workflow.
