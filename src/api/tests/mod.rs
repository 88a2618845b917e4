//! Unit tests for the action boundary.
