//! Unit tests for directive attribute parsing.

mod mutator;
