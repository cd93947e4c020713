//! Tests for the associative memory service.

mod helpers;

mod weights_tests;
