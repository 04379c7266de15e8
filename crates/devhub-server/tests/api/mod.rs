//! HTTP API tests using Rocket's local client

mod search_test;
