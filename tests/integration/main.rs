//! Integration tests for the budget engine and the `tripbudget` binary.

mod budget_properties;
mod cli;
