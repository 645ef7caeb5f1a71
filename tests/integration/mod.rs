//! Integration tests for the shotmatch reconciliation tool

mod cli_end_to_end;
mod config_integration;
mod pipeline;
mod store_integration;
