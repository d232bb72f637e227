//! Workspace-level integration tests for BmiCalc-rs.
