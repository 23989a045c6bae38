//! Exit Readiness - Business exit-readiness scoring engine
//!
//! Scores how sellable a creator business is: seven dimension scores are
//! extracted from its revenue streams, deals, owned assets and documented
//! processes, combined under a versioned weight table, classified into a
//! readiness tier and turned into a ranked list of recommendations.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
