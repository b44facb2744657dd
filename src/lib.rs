//! orgfit: rank a catalog of organizations against your stated
//! preference weights.
//!
//! The core is the penalty ranking engine in [`scoring`]: allocated
//! points are normalized onto each attribute's 0..1 scale and every
//! organization accumulates the squared one-sided shortfall per
//! attribute. Lower is better; zero means every prioritized attribute
//! meets its target. [`dataset`] loads the CSV catalog, [`config`] holds
//! the YAML configuration and [`output`] renders the results.

pub mod config;
pub mod dataset;
pub mod output;
pub mod scoring;
