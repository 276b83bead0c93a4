//! accplot: scatterplot helpers for comparing true and estimated classifier accuracy.
//!
//! This crate renders single-panel scatterplots and faceted scatter grids from
//! a tabular set of accuracy observations, then writes each figure to disk as
//! both SVG and PNG under a deterministic directory convention. Every call is
//! a one-shot, stateless transformation: build a table, pick an output
//! identity, render, export.
//!
//! The design favors small, testable modules: path resolution is a pure
//! function ([`paths`]), styling is an explicit configuration value threaded
//! into each plot builder ([`config`]), and figures are consumed by the
//! exporter so a handle cannot be redrawn after its files are written
//! ([`export`]).
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod paths;
pub mod plots;
