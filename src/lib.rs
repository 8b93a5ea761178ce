//! # ACO Rust Backend
//!
//! Route-segmentation and sector-rate pricing engine for the air-cargo
//! operations console.
//!
//! This crate provides the Rust backend for the Air Cargo Operations (ACO)
//! console. It reconstructs the implicit connecting legs of uploaded cargo
//! records, matches priced route segments ("sector rates") against them, and
//! surfaces priced breakdowns, alternative routes and multi-hop transit
//! pricing options to the React frontend over a REST API.
//!
//! ## Features
//!
//! - **Airport code normalization**: reduce raw location codes to canonical
//!   3-letter airport codes
//! - **Route segmentation**: derive the before-connection, inbound, outbound
//!   and after-connection legs of a cargo record
//! - **Sector rate matching**: find, deduplicate and sum the priced segments
//!   covering a record's legs
//! - **Transit pricing**: enumerate selected-route variants of a transit rate
//!   with per-stop incremental prices
//! - **Conversion override**: let staff replace the derived segmentation and
//!   price with validated explicit values
//! - **HTTP API**: RESTful endpoints for the console frontend
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: identifier newtypes and the consolidated DTO surface
//! - [`models`]: registry entities and cargo records
//! - [`services`]: the pure pricing engine plus background upload processing
//! - [`routes`]: serializable result types produced by the engine
//! - [`db`]: repository pattern, orchestration services and persistence glue
//! - [`http`]: axum-based HTTP server and request handlers
//!
//! ## Design
//!
//! The engine itself is a set of stateless, fail-open functions over
//! registry snapshots: registries go in as plain slices, derived results
//! come out. All registry access and the two writes the engine owns
//! (conversion overrides and rate selections) go through the repository
//! layer, so recomputation after a registry change is a plain re-run over
//! fresh snapshots.

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
