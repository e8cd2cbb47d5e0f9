//! Railway station lookup server.
//!
//! Resolves free-text or identifier queries against a fixed catalog of
//! stations and answers with ranked matches as JSON-LD. Typing
//! `"Bruxelles"`, `"brussel"` or `"Brüssel"` finds the same stations;
//! `"008892007"`, `"BE.NMBS.008892007"` and the station's URI all resolve
//! to Gent-Sint-Pieters.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod document;
pub mod domain;
pub mod lookup;
pub mod web;
