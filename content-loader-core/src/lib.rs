#![doc = "content-loader-core: core driver logic for content-loader."]

//! This crate holds the range driver, the invoker seam and the text helpers.
//! Command-line parsing and config-file loading live in the `content-loader` crate.
//!
//! # Usage
//! Build a [`config::LoadConfig`], pick a [`contract::Invoker`] and call
//! [`load::load_contents`].

pub mod config;
pub mod contract;
pub mod fix_text;
pub mod invoke;
pub mod load;
