//! Desktop PDF viewer shell.

// dioxus components are snake case
#![allow(non_snake_case)]

pub mod app;
pub mod config;
pub(crate) mod api;
pub(crate) mod components;
pub(crate) mod data_definitions;
