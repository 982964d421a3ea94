//! NER workbench: paste text, pick a pretrained model, inspect the entities.

pub mod api;
pub mod cli;
pub mod config;
pub mod logging;
pub mod nlp;
pub mod render;
