#![doc = include_str!("../README.md")]

mod config;
mod demo;
mod document;
mod element;
mod element_options;
mod error;
mod output;
mod render;

pub use self::{
    config::{
        ConfigError, SerializableElement, SerializableTemplate, compile_template, read_template,
    },
    demo::demo_document,
    document::Document,
    element::Element,
    element_options::ElementOptions,
    error::Error,
    output::write_document,
    render::{RenderFormat, RenderOptions, render, render_document, serialize},
};
