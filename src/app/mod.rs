// Application layer: layouts that turn parsed switch data into tables, and the output formats.

pub mod renderers;
