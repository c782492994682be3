/// Hierarchy core: domain model, graph assembly and renderers
pub mod domain;
pub mod renderers;
pub mod services;
