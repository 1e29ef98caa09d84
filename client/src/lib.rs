#![allow(clippy::too_many_arguments, clippy::type_complexity)]

pub mod app;
pub mod character;
pub mod notifications;
pub mod scene;
pub mod settings;
