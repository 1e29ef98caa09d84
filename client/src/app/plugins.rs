use bevy::app::PluginGroupBuilder;
use bevy::prelude::*;
use bevy::render::pipelined_rendering::PipelinedRenderingPlugin;
use bevy::window::WindowResolution;

pub fn build_bevy_plugins(title: &str) -> PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: title.into(),
                resolution: WindowResolution::new(1280, 720),
                resizable: true,
                ..Default::default()
            }),
            ..Default::default()
        })
        .disable::<PipelinedRenderingPlugin>()
}
