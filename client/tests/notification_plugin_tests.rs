use bevy::prelude::*;

use client::notifications::{NotificationCenter, NotificationPlugin};

#[test]
fn notification_plugin_installs_the_center_resource() {
    let mut app = App::new();
    app.add_plugins(NotificationPlugin);

    assert!(app.world().get_resource::<NotificationCenter>().is_some());
}

#[test]
fn center_keeps_the_visible_set_bounded() {
    let mut app = App::new();
    app.add_plugins(NotificationPlugin);

    let mut center = app.world_mut().resource_mut::<NotificationCenter>();
    for i in 0..5u32 {
        center.show_dice_roll("Team Red", (i % 6) + 1, 0, None, None);
    }
    assert_eq!(center.visible_count(), 3);

    center.clear_all();
    assert_eq!(center.visible_count(), 0);
}
