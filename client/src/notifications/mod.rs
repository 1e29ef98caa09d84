use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};
use common::notifications::{
    ActiveNotification, Notification, NotificationFeed, NotificationKind, ReleaseMethod,
};

use crate::settings::SettingsResource;

const TOAST_WIDTH: f32 = 320.0;
const LEAVING_OPACITY: f32 = 0.35;

pub struct NotificationPlugin;

impl Plugin for NotificationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NotificationCenter>()
            .add_systems(Update, expire_notifications)
            .add_systems(EguiPrimaryContextPass, draw_notifications);
    }
}

/// The one notification service of the app. Explicitly constructed as a
/// resource (no process-wide singleton) so tests and viewers can run their
/// own independent instance.
#[derive(Resource, Default)]
pub struct NotificationCenter {
    feed: NotificationFeed,
    now_ms: u64,
}

impl NotificationCenter {
    pub fn show(&mut self, notification: Notification) {
        self.feed.push(notification, self.now_ms);
    }

    pub fn show_dice_roll(
        &mut self,
        team: &str,
        standard: u32,
        bonus: u32,
        total: Option<u32>,
        duration_ms: Option<u64>,
    ) {
        self.show(Notification::dice_roll(team, standard, bonus, total, duration_ms));
    }

    pub fn show_catapult_forward(&mut self, team: &str, distance: u32, duration_ms: Option<u64>) {
        self.show(Notification::catapult_forward(team, distance, duration_ms));
    }

    pub fn show_catapult_backward(&mut self, team: &str, distance: u32, duration_ms: Option<u64>) {
        self.show(Notification::catapult_backward(team, distance, duration_ms));
    }

    pub fn show_player_swap(&mut self, first: &str, second: &str, duration_ms: Option<u64>) {
        self.show(Notification::player_swap(first, second, duration_ms));
    }

    pub fn show_barrier_set(&mut self, team: &str, required: u32, duration_ms: Option<u64>) {
        self.show(Notification::barrier_set(team, required, duration_ms));
    }

    pub fn show_barrier_released(
        &mut self,
        team: &str,
        roll: u32,
        bonus: u32,
        method: ReleaseMethod,
        duration_ms: Option<u64>,
    ) {
        self.show(Notification::barrier_released(team, roll, bonus, method, duration_ms));
    }

    pub fn show_barrier_failed(
        &mut self,
        team: &str,
        roll: u32,
        bonus: u32,
        required: &str,
        duration_ms: Option<u64>,
    ) {
        self.show(Notification::barrier_failed(team, roll, bonus, required, duration_ms));
    }

    pub fn show_minigame_win(&mut self, team: &str, forward_fields: u32, duration_ms: Option<u64>) {
        self.show(Notification::minigame_win(team, forward_fields, duration_ms));
    }

    pub fn show_minigame_loss(&mut self, team: &str, duration_ms: Option<u64>) {
        self.show(Notification::minigame_loss(team, duration_ms));
    }

    pub fn show_final_roll_needed(&mut self, team: &str, roll: u32, duration_ms: Option<u64>) {
        self.show(Notification::final_roll_needed(team, roll, duration_ms));
    }

    pub fn show_final_roll_success(&mut self, team: &str, roll: u32, duration_ms: Option<u64>) {
        self.show(Notification::final_roll_success(team, roll, duration_ms));
    }

    pub fn show_message(
        &mut self,
        title: &str,
        message: &str,
        kind: NotificationKind,
        duration_ms: Option<u64>,
    ) {
        self.show(Notification::message(title, message, kind, duration_ms));
    }

    pub fn clear_all(&mut self) {
        self.feed.clear_all(self.now_ms);
    }

    pub fn visible_count(&self) -> usize {
        self.feed.visible_count(self.now_ms)
    }
}

fn expire_notifications(time: Res<Time>, mut center: ResMut<NotificationCenter>) {
    center.now_ms = time.elapsed().as_millis() as u64;
    let now_ms = center.now_ms;
    center.feed.update(now_ms);
}

fn draw_notifications(
    mut contexts: EguiContexts,
    center: Res<NotificationCenter>,
    settings: Res<SettingsResource>,
) {
    if !settings.current.show_notifications {
        return;
    }
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::Area::new(egui::Id::new("notification_stack"))
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-16.0, 16.0))
        .show(ctx, |ui| {
            ui.set_width(TOAST_WIDTH);
            for entry in center.feed.on_screen(center.now_ms) {
                draw_toast(ui, entry, center.now_ms);
                ui.add_space(8.0);
            }
        });
}

fn draw_toast(ui: &mut egui::Ui, entry: &ActiveNotification, now_ms: u64) {
    ui.scope(|ui| {
        if entry.is_leaving(now_ms) {
            ui.set_opacity(LEAVING_OPACITY);
        }
        egui::Frame::new()
            .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 26, 235))
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(entry.notification.icon).size(18.0));
                    ui.label(
                        egui::RichText::new(&entry.notification.title)
                            .strong()
                            .color(egui::Color32::WHITE),
                    );
                });
                ui.label(&entry.notification.message);
                if let Some(dice) = entry.notification.dice {
                    ui.add_space(4.0);
                    ui.horizontal(|ui| {
                        draw_dice_cube(ui, dice.standard);
                        if dice.bonus > 0 {
                            ui.label("+");
                            draw_dice_cube(ui, dice.bonus);
                        }
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(
                                    egui::RichText::new(dice.total.to_string())
                                        .size(20.0)
                                        .strong(),
                                );
                            },
                        );
                    });
                }
                ui.add_space(4.0);
                ui.add(
                    egui::ProgressBar::new(entry.remaining_fraction(now_ms))
                        .desired_height(4.0),
                );
            });
    });
}

fn draw_dice_cube(ui: &mut egui::Ui, value: u32) {
    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .corner_radius(egui::CornerRadius::same(6))
        .inner_margin(egui::Margin::symmetric(8, 4))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(value.to_string())
                    .color(egui::Color32::BLACK)
                    .strong(),
            );
        });
}
