//! Game-event notifications.
//!
//! A [`Notification`] is a value describing one transient toast; the typed
//! constructors cover every board event that announces itself. The
//! [`NotificationFeed`] keeps the visible set bounded and expires entries by
//! comparing against a caller-supplied millisecond clock, so there are no
//! timers to leak and `clear_all` needs nothing to cancel.

use std::collections::VecDeque;

/// Maximum notifications shown at once; the oldest start leaving first.
pub const MAX_VISIBLE: usize = 3;
/// Grace period after dismissal while the exit animation plays.
pub const EXIT_ANIMATION_MS: u64 = 400;
/// Default display time for board events.
pub const DEFAULT_EVENT_DURATION_MS: u64 = 8000;
/// Default display time for plain messages.
pub const DEFAULT_MESSAGE_DURATION_MS: u64 = 6000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    DiceRoll,
    CatapultForward,
    CatapultBackward,
    PlayerSwap,
    BarrierSet,
    BarrierReleased,
    BarrierFailed,
    MinigameWin,
    MinigameLoss,
    FinalRollNeeded,
    FinalRollSuccess,
    Info,
    Success,
    Warning,
    Error,
}

/// Which die freed a blocked team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseMethod {
    Standard,
    Bonus,
    Total,
}

impl ReleaseMethod {
    fn label(self) -> &'static str {
        match self {
            ReleaseMethod::Standard => " (standard die)",
            ReleaseMethod::Bonus => " (bonus die)",
            ReleaseMethod::Total => " (combined roll)",
        }
    }
}

/// Structured dice payload rendered as cube glyphs under the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceOutcome {
    pub standard: u32,
    pub bonus: u32,
    pub total: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub icon: &'static str,
    pub title: String,
    pub message: String,
    pub dice: Option<DiceOutcome>,
    pub duration_ms: u64,
}

fn dice_text(roll: u32, bonus: u32) -> String {
    if bonus > 0 {
        format!("{roll} + {bonus} = {}", roll + bonus)
    } else {
        format!("{roll}")
    }
}

impl Notification {
    pub fn dice_roll(
        team: &str,
        standard: u32,
        bonus: u32,
        total: Option<u32>,
        duration_ms: Option<u64>,
    ) -> Self {
        let total = total.unwrap_or(standard + bonus);
        let message = if bonus > 0 {
            format!("{standard} + {bonus} (bonus) = {total} fields")
        } else if total == 1 {
            format!("{standard} field")
        } else {
            format!("{standard} fields")
        };
        Self {
            kind: NotificationKind::DiceRoll,
            icon: "🎲",
            title: format!("{team} rolls"),
            message,
            dice: Some(DiceOutcome { standard, bonus, total }),
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn catapult_forward(team: &str, distance: u32, duration_ms: Option<u64>) -> Self {
        Self {
            kind: NotificationKind::CatapultForward,
            icon: "🚀",
            title: format!("{team}: Catapult!"),
            message: format!("Launched {distance} fields forward!"),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn catapult_backward(team: &str, distance: u32, duration_ms: Option<u64>) -> Self {
        Self {
            kind: NotificationKind::CatapultBackward,
            icon: "💥",
            title: format!("{team}: Catapult!"),
            message: format!("Hurled {distance} fields backward!"),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn player_swap(first_team: &str, second_team: &str, duration_ms: Option<u64>) -> Self {
        Self {
            kind: NotificationKind::PlayerSwap,
            icon: "🔄",
            title: "Position swap!".to_string(),
            message: format!("{first_team} swaps position with {second_team}"),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn barrier_set(team: &str, required: u32, duration_ms: Option<u64>) -> Self {
        Self {
            kind: NotificationKind::BarrierSet,
            icon: "🚧",
            title: format!("{team}: Blocked!"),
            message: format!("Needs {required}+ to break free"),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn barrier_released(
        team: &str,
        roll: u32,
        bonus: u32,
        method: ReleaseMethod,
        duration_ms: Option<u64>,
    ) -> Self {
        Self {
            kind: NotificationKind::BarrierReleased,
            icon: "🎉",
            title: format!("{team}: Free!"),
            message: format!("Rolled {}{}", dice_text(roll, bonus), method.label()),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn barrier_failed(
        team: &str,
        roll: u32,
        bonus: u32,
        required: &str,
        duration_ms: Option<u64>,
    ) -> Self {
        Self {
            kind: NotificationKind::BarrierFailed,
            icon: "❌",
            title: format!("{team}: Still blocked!"),
            message: format!("Rolled {}, {required}", dice_text(roll, bonus)),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn minigame_win(team: &str, forward_fields: u32, duration_ms: Option<u64>) -> Self {
        Self {
            kind: NotificationKind::MinigameWin,
            icon: "🏆",
            title: format!("{team}: Minigame won!"),
            message: format!("Reward: {forward_fields} fields forward"),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn minigame_loss(team: &str, duration_ms: Option<u64>) -> Self {
        Self {
            kind: NotificationKind::MinigameLoss,
            icon: "💔",
            title: format!("{team}: Minigame lost"),
            message: "No reward, onward!".to_string(),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn final_roll_needed(team: &str, current_roll: u32, duration_ms: Option<u64>) -> Self {
        Self {
            kind: NotificationKind::FinalRollNeeded,
            icon: "🎯",
            title: format!("{team}: Final field!"),
            message: format!("Rolled {current_roll}, needs at least 6 to win!"),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    pub fn final_roll_success(team: &str, current_roll: u32, duration_ms: Option<u64>) -> Self {
        Self {
            kind: NotificationKind::FinalRollSuccess,
            icon: "🏆",
            title: format!("{team}: VICTORY!"),
            message: format!("Rolled {current_roll} on the final field and wins! 🎉"),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_EVENT_DURATION_MS),
        }
    }

    /// Plain message with an icon chosen by kind; non-status kinds fall back
    /// to the info icon.
    pub fn message(
        title: &str,
        message: &str,
        kind: NotificationKind,
        duration_ms: Option<u64>,
    ) -> Self {
        let icon = match kind {
            NotificationKind::Success => "✅",
            NotificationKind::Warning => "⚠️",
            NotificationKind::Error => "❌",
            NotificationKind::DiceRoll => "🎲",
            _ => "ℹ️",
        };
        Self {
            kind,
            icon,
            title: title.to_string(),
            message: message.to_string(),
            dice: None,
            duration_ms: duration_ms.unwrap_or(DEFAULT_MESSAGE_DURATION_MS),
        }
    }
}

/// One queued notification with its lifecycle timestamps.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveNotification {
    pub notification: Notification,
    pub shown_at_ms: u64,
    dismiss_at_ms: u64,
}

impl ActiveNotification {
    /// Fully shown: not yet dismissed or evicted.
    pub fn is_visible(&self, now_ms: u64) -> bool {
        now_ms < self.dismiss_at_ms
    }

    /// Playing its exit animation.
    pub fn is_leaving(&self, now_ms: u64) -> bool {
        now_ms >= self.dismiss_at_ms && !self.is_expired(now_ms)
    }

    /// Exit animation finished; drops on the next [`NotificationFeed::update`].
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.dismiss_at_ms + EXIT_ANIMATION_MS
    }

    /// Fraction of display time remaining, for the progress bar.
    pub fn remaining_fraction(&self, now_ms: u64) -> f32 {
        let duration = self.notification.duration_ms.max(1);
        let remaining = self.dismiss_at_ms.saturating_sub(now_ms);
        (remaining as f32 / duration as f32).clamp(0.0, 1.0)
    }
}

/// Bounded FIFO of on-screen notifications.
#[derive(Debug, Default)]
pub struct NotificationFeed {
    entries: VecDeque<ActiveNotification>,
}

impl NotificationFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a notification. If more than [`MAX_VISIBLE`] entries would be
    /// fully visible, the oldest visible ones start leaving immediately.
    pub fn push(&mut self, notification: Notification, now_ms: u64) {
        let dismiss_at_ms = now_ms + notification.duration_ms;
        self.entries.push_back(ActiveNotification {
            notification,
            shown_at_ms: now_ms,
            dismiss_at_ms,
        });

        let mut visible = self.visible_count(now_ms);
        if visible > MAX_VISIBLE {
            for entry in self.entries.iter_mut() {
                if visible <= MAX_VISIBLE {
                    break;
                }
                if entry.is_visible(now_ms) {
                    entry.dismiss_at_ms = now_ms;
                    visible -= 1;
                }
            }
        }
    }

    /// Drop entries whose exit animation has finished.
    pub fn update(&mut self, now_ms: u64) {
        self.entries.retain(|entry| !entry.is_expired(now_ms));
    }

    /// Start the exit animation on everything still showing.
    pub fn clear_all(&mut self, now_ms: u64) {
        for entry in self.entries.iter_mut() {
            entry.dismiss_at_ms = entry.dismiss_at_ms.min(now_ms);
        }
    }

    /// Everything to draw this frame, oldest first, including entries still
    /// playing their exit animation.
    pub fn on_screen(&self, now_ms: u64) -> impl Iterator<Item = &ActiveNotification> {
        self.entries.iter().filter(move |entry| !entry.is_expired(now_ms))
    }

    pub fn visible_count(&self, now_ms: u64) -> usize {
        self.entries.iter().filter(|entry| entry.is_visible(now_ms)).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(duration_ms: u64) -> Notification {
        Notification::message("title", "message", NotificationKind::Info, Some(duration_ms))
    }

    #[test]
    fn default_durations_depend_on_kind() {
        assert_eq!(
            Notification::dice_roll("Red", 4, 0, None, None).duration_ms,
            DEFAULT_EVENT_DURATION_MS
        );
        assert_eq!(
            Notification::message("a", "b", NotificationKind::Info, None).duration_ms,
            DEFAULT_MESSAGE_DURATION_MS
        );
    }

    #[test]
    fn dice_roll_totals_and_formats() {
        let with_bonus = Notification::dice_roll("Red", 4, 2, None, None);
        let dice = with_bonus.dice.unwrap();
        assert_eq!(dice.total, 6);
        assert!(with_bonus.message.contains("4 + 2"));

        let single = Notification::dice_roll("Blue", 1, 0, None, None);
        assert_eq!(single.message, "1 field");
    }

    #[test]
    fn at_most_three_visible_and_oldest_evicted_first() {
        let mut feed = NotificationFeed::new();
        for i in 0..5 {
            feed.push(plain(8000), 100 * i);
        }
        let now = 400;
        assert_eq!(feed.visible_count(now), MAX_VISIBLE);

        // The two oldest are the ones leaving.
        let leaving: Vec<u64> = feed
            .on_screen(now)
            .filter(|entry| entry.is_leaving(now))
            .map(|entry| entry.shown_at_ms)
            .collect();
        assert_eq!(leaving, vec![0, 100]);
    }

    #[test]
    fn notification_lives_for_its_duration_then_leaves() {
        let mut feed = NotificationFeed::new();
        feed.push(plain(1000), 0);

        assert_eq!(feed.visible_count(999), 1);
        assert_eq!(feed.visible_count(1000), 0);

        // Still on screen during the exit animation, gone right after.
        feed.update(1000 + EXIT_ANIMATION_MS - 1);
        assert_eq!(feed.len(), 1);
        assert!(feed.on_screen(1000 + EXIT_ANIMATION_MS - 1).next().is_some());

        feed.update(1000 + EXIT_ANIMATION_MS);
        assert!(feed.is_empty());
    }

    #[test]
    fn progress_counts_down_over_the_display_time() {
        let mut feed = NotificationFeed::new();
        feed.push(plain(1000), 0);
        let entry = feed.on_screen(0).next().unwrap();
        assert_eq!(entry.remaining_fraction(0), 1.0);
        assert_eq!(entry.remaining_fraction(500), 0.5);
        assert_eq!(entry.remaining_fraction(1500), 0.0);
    }

    #[test]
    fn clear_all_dismisses_without_waiting() {
        let mut feed = NotificationFeed::new();
        feed.push(plain(8000), 0);
        feed.push(plain(8000), 10);

        feed.clear_all(50);
        assert_eq!(feed.visible_count(50), 0);
        feed.update(50 + EXIT_ANIMATION_MS);
        assert!(feed.is_empty());
    }

    #[test]
    fn eviction_never_extends_a_lifetime() {
        let mut feed = NotificationFeed::new();
        feed.push(plain(100), 0);
        // Expired long ago; clearing later must not resurrect it.
        feed.clear_all(5000);
        feed.update(5000);
        assert!(feed.is_empty());
    }
}
