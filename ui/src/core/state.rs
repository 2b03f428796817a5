//! Small finite-state records behind the interactive widgets.
//!
//! Components keep these in signals and only change them through the
//! transition methods below, then render from the resulting value.

/// Collapsible navigation panel behind the hamburger button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavPanel {
    #[default]
    Hidden,
    /// Expanded as a vertical list.
    Vertical,
}

impl NavPanel {
    pub fn toggled(self) -> Self {
        match self {
            NavPanel::Hidden => NavPanel::Vertical,
            NavPanel::Vertical => NavPanel::Hidden,
        }
    }

    pub fn is_open(self) -> bool {
        self == NavPanel::Vertical
    }
}

/// Colour theme of the results modal, derived from the model's verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    High,
    #[default]
    Low,
}

impl Theme {
    pub fn from_prediction(prediction: u8) -> Self {
        if prediction == 1 {
            Theme::High
        } else {
            Theme::Low
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Theme::High => "theme-high",
            Theme::Low => "theme-low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Summary,
    Reboot,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Summary, Tab::Reboot];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Summary => "summary",
            Tab::Reboot => "reboot",
        }
    }
}

/// Visibility, theme and tab selection of the results modal.
///
/// `epoch` increases on every presentation; the modal box is keyed by it so
/// each result remounts the box (replaying its entrance animation and
/// dropping counters left over from the previous result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    pub open: bool,
    pub theme: Theme,
    pub active_tab: Tab,
    pub epoch: u64,
}

impl ModalState {
    pub fn present(self, prediction: u8) -> Self {
        Self {
            open: true,
            theme: Theme::from_prediction(prediction),
            active_tab: Tab::Summary,
            epoch: self.epoch.wrapping_add(1),
        }
    }

    pub fn select_tab(self, tab: Tab) -> Self {
        Self {
            active_tab: tab,
            ..self
        }
    }

    pub fn close(self) -> Self {
        Self {
            open: false,
            ..self
        }
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active_tab == tab
    }
}

/// Guard against overlapping requests of one flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InFlight {
    busy: bool,
}

impl InFlight {
    /// Marks the flow busy. Returns `false` (and changes nothing) if a
    /// request is already outstanding.
    pub fn try_begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        true
    }

    pub fn finish(&mut self) {
        self.busy = false;
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatPanel {
    #[default]
    Closed,
    Open,
}

impl ChatPanel {
    pub fn toggled(self) -> Self {
        match self {
            ChatPanel::Closed => ChatPanel::Open,
            ChatPanel::Open => ChatPanel::Closed,
        }
    }

    pub fn close(self) -> Self {
        ChatPanel::Closed
    }

    pub fn is_open(self) -> bool {
        self == ChatPanel::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_toggle_twice_is_identity() {
        for start in [NavPanel::Hidden, NavPanel::Vertical] {
            assert_eq!(start.toggled().toggled(), start);
            assert_ne!(start.toggled(), start);
        }
        assert!(NavPanel::Hidden.toggled().is_open());
    }

    #[test]
    fn theme_is_derived_from_prediction_only() {
        let high = ModalState::default().present(1);
        assert_eq!(high.theme, Theme::High);
        assert_eq!(high.theme.css_class(), "theme-high");

        // Re-presenting a healthy result after a risky one never keeps theme-high.
        let low = high.present(0);
        assert_eq!(low.theme, Theme::Low);
        assert_eq!(low.theme.css_class(), "theme-low");
    }

    #[test]
    fn presentation_resets_tab_and_bumps_epoch() {
        let first = ModalState::default().present(0).select_tab(Tab::Reboot);
        let second = first.close().present(1);
        assert!(second.open);
        assert_eq!(second.active_tab, Tab::Summary);
        assert_eq!(second.epoch, first.epoch + 1);
    }

    #[test]
    fn exactly_one_tab_is_active() {
        let state = ModalState::default().present(0);
        assert!(state.is_active(Tab::Summary));

        let state = state.select_tab(Tab::Reboot);
        let active: Vec<_> = Tab::ALL.iter().filter(|t| state.is_active(**t)).collect();
        assert_eq!(active, vec![&Tab::Reboot]);
    }

    #[test]
    fn close_keeps_theme() {
        let state = ModalState::default().present(1).close();
        assert!(!state.open);
        assert_eq!(state.theme, Theme::High);
    }

    #[test]
    fn in_flight_refuses_overlap() {
        let mut flight = InFlight::default();
        assert!(flight.try_begin());
        assert!(!flight.try_begin());
        assert!(flight.is_busy());
        flight.finish();
        assert!(!flight.is_busy());
        assert!(flight.try_begin());
    }

    #[test]
    fn chat_panel_close_is_forced() {
        assert_eq!(ChatPanel::Open.close(), ChatPanel::Closed);
        assert_eq!(ChatPanel::Closed.close(), ChatPanel::Closed);
        assert!(ChatPanel::Closed.toggled().is_open());
    }
}
