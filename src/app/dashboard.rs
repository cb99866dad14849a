use crate::domain::{DashboardAction, DashboardGroup, dashboard_groups};

/// Home-screen navigation: a flat cursor over the three card groups.
#[derive(Debug)]
pub(crate) struct DashboardState {
    pub groups: &'static [DashboardGroup],
    pub selected: usize,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            groups: dashboard_groups(),
            selected: 0,
        }
    }

    fn len(&self) -> usize {
        self.groups.iter().map(|group| group.entries.len()).sum()
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.len();
    }

    pub fn select_prev(&mut self) {
        if self.selected == 0 {
            self.selected = self.len() - 1;
        } else {
            self.selected -= 1;
        }
    }

    pub fn selected_action(&self) -> DashboardAction {
        let mut index = self.selected;
        for group in self.groups {
            if index < group.entries.len() {
                return group.entries[index].1;
            }
            index -= group.entries.len();
        }
        unreachable!("selection index out of range")
    }

    /// Group and entry offsets of the cursor, for rendering.
    pub fn selected_position(&self) -> (usize, usize) {
        let mut index = self.selected;
        for (group_idx, group) in self.groups.iter().enumerate() {
            if index < group.entries.len() {
                return (group_idx, index);
            }
            index -= group.entries.len();
        }
        unreachable!("selection index out of range")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FormKind, View};

    #[test]
    fn cursor_wraps_over_all_entries() {
        let mut dash = DashboardState::new();
        for _ in 0..dash.len() {
            dash.select_next();
        }
        assert_eq!(dash.selected, 0);
        dash.select_prev();
        assert_eq!(dash.selected, dash.len() - 1);
    }

    #[test]
    fn actions_resolve_across_group_boundaries() {
        let mut dash = DashboardState::new();
        assert_eq!(
            dash.selected_action(),
            DashboardAction::OpenModal(FormKind::BankRegistration)
        );
        dash.select_next();
        assert_eq!(
            dash.selected_action(),
            DashboardAction::Navigate(View::Signatories)
        );
        // Last entry overall is the report builder.
        dash.select_prev();
        dash.select_prev();
        assert_eq!(
            dash.selected_action(),
            DashboardAction::Navigate(View::ReportBuilder)
        );
        assert_eq!(dash.selected_position().0, 2);
    }
}
