use leptos::prelude::*;
use leptos::task::spawn_local;

/// One navigable view per record kind plus the dashboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Expenses,
    Eggs,
    Feed,
    Employees,
    Attendance,
    Mortality,
}

impl View {
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Expenses => "Expenses",
            View::Eggs => "Egg collection",
            View::Feed => "Feed",
            View::Employees => "Employees",
            View::Attendance => "Attendance",
            View::Mortality => "Mortality",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            View::Dashboard => "dashboard",
            View::Expenses => "expenses",
            View::Eggs => "eggs",
            View::Feed => "feed",
            View::Employees => "employees",
            View::Attendance => "attendance",
            View::Mortality => "mortality",
        }
    }

    pub fn all() -> Vec<View> {
        vec![
            View::Dashboard,
            View::Expenses,
            View::Eggs,
            View::Feed,
            View::Employees,
            View::Attendance,
            View::Mortality,
        ]
    }
}

/// App-wide UI state: the current view and the transient toast notice
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub current_view: RwSignal<View>,
    pub toast: RwSignal<Option<String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            current_view: RwSignal::new(View::Dashboard),
            toast: RwSignal::new(None),
        }
    }

    pub fn open_view(&self, view: View) {
        self.current_view.set(view);
    }

    /// Show a confirmation notice for ~2.5 seconds
    pub fn show_toast(&self, message: &str) {
        let toast = self.toast;
        toast.set(Some(message.to_string()));
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(2500).await;
            toast.set(None);
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
