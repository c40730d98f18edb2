//! Registration form state
//!
//! Groups the form's signals so the page can reset them in one go and turn
//! them into a `Registration`.

use leptos::prelude::*;
use tallerportal::Registration;

/// `RwSignal` fields keep the struct `Copy`, so closures can capture it freely.
#[derive(Clone, Copy)]
pub struct RegisterForm {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    /// Optional DNI, helps the workshop match an existing customer record.
    pub national_id: RwSignal<String>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            national_id: RwSignal::new(String::new()),
        }
    }

    pub fn reset(&self) {
        self.username.set(String::new());
        self.password.set(String::new());
        self.first_name.set(String::new());
        self.last_name.set(String::new());
        self.national_id.set(String::new());
    }

    pub fn to_request(&self) -> Registration {
        let national_id = self.national_id.get_untracked();

        Registration {
            username: self.username.get_untracked(),
            password: self.password.get_untracked(),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            national_id: (!national_id.trim().is_empty()).then_some(national_id),
        }
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}
