//! Demo page menu.
//!
//! Each entry stands in for one page of the marketplace and triggers the
//! workflow that page runs against the backend.

/// A page workflow the demo can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    LoginWrongPassword,
    RegisterStudent,
    RegisterWeakPassword,
    BookLesson,
    BookLessonWithoutSubject,
    ConfirmAppointment,
    RejectAppointment,
    CancelAppointment,
    ApproveProfessor,
    RejectProfessor,
    EditProfile,
    EditProfileUnchanged,
}

impl Page {
    pub fn label(self) -> &'static str {
        match self {
            Page::Login => "Login",
            Page::LoginWrongPassword => "Login (wrong password)",
            Page::RegisterStudent => "Register student",
            Page::RegisterWeakPassword => "Register (weak password)",
            Page::BookLesson => "Book a lesson",
            Page::BookLessonWithoutSubject => "Book (no subject)",
            Page::ConfirmAppointment => "Confirm appointment #101",
            Page::RejectAppointment => "Reject appointment #102",
            Page::CancelAppointment => "Cancel appointment #103",
            Page::ApproveProfessor => "Approve professor #7",
            Page::RejectProfessor => "Reject professor #8",
            Page::EditProfile => "Edit profile (raise price)",
            Page::EditProfileUnchanged => "Edit profile (no changes)",
        }
    }
}

/// One row of the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Run(Page),
    ToggleBackend,
    Quit,
}

impl MenuItem {
    pub fn all() -> &'static [MenuItem] {
        &[
            MenuItem::Run(Page::Login),
            MenuItem::Run(Page::LoginWrongPassword),
            MenuItem::Run(Page::RegisterStudent),
            MenuItem::Run(Page::RegisterWeakPassword),
            MenuItem::Run(Page::BookLesson),
            MenuItem::Run(Page::BookLessonWithoutSubject),
            MenuItem::Run(Page::ConfirmAppointment),
            MenuItem::Run(Page::RejectAppointment),
            MenuItem::Run(Page::CancelAppointment),
            MenuItem::Run(Page::ApproveProfessor),
            MenuItem::Run(Page::RejectProfessor),
            MenuItem::Run(Page::EditProfile),
            MenuItem::Run(Page::EditProfileUnchanged),
            MenuItem::ToggleBackend,
            MenuItem::Quit,
        ]
    }

    pub fn label(self, offline: bool) -> &'static str {
        match self {
            MenuItem::Run(page) => page.label(),
            MenuItem::ToggleBackend if offline => "Bring backend online",
            MenuItem::ToggleBackend => "Take backend offline",
            MenuItem::Quit => "Quit",
        }
    }
}
