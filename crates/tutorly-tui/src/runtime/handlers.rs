//! Page workflow handlers.
//!
//! Each handler runs one workflow to completion and returns the event the
//! runtime feeds back into the reducer.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use tutorly_core::dialog::DialogHandle;
use tutorly_core::workflows::{
    self, AppointmentAction, BookingRequest, InMemoryApi, ProfileForm, RegistrationForm,
    ReviewDecision,
};

use crate::events::UiEvent;
use crate::pages::Page;

pub async fn run_page(page: Page, dialogs: DialogHandle, api: Arc<InMemoryApi>) -> UiEvent {
    let api = &*api;
    let outcome = match page {
        Page::Login => {
            workflows::login(
                &dialogs,
                api,
                InMemoryApi::DEMO_EMAIL,
                InMemoryApi::DEMO_PASSWORD,
            )
            .await
        }
        Page::LoginWrongPassword => {
            workflows::login(&dialogs, api, InMemoryApi::DEMO_EMAIL, "senha-errada").await
        }
        Page::RegisterStudent => {
            workflows::register(&dialogs, api, &registration_form("Forte@123")).await
        }
        Page::RegisterWeakPassword => {
            workflows::register(&dialogs, api, &registration_form("fraca")).await
        }
        Page::BookLesson => {
            workflows::book_appointment(&dialogs, api, &booking(Some((1, "Matemática")))).await
        }
        Page::BookLessonWithoutSubject => {
            workflows::book_appointment(&dialogs, api, &booking(None)).await
        }
        Page::ConfirmAppointment => {
            workflows::appointment_action(&dialogs, api, 101, AppointmentAction::Confirm).await
        }
        Page::RejectAppointment => {
            workflows::appointment_action(&dialogs, api, 102, AppointmentAction::Reject).await
        }
        Page::CancelAppointment => {
            workflows::appointment_action(&dialogs, api, 103, AppointmentAction::Cancel).await
        }
        Page::ApproveProfessor => {
            workflows::review_professor(&dialogs, api, 7, ReviewDecision::Approve).await
        }
        Page::RejectProfessor => {
            workflows::review_professor(&dialogs, api, 8, ReviewDecision::Reject).await
        }
        Page::EditProfile | Page::EditProfileUnchanged => {
            let professor_id = InMemoryApi::DEMO_PROFESSOR;
            let mut current = api.profile(professor_id).unwrap_or_default();
            let mut form = ProfileForm::from(&current);
            if page == Page::EditProfile {
                form.price = (current.price + 5.0).to_string();
            }
            workflows::update_profile(&dialogs, api, professor_id, &mut current, &form).await
        }
    };

    UiEvent::WorkflowFinished { page, outcome }
}

/// Walks the demo professor's 08:00-19:00 slots; once all are taken the
/// backend starts refusing them.
fn booking(subject: Option<(u64, &str)>) -> BookingRequest {
    static NEXT_SLOT: AtomicU32 = AtomicU32::new(0);
    let hour = 8 + NEXT_SLOT.fetch_add(1, Ordering::Relaxed) % 12;
    BookingRequest {
        professor_id: InMemoryApi::DEMO_PROFESSOR,
        subject: subject.map(|(id, name)| (id, name.to_string())),
        start_time: format!("2025-06-02T{hour:02}:00:00"),
        time_label: format!("{hour:02}:00"),
    }
}

fn registration_form(password: &str) -> RegistrationForm {
    RegistrationForm {
        name: "Bruno".to_string(),
        email: "bruno@tutorly.dev".to_string(),
        password: password.to_string(),
        password_confirmation: password.to_string(),
    }
}
