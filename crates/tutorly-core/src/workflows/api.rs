//! Marketplace backend boundary.
//!
//! The real backend is a remote REST service that owns every business rule.
//! Workflows only need the calls below; `InMemoryApi` answers them with
//! canned data for the demo host and tests.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use super::profile::{ProfessorProfile, ProfileChanges};

/// Authenticated user returned by `login`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: u64,
    pub name: String,
    pub token: String,
}

/// Registration payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Booking payload sent by the schedule page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub professor_id: u64,
    pub subject_id: u64,
    /// ISO 8601 start of the slot.
    pub start_time: String,
}

/// Messages the server attached to one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub messages: Vec<String>,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            messages: vec![message.into()],
        }
    }
}

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The server answered with an error status.
    Rejected { message: Option<String> },
    /// Validation failed; `errors` keeps the server's field order.
    Invalid {
        message: Option<String>,
        errors: Vec<FieldError>,
    },
    /// The session token was refused (HTTP 401).
    Unauthorized,
    /// The server could not be reached.
    Unreachable,
}

impl ApiError {
    pub fn rejected(message: impl Into<String>) -> Self {
        ApiError::Rejected {
            message: Some(message.into()),
        }
    }

    /// Text worth showing to the user, if the server sent any.
    ///
    /// For validation failures the first field message wins over the
    /// summary message.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message } => message.as_deref(),
            ApiError::Invalid { message, errors } => errors
                .first()
                .and_then(|error| error.messages.first())
                .map(String::as_str)
                .or(message.as_deref()),
            ApiError::Unauthorized | ApiError::Unreachable => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Rejected { .. } | ApiError::Invalid { .. } => match self.server_message() {
                Some(message) => write!(f, "rejected: {message}"),
                None => write!(f, "rejected"),
            },
            ApiError::Unauthorized => write!(f, "session expired"),
            ApiError::Unreachable => write!(f, "server unreachable"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Professor-side actions on an appointment request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentAction {
    Confirm,
    Reject,
    Cancel,
}

impl AppointmentAction {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentAction::Confirm => "confirm",
            AppointmentAction::Reject => "reject",
            AppointmentAction::Cancel => "cancel",
        }
    }
}

/// Administrator decision on a pending professor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

pub trait MarketplaceApi: Send + Sync {
    fn login(
        &self,
        email: &str,
        password: &str,
    ) -> impl Future<Output = Result<Session, ApiError>> + Send;

    fn register(&self, account: &NewAccount) -> impl Future<Output = Result<(), ApiError>> + Send;

    /// Requests a lesson; returns the new appointment id.
    fn book_appointment(
        &self,
        booking: &NewAppointment,
    ) -> impl Future<Output = Result<u64, ApiError>> + Send;

    fn update_appointment(
        &self,
        id: u64,
        action: AppointmentAction,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn review_professor(
        &self,
        id: u64,
        decision: ReviewDecision,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn update_profile(
        &self,
        professor_id: u64,
        changes: &ProfileChanges,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}

#[derive(Debug, Clone)]
struct Account {
    id: u64,
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Default)]
struct Directory {
    accounts: Vec<Account>,
    appointments: BTreeSet<u64>,
    booked_slots: BTreeSet<(u64, String)>,
    pending_professors: BTreeSet<u64>,
    profiles: BTreeMap<u64, ProfessorProfile>,
}

/// Canned backend with simulated latency.
#[derive(Debug)]
pub struct InMemoryApi {
    latency: Duration,
    offline: AtomicBool,
    session_expired: AtomicBool,
    directory: Mutex<Directory>,
}

impl InMemoryApi {
    pub const DEMO_EMAIL: &str = "ana@tutorly.dev";
    pub const DEMO_PASSWORD: &str = "Senha@123";
    /// Approved professor with a bookable schedule and an editable profile.
    pub const DEMO_PROFESSOR: u64 = 3;

    /// Creates an API with one student account, three open appointments
    /// (101-103), one approved professor (3), and two professors awaiting
    /// review (7, 8).
    pub fn seeded(latency: Duration) -> Self {
        let directory = Directory {
            accounts: vec![Account {
                id: 1,
                name: "Ana".to_string(),
                email: Self::DEMO_EMAIL.to_string(),
                password: Self::DEMO_PASSWORD.to_string(),
            }],
            appointments: BTreeSet::from([101, 102, 103]),
            booked_slots: BTreeSet::new(),
            pending_professors: BTreeSet::from([7, 8]),
            profiles: BTreeMap::from([(
                Self::DEMO_PROFESSOR,
                ProfessorProfile {
                    name: "Carla".to_string(),
                    contact: "(11) 98765-4321".to_string(),
                    photo_url: String::new(),
                    biography: "Professora de matemática e física.".to_string(),
                    price: 80.0,
                    subjects: vec![1, 2],
                },
            )]),
        };
        Self {
            latency,
            offline: AtomicBool::new(false),
            session_expired: AtomicBool::new(false),
            directory: Mutex::new(directory),
        }
    }

    /// Makes every following call fail with `ApiError::Unreachable`.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn is_offline(&self) -> bool {
        self.offline.load(Ordering::SeqCst)
    }

    /// Makes authenticated calls fail with `ApiError::Unauthorized`.
    pub fn set_session_expired(&self, expired: bool) {
        self.session_expired.store(expired, Ordering::SeqCst);
    }

    pub fn open_appointments(&self) -> Vec<u64> {
        self.lock().appointments.iter().copied().collect()
    }

    pub fn pending_professors(&self) -> Vec<u64> {
        self.lock().pending_professors.iter().copied().collect()
    }

    pub fn profile(&self, professor_id: u64) -> Option<ProfessorProfile> {
        self.lock().profiles.get(&professor_id).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, Directory> {
        self.directory.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn round_trip(&self) -> Result<(), ApiError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        if self.is_offline() {
            return Err(ApiError::Unreachable);
        }
        Ok(())
    }

    async fn authenticated_round_trip(&self) -> Result<(), ApiError> {
        self.round_trip().await?;
        if self.session_expired.load(Ordering::SeqCst) {
            return Err(ApiError::Unauthorized);
        }
        Ok(())
    }
}

impl MarketplaceApi for InMemoryApi {
    async fn login(&self, email: &str, password: &str) -> Result<Session, ApiError> {
        self.round_trip().await?;
        let directory = self.lock();
        directory
            .accounts
            .iter()
            .find(|a| a.email.eq_ignore_ascii_case(email) && a.password == password)
            .map(|a| Session {
                user_id: a.id,
                name: a.name.clone(),
                token: format!("token-{}", a.id),
            })
            .ok_or(ApiError::Rejected { message: None })
    }

    async fn register(&self, account: &NewAccount) -> Result<(), ApiError> {
        self.round_trip().await?;
        let mut directory = self.lock();
        if directory
            .accounts
            .iter()
            .any(|a| a.email.eq_ignore_ascii_case(&account.email))
        {
            return Err(ApiError::Invalid {
                message: Some("The given data was invalid.".to_string()),
                errors: vec![FieldError::new("email", "E-mail já cadastrado.")],
            });
        }
        let id = directory.accounts.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        directory.accounts.push(Account {
            id,
            name: account.name.clone(),
            email: account.email.clone(),
            password: account.password.clone(),
        });
        Ok(())
    }

    async fn book_appointment(&self, booking: &NewAppointment) -> Result<u64, ApiError> {
        self.authenticated_round_trip().await?;
        let mut directory = self.lock();
        if !directory.profiles.contains_key(&booking.professor_id) {
            return Err(ApiError::rejected("Professor não encontrado."));
        }
        let slot = (booking.professor_id, booking.start_time.clone());
        if !directory.booked_slots.insert(slot) {
            return Err(ApiError::rejected("Este horário não está mais disponível."));
        }
        let id = directory.appointments.last().copied().unwrap_or(100) + 1;
        directory.appointments.insert(id);
        Ok(id)
    }

    async fn update_appointment(&self, id: u64, action: AppointmentAction) -> Result<(), ApiError> {
        self.round_trip().await?;
        let mut directory = self.lock();
        if !directory.appointments.contains(&id) {
            return Err(ApiError::rejected("Agendamento não encontrado."));
        }
        if action != AppointmentAction::Confirm {
            directory.appointments.remove(&id);
        }
        Ok(())
    }

    async fn review_professor(&self, id: u64, _decision: ReviewDecision) -> Result<(), ApiError> {
        self.round_trip().await?;
        if self.lock().pending_professors.remove(&id) {
            Ok(())
        } else {
            Err(ApiError::rejected("Professor não encontrado."))
        }
    }

    async fn update_profile(
        &self,
        professor_id: u64,
        changes: &ProfileChanges,
    ) -> Result<(), ApiError> {
        self.authenticated_round_trip().await?;
        let mut directory = self.lock();
        let profile = directory
            .profiles
            .get_mut(&professor_id)
            .ok_or_else(|| ApiError::rejected("Professor não encontrado."))?;
        changes.apply_to(profile);
        Ok(())
    }
}
