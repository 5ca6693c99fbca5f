//! Page workflows that report through the shared dialog.
//!
//! Every page of the marketplace follows the same shape: optionally ask for
//! confirmation, call the backend, then report the result with an alert.
//! Backend failures never escape as errors; they become error alerts.

pub mod api;
pub mod password;
pub mod profile;

pub use api::{
    ApiError, AppointmentAction, FieldError, InMemoryApi, MarketplaceApi, NewAccount,
    NewAppointment, ReviewDecision, Session,
};
pub use password::PasswordChecklist;
pub use profile::{ProfessorProfile, ProfileChanges, ProfileForm};

use crate::dialog::{DialogHandle, DialogKind};

const CONNECTION_ERROR_TITLE: &str = "Erro de Conexão";
const CONNECTION_ERROR_MESSAGE: &str = "Não foi possível conectar ao servidor. Tente novamente.";
const SESSION_EXPIRED_TITLE: &str = "Sessão Expirada";
const SESSION_EXPIRED_MESSAGE: &str = "Sua sessão expirou. Faça login novamente.";

/// Alert texts a workflow uses when its backend call fails.
struct FailureText<'a> {
    title: &'a str,
    /// Shown when the server sent no message of its own.
    fallback: &'a str,
    connection: &'a str,
}

impl<'a> FailureText<'a> {
    fn new(title: &'a str, fallback: &'a str) -> Self {
        Self {
            title,
            fallback,
            connection: CONNECTION_ERROR_MESSAGE,
        }
    }

    fn with_connection(mut self, connection: &'a str) -> Self {
        self.connection = connection;
        self
    }
}

/// How a workflow ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowOutcome {
    /// The backend accepted the request (or nothing needed sending).
    Completed,
    /// The user answered "no" to the confirmation.
    Declined,
    /// Validation or the backend failed; an alert explained why.
    Failed,
}

impl WorkflowOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkflowOutcome::Completed => "completed",
            WorkflowOutcome::Declined => "declined",
            WorkflowOutcome::Failed => "failed",
        }
    }
}

/// Fields of the registration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

pub async fn login<A: MarketplaceApi>(
    dialogs: &DialogHandle,
    api: &A,
    email: &str,
    password: &str,
) -> WorkflowOutcome {
    match api.login(email, password).await {
        Ok(session) => {
            tracing::info!(user_id = session.user_id, "login succeeded");
            dialogs.show_alert(
                "Login Bem-Sucedido!",
                format!("Bem-vindo, {}! Você será redirecionado.", session.name),
                DialogKind::Success,
            );
            WorkflowOutcome::Completed
        }
        Err(err) => {
            tracing::warn!(%err, "login failed");
            report_failure(
                dialogs,
                &err,
                &FailureText::new("Erro no Login", "Credenciais inválidas."),
            );
            WorkflowOutcome::Failed
        }
    }
}

/// Validates the form client-side, then creates the account.
pub async fn register<A: MarketplaceApi>(
    dialogs: &DialogHandle,
    api: &A,
    form: &RegistrationForm,
) -> WorkflowOutcome {
    if !password::is_acceptable(&form.password) {
        dialogs.show_alert(
            "Senha Inválida",
            "A senha deve ter pelo menos 8 caracteres, incluindo uma letra maiúscula, \
             uma minúscula, um número e um símbolo.",
            DialogKind::Error,
        );
        return WorkflowOutcome::Failed;
    }

    if form.password != form.password_confirmation {
        dialogs.show_alert(
            "Senhas Não Coincidem",
            "Os campos de senha e confirmação de senha não são iguais. Por favor, verifique.",
            DialogKind::Error,
        );
        return WorkflowOutcome::Failed;
    }

    let account = NewAccount {
        name: form.name.clone(),
        email: form.email.clone(),
        password: form.password.clone(),
    };
    match api.register(&account).await {
        Ok(()) => {
            tracing::info!("registration succeeded");
            dialogs.show_alert(
                "Cadastro Realizado!",
                format!(
                    "Usuário {} cadastrado com sucesso! Você já pode fazer o login.",
                    form.name
                ),
                DialogKind::Success,
            );
            WorkflowOutcome::Completed
        }
        Err(err) => {
            tracing::warn!(%err, "registration failed");
            report_failure(
                dialogs,
                &err,
                &FailureText::new("Erro no Cadastro", "Falha ao cadastrar usuário").with_connection(
                    "Não foi possível conectar ao servidor. Verifique sua rede e tente novamente.",
                ),
            );
            WorkflowOutcome::Failed
        }
    }
}

/// Asks for confirmation, then applies a professor-side appointment action.
pub async fn appointment_action<A: MarketplaceApi>(
    dialogs: &DialogHandle,
    api: &A,
    id: u64,
    action: AppointmentAction,
) -> WorkflowOutcome {
    let (title, message) = match action {
        AppointmentAction::Confirm => (
            "Confirmar Agendamento",
            format!("Deseja confirmar a aula com o aluno para o agendamento #{id}?"),
        ),
        AppointmentAction::Reject => (
            "Rejeitar Agendamento",
            format!("Deseja rejeitar esta solicitação de aula? (ID: {id})"),
        ),
        AppointmentAction::Cancel => (
            "Cancelar Agendamento",
            format!("Deseja cancelar esta aula confirmada? (ID: {id})"),
        ),
    };

    if !dialogs.show_confirm(title, message).await {
        tracing::info!(id, action = action.as_str(), "appointment action declined");
        return WorkflowOutcome::Declined;
    }

    match api.update_appointment(id, action).await {
        Ok(()) => {
            tracing::info!(id, action = action.as_str(), "appointment updated");
            dialogs.show_alert(
                "Sucesso!",
                format!("O agendamento #{id} foi atualizado com sucesso."),
                DialogKind::Success,
            );
            WorkflowOutcome::Completed
        }
        Err(err) => {
            tracing::warn!(id, action = action.as_str(), %err, "appointment update failed");
            report_failure(
                dialogs,
                &err,
                &FailureText::new("Erro", "Não foi possível completar a ação."),
            );
            WorkflowOutcome::Failed
        }
    }
}

/// Asks for confirmation, then approves or rejects a pending professor.
pub async fn review_professor<A: MarketplaceApi>(
    dialogs: &DialogHandle,
    api: &A,
    id: u64,
    decision: ReviewDecision,
) -> WorkflowOutcome {
    let (title, verb, done) = match decision {
        ReviewDecision::Approve => ("Aprovar Professor", "aprovar", "aprovado"),
        ReviewDecision::Reject => ("Rejeitar Professor", "rejeitar", "rejeitado"),
    };

    let question = format!("Tem certeza que deseja {verb} o professor #{id}?");
    if !dialogs.show_confirm(title, question).await {
        return WorkflowOutcome::Declined;
    }

    match api.review_professor(id, decision).await {
        Ok(()) => {
            tracing::info!(id, verb, "professor reviewed");
            dialogs.show_alert(
                "Sucesso!",
                format!("O professor #{id} foi {done} com sucesso."),
                DialogKind::Success,
            );
            WorkflowOutcome::Completed
        }
        Err(err) => {
            tracing::warn!(id, verb, %err, "professor review failed");
            report_failure(
                dialogs,
                &err,
                &FailureText::new("Erro", "Não foi possível atualizar o status do professor."),
            );
            WorkflowOutcome::Failed
        }
    }
}

/// A lesson the student picked on the schedule page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub professor_id: u64,
    /// Selected subject as `(id, name)`; `None` when nothing was picked.
    pub subject: Option<(u64, String)>,
    /// ISO 8601 start of the slot.
    pub start_time: String,
    /// Slot as displayed, e.g. `14:00`.
    pub time_label: String,
}

/// Books a lesson after the student confirms the slot.
pub async fn book_appointment<A: MarketplaceApi>(
    dialogs: &DialogHandle,
    api: &A,
    request: &BookingRequest,
) -> WorkflowOutcome {
    let Some((subject_id, subject_name)) = &request.subject else {
        dialogs.show_alert(
            "Atenção",
            "Por favor, selecione uma matéria primeiro.",
            DialogKind::Info,
        );
        return WorkflowOutcome::Failed;
    };

    let question = format!(
        "Deseja realmente agendar uma aula de {subject_name} para {}?",
        request.time_label
    );
    if !dialogs.show_confirm("Confirmar Agendamento", question).await {
        return WorkflowOutcome::Declined;
    }

    let booking = NewAppointment {
        professor_id: request.professor_id,
        subject_id: *subject_id,
        start_time: request.start_time.clone(),
    };
    match api.book_appointment(&booking).await {
        Ok(id) => {
            tracing::info!(id, professor_id = request.professor_id, "appointment requested");
            dialogs.show_alert(
                "Agendamento Solicitado!",
                "Sua solicitação foi enviada com sucesso! O professor irá confirmar em breve.",
                DialogKind::Success,
            );
            WorkflowOutcome::Completed
        }
        Err(err) => {
            tracing::warn!(professor_id = request.professor_id, %err, "booking failed");
            report_failure(
                dialogs,
                &err,
                &FailureText::new("Erro ao Agendar", "Ocorreu um erro. Tente outro horário.")
                    .with_connection(
                        "Não foi possível conectar ao servidor para agendar a aula. \
                         Tente novamente.",
                    ),
            );
            WorkflowOutcome::Failed
        }
    }
}

/// Sends the fields of `form` that differ from `current`.
///
/// On success `current` is updated to what the backend now holds, so a
/// second submit of the same form reports no changes.
pub async fn update_profile<A: MarketplaceApi>(
    dialogs: &DialogHandle,
    api: &A,
    professor_id: u64,
    current: &mut ProfessorProfile,
    form: &ProfileForm,
) -> WorkflowOutcome {
    let changes = ProfileChanges::diff(current, form);
    if changes.is_empty() {
        dialogs.show_alert(
            "Nenhuma Alteração",
            "Nenhuma alteração foi detectada no seu perfil.",
            DialogKind::Info,
        );
        return WorkflowOutcome::Completed;
    }

    match api.update_profile(professor_id, &changes).await {
        Ok(()) => {
            changes.apply_to(current);
            tracing::info!(professor_id, "profile updated");
            dialogs.show_alert(
                "Sucesso!",
                "Seu perfil foi atualizado com sucesso!",
                DialogKind::Success,
            );
            WorkflowOutcome::Completed
        }
        Err(err) => {
            tracing::warn!(professor_id, %err, "profile update failed");
            report_failure(
                dialogs,
                &err,
                &FailureText::new("Erro ao Salvar", "Erro ao salvar alterações."),
            );
            WorkflowOutcome::Failed
        }
    }
}

/// Translates a backend failure into an error alert.
fn report_failure(dialogs: &DialogHandle, err: &ApiError, text: &FailureText<'_>) {
    let (title, message) = match err {
        ApiError::Unreachable => (CONNECTION_ERROR_TITLE, text.connection),
        ApiError::Unauthorized => (SESSION_EXPIRED_TITLE, SESSION_EXPIRED_MESSAGE),
        ApiError::Rejected { .. } | ApiError::Invalid { .. } => {
            (text.title, err.server_message().unwrap_or(text.fallback))
        }
    };
    dialogs.show_alert(title, message, DialogKind::Error);
}
