//! Contact Form - collects a message and runs the simulated submission.
//!
//! The form owns its field values and submission status. Delays run in a
//! task spawned from this component; the task is cancelled when the form
//! unmounts or a newer submission starts, so nothing writes to the form
//! after it is gone.

use dioxus::prelude::*;
use portfolio_core::{
    drive_submission, ContactField, ContactFormState, SimulatedTransport, SiteError, SubmitStatus,
};
use portfolio_ui::{Button, ButtonVariant, Input, TextArea};

use crate::context::use_site_config;

/// Label shown next to each field.
fn field_label(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "Nome",
        ContactField::Email => "Email",
        ContactField::Phone => "Telefone",
        ContactField::Message => "Mensagem",
    }
}

/// User-facing text for a refused submission.
fn notice_for(err: &SiteError) -> String {
    match err {
        SiteError::MissingField(field) => {
            format!("Preencha o campo {}.", field_label(*field))
        }
        SiteError::InvalidEmail(_) => "Informe um endereço de email válido.".to_string(),
        SiteError::SubmissionInProgress => "Aguarde, sua mensagem está sendo enviada.".to_string(),
        other => other.to_string(),
    }
}

fn submit_label(status: &SubmitStatus) -> &'static str {
    match status {
        SubmitStatus::Submitting => "Enviando...",
        SubmitStatus::Failed { .. } => "Tentar novamente",
        SubmitStatus::Idle | SubmitStatus::Success => "Enviar Mensagem",
    }
}

#[component]
pub fn ContactForm() -> Element {
    let config = use_site_config();
    let mut form = use_signal(ContactFormState::new);
    let mut pending: Signal<Option<Task>> = use_signal(|| None);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    // Pending delays die with the form
    use_drop(move || {
        if let Ok(mut slot) = pending.try_write() {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let started = form.write().begin_submission();
        let message = match started {
            Ok(message) => message,
            Err(e) => {
                tracing::debug!("Contact form refused: {}", e);
                notice.set(Some(notice_for(&e)));
                return;
            }
        };
        notice.set(None);

        if let Some(previous) = pending.write().take() {
            previous.cancel();
        }

        let timings = config.peek().timings.clone();
        let task = spawn(async move {
            let transport = SimulatedTransport::new(timings.submit_latency());
            let outcome = drive_submission(&transport, message, timings.reset_delay(), |event| {
                form.write().apply(event);
            })
            .await;
            tracing::debug!("Contact submission finished: {:?}", outcome);
            pending.set(None);
        });
        pending.set(Some(task));
    };

    let state = form.read();
    let status = state.status().clone();
    let label = submit_label(&status);
    let submitting = state.is_submitting();
    let name = state.field(ContactField::Name).to_string();
    let email = state.field(ContactField::Email).to_string();
    let phone = state.field(ContactField::Phone).to_string();
    let message = state.field(ContactField::Message).to_string();
    drop(state);

    rsx! {
        form { class: "contact-form", onsubmit: on_submit,
            Input {
                id: "name".to_string(),
                name: ContactField::Name.as_str().to_string(),
                label: field_label(ContactField::Name).to_string(),
                value: name,
                oninput: move |v: String| form.write().set_field(ContactField::Name, v),
                placeholder: "Seu nome completo".to_string(),
                required: true,
            }
            Input {
                id: "email".to_string(),
                name: ContactField::Email.as_str().to_string(),
                label: field_label(ContactField::Email).to_string(),
                value: email,
                oninput: move |v: String| form.write().set_field(ContactField::Email, v),
                input_type: "email".to_string(),
                placeholder: "seu@email.com".to_string(),
                required: true,
            }
            Input {
                id: "phone".to_string(),
                name: ContactField::Phone.as_str().to_string(),
                label: field_label(ContactField::Phone).to_string(),
                value: phone,
                oninput: move |v: String| form.write().set_field(ContactField::Phone, v),
                input_type: "tel".to_string(),
                placeholder: "(11) 9 9999-9999".to_string(),
                required: true,
            }
            TextArea {
                id: "message".to_string(),
                name: ContactField::Message.as_str().to_string(),
                label: field_label(ContactField::Message).to_string(),
                value: message,
                oninput: move |v: String| form.write().set_field(ContactField::Message, v),
                placeholder: "Sua mensagem aqui...".to_string(),
                rows: 4,
                required: true,
            }

            Button {
                variant: ButtonVariant::Submit,
                button_type: "submit".to_string(),
                disabled: submitting,
                "{label}"
            }

            if let Some(text) = notice() {
                div { class: "form-notice", "{text}" }
            }

            {match status {
                SubmitStatus::Success => rsx! {
                    div { class: "success-message",
                        "Mensagem enviada com sucesso! Obrigado pelo contato."
                    }
                },
                SubmitStatus::Failed { reason } => rsx! {
                    div { class: "error-message",
                        "Não foi possível enviar sua mensagem ({reason}). Tente novamente."
                    }
                },
                _ => rsx! {},
            }}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_name_the_missing_field() {
        let notice = notice_for(&SiteError::MissingField(ContactField::Phone));
        assert_eq!(notice, "Preencha o campo Telefone.");
    }

    #[test]
    fn notices_for_other_errors() {
        assert!(notice_for(&SiteError::InvalidEmail("x".to_string())).contains("email"));
        assert_eq!(
            notice_for(&SiteError::SubmissionFailed("timeout".to_string())),
            "Submission failed: timeout"
        );
    }

    #[test]
    fn submit_label_follows_status() {
        assert_eq!(submit_label(&SubmitStatus::Idle), "Enviar Mensagem");
        assert_eq!(submit_label(&SubmitStatus::Submitting), "Enviando...");
        assert_eq!(
            submit_label(&SubmitStatus::Failed {
                reason: "offline".to_string()
            }),
            "Tentar novamente"
        );
    }
}
