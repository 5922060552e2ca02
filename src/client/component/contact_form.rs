use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaCircleCheck, Icon};

use crate::{
    client::model::error::ApiError,
    model::contact::{ContactRequestDto, COUNTRY_OPTIONS, TREATMENT_OPTIONS},
};

#[cfg(feature = "web")]
use crate::client::api::submit_contact;

#[derive(Clone, PartialEq)]
enum SubmitState {
    Idle,
    Sending,
    Sent,
    Failed(ApiError),
}

/// Consultation request form.
#[component]
pub fn ContactForm(locale: String) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut country = use_signal(String::new);
    let mut treatments = use_signal(Vec::<String>::new);
    let mut message = use_signal(String::new);
    let mut state = use_signal(|| SubmitState::Idle);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let payload = ContactRequestDto {
            name: name(),
            email: email(),
            phone: phone(),
            country: Some(country()).filter(|c| !c.is_empty()),
            treatments: treatments(),
            message: Some(message()).filter(|m| !m.trim().is_empty()),
            locale: Some(locale.clone()),
        };
        state.set(SubmitState::Sending);

        #[cfg(feature = "web")]
        spawn(async move {
            match submit_contact(&payload).await {
                Ok(()) => state.set(SubmitState::Sent),
                Err(err) => state.set(SubmitState::Failed(err)),
            }
        });
        #[cfg(not(feature = "web"))]
        let _ = payload;
    };

    if state() == SubmitState::Sent {
        return rsx!(div {
            class: "flex flex-col items-center gap-3 p-8 text-center",
            Icon { width: 48, height: 48, icon: FaCircleCheck, class: "text-success" }
            p { class: "text-xl font-semibold", "Thank you!" }
            p { class: "opacity-80", "We will contact you within 24 hours." }
        });
    }

    let sending = state() == SubmitState::Sending;

    rsx!(form {
        class: "flex flex-col gap-4",
        onsubmit: on_submit,
        if let SubmitState::Failed(err) = state() {
            div {
                role: "alert",
                class: "alert alert-error flex-col items-start",
                p { "{err.message}" }
                if !err.details.is_empty() {
                    ul {
                        class: "list-disc pl-5",
                        for detail in err.details.iter() {
                            li { "{detail}" }
                        }
                    }
                }
            }
        }
        div {
            class: "grid gap-4 md:grid-cols-2",
            input {
                class: "input input-bordered w-full",
                r#type: "text",
                placeholder: "Full name *",
                required: true,
                value: "{name}",
                oninput: move |evt| name.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "email",
                placeholder: "Email *",
                required: true,
                value: "{email}",
                oninput: move |evt| email.set(evt.value()),
            }
            input {
                class: "input input-bordered w-full",
                r#type: "tel",
                placeholder: "Phone / WhatsApp *",
                required: true,
                value: "{phone}",
                oninput: move |evt| phone.set(evt.value()),
            }
            select {
                class: "select select-bordered w-full",
                value: "{country}",
                onchange: move |evt| country.set(evt.value()),
                option { value: "", "Country of residence" }
                for option_name in COUNTRY_OPTIONS.iter() {
                    option { value: *option_name, "{option_name}" }
                }
            }
        }
        fieldset {
            class: "flex flex-col gap-2",
            legend { class: "font-medium mb-1", "Treatments of interest" }
            div {
                class: "grid gap-2 sm:grid-cols-2",
                for (value, label) in TREATMENT_OPTIONS.iter().copied() {
                    label {
                        class: "label cursor-pointer justify-start gap-2",
                        input {
                            r#type: "checkbox",
                            class: "checkbox checkbox-primary checkbox-sm",
                            checked: treatments.read().iter().any(|t| t == value),
                            onchange: move |evt| {
                                let mut selected = treatments.write();
                                if evt.checked() {
                                    if !selected.iter().any(|t| t == value) {
                                        selected.push(value.to_string());
                                    }
                                } else {
                                    selected.retain(|t| t != value);
                                }
                            },
                        }
                        span { "{label}" }
                    }
                }
            }
        }
        textarea {
            class: "textarea textarea-bordered w-full",
            rows: 4,
            placeholder: "Tell us about your situation",
            value: "{message}",
            oninput: move |evt| message.set(evt.value()),
        }
        button {
            class: "btn btn-primary",
            r#type: "submit",
            disabled: sending,
            if sending {
                span { class: "loading loading-spinner" }
            }
            "Request free consultation"
        }
    })
}
