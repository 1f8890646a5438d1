use dioxus::prelude::*;
use services::Portal;

#[component]
pub fn CertificateModal() -> Element {
    let mut portal = use_context::<Signal<Portal>>();
    let certificate = portal
        .read()
        .lessons()
        .quiz()
        .and_then(|quiz| quiz.certificate().cloned());
    let Some(certificate) = certificate else {
        return rsx! {};
    };

    rsx! {
        div { class: "modal-backdrop",
            div { id: "certificate-modal", class: "modal", role: "dialog", "aria-modal": "true",
                h2 { "Certificate of Completion" }
                p { "This certifies a perfect score on" }
                p { class: "certificate-lesson", "{certificate.lesson_title}" }
                button {
                    id: "certificate-close",
                    onclick: move |_| portal.write().close_certificate(),
                    "Close"
                }
            }
        }
    }
}
