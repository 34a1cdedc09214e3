use leptos::prelude::*;

/// Confirmation shown in place of the form after a successful submission
#[component]
pub fn ReservationSuccess(
    reservation_id: String,
    phone: String,
    phone_href: String,
) -> impl IntoView {
    view! {
        <div class="success-message">
            <div class="icon">"✅"</div>
            <h3>"Rezervácia odoslaná!"</h3>
            <p>"Ďakujeme za vašu rezerváciu. Budeme vás kontaktovať na potvrdenie termínu."</p>
            <div class="reservation-id">"ID: " {reservation_id}</div>
            <p style="margin-top: 24px;">
                <a href=phone_href style="color: #3b82f6;">
                    "Máte otázky? Volajte " {phone}
                </a>
            </p>
        </div>
    }
}
