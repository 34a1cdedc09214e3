use super::view_model::ReservationFormViewModel;
use crate::domain::a002_selected_product::ui::list::SelectedProductsList;
use crate::shared::date_utils::today_iso;
use leptos::prelude::*;

#[component]
pub fn ReservationForm(
    vm: ReservationFormViewModel,
    phone: String,
    phone_href: String,
) -> impl IntoView {
    let today = today_iso();
    let on_remove = Callback::new(move |id: String| vm.remove_product_command(id));

    // Memo: перерисовываем кнопки выбора только при смене выбора, а не на каждый ввод
    let type_options = Memo::new(move |_| vm.session.with(|s| s.form.type_options()));
    let time_slots = Memo::new(move |_| vm.session.with(|s| s.form.time_slots()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <h2>"📅 Rezervácia obhliadky"</h2>
        <p class="subtitle">"Vyplňte formulár a my vás budeme kontaktovať"</p>

        <Show when=move || vm.session.with(|s| s.error_message().is_some())>
            <div class="error-message" id="error-message">
                {move || vm.session.with(|s| s.error_message().unwrap_or_default())}
            </div>
        </Show>

        <form id="reservation-form" on:submit=on_submit>
            <div class="form-group">
                <label>"Typ služby " <span class="required">"*"</span></label>
                <div class="type-options">
                    {move || {
                        type_options
                            .get()
                            .into_iter()
                            .map(|(option, selected)| {
                                view! {
                                    <div
                                        class="type-option"
                                        class:selected=selected
                                        data-type=option.as_str()
                                        on:click=move |_| vm.session.update(|s| s.form.select_type(option))
                                    >
                                        <div class="icon">{option.icon()}</div>
                                        <div class="label">{option.label()}</div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <input
                    type="hidden"
                    name="reservation_type"
                    id="reservation_type"
                    prop:value=move || vm.session.with(|s| s.form.reservation_type.as_str().to_string())
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="name">"Meno a priezvisko " <span class="required">"*"</span></label>
                    <input
                        type="text"
                        id="name"
                        name="name"
                        required
                        placeholder="Ján Novák"
                        prop:value=move || vm.session.with(|s| s.form.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.session.update(|s| s.form.name = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label for="phone">"Telefón " <span class="required">"*"</span></label>
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        required
                        placeholder="+421 900 000 000"
                        prop:value=move || vm.session.with(|s| s.form.phone.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.session.update(|s| s.form.phone = value);
                        }
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="email">"Email " <span class="required">"*"</span></label>
                <input
                    type="email"
                    id="email"
                    name="email"
                    required
                    placeholder="jan.novak@email.sk"
                    prop:value=move || vm.session.with(|s| s.form.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.session.update(|s| s.form.email = value);
                    }
                />
            </div>

            <div class="form-group">
                <label for="address">"Adresa (miesto obhliadky) " <span class="required">"*"</span></label>
                <input
                    type="text"
                    id="address"
                    name="address"
                    required
                    placeholder="Ulica 123, Bratislava"
                    prop:value=move || vm.session.with(|s| s.form.address.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.session.update(|s| s.form.address = value);
                    }
                />
            </div>

            <SelectedProductsList products=vm.products on_remove=on_remove />

            <div class="form-row">
                <div class="form-group">
                    <label for="preferred_date">"Preferovaný dátum " <span class="required">"*"</span></label>
                    <input
                        type="date"
                        id="preferred_date"
                        name="preferred_date"
                        required
                        min=today
                        prop:value=move || vm.session.with(|s| s.form.preferred_date.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.session.update(|s| s.form.preferred_date = value);
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Preferovaný čas " <span class="required">"*"</span></label>
                    <div class="time-slots">
                        {move || {
                            time_slots
                                .get()
                                .into_iter()
                                .map(|(slot, selected)| {
                                    view! {
                                        <div
                                            class="time-slot"
                                            class:selected=selected
                                            data-time=slot.as_str()
                                            on:click=move |_| vm.session.update(|s| s.form.select_time(slot))
                                        >
                                            {slot.short_label()}
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                    <input
                        type="hidden"
                        name="preferred_time"
                        id="preferred_time"
                        prop:value=move || vm.session.with(|s| s.form.preferred_time.as_str().to_string())
                    />
                </div>
            </div>

            <div class="form-group">
                <label for="message">"Poznámka (voliteľné)"</label>
                <textarea
                    id="message"
                    name="message"
                    placeholder="Popíšte váš problém alebo požiadavku..."
                    prop:value=move || vm.session.with(|s| s.form.message.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.session.update(|s| s.form.message = value);
                    }
                />
            </div>

            <button
                type="submit"
                class="submit-btn"
                disabled=move || vm.session.with(|s| s.submit_button().disabled)
            >
                {move || vm.session.with(|s| s.submit_button().label)}
            </button>
        </form>

        <p class="phone-link">
            "Potrebujete rýchlu odpoveď? Volajte " <a href=phone_href>{phone}</a>
        </p>
    }
}
