//! Checkout: contact + shipping form, payment selection, confirmation.
//!
//! ARCHITECTURE
//! ============
//! Three steps. Step 1 collects contact and shipping details (prefilled
//! from the session when one exists). Step 2 takes payment — cash on
//! delivery submits directly; the external payment widget is consumed as
//! an approve/capture boundary whose capture details ride along in the
//! order submission. Step 3 confirms with the backend's order reference.
//! The cart is cleared only after the backend accepts the order.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

#[cfg(any(test, feature = "hydrate"))]
use cart::CartLineItem;
use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::OrderRequest;
use crate::net::types::User;
use crate::state::auth::AuthState;
#[cfg(feature = "hydrate")]
use crate::state::cart::clear_cart;
use crate::state::cart::StoreSignal;
use crate::state::ui::{ToastKind, UiState, show_toast};
use crate::util::format::format_price;

/// Payment options offered at step 2.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum PaymentMethod {
    /// Pay the courier on delivery.
    #[default]
    CashOnDelivery,
    /// External capture widget (approve/capture callback).
    PayPal,
}

impl PaymentMethod {
    #[cfg(any(test, feature = "hydrate"))]
    fn as_request_value(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cod",
            Self::PayPal => "paypal",
        }
    }
}

/// Shipping form contents, collected at step 1.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ShippingForm {
    email: String,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    zip_code: String,
    phone: String,
}

impl ShippingForm {
    /// Prefill contact fields from a signed-in customer.
    fn prefilled(user: &User) -> Self {
        let (first_name, last_name) = split_name(&user.name);
        Self {
            email: user.email.clone(),
            first_name,
            last_name,
            ..Self::default()
        }
    }

    /// First user-facing complaint about the form, or `None` when complete.
    fn validate(&self) -> Option<&'static str> {
        if self.email.trim().is_empty() {
            return Some("Enter your email");
        }
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Some("Enter your full name");
        }
        if self.address.trim().is_empty() || self.city.trim().is_empty() {
            return Some("Enter your shipping address");
        }
        if self.zip_code.trim().is_empty() {
            return Some("Enter your ZIP code");
        }
        if self.phone.trim().is_empty() {
            return Some("Enter a phone number");
        }
        None
    }
}

/// Split a display name into first/last on the first space.
fn split_name(name: &str) -> (String, String) {
    match name.trim().split_once(' ') {
        Some((first, last)) => (first.to_owned(), last.trim().to_owned()),
        None => (name.trim().to_owned(), String::new()),
    }
}

/// Assemble the order submission. The origin host is stamped into the
/// address line, which is how fulfillment distinguishes storefront orders
/// from the back office's manual ones.
#[cfg(any(test, feature = "hydrate"))]
fn build_order_request(
    form: &ShippingForm,
    method: PaymentMethod,
    host: &str,
    user_id: Option<i64>,
    items: Vec<CartLineItem>,
    total: f64,
    payment_details: Option<serde_json::Value>,
) -> OrderRequest {
    OrderRequest {
        email: form.email.trim().to_owned(),
        first_name: form.first_name.trim().to_owned(),
        last_name: form.last_name.trim().to_owned(),
        address: format!("{} (From: {host})", form.address.trim()),
        city: form.city.trim().to_owned(),
        zip_code: form.zip_code.trim().to_owned(),
        phone: form.phone.trim().to_owned(),
        payment_method: method.as_request_value().to_owned(),
        user_id,
        total,
        items,
        payment_details,
    }
}

/// Customer-facing order reference for a backend order id.
fn order_reference(order_id: i64) -> String {
    format!("#PM-{order_id}")
}

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let store = expect_context::<StoreSignal>();
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let step = RwSignal::new(1u8);
    let form = RwSignal::new(ShippingForm::default());
    let method = RwSignal::new(PaymentMethod::default());
    let placing = RwSignal::new(false);
    let placed_order = RwSignal::new(None::<i64>);

    // Prefill once from the session. Editing afterwards wins.
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            form.update(|current| {
                if current.email.is_empty() && current.first_name.is_empty() {
                    *current = ShippingForm::prefilled(&user);
                }
            });
        }
    });

    let is_cart_empty = move || store.with(|state| state.items().is_empty());
    let total = move || store.with(cart::CartStore::cart_total);

    let on_continue = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(complaint) = form.get_untracked().validate() {
            show_toast(ui, complaint, ToastKind::Error);
            return;
        }
        step.set(2);
    };

    // Shared submission path for both payment methods. `payment_details`
    // carries the external widget's capture record when there is one.
    let submit_order = move |payment_details: Option<serde_json::Value>| {
        if placing.get_untracked() {
            return;
        }
        placing.set(true);

        #[cfg(feature = "hydrate")]
        {
            let items = store.with_untracked(|state| state.items().to_vec());
            let order_total = store.with_untracked(cart::CartStore::cart_total);
            let user_id = auth
                .get_untracked()
                .user
                .map(|user| user.id);
            let host = web_sys::window()
                .and_then(|window| window.location().hostname().ok())
                .unwrap_or_default();
            let request = build_order_request(
                &form.get_untracked(),
                method.get_untracked(),
                &host,
                user_id,
                items,
                order_total,
                payment_details,
            );
            leptos::task::spawn_local(async move {
                match crate::net::api::place_order(&request).await {
                    Ok(order_id) => {
                        placed_order.set(Some(order_id));
                        step.set(3);
                        clear_cart(store);
                    }
                    Err(e) => {
                        show_toast(ui, format!("Order failed: {e}"), ToastKind::Error);
                    }
                }
                placing.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = payment_details;
            placing.set(false);
        }
    };

    let on_place_cod = move |_| submit_order(None);

    let field = move |label: &'static str,
                      kind: &'static str,
                      read: fn(&ShippingForm) -> &String,
                      write: fn(&mut ShippingForm, String)| {
        view! {
            <label class="checkout-field">
                {label}
                <input
                    type=kind
                    prop:value=move || form.with(|current| read(current).clone())
                    on:input=move |ev| {
                        form.update(|current| write(current, event_target_value(&ev)));
                    }
                />
            </label>
        }
    };

    let summary_rows = move || {
        store
            .with(|state| state.items().to_vec())
            .into_iter()
            .map(|item| {
                view! {
                    <div class="checkout-summary__row">
                        <span>{item.product.name.clone()} " ×" {item.quantity}</span>
                        <span>{format_price(item.line_total())}</span>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="checkout-page">
            <div class="checkout-page__hero">
                <h1>"Checkout"</h1>
                <div class="checkout-steps">
                    <span class=("checkout-steps__step--done", move || step.get() >= 1)>
                        "01 Shipping"
                    </span>
                    <span class=("checkout-steps__step--done", move || step.get() >= 2)>
                        "02 Payment"
                    </span>
                    <span class=("checkout-steps__step--done", move || step.get() >= 3)>
                        "03 Confirmed"
                    </span>
                </div>
            </div>

            <Show when=move || is_cart_empty() && step.get() < 3>
                <div class="checkout-page__empty">
                    <h2>"Nothing to check out."</h2>
                    <a href="/shop">"Browse the shop"</a>
                </div>
            </Show>

            <Show when=move || !is_cart_empty() || step.get() == 3>
                <div class="checkout-page__layout">
                    <div class="checkout-page__main">
                        <Show when=move || step.get() == 1>
                            <form class="checkout-form" on:submit=on_continue>
                                <h2>"Contact & Shipping"</h2>
                                {field("Email", "email", |f| &f.email, |f, v| f.email = v)}
                                <div class="checkout-form__row">
                                    {field(
                                        "First name",
                                        "text",
                                        |f| &f.first_name,
                                        |f, v| f.first_name = v,
                                    )}
                                    {field(
                                        "Last name",
                                        "text",
                                        |f| &f.last_name,
                                        |f, v| f.last_name = v,
                                    )}
                                </div>
                                {field(
                                    "Street address",
                                    "text",
                                    |f| &f.address,
                                    |f, v| f.address = v,
                                )}
                                <div class="checkout-form__row">
                                    {field("City", "text", |f| &f.city, |f, v| f.city = v)}
                                    {field(
                                        "ZIP code",
                                        "text",
                                        |f| &f.zip_code,
                                        |f, v| f.zip_code = v,
                                    )}
                                </div>
                                {field("Phone", "tel", |f| &f.phone, |f, v| f.phone = v)}
                                <button type="submit">"Continue to payment"</button>
                            </form>
                        </Show>

                        <Show when=move || step.get() == 2>
                            <div class="checkout-payment">
                                <h2>"Payment"</h2>
                                <div class="checkout-payment__options">
                                    <button
                                        class=("checkout-payment__option--active", move || {
                                            method.get() == PaymentMethod::CashOnDelivery
                                        })
                                        on:click=move |_| method.set(PaymentMethod::CashOnDelivery)
                                    >
                                        "Cash on delivery"
                                    </button>
                                    <button
                                        class=("checkout-payment__option--active", move || {
                                            method.get() == PaymentMethod::PayPal
                                        })
                                        on:click=move |_| method.set(PaymentMethod::PayPal)
                                    >
                                        "PayPal"
                                    </button>
                                </div>

                                <Show when=move || method.get() == PaymentMethod::CashOnDelivery>
                                    <button
                                        class="checkout-payment__place"
                                        disabled=move || placing.get()
                                        on:click=on_place_cod
                                    >
                                        "Place order"
                                    </button>
                                </Show>
                                <Show when=move || method.get() == PaymentMethod::PayPal>
                                    <div class="checkout-payment__widget">
                                        // The capture widget mounts here and calls back
                                        // with its capture record on approval.
                                        <div id="payment-widget"></div>
                                        <p class="checkout-payment__widget-note">
                                            "You will be charged when the payment provider "
                                            "confirms the capture."
                                        </p>
                                    </div>
                                </Show>
                                <button
                                    class="checkout-payment__back"
                                    on:click=move |_| step.set(1)
                                >
                                    "Back to shipping"
                                </button>
                            </div>
                        </Show>

                        <Show when=move || step.get() == 3>
                            <div class="checkout-confirmed">
                                <h2>"Order confirmed."</h2>
                                <p>"Your reference number:"</p>
                                <p class="checkout-confirmed__reference">
                                    {move || {
                                        placed_order
                                            .get()
                                            .map_or("#PM-PENDING".to_owned(), order_reference)
                                    }}
                                </p>
                                <p>
                                    "A confirmation email is on its way. Track progress any "
                                    "time on the orders page."
                                </p>
                                <a href="/orders">"View your orders"</a>
                            </div>
                        </Show>
                    </div>

                    <Show when=move || step.get() < 3>
                        <aside class="checkout-summary">
                            <h2>"Order Summary"</h2>
                            {summary_rows}
                            <div class="checkout-summary__row">
                                <span>"Shipping"</span>
                                <span>"Free"</span>
                            </div>
                            <div class="checkout-summary__row checkout-summary__row--total">
                                <span>"Total"</span>
                                <span>{move || format_price(total())}</span>
                            </div>
                        </aside>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
