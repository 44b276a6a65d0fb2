//! Order history: by account when signed in, by checkout email otherwise.

use leptos::prelude::*;

use crate::net::api::OrderIdentity;
use crate::net::types::Order;
use crate::state::auth::AuthState;
use crate::state::ui::{ToastKind, UiState, show_toast};
use crate::util::format::{format_order_date, format_price};

#[component]
pub fn OrdersPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let orders = RwSignal::new(Vec::<Order>::new());
    let loading = RwSignal::new(false);
    let looked_up = RwSignal::new(false);
    let lookup_email = RwSignal::new(String::new());

    let fetch_for = move |identity: OrderIdentity| {
        loading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_orders(&identity).await {
                Ok(fetched) => orders.set(fetched),
                Err(e) => show_toast(ui, format!("Could not load orders: {e}"), ToastKind::Error),
            }
            loading.set(false);
            looked_up.set(true);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = identity;
            loading.set(false);
        }
    };

    // Signed-in customers get their history immediately; the effect also
    // refreshes after a cross-tab login lands.
    Effect::new(move || {
        if let Some(user) = auth.get().user {
            fetch_for(OrderIdentity::Customer(user.id));
        }
    });

    let on_lookup = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = lookup_email.get_untracked().trim().to_owned();
        if email.is_empty() {
            show_toast(ui, "Enter the email used at checkout", ToastKind::Error);
            return;
        }
        fetch_for(OrderIdentity::Email(email));
    };

    let order_rows = move || {
        orders
            .get()
            .into_iter()
            .map(|order| {
                let items = order
                    .items
                    .iter()
                    .map(|item| {
                        view! {
                            <div class="order-card__item">
                                <img
                                    src=item.product.primary_image().to_owned()
                                    alt=item.product.name.clone()
                                />
                                <span class="order-card__item-name">
                                    {item.product.name.clone()}
                                </span>
                                <span class="order-card__item-qty">
                                    "×" {item.quantity}
                                </span>
                                <span class="order-card__item-total">
                                    {format_price(item.line_total())}
                                </span>
                            </div>
                        }
                    })
                    .collect_view();
                view! {
                    <div class="order-card">
                        <div class="order-card__header">
                            <span class="order-card__reference">{format!("#PM-{}", order.id)}</span>
                            <span class="order-card__date">
                                {format_order_date(&order.created_at)}
                            </span>
                            <span class="order-card__status">{order.status.clone()}</span>
                            <span class="order-card__total">{format_price(order.total)}</span>
                        </div>
                        <div class="order-card__items">{items}</div>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="orders-page">
            <div class="orders-page__hero">
                <h1>"Your Orders"</h1>
            </div>

            <Show when=move || !auth.get().is_logged_in()>
                <form class="orders-page__lookup" on:submit=on_lookup>
                    <p>"Not signed in? Look orders up with your checkout email."</p>
                    <input
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || lookup_email.get()
                        on:input=move |ev| lookup_email.set(event_target_value(&ev))
                    />
                    <button type="submit" disabled=move || loading.get()>
                        "Find Orders"
                    </button>
                </form>
            </Show>

            <Show when=move || loading.get()>
                <p class="orders-page__loading">"Loading order history..."</p>
            </Show>

            <Show when=move || {
                !loading.get() && looked_up.get() && orders.get().is_empty()
            }>
                <div class="orders-page__empty">
                    <h2>"No orders found."</h2>
                    <a href="/shop">"Browse the shop"</a>
                </div>
            </Show>

            <div class="orders-page__list">{order_rows}</div>
        </div>
    }
}
