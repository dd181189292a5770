//! Admin coupon management: list, create, edit, delete.

#[cfg(test)]
#[path = "manage_coupons_test.rs"]
mod manage_coupons_test;

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::hooks::session;
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::net::types::Coupon;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::role::RoleCache;
use crate::util::validate;

/// Check the coupon form; discount must be a percentage in 1..=100.
fn validate_coupon_form(
    code: &str,
    discount: &str,
    description: &str,
    expiry_date: &str,
) -> Result<Coupon, &'static str> {
    let code = validate::require_trimmed(code, "Enter a coupon code.")?;
    let discount: f64 =
        discount.trim().parse().map_err(|_| "Enter the discount as a number.")?;
    if !(1.0..=100.0).contains(&discount) {
        return Err("Discount must be between 1 and 100 percent.");
    }
    let expiry_date = validate::require_trimmed(expiry_date, "Enter an expiry date.")?;
    Ok(Coupon {
        id: String::new(),
        code,
        discount,
        description: description.trim().to_owned(),
        expiry_date,
    })
}

#[component]
pub fn ManageCouponsPage() -> impl IntoView {
    let session_store = expect_context::<RwSignal<SessionStore>>();
    let roles = expect_context::<RwSignal<RoleCache>>();
    let notify = expect_context::<RwSignal<NotifyState>>();

    let coupons = RwSignal::new(Vec::<Coupon>::new());
    let reload = RwSignal::new(0u32);

    let code = RwSignal::new(String::new());
    let discount = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let expiry_date = RwSignal::new(String::new());
    let editing_id = RwSignal::new(None::<String>);
    let field_error = RwSignal::new(String::new());

    Effect::new(move || {
        reload.track();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::fetch_coupons().await {
                    Ok(items) => coupons.set(items),
                    Err(err) => notify.update(|n| {
                        n.error(err.user_message());
                    }),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (session_store, roles, notify);
        }
    });

    let reset_form = move || {
        code.set(String::new());
        discount.set(String::new());
        description.set(String::new());
        expiry_date.set(String::new());
        editing_id.set(None);
        field_error.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let coupon = match validate_coupon_form(
            &code.get(),
            &discount.get(),
            &description.get(),
            &expiry_date.get(),
        ) {
            Ok(coupon) => coupon,
            Err(message) => {
                field_error.set(message.to_owned());
                return;
            }
        };
        let target = editing_id.get_untracked();
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                let result = match target.as_deref() {
                    Some(id) => api::update_coupon(id, &coupon).await.map(|_| ()),
                    None => api::create_coupon(&coupon).await.map(|_| ()),
                };
                match result {
                    Ok(()) => {
                        notify.update(|n| {
                            n.success("Coupon saved.");
                        });
                        reset_form();
                        reload.update(|r| *r += 1);
                    }
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (coupon, target);
        }
    };

    let on_edit = Callback::new(move |coupon: Coupon| {
        code.set(coupon.code);
        discount.set(format!("{}", coupon.discount));
        description.set(coupon.description);
        expiry_date.set(coupon.expiry_date);
        editing_id.set(Some(coupon.id));
        field_error.set(String::new());
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match api::delete_coupon(&id).await {
                    Ok(outcome) if outcome.deleted() => {
                        notify.update(|n| {
                            n.success("Coupon deleted.");
                        });
                        reload.update(|r| *r += 1);
                    }
                    Ok(_) => notify.update(|n| {
                        n.error("Coupon was not deleted.");
                    }),
                    Err(err) => session::handle_request_error(&err, session_store, roles, notify),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    });

    view! {
        <div class="manage-coupons-page">
            <h1>"Manage Coupons"</h1>

            <form class="coupon-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Code"
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Discount %"
                    prop:value=move || discount.get()
                    on:input=move |ev| discount.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                />
                <input
                    type="date"
                    prop:value=move || expiry_date.get()
                    on:input=move |ev| expiry_date.set(event_target_value(&ev))
                />
                <Show when=move || !field_error.get().is_empty()>
                    <p class="login-form__error">{move || field_error.get()}</p>
                </Show>
                <div class="coupon-form__actions">
                    <button class="btn btn--primary" type="submit">
                        {move || if editing_id.get().is_some() { "Update Coupon" } else { "Add Coupon" }}
                    </button>
                    <Show when=move || editing_id.get().is_some()>
                        <button class="btn" type="button" on:click=move |_| reset_form()>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>

            <table class="dashboard-table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Discount"</th>
                        <th>"Expires"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        coupons
                            .get()
                            .into_iter()
                            .map(|coupon| {
                                let edit_coupon = coupon.clone();
                                let delete_id = coupon.id.clone();
                                view! {
                                    <tr>
                                        <td>{coupon.code.clone()}</td>
                                        <td>{format!("{:.0}%", coupon.discount)}</td>
                                        <td>{coupon.expiry_date.clone()}</td>
                                        <td class="dashboard-table__actions">
                                            <button
                                                class="btn"
                                                on:click=move |_| on_edit.run(edit_coupon.clone())
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_delete.run(delete_id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>
        </div>
    }
}
