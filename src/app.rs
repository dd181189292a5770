//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::toast::ToastStack;
use crate::guard::{RequireAdmin, RequireAuth, RequireModerator};
use crate::hooks::session::install_session_restore;
use crate::pages::about::AboutPage;
use crate::pages::add_product::AddProductPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::{DashboardHome, DashboardLayout};
use crate::pages::error_page::ErrorPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::manage_coupons::ManageCouponsPage;
use crate::pages::manage_users::ManageUsersPage;
use crate::pages::my_products::MyProductsPage;
use crate::pages::product_details::ProductDetailsPage;
use crate::pages::products::ProductsPage;
use crate::pages::register::RegisterPage;
use crate::pages::reported_contents::ReportedContentsPage;
use crate::pages::review_queue::ProductReviewQueuePage;
use crate::pages::statistics::StatisticsPage;
use crate::pages::update_product::UpdateProductPage;
use crate::pages::user_profile::UserProfilePage;
use crate::state::auth::SessionStore;
use crate::state::notify::NotifyState;
use crate::state::products::ProductCache;
use crate::state::role::RoleCache;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Public layout: navigation chrome around the routed page.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <div class="main-layout">
            <Navbar/>
            <Outlet/>
            <Footer/>
        </div>
    }
}

/// Root application component.
///
/// Owns the injected stores (session, roles, product cache, UI, notices),
/// kicks off session restoration, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionStore::default());
    let roles = RwSignal::new(RoleCache::default());
    let products = RwSignal::new(ProductCache::default());
    let ui = RwSignal::new(UiState::default());
    let notify = RwSignal::new(NotifyState::default());

    provide_context(session);
    provide_context(roles);
    provide_context(products);
    provide_context(ui);
    provide_context(notify);

    install_session_restore(session, roles, notify);

    // Apply the persisted theme preference once the browser is available.
    Effect::new(move || {
        let preferred = dark_mode::read_preference();
        dark_mode::apply(preferred);
        ui.update(|u| u.dark_mode = preferred);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/techhive.css"/>
        <Title text="TechHive"/>

        <ToastStack/>

        <Router>
            <Routes fallback=|| view! { <ErrorPage/> }>
                <ParentRoute path=StaticSegment("") view=MainLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("products") view=ProductsPage/>
                    <Route
                        path=(StaticSegment("product"), ParamSegment("id"))
                        view=ProductDetailsPage
                    />
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("contact") view=ContactPage/>
                </ParentRoute>

                <ParentRoute
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardLayout/>
                            </RequireAuth>
                        }
                    }
                >
                    <Route path=StaticSegment("") view=DashboardHome/>
                    <Route path=StaticSegment("userProfile") view=UserProfilePage/>
                    <Route path=StaticSegment("addProduct") view=AddProductPage/>
                    <Route path=StaticSegment("myProducts") view=MyProductsPage/>
                    <Route
                        path=(StaticSegment("updateProduct"), ParamSegment("id"))
                        view=UpdateProductPage
                    />
                    <Route
                        path=StaticSegment("manageUsers")
                        view=|| {
                            view! {
                                <RequireAdmin>
                                    <ManageUsersPage/>
                                </RequireAdmin>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("statistics")
                        view=|| {
                            view! {
                                <RequireAdmin>
                                    <StatisticsPage/>
                                </RequireAdmin>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("manageCoupons")
                        view=|| {
                            view! {
                                <RequireAdmin>
                                    <ManageCouponsPage/>
                                </RequireAdmin>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("productReviewQueue")
                        view=|| {
                            view! {
                                <RequireModerator>
                                    <ProductReviewQueuePage/>
                                </RequireModerator>
                            }
                        }
                    />
                    <Route
                        path=StaticSegment("reportedContents")
                        view=|| {
                            view! {
                                <RequireModerator>
                                    <ReportedContentsPage/>
                                </RequireModerator>
                            }
                        }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
