use desktop_app_portfolio::{content_module, portfolio_catalog};
use desktop_runtime::{DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Windows 95 Portfolio" />
        <Meta name="description" content="A retro desktop-style portfolio with draggable windows." />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider
            host_services=build_host_services()
            catalog=portfolio_catalog()
            content=content_module()
        >
            <DesktopShell />
        </DesktopProvider>
    }
}
