mod landing;
mod theme;

use dioxus::prelude::*;
use landing::Landing;
use landing_kit::{AppContext, SiteConfig};

#[allow(non_snake_case)]
fn App() -> Element {
    // Controllers attach to the rendered page once; later renders reach them
    // through DOM mutations and delegated listeners.
    use_effect(|| {
        let config = SiteConfig {
            site_name: "LeadNow Report Website".to_string(),
            ..SiteConfig::default()
        };
        match AppContext::install(config) {
            Ok(context) => tracing::info!("{}", context.status()),
            Err(err) => tracing::error!("landing kit failed to boot: {err}"),
        }
    });

    let css = theme::page_css();

    rsx! {
        style { "{css}" }
        Landing {}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
