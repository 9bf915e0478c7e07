use dioxus::prelude::*;
use swagger_theme_toggle::utils::logging::init_logging;
use swagger_theme_toggle::views::DemoPage;

const DARK_MODE_CSS: Asset = asset!("/assets/styling/dark-mode.css");

fn main() {
    init_logging(log::Level::Info);
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: DARK_MODE_CSS }
        DemoPage {}
    }
}
