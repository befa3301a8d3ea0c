use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::JourneyView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", JourneyView)] Journey {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        main { class: "content",
            Outlet::<Route> {}
        }
    }
}
