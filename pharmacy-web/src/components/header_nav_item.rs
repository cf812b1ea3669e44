use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::Route;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: Route,
    pub current_route: Option<Route>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let route = props.route;
    let active_route_class = if props.current_route == Some(route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<Route> to={route} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <i class={classes!("fa-solid", "fa-fw", format!("fa-{}", route_icon(route)))}></i>
              {route.title()}
          </Link<Route>>
      </li>
    }
}

fn route_icon(route: Route) -> &'static str {
    match route {
        Route::Home => "house",
        Route::Medicines => "pills",
        Route::Cart => "cart-shopping",
        Route::Orders => "box",
        Route::Prescriptions => "file-prescription",
        Route::Profile => "user",
        Route::Dashboard => "gauge",
        Route::Login => "right-to-bracket",
        Route::Register => "user-plus",
    }
}
