//! Page initializers: what each route loads before it renders.
//!
//! The guard runs first, so a protected page never issues a request for an
//! anonymous visitor.

use futures::join;
use shared::models::{Cart, Category, Medicine, MedicineQuery, Order, Prescription, User};
use tracing::{debug, info};
use yew_router::Routable;

use crate::api::PharmacyClient;
use crate::error::ClientError;
use crate::routes::{Admission, Route, admit};
use crate::services::{cart, catalog, orders, prescriptions};

/// Data a page is rendered from.
#[derive(Debug, Clone, PartialEq)]
pub enum PageData {
    Home,
    Login,
    Register,
    Dashboard,
    Medicines {
        categories: Vec<Category>,
        medicines: Vec<Medicine>,
    },
    Cart(Cart),
    Orders(Vec<Order>),
    Prescriptions(Vec<Prescription>),
    Profile(User),
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageLoad {
    Ready(PageData),
    /// The guard sent the visitor elsewhere.
    Redirected(Route),
    /// Loading failed and the user has already been told.
    Abandoned,
}

/// Run the guard and then the initializer registered for `route`.
pub async fn initialize(route: Route, client: &PharmacyClient) -> PageLoad {
    if admit(route, &client.session().snapshot()) == Admission::RedirectToLogin {
        info!(path = %route.to_path(), "protected route without a session");
        client.redirect(Route::Login);
        return PageLoad::Redirected(Route::Login);
    }

    let data = match route {
        Route::Home => Ok(PageData::Home),
        Route::Login => Ok(PageData::Login),
        Route::Register => Ok(PageData::Register),
        Route::Dashboard => Ok(PageData::Dashboard),
        Route::Medicines => load_medicines(client).await,
        Route::Cart => cart::load_cart(client).await.map(PageData::Cart),
        Route::Orders => orders::list_orders(client).await.map(PageData::Orders),
        Route::Prescriptions => prescriptions::list_prescriptions(client)
            .await
            .map(PageData::Prescriptions),
        Route::Profile => client
            .session()
            .user()
            .map(PageData::Profile)
            .ok_or(ClientError::Handled),
    };

    match data {
        Ok(data) => PageLoad::Ready(data),
        Err(err) => {
            debug!(path = %route.to_path(), error = %err, "page initialization abandoned");
            PageLoad::Abandoned
        }
    }
}

async fn load_medicines(client: &PharmacyClient) -> Result<PageData, ClientError> {
    let query = MedicineQuery::default();
    let (categories, medicines) = join!(
        catalog::load_categories(client),
        catalog::search_medicines(client, &query)
    );
    Ok(PageData::Medicines {
        categories: categories.unwrap_or_default(),
        medicines: medicines?,
    })
}

/// Initialize the page registered for exactly `path`.
///
/// Unknown paths have no initializer: nothing runs and `None` comes back.
pub async fn dispatch(path: &str, client: &PharmacyClient) -> Option<PageLoad> {
    let Some(route) = Route::from_path(path) else {
        debug!(path, "no initializer registered for path");
        return None;
    };
    Some(initialize(route, client).await)
}
