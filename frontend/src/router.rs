use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::pages::{AddEmployeePage, AttendancePage, DirectoryPage};

pub const ROUTE_PATHS: &[&str] = &["/", "/add", "/attendance/:id"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(crate::api::ApiClient::new());
    view! {
        <Title text="HRMS Lite"/>
        <Router>
            <Routes>
                <Route path="/" view=DirectoryPage/>
                <Route path="/add" view=AddEmployeePage/>
                <Route path="/attendance/:id" view=AttendancePage/>
            </Routes>
        </Router>
    }
}
