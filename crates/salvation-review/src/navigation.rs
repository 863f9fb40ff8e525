use datalist_core::record::RowId;

pub const CONTACTS_ROUTE: &str = "/contacts";

/// Route of a person's detail page.
pub fn contact_route(id: &RowId) -> String {
    format!("{CONTACTS_ROUTE}/{id}")
}

/// Moves the host application to another screen.
pub trait Navigator {
    fn navigate(&mut self, route: &str);
}

/// Remembers every route it was sent to. The demo shows the last one; tests inspect them all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    routes: Vec<String>,
}

impl History {
    pub fn routes(&self) -> &[String] {
        &self.routes
    }

    pub fn current(&self) -> Option<&str> {
        self.routes.last().map(String::as_str)
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: &str) {
        log::debug!("[navigate] {route}");
        self.routes.push(route.to_string());
    }
}
