use pokedex_core::CatalogEntry;

/// A screen and the parameters it was opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    Detail { pokemon: CatalogEntry },
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "PokemonList",
            Self::Detail { .. } => "Details",
        }
    }
}

/// Stack navigator rooted at the list screen.
#[derive(Debug, Clone)]
pub struct NavStack {
    routes: Vec<Route>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self::new()
    }
}

impl NavStack {
    pub fn new() -> Self {
        Self {
            routes: vec![Route::List],
        }
    }

    pub fn current(&self) -> &Route {
        // The root is never popped.
        &self.routes[self.routes.len() - 1]
    }

    pub fn depth(&self) -> usize {
        self.routes.len()
    }

    pub fn push(&mut self, route: Route) {
        self.routes.push(route);
    }

    /// Go back one screen. Returns the route that was left, or `None` at
    /// the root.
    pub fn pop(&mut self) -> Option<Route> {
        if self.routes.len() > 1 {
            self.routes.pop()
        } else {
            None
        }
    }
}
