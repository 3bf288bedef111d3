//! Navigation seam between form controllers and whatever renders them.

use portal_domain::route::Route;

/// Moves the user to another view.
///
/// Implemented by the Dioxus router adapter in the desktop shell and by the terminal
/// front-end; tests plug in a recorder.
pub trait Navigator {
    fn navigate(&self, route: Route);
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, route: Route) {
        (**self).navigate(route);
    }
}

impl<N: Navigator + ?Sized> Navigator for std::sync::Arc<N> {
    fn navigate(&self, route: Route) {
        (**self).navigate(route);
    }
}
