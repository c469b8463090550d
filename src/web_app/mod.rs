// web_app/mod.rs - Root module for the standard answers admin console
//
// Architecture:
// - model/: Shared data types (used by both client and server)
// - listing, markdown, popup, routes: pure logic behind the pages
// - server_fns: Server function declarations (both client and server)
// - api/: Configuration, pool and queries (database builds only)
// - components/: Reusable UI components (both SSR and hydrate)
// - pages/: Page-level components (both SSR and hydrate)
// - app.rs: Root application component with routing (both SSR and hydrate)

pub mod listing;
pub mod markdown;
pub mod model;
pub mod popup;
pub mod routes;

// The #[server] macro generates client stubs that call the server via HTTP
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod server_fns;

#[cfg(feature = "db-tools")]
pub mod api;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod components;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod pages;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod app;

#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub use app::App;
