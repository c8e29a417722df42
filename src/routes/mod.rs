//! Route handlers. Each takes the session by reference and returns an HTML
//! fragment (or JSON for `/api/state`).

pub mod navigation;
pub mod state;
pub mod terminal;
pub mod util;
