//! Deterministic path-to-view route resolution library

pub mod config;
pub mod history;
pub mod navigation;
pub mod routing;
pub mod view;

pub use config::RouterConfig;
pub use history::HistoryMode;
pub use navigation::Navigator;
pub use routing::{ResolveError, Resolver, RouteTable};
pub use view::View;
