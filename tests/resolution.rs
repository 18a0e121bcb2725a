//! End-to-end resolution tests over the declared route table.

use std::sync::Arc;

use waypoint::config::{validate_config, RouterConfig};
use waypoint::history::HistoryMode;
use waypoint::navigation::Navigator;
use waypoint::routing::{ResolveError, Resolver, RouteTable};
use waypoint::view::TextView;

fn table_from(config: &RouterConfig) -> Arc<RouteTable> {
    let mut builder = RouteTable::builder();
    for route in &config.routes {
        builder = builder.route(&route.path, &route.name, TextView::shared(route.name.clone()));
    }
    Arc::new(builder.build().unwrap())
}

#[test]
fn declared_table_resolves_every_path_to_its_name() {
    let config = RouterConfig::default();
    assert!(validate_config(&config).is_ok());

    let resolver = Resolver::new(table_from(&config));
    for route in &config.routes {
        // Resolve twice: same entry both times, table untouched.
        assert_eq!(resolver.resolve(&route.path).unwrap().name(), route.name);
        assert_eq!(resolver.resolve(&route.path).unwrap().name(), route.name);
    }
    assert_eq!(resolver.table().len(), 6);
}

#[test]
fn root_vault_unknown_and_empty_scenarios() {
    let resolver = Resolver::new(table_from(&RouterConfig::default()));

    assert_eq!(resolver.resolve("/").unwrap().name(), "gateway");
    assert_eq!(resolver.resolve("/vault").unwrap().name(), "vault");
    assert_eq!(
        resolver.resolve("/unknown").unwrap_err(),
        ResolveError::NotFound {
            path: "/unknown".to_string()
        }
    );
    assert_eq!(resolver.resolve("").unwrap().name(), "gateway");
}

#[test]
fn navigation_session_over_the_declared_table() {
    let config = RouterConfig::default();
    let resolver = Resolver::new(table_from(&config));
    let mut navigator = Navigator::new(resolver, config.history_mode);

    assert_eq!(navigator.navigate("/").unwrap().route, "gateway");
    assert_eq!(navigator.navigate("/poetry").unwrap().route, "poetry");
    assert_eq!(
        navigator.navigate("/shayari-generator").unwrap().route,
        "shayari-generator"
    );

    // A dead link does not disturb the session.
    assert!(navigator.navigate("/does-not-exist").is_err());
    assert_eq!(navigator.current(), Some("/shayari-generator"));

    assert_eq!(navigator.back().unwrap().route, "poetry");
    assert_eq!(navigator.forward().unwrap().route, "shayari-generator");
}

#[test]
fn back_redisplays_when_base_matches_a_route_path() {
    let config = RouterConfig {
        base: "/hub".to_string(),
        ..RouterConfig::default()
    };
    assert!(validate_config(&config).is_ok());

    let resolver = Resolver::with_base(table_from(&config), config.base.clone());
    let mut navigator = Navigator::new(resolver, config.history_mode);

    assert_eq!(navigator.navigate("/hub/hub").unwrap().route, "hub");
    assert_eq!(navigator.navigate("/hub/vault").unwrap().route, "vault");

    // Recorded paths are canonical; traversal must not strip the base
    // off them again.
    assert_eq!(navigator.back().unwrap().route, "hub");
    assert_eq!(navigator.forward().unwrap().route, "vault");
}

#[test]
fn hash_mode_session_with_base() {
    let config = RouterConfig {
        base: "/app".to_string(),
        history_mode: HistoryMode::Hash,
        ..RouterConfig::default()
    };
    assert!(validate_config(&config).is_ok());

    let resolver = Resolver::with_base(table_from(&config), config.base.clone());
    let mut navigator = Navigator::new(resolver, config.history_mode);

    assert_eq!(navigator.navigate("/app#/coupons").unwrap().route, "coupons");
    assert_eq!(navigator.navigate("/app#/hub").unwrap().route, "hub");
    assert_eq!(navigator.navigate("/app").unwrap().route, "gateway");
    assert_eq!(navigator.back().unwrap().route, "hub");
}
