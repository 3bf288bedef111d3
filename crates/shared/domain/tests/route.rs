use portal_domain::constants::{PASSWORDS_DO_NOT_MATCH, REGISTER_ENDPOINT, SPECIAL_CHARACTERS};
use portal_domain::route::Route;
use std::str::FromStr;
use strum::IntoEnumIterator;

#[test]
fn routes_map_to_router_paths() {
    assert_eq!(Route::Register.path(), "/");
    assert_eq!(Route::Login.path(), "/login");
}

#[test]
fn routes_round_trip_through_names() {
    for route in Route::iter() {
        assert_eq!(Route::from_str(&route.to_string()), Ok(route));
    }
    assert_eq!(Route::Login.to_string(), "login");
}

#[test]
fn registration_contract_strings() {
    assert_eq!(REGISTER_ENDPOINT, "/api/auth/register");
    assert_eq!(PASSWORDS_DO_NOT_MATCH, "Passwords do not match");
    assert_eq!(SPECIAL_CHARACTERS, "!@#$%^&*");
}
