#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn show_is_noop_but_callable() {
    show(&Notice::confirmation());
    show(&Notice::failure());
}
