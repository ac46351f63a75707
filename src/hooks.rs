//! Custom Dioxus hooks.

use dioxus::prelude::*;

/// Returns an element id that is unique to the component instance and
/// stable across renders.
pub fn use_id() -> String {
    use_hook(|| format!("control-{:08x}", rand::random::<u32>()))
}
