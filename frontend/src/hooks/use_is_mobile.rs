use yew::prelude::*;

use crate::share::detect_mobile;

#[hook]
pub fn use_is_mobile() -> bool {
    *use_state(detect_mobile)
}
