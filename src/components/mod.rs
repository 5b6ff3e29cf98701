pub mod custom_slider;
pub mod navbar;
pub mod protected_route;
